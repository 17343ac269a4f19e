//! Page descriptor

use std::fmt;

/// One page of a diagram document
///
/// `index` is the zero-based position of the page among the document root's
/// direct children. It is assigned by enumeration order, never read from an
/// id attribute. `name` is the declared page name, lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescriptor {
    pub index: usize,
    pub name: String,
}

impl PageDescriptor {
    /// Creates a descriptor, lower-casing the declared name
    pub fn new(index: usize, declared_name: &str) -> Self {
        Self {
            index,
            name: declared_name.to_lowercase(),
        }
    }
}

impl fmt::Display for PageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.index, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_lower_cased_with_spacing_kept() {
        let page = PageDescriptor::new(0, "L1 Core");
        assert_eq!(page.name, "l1 core");
        assert_eq!(page.index, 0);
    }

    #[test]
    fn test_unicode_name_is_lower_cased() {
        let page = PageDescriptor::new(2, "СХЕМА Ядра");
        assert_eq!(page.name, "схема ядра");
    }

    #[test]
    fn test_display() {
        assert_eq!(PageDescriptor::new(4, "Edge").to_string(), "4:edge");
    }
}
