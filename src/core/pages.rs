//! Page enumeration
//!
//! A draw.io document is an `<mxfile>` root whose direct children are the pages:
//!
//! ```xml
//! <mxfile host="app.diagrams.net">
//!   <diagram id="x1" name="L1 Core">...</diagram>
//!   <diagram id="x2" name="Edge">...</diagram>
//! </mxfile>
//! ```
//!
//! Page contents are never interpreted; only the root's direct children and
//! their `name` attributes matter. The whole document must still be well-formed.

use crate::domain::{ExporterError, PageDescriptor, Result};
use quick_xml::escape::resolve_xml_entity;
use quick_xml::events::{BytesRef, BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;

/// Reads `path` and lists its pages in document order
///
/// # Errors
///
/// - [`ExporterError::Io`] if the file cannot be read
/// - [`ExporterError::MalformedDocument`] if it is not well-formed XML
/// - [`ExporterError::MissingPageName`] if a page has no `name` attribute
pub fn enumerate_pages(path: &Path) -> Result<Vec<PageDescriptor>> {
    let bytes = std::fs::read(path)?;
    let content = String::from_utf8(bytes).map_err(|e| malformed(path, e))?;
    parse_pages(path, &content)
}

/// Lists the pages of an already loaded document
///
/// `path` is only used for error reporting.
pub fn parse_pages(path: &Path, content: &str) -> Result<Vec<PageDescriptor>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut pages = Vec::new();
    let mut depth = 0usize;
    let mut root_seen = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                open_element(path, &e, depth, &mut root_seen, &mut pages)?;
                depth += 1;
            }
            Ok(Event::Empty(e)) => open_element(path, &e, depth, &mut root_seen, &mut pages)?,
            Ok(Event::End(_)) => {
                if depth == 0 {
                    return Err(malformed(path, "closing tag without an open element"));
                }
                depth -= 1;
            }
            Ok(Event::Text(t)) if depth == 0 => {
                if t.iter().any(|b| !b.is_ascii_whitespace()) {
                    return Err(malformed(path, "text outside the root element"));
                }
            }
            Ok(Event::CData(_)) if depth == 0 => {
                return Err(malformed(path, "CDATA outside the root element"));
            }
            Ok(Event::GeneralRef(r)) => {
                if depth == 0 {
                    return Err(malformed(path, "reference outside the root element"));
                }
                check_reference(path, &r)?;
            }
            Ok(Event::Eof) => {
                if depth != 0 {
                    return Err(malformed(path, "unexpected end of document, unclosed element"));
                }
                if !root_seen {
                    return Err(malformed(path, "no root element"));
                }
                break;
            }
            Err(e) => {
                return Err(malformed(
                    path,
                    format!("{e} at position {}", reader.error_position()),
                ));
            }
            Ok(_) => {}
        }
    }

    tracing::debug!(path = %path.display(), count = pages.len(), "Pages enumerated");
    Ok(pages)
}

/// Validates an opening tag at `depth`; direct children of the root become pages
fn open_element(
    path: &Path,
    element: &BytesStart<'_>,
    depth: usize,
    root_seen: &mut bool,
    pages: &mut Vec<PageDescriptor>,
) -> Result<()> {
    let name = checked_name_attribute(path, element)?;
    match depth {
        0 => {
            if *root_seen {
                return Err(malformed(path, "more than one root element"));
            }
            *root_seen = true;
        }
        1 => {
            let index = pages.len();
            let Some(name) = name else {
                tracing::error!(
                    path = %path.display(),
                    index,
                    "Page {} has no name attribute",
                    index
                );
                return Err(ExporterError::MissingPageName {
                    path: path.to_path_buf(),
                    index,
                });
            };
            pages.push(PageDescriptor::new(index, &name));
        }
        _ => {}
    }
    Ok(())
}

/// Reads every attribute of `element`, returning the unescaped `name` value
///
/// Unquoted or duplicated attributes, `<` in a value and unknown entities
/// make the document malformed.
fn checked_name_attribute(path: &Path, element: &BytesStart<'_>) -> Result<Option<String>> {
    let mut name = None;
    for attr in element.attributes() {
        let attr = attr.map_err(|e| malformed(path, e))?;
        if attr.value.contains(&b'<') {
            return Err(malformed(path, "'<' in attribute value"));
        }
        let value = attr.unescape_value().map_err(|e| malformed(path, e))?;
        if attr.key.as_ref() == b"name" {
            name = Some(value.into_owned());
        }
    }
    Ok(name)
}

/// Only character references and the predefined entities are defined
fn check_reference(path: &Path, reference: &BytesRef<'_>) -> Result<()> {
    if reference.is_char_ref() {
        return match reference.resolve_char_ref() {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(malformed(path, "invalid character reference")),
            Err(e) => Err(malformed(path, e)),
        };
    }

    let entity = reference.decode().map_err(|e| malformed(path, e))?;
    if resolve_xml_entity(&entity).is_none() {
        return Err(malformed(path, format!("undefined entity &{entity};")));
    }
    Ok(())
}

fn malformed(path: &Path, reason: impl ToString) -> ExporterError {
    ExporterError::MalformedDocument {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
