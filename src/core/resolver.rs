//! Document path resolution
//!
//! Turns the user's document list into absolute paths of existing files. The
//! whole list is rejected if any entry is missing, so no export work starts for
//! a partially valid batch.

use crate::domain::{ExporterError, Result};
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

/// Splits the `--export` value on commas
///
/// Entries keep their exact bytes on Unix, so non-UTF-8 file names survive.
pub fn split_document_list(value: &OsStr) -> Vec<OsString> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;

        value
            .as_bytes()
            .split(|b| *b == b',')
            .map(|entry| OsStr::from_bytes(entry).to_os_string())
            .collect()
    }

    #[cfg(not(unix))]
    {
        value
            .to_string_lossy()
            .split(',')
            .map(OsString::from)
            .collect()
    }
}

/// Resolves every candidate to an absolute path of an existing regular file
///
/// # Errors
///
/// Returns [`ExporterError::MissingInputFile`] for the first candidate that
/// does not name an existing file. No partial list is returned.
pub fn resolve_documents<I, S>(candidates: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<Path>,
{
    let mut resolved = Vec::new();
    for candidate in candidates {
        let candidate = candidate.as_ref();
        let path = absolute_path(candidate)?;
        if candidate.as_os_str().is_empty() || !path.is_file() {
            tracing::error!(path = %path.display(), "File [{}] doesn't exist", path.display());
            return Err(ExporterError::MissingInputFile { path });
        }
        resolved.push(path);
    }
    Ok(resolved)
}

/// Absolute, lexically normalized form of `path`
///
/// `.` components are dropped and `..` removes the preceding component.
/// Symlinks are not resolved.
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}
