//! Logging and observability
//!
//! Timestamped console lines for operators, plus an optional rolling JSON file.
//!
//! # Example
//!
//! ```no_run
//! use drawio_exporter::logging::init_logging;
//! use drawio_exporter::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, init_logging_with_writer, LoggingGuard};

/// Log the start of a document's export
///
/// # Example
///
/// ```no_run
/// use drawio_exporter::log_document_start;
/// use std::path::Path;
///
/// log_document_start!(Path::new("/data/a.drawio"));
/// ```
#[macro_export]
macro_rules! log_document_start {
    ($path:expr) => {
        tracing::info!(
            path = %$path.display(),
            "Exporting images from - [{}]",
            $path.display()
        );
    };
}

/// Log one successfully exported page
///
/// # Example
///
/// ```no_run
/// use drawio_exporter::log_page_exported;
/// use std::path::Path;
///
/// log_page_exported!("core", Path::new("/data/images/a.drawio_core.png"));
/// ```
#[macro_export]
macro_rules! log_page_exported {
    ($page_name:expr, $output:expr) => {
        tracing::info!(
            page = %$page_name,
            output = %$output.display(),
            "Image exported: {}, path - [{}]",
            $page_name,
            $output.display()
        );
    };
}
