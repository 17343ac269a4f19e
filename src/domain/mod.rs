//! Domain models and types.
//!
//! The domain layer provides:
//! - **Page descriptors** ([`PageDescriptor`]) produced by page enumeration
//! - **Export requests** ([`ExportRequest`], [`ExportOptions`], [`ExportFormat`])
//! - **Error types** ([`ExporterError`])
//! - **Result type alias** ([`Result`])
//!
//! # Output naming
//!
//! ```rust
//! use drawio_exporter::domain::{output_dir_for, ExportOptions, ExportRequest, PageDescriptor};
//! use std::path::Path;
//!
//! let document = Path::new("/data/a.drawio");
//! let request = ExportRequest::new(
//!     document,
//!     PageDescriptor::new(1, "Edge"),
//!     ExportOptions::default(),
//!     output_dir_for(document),
//! );
//! assert_eq!(request.output_path(), Path::new("/data/images/a.drawio_edge.png"));
//! ```

pub mod errors;
pub mod page;
pub mod request;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::ExporterError;
pub use page::PageDescriptor;
pub use request::{output_dir_for, ExportFormat, ExportOptions, ExportRequest, OUTPUT_DIR_NAME};
pub use result::Result;
