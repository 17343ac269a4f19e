//! Per-page export and batch orchestration
//!
//! - [`invoker`] - one renderer invocation per page
//! - [`coordinator`] - sequential, fail-fast loop over documents and pages
//! - [`summary`] - the batch outcome

pub mod coordinator;
pub mod invoker;
pub mod summary;

pub use coordinator::ExportCoordinator;
pub use invoker::{ExportInvoker, PageExport, PageStatus};
pub use summary::{DocumentOutcome, ExportSummary};
