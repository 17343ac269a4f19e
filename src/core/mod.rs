//! Core export logic.
//!
//! Data flows strictly downward:
//!
//! - [`resolver`] - turns the user's document list into verified absolute paths
//! - [`pages`] - lists a document's pages as `(index, name)` descriptors
//! - [`export`] - runs the renderer once per page and drives the whole batch
//!
//! # Example
//!
//! ```rust,no_run
//! use drawio_exporter::adapters::ProcessRunner;
//! use drawio_exporter::config::ExporterConfig;
//! use drawio_exporter::core::export::ExportCoordinator;
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let config = ExporterConfig::default();
//! let coordinator = ExportCoordinator::new(
//!     &config,
//!     config.export.options(),
//!     Arc::new(ProcessRunner::new()),
//! );
//!
//! let summary = coordinator.execute_export(&["mnsk/scheme_mnsk.drawio"]).await;
//! std::process::exit(summary.exit_code());
//! # }
//! ```

pub mod export;
pub mod pages;
pub mod resolver;
