// drawio-exporter - export every page of draw.io diagrams to images
// Copyright (c) 2025 drawio-exporter Contributors
// Licensed under the MIT License

//! # drawio-exporter
//!
//! The draw.io desktop application exports a single page per invocation. This
//! crate enumerates the pages of one or more diagram documents and drives the
//! application once per page, producing one image per page next to each document:
//!
//! ```text
//! mnsk/scheme_mnsk.drawio
//! mnsk/images/scheme_mnsk.drawio_l1_core.png
//! mnsk/images/scheme_mnsk.drawio_ebgp.png
//! ```
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Path resolution, page enumeration, per-page export, batch orchestration
//! - [`adapters`] - The renderer child process
//! - [`domain`] - Page descriptors, export requests, errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging scoped to the run
//!
//! ## Failure policy
//!
//! Processing is sequential and fail-fast. A missing document aborts the run
//! before any rendering; a malformed document, a page without a name, or a
//! renderer failure stops the run at that point. The process exits with 0 only
//! when every page of every document was exported.
//!
//! ## Example
//!
//! ```rust,no_run
//! use drawio_exporter::adapters::ProcessRunner;
//! use drawio_exporter::config::ExporterConfig;
//! use drawio_exporter::core::export::ExportCoordinator;
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let config = ExporterConfig::default();
//! let coordinator =
//!     ExportCoordinator::new(&config, config.export.options(), Arc::new(ProcessRunner::new()));
//! let summary = coordinator.execute_export(&["a.drawio", "b.drawio"]).await;
//! assert!(summary.is_successful());
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
