//! Batch outcome
//!
//! Ordered record of what happened to each document and page, collapsing to a
//! single success/failure for the process.

use super::invoker::{PageExport, PageStatus};
use crate::domain::ExporterError;
use chrono::{DateTime, Local};
use std::path::PathBuf;
use std::time::Duration;

/// Per-document record
#[derive(Debug)]
pub struct DocumentOutcome {
    pub path: PathBuf,
    pub output_dir: PathBuf,
    /// Pages handled so far, in enumeration order
    pub pages: Vec<PageExport>,
    /// Every page of the document was handled
    pub completed: bool,
}

impl DocumentOutcome {
    pub fn new(path: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            path,
            output_dir,
            pages: Vec::new(),
            completed: false,
        }
    }
}

/// Summary of a batch run
#[derive(Debug)]
pub struct ExportSummary {
    pub started_at: DateTime<Local>,
    pub duration: Duration,
    pub dry_run: bool,
    /// Documents attempted, in batch order
    pub documents: Vec<DocumentOutcome>,
    /// First error; the run stopped here
    pub failure: Option<ExporterError>,
}

impl ExportSummary {
    pub fn new(dry_run: bool) -> Self {
        Self {
            started_at: Local::now(),
            duration: Duration::ZERO,
            dry_run,
            documents: Vec::new(),
            failure: None,
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn fail(&mut self, error: ExporterError) {
        if self.failure.is_none() {
            self.failure = Some(error);
        }
    }

    /// All documents and all pages succeeded
    pub fn is_successful(&self) -> bool {
        self.failure.is_none()
    }

    /// Process exit status for this outcome
    pub fn exit_code(&self) -> i32 {
        if self.is_successful() {
            0
        } else {
            1
        }
    }

    pub fn completed_documents(&self) -> usize {
        self.documents.iter().filter(|d| d.completed).count()
    }

    fn count_pages(&self, status: PageStatus) -> usize {
        self.documents
            .iter()
            .flat_map(|d| d.pages.iter())
            .filter(|p| p.status == status)
            .count()
    }

    pub fn exported_pages(&self) -> usize {
        self.count_pages(PageStatus::Exported)
    }

    pub fn planned_pages(&self) -> usize {
        self.count_pages(PageStatus::Planned)
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            started_at = %self.started_at.to_rfc3339(),
            documents = self.documents.len(),
            completed_documents = self.completed_documents(),
            exported_pages = self.exported_pages(),
            planned_pages = self.planned_pages(),
            dry_run = self.dry_run,
            duration_ms = self.duration.as_millis() as u64,
            "Export finished"
        );

        if let Some(error) = &self.failure {
            tracing::error!(kind = error.kind(), error = %error, "Export failed");
        }
    }
}
