//! Export coordinator - drives a whole batch
//!
//! Resolving → Enumerating(doc) → Exporting(doc, page) → ... → Done | Failed.
//! Documents and pages are processed strictly one after another. The first error
//! anywhere ends the run: later pages and documents are not attempted and files
//! already written stay on disk.

use super::invoker::ExportInvoker;
use super::summary::{DocumentOutcome, ExportSummary};
use crate::adapters::renderer::CommandRunner;
use crate::config::ExporterConfig;
use crate::core::pages::enumerate_pages;
use crate::core::resolver::resolve_documents;
use crate::domain::{output_dir_for, ExportOptions, ExportRequest, Result};
use crate::log_document_start;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

/// Export coordinator
pub struct ExportCoordinator {
    invoker: ExportInvoker,
    options: ExportOptions,
}

impl ExportCoordinator {
    /// Create a coordinator for one run
    ///
    /// `options` are the rendering options shared by every page of the batch.
    pub fn new(config: &ExporterConfig, options: ExportOptions, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            invoker: ExportInvoker::new(config.renderer.clone(), runner, config.application.dry_run),
            options,
        }
    }

    /// Resolve the document list and export every page of every document
    ///
    /// Never returns early with an error: the outcome, including the first
    /// failure, is in the returned summary.
    pub async fn execute_export<S: AsRef<Path>>(&self, candidates: &[S]) -> ExportSummary {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new(self.invoker.is_dry_run());

        match resolve_documents(candidates) {
            Ok(documents) => {
                tracing::debug!(count = documents.len(), "Documents resolved");
                self.export_documents(&documents, &mut summary).await;
            }
            Err(e) => summary.fail(e),
        }

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        summary
    }

    /// Export already resolved documents, stopping at the first failure
    pub async fn export_documents(&self, documents: &[PathBuf], summary: &mut ExportSummary) {
        for document in documents {
            let mut outcome = DocumentOutcome::new(document.clone(), output_dir_for(document));
            let span = tracing::info_span!("document", path = %document.display());

            let result = self
                .export_document(document, &mut outcome)
                .instrument(span)
                .await;

            summary.documents.push(outcome);
            if let Err(e) = result {
                summary.fail(e);
                return;
            }
        }
    }

    async fn export_document(&self, document: &Path, outcome: &mut DocumentOutcome) -> Result<()> {
        log_document_start!(document);

        ensure_output_dir(&outcome.output_dir).await?;

        let pages = enumerate_pages(document)?;
        if pages.is_empty() {
            tracing::warn!(path = %document.display(), "Document has no pages");
        }

        for page in pages {
            let request = ExportRequest::new(document, page, self.options, &outcome.output_dir);
            let exported = self.invoker.export_page(&request).await?;
            outcome.pages.push(exported);
        }

        outcome.completed = true;
        Ok(())
    }
}

/// Create `dir` if needed; only an actual creation is logged at info level
async fn ensure_output_dir(dir: &Path) -> Result<()> {
    if tokio::fs::metadata(dir).await.map(|m| m.is_dir()).unwrap_or(false) {
        tracing::debug!(path = %dir.display(), "Directory [{}] already exists", dir.display());
        return Ok(());
    }

    tokio::fs::create_dir_all(dir).await?;
    tracing::info!(path = %dir.display(), "Directory [{}] created", dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_ensure_output_dir_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let images = dir.path().join("images");

        ensure_output_dir(&images).await.unwrap();
        assert!(images.is_dir());
        ensure_output_dir(&images).await.unwrap();
        assert!(images.is_dir());
    }

    #[tokio::test]
    async fn test_ensure_output_dir_fails_when_path_is_a_file() {
        let dir = TempDir::new().unwrap();
        let images = dir.path().join("images");
        std::fs::write(&images, "not a directory").unwrap();

        assert!(ensure_output_dir(&images).await.is_err());
    }
}
