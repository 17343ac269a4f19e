//! Export command implementation

use crate::adapters::ProcessRunner;
use crate::config::ExporterConfig;
use crate::core::export::{ExportCoordinator, ExportSummary};
use crate::core::resolver::split_document_list;
use crate::domain::ExportFormat;
use clap::Args;
use std::ffi::OsString;
use std::sync::Arc;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// drawio scheme (or list of schemes separated by commas without spaces)
    #[arg(short = 'x', long, value_name = "SCHEMES", value_parser = clap::value_parser!(OsString))]
    pub export: OsString,

    /// Output file type [default: png]
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Scales the diagram size [1=100%, 2=200%] [default: 2]
    #[arg(short, long)]
    pub scale: Option<f64>,

    /// Set transparent background for PNG
    #[arg(short, long)]
    pub transparent: bool,

    /// Output image quality for JPEG [default: 100]
    #[arg(short, long)]
    pub quality: Option<u32>,

    /// Sets the border width around the diagram [default: 0]
    #[arg(short, long)]
    pub border: Option<u32>,

    /// Log renderer commands without running them
    #[arg(long)]
    pub dry_run: bool,
}

impl ExportArgs {
    /// Apply CLI overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut ExporterConfig) {
        if let Some(format) = self.format {
            config.export.format = format;
        }
        if let Some(scale) = self.scale {
            config.export.scale = scale;
        }
        if let Some(quality) = self.quality {
            config.export.quality = quality;
        }
        if let Some(border) = self.border {
            config.export.border = border;
        }
        if self.transparent {
            config.export.transparent = true;
        }
        if self.dry_run {
            config.application.dry_run = true;
        }
    }

    /// Execute the export command
    pub async fn execute(&self, config: &ExporterConfig) -> anyhow::Result<i32> {
        let documents = split_document_list(&self.export);
        let options = config.export.options();

        tracing::debug!(
            documents = ?documents,
            format = %options.format,
            scale = options.scale,
            quality = options.quality,
            border = options.border,
            transparent = options.transparent,
            dry_run = config.application.dry_run,
            "Starting export command"
        );

        let coordinator = ExportCoordinator::new(config, options, Arc::new(ProcessRunner::new()));
        let summary = coordinator.execute_export(&documents).await;

        print_summary(&summary);
        Ok(summary.exit_code())
    }
}

fn print_summary(summary: &ExportSummary) {
    let pages = if summary.dry_run {
        summary.planned_pages()
    } else {
        summary.exported_pages()
    };
    let verb = if summary.dry_run { "Planned" } else { "Exported" };

    match &summary.failure {
        None => println!(
            "✅ {verb} {pages} page(s) from {} document(s) in {:.2}s",
            summary.completed_documents(),
            summary.duration.as_secs_f64()
        ),
        Some(error) => {
            println!(
                "❌ Export failed after {pages} page(s) from {} document(s)",
                summary.documents.len()
            );
            println!("   Error: {error}");
        }
    }
}
