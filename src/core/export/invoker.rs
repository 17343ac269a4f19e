//! Export invoker - renders one page of one document
//!
//! Builds the renderer's argument list from an [`ExportRequest`], runs it through
//! a [`CommandRunner`] and classifies the outcome. Exit status zero is the only
//! success signal; anything else carries the command line and captured stderr
//! upward.

use crate::adapters::renderer::{CommandRunner, RenderCommand};
use crate::config::RendererConfig;
use crate::domain::{ExportRequest, ExporterError, Result};
use crate::log_page_exported;
use std::path::PathBuf;
use std::sync::Arc;

/// How a page request was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    /// The renderer exited successfully; the output file is on disk
    Exported,
    /// Dry run: the command was logged but not executed
    Planned,
}

/// Result of one successful page request
#[derive(Debug, Clone)]
pub struct PageExport {
    pub index: usize,
    pub name: String,
    pub output: PathBuf,
    pub status: PageStatus,
}

/// Builds and runs renderer invocations
pub struct ExportInvoker {
    renderer: RendererConfig,
    runner: Arc<dyn CommandRunner>,
    dry_run: bool,
}

impl ExportInvoker {
    pub fn new(renderer: RendererConfig, runner: Arc<dyn CommandRunner>, dry_run: bool) -> Self {
        Self {
            renderer,
            runner,
            dry_run,
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Exact command for one page
    ///
    /// Shape: `<wrapper...> <binary> --export <doc> --format <f> --scale <s>
    /// --quality <q> --border <b> --output <out> --page-index <i> [--transparent]
    /// <extra_args...>`. `--transparent` is left out entirely when not requested.
    pub fn build_command(&self, request: &ExportRequest) -> RenderCommand {
        let options = &request.options;
        let output = request.output_path();

        let mut command = match self.renderer.display_wrapper.split_first() {
            Some((program, rest)) => RenderCommand::new(program.as_str())
                .args(rest.iter().cloned())
                .arg(self.renderer.binary.as_str()),
            None => RenderCommand::new(self.renderer.binary.as_str()),
        };

        command = command
            .arg("--export")
            .arg(&request.document)
            .arg("--format")
            .arg(options.format.as_str())
            .arg("--scale")
            .arg(options.scale.to_string())
            .arg("--quality")
            .arg(options.quality.to_string())
            .arg("--border")
            .arg(options.border.to_string())
            .arg("--output")
            .arg(&output)
            .arg("--page-index")
            .arg(request.page.index.to_string());

        if options.transparent {
            command = command.arg("--transparent");
        }

        command.args(self.renderer.extra_args.iter().cloned())
    }

    /// Render one page
    ///
    /// # Errors
    ///
    /// - [`ExporterError::RendererUnavailable`] if the process cannot be started
    /// - [`ExporterError::RenderInvocationFailure`] on a non-zero exit status
    pub async fn export_page(&self, request: &ExportRequest) -> Result<PageExport> {
        let command = self.build_command(request);
        let output = request.output_path();

        if self.dry_run {
            tracing::info!(
                page = %request.page.name,
                command = %command,
                "Dry run, would execute - [{}]",
                command
            );
            return Ok(self.page_export(request, output, PageStatus::Planned));
        }

        let result = self.runner.run(&command).await.map_err(|e| {
            tracing::error!(
                command = %command,
                error = %e,
                "Command could not be started - [{}], reason: {}",
                command,
                e
            );
            ExporterError::RendererUnavailable {
                command: command.to_string(),
                reason: e.to_string(),
            }
        })?;

        if !result.success() {
            tracing::error!(
                command = %command,
                exit_code = ?result.exit_code,
                stderr = %result.stderr,
                "Command is failed - [{}], reason: {}",
                command,
                result.stderr
            );
            return Err(ExporterError::RenderInvocationFailure {
                command: command.to_string(),
                exit_code: result.exit_code,
                stderr: result.stderr,
            });
        }

        if !result.stdout.is_empty() {
            tracing::debug!(stdout = %result.stdout.trim_end(), "Renderer output");
        }
        log_page_exported!(request.page.name, output);

        Ok(self.page_export(request, output, PageStatus::Exported))
    }

    fn page_export(&self, request: &ExportRequest, output: PathBuf, status: PageStatus) -> PageExport {
        PageExport {
            index: request.page.index,
            name: request.page.name.clone(),
            output,
            status,
        }
    }
}
