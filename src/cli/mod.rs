//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap.

pub mod commands;

use crate::config::{load_config, load_config_or_default, ExporterConfig, DEFAULT_CONFIG_FILE};
use crate::domain::Result;
use clap::Parser;

/// Export every page of draw.io diagrams to images
#[derive(Parser, Debug)]
#[command(name = "drawio-exporter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "DRAWIO_EXPORTER_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "DRAWIO_EXPORTER_LOG_LEVEL")]
    pub log_level: Option<String>,

    #[command(flatten)]
    pub export: commands::export::ExportArgs,
}

impl Cli {
    /// Load the configuration and apply command-line overrides
    ///
    /// An explicitly given config file must exist; the default one is optional.
    pub fn load_config(&self) -> Result<ExporterConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => load_config_or_default(DEFAULT_CONFIG_FILE)?,
        };

        if let Some(level) = &self.log_level {
            config.application.log_level = level.clone();
        }
        self.export.apply_overrides(&mut config);

        config.validate().map_err(|e| {
            crate::domain::ExporterError::Configuration(format!(
                "Configuration validation failed: {e}"
            ))
        })?;
        Ok(config)
    }
}
