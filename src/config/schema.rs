//! Configuration schema types
//!
//! Every section is optional in the TOML file; missing keys take the defaults below.

use crate::domain::{ExportFormat, ExportOptions};
use serde::{Deserialize, Serialize};

/// Main exporter configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// How the external renderer is launched
    #[serde(default)]
    pub renderer: RendererConfig,

    /// Default rendering options
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ExporterConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.renderer.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (log renderer commands without running them)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// External renderer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Path to the draw.io desktop binary
    #[serde(default = "default_renderer_binary")]
    pub binary: String,

    /// Virtual display wrapper the binary is launched through.
    /// An empty list runs the binary directly.
    #[serde(default = "default_display_wrapper")]
    pub display_wrapper: Vec<String>,

    /// Arguments appended after the export arguments
    #[serde(default = "default_extra_args")]
    pub extra_args: Vec<String>,
}

impl RendererConfig {
    fn validate(&self) -> Result<(), String> {
        if self.binary.trim().is_empty() {
            return Err("renderer.binary cannot be empty".to_string());
        }
        if self.display_wrapper.iter().any(|arg| arg.is_empty()) {
            return Err("renderer.display_wrapper cannot contain empty entries".to_string());
        }
        Ok(())
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            binary: default_renderer_binary(),
            display_wrapper: default_display_wrapper(),
            extra_args: default_extra_args(),
        }
    }
}

/// Default rendering options, overridable per run from the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Output file type
    #[serde(default)]
    pub format: ExportFormat,

    /// Scale factor (1 = 100%)
    #[serde(default = "default_scale")]
    pub scale: f64,

    /// JPEG quality, passed to the renderer unchecked
    #[serde(default = "default_quality")]
    pub quality: u32,

    /// Border width around the diagram
    #[serde(default)]
    pub border: u32,

    /// Transparent background for PNG
    #[serde(default)]
    pub transparent: bool,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(format!("export.scale must be > 0, got {}", self.scale));
        }
        Ok(())
    }

    /// Rendering options for a batch
    pub fn options(&self) -> ExportOptions {
        ExportOptions {
            format: self.format,
            scale: self.scale,
            quality: self.quality,
            border: self.border,
            transparent: self.transparent,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            scale: default_scale(),
            quality: default_quality(),
            border: 0,
            transparent: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled = true".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_renderer_binary() -> String {
    "/usr/bin/drawio".to_string()
}

fn default_display_wrapper() -> Vec<String> {
    vec!["xvfb-run".to_string(), "-a".to_string()]
}

fn default_extra_args() -> Vec<String> {
    vec!["--no-sandbox".to_string()]
}

fn default_scale() -> f64 {
    2.0
}

fn default_quality() -> u32 {
    100
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
