//! Configuration management.
//!
//! The exporter runs with built-in defaults; a TOML file is only needed to change
//! how the renderer is launched or to shift the default rendering options.
//!
//! # Precedence
//!
//! 1. Built-in defaults
//! 2. TOML file (`drawio-exporter.toml`, or the path given with `--config`)
//! 3. `DRAWIO_EXPORTER_<SECTION>_<KEY>` environment variables
//! 4. Command-line flags
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [renderer]
//! binary = "/usr/bin/drawio"
//! display_wrapper = ["xvfb-run", "-a"]
//! extra_args = ["--no-sandbox"]
//!
//! [export]
//! format = "png"
//! scale = 2
//! quality = 100
//! border = 0
//! transparent = false
//!
//! [logging]
//! local_enabled = false
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```
//!
//! `${VAR_NAME}` placeholders are substituted from the environment before parsing.

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default, DEFAULT_CONFIG_FILE};
pub use schema::{ApplicationConfig, ExportConfig, ExporterConfig, LoggingConfig, RendererConfig};
