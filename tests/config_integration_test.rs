//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold `ENV_MUTEX` so they do not
//! interfere with each other.

use drawio_exporter::config::{load_config, load_config_or_default};
use drawio_exporter::domain::ExportFormat;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("DRAWIO_EXPORTER_APPLICATION_LOG_LEVEL");
    std::env::remove_var("DRAWIO_EXPORTER_APPLICATION_DRY_RUN");
    std::env::remove_var("DRAWIO_EXPORTER_RENDERER_BINARY");
    std::env::remove_var("DRAWIO_EXPORTER_RENDERER_DISPLAY_WRAPPER");
    std::env::remove_var("DRAWIO_EXPORTER_EXPORT_FORMAT");
    std::env::remove_var("DRAWIO_EXPORTER_EXPORT_SCALE");
    std::env::remove_var("DRAWIO_EXPORTER_EXPORT_QUALITY");
    std::env::remove_var("TEST_DRAWIO_HOME");
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = config_file(
        r#"
[application]
log_level = "debug"
dry_run = true

[renderer]
binary = "/opt/drawio/drawio"
display_wrapper = ["xvfb-run", "--auto-servernum"]
extra_args = ["--no-sandbox", "--disable-gpu"]

[export]
format = "svg"
scale = 1.0
quality = 75
border = 10
transparent = true

[logging]
local_enabled = true
local_path = "/var/log/drawio-exporter"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert!(config.application.dry_run);
    assert_eq!(config.renderer.binary, "/opt/drawio/drawio");
    assert_eq!(
        config.renderer.display_wrapper,
        vec!["xvfb-run", "--auto-servernum"]
    );
    assert_eq!(config.renderer.extra_args, vec!["--no-sandbox", "--disable-gpu"]);

    let options = config.export.options();
    assert_eq!(options.format, ExportFormat::Svg);
    assert_eq!(options.scale, 1.0);
    assert_eq!(options.quality, 75);
    assert_eq!(options.border, 10);
    assert!(options.transparent);

    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_path, "/var/log/drawio-exporter");
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_empty_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = config_file("");
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "info");
    assert!(!config.application.dry_run);
    assert_eq!(config.renderer.display_wrapper, vec!["xvfb-run", "-a"]);
    assert_eq!(config.export.format, ExportFormat::Png);
    assert_eq!(config.export.scale, 2.0);
    assert_eq!(config.export.quality, 100);
    assert_eq!(config.export.border, 0);
    assert!(!config.export.transparent);
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_DRAWIO_HOME", "/opt/drawio");

    let file = config_file(
        r#"
[renderer]
binary = "${TEST_DRAWIO_HOME}/drawio"
"#,
    );
    let config = load_config(file.path()).unwrap();
    cleanup_env_vars();

    assert_eq!(config.renderer.binary, "/opt/drawio/drawio");
}

#[test]
fn test_missing_substitution_variable_is_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = config_file(
        r#"
[renderer]
binary = "${TEST_DRAWIO_HOME}/drawio"
"#,
    );
    let err = load_config(file.path()).unwrap_err();

    assert!(err.to_string().contains("TEST_DRAWIO_HOME"));
}

#[test]
fn test_env_overrides_win_over_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("DRAWIO_EXPORTER_APPLICATION_DRY_RUN", "true");
    std::env::set_var("DRAWIO_EXPORTER_RENDERER_DISPLAY_WRAPPER", "");
    std::env::set_var("DRAWIO_EXPORTER_EXPORT_FORMAT", "vsdx");
    std::env::set_var("DRAWIO_EXPORTER_EXPORT_SCALE", "3");

    let file = config_file(
        r#"
[export]
format = "png"
scale = 1.0
"#,
    );
    let result = load_config(file.path());
    cleanup_env_vars();
    let config = result.unwrap();

    assert!(config.application.dry_run);
    assert!(config.renderer.display_wrapper.is_empty());
    assert_eq!(config.export.format, ExportFormat::Vsdx);
    assert_eq!(config.export.scale, 3.0);
}

#[test]
fn test_invalid_env_override_is_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("DRAWIO_EXPORTER_EXPORT_QUALITY", "high");

    let result = load_config_or_default("nonexistent-drawio-exporter.toml");
    cleanup_env_vars();

    assert!(result.is_err());
}

#[test]
fn test_validation_errors() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    for contents in [
        "[application]\nlog_level = \"verbose\"\n",
        "[renderer]\nbinary = \"\"\n",
        "[export]\nscale = 0.0\n",
        "[export]\nscale = -2.0\n",
        "[logging]\nlocal_rotation = \"weekly\"\n",
    ] {
        let file = config_file(contents);
        assert!(load_config(file.path()).is_err(), "accepted: {contents}");
    }
}

#[test]
fn test_quality_outside_jpeg_range_is_accepted() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    for quality in [0, 250] {
        let file = config_file(&format!("[export]\nquality = {quality}\n"));
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.export.quality, quality);
    }
}

#[test]
fn test_unknown_format_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = config_file("[export]\nformat = \"gif\"\n");
    assert!(load_config(file.path()).is_err());
}
