//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ExporterConfig;
use crate::domain::errors::ExporterError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Configuration file looked up when none is given explicitly
pub const DEFAULT_CONFIG_FILE: &str = "drawio-exporter.toml";

/// Prefix of environment variables that override configuration keys
pub const ENV_PREFIX: &str = "DRAWIO_EXPORTER_";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ExporterConfig
/// 4. Applies environment variable overrides (DRAWIO_EXPORTER_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, if parsing or
/// substitution fails, or if the result does not validate.
///
/// # Examples
///
/// ```no_run
/// use drawio_exporter::config::loader::load_config;
///
/// let config = load_config("drawio-exporter.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ExporterConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExporterError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ExporterError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ExporterConfig = toml::from_str(&contents)?;

    finish(&mut config)?;
    Ok(config)
}

/// Loads `path` if it exists, otherwise starts from built-in defaults.
///
/// Environment overrides and validation apply in both cases.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<ExporterConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    let mut config = ExporterConfig::default();
    finish(&mut config)?;
    Ok(config)
}

fn finish(config: &mut ExporterConfig) -> Result<()> {
    apply_env_overrides(config)?;

    config.validate().map_err(|e| {
        ExporterError::Configuration(format!("Configuration validation failed: {e}"))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ExporterError::Configuration(e.to_string()))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ExporterError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn env_override(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}{key}")).ok()
}

fn parse_override<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        ExporterError::Configuration(format!(
            "Invalid value '{value}' for environment variable {ENV_PREFIX}{key}"
        ))
    })
}

/// Applies environment variable overrides using the DRAWIO_EXPORTER_* prefix
///
/// Variables follow the pattern `DRAWIO_EXPORTER_<SECTION>_<KEY>`, for example
/// `DRAWIO_EXPORTER_RENDERER_BINARY` or `DRAWIO_EXPORTER_EXPORT_SCALE`.
/// List values are whitespace-separated.
fn apply_env_overrides(config: &mut ExporterConfig) -> Result<()> {
    // Application overrides
    if let Some(val) = env_override("APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Some(val) = env_override("APPLICATION_DRY_RUN") {
        config.application.dry_run = parse_override("APPLICATION_DRY_RUN", &val)?;
    }

    // Renderer overrides
    if let Some(val) = env_override("RENDERER_BINARY") {
        config.renderer.binary = val;
    }
    if let Some(val) = env_override("RENDERER_DISPLAY_WRAPPER") {
        config.renderer.display_wrapper = val.split_whitespace().map(str::to_string).collect();
    }
    if let Some(val) = env_override("RENDERER_EXTRA_ARGS") {
        config.renderer.extra_args = val.split_whitespace().map(str::to_string).collect();
    }

    // Export overrides
    if let Some(val) = env_override("EXPORT_FORMAT") {
        config.export.format = val.parse().map_err(ExporterError::Configuration)?;
    }
    if let Some(val) = env_override("EXPORT_SCALE") {
        config.export.scale = parse_override("EXPORT_SCALE", &val)?;
    }
    if let Some(val) = env_override("EXPORT_QUALITY") {
        config.export.quality = parse_override("EXPORT_QUALITY", &val)?;
    }
    if let Some(val) = env_override("EXPORT_BORDER") {
        config.export.border = parse_override("EXPORT_BORDER", &val)?;
    }
    if let Some(val) = env_override("EXPORT_TRANSPARENT") {
        config.export.transparent = parse_override("EXPORT_TRANSPARENT", &val)?;
    }

    // Logging overrides
    if let Some(val) = env_override("LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_override("LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Some(val) = env_override("LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = env_override("LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    // Serializes tests that touch the process environment
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_substitute_env_vars() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var("LOADER_TEST_VAR", "/opt/drawio");
        let input = "binary = \"${LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "binary = \"/opt/drawio\"\n");
        std::env::remove_var("LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var("LOADER_MISSING_VAR");
        let result = substitute_env_vars("binary = \"${LOADER_MISSING_VAR}\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        let input = "# binary = \"${NOT_SET_ANYWHERE_123}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${NOT_SET_ANYWHERE_123}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent-drawio-exporter.toml");
        assert!(matches!(result, Err(ExporterError::Configuration(_))));
    }

    #[test]
    fn test_load_config_or_default_missing_file() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let config = load_config_or_default("nonexistent-drawio-exporter.toml").unwrap();
        assert_eq!(config.renderer.binary, "/usr/bin/drawio");
    }

    #[test]
    fn test_load_config_valid() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let toml_content = r#"
[application]
log_level = "debug"

[renderer]
binary = "/opt/drawio/drawio"
display_wrapper = []

[export]
format = "jpg"
scale = 1.5
quality = 90
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.renderer.binary, "/opt/drawio/drawio");
        assert!(config.renderer.display_wrapper.is_empty());
        assert_eq!(config.export.scale, 1.5);
        assert_eq!(config.export.quality, 90);
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[export]\nscale = -1.0\n")
            .unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("export.scale"));
    }
}
