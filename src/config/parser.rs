use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let config: Config = toml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[crawler]
pause-ms = 250
include-december = true

[user-agent]
name = "TestArchiver"
version = "0.9"

[output]
snapshot-path = "./corpus.json"
render-dir = "./out"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.pause_ms, 250);
        assert!(config.crawler.include_december);
        assert_eq!(config.user_agent.name, "TestArchiver");
        assert_eq!(config.output.snapshot_path, "./corpus.json");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let file = create_temp_config("[crawler]\npause-ms = 10\n");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.pause_ms, 10);
        assert!(!config.crawler.include_december);
        assert_eq!(config.output.snapshot_path, "blog_data.json");
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let file = create_temp_config("[output]\nsnapshot-path = \"\"\n");
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }
}
