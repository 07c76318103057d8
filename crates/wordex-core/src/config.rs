use serde::Deserialize;
use std::path::Path;

use crate::error::ExchangeError;

/// Top-level wordex configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub exchange: ExchangeConfig,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exchange: ExchangeConfig::default(),
            log_level: default_log_level(),
        }
    }
}

/// Where the lookup table comes from and which locale to select.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExchangeConfig {
    /// Path to the lookup JSON file.
    #[serde(default)]
    pub lookup: Option<String>,
    /// Target locale. Unset means the lookup is a flat word map.
    #[serde(default)]
    pub locale: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Load configuration from a TOML file.
/// Returns `None` if the file does not exist, leaving the caller to log the
/// fallback once logging is set up.
pub fn load(path: &str) -> Result<Option<Config>, ExchangeError> {
    let path = Path::new(path);
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ExchangeError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| ExchangeError::Config(format!("failed to parse config: {}", e)))?;

    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.exchange.lookup.is_none());
        assert!(cfg.exchange.locale.is_none());
    }

    #[test]
    fn test_from_toml() {
        let toml_str = r#"
            log_level = "debug"

            [exchange]
            lookup = "words.json"
            locale = "French"
        "#;
        let cfg: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.exchange.lookup.as_deref(), Some("words.json"));
        assert_eq!(cfg.exchange.locale.as_deref(), Some("French"));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.exchange.lookup.is_none());
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let cfg = load("/nonexistent/__wordex__/config.toml").unwrap();
        assert!(cfg.is_none());
    }

    #[test]
    fn test_load_existing_file() {
        let tmp = std::env::temp_dir().join("__wordex_test_config__.toml");
        std::fs::write(&tmp, "[exchange]\nlocale = \"German\"\n").unwrap();
        let cfg = load(tmp.to_str().unwrap()).unwrap().unwrap();
        assert_eq!(cfg.exchange.locale.as_deref(), Some("German"));
        assert_eq!(cfg.log_level, "info");
        let _ = std::fs::remove_file(&tmp);
    }

    #[test]
    fn test_load_invalid_toml_is_config_error() {
        let tmp = std::env::temp_dir().join("__wordex_test_bad_config__.toml");
        std::fs::write(&tmp, "log_level = [unterminated").unwrap();
        let err = load(tmp.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ExchangeError::Config(_)), "got {err:?}");
        let _ = std::fs::remove_file(&tmp);
    }
}
