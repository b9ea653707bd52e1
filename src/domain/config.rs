//! Application configuration loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Environment variable carrying the backend API key.
pub const API_KEY_ENV: &str = "FOLIOGEN_API_KEY";

/// Top-level configuration, loaded from a TOML file or built from defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FolioConfig {
    /// Generative backend configuration.
    #[serde(default)]
    pub backend: BackendConfig,
}

impl FolioConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        let config: FolioConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.backend.validate()
    }
}

/// Generative backend endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    /// Messages endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier, fixed per process rather than per request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), model: default_model(), timeout_secs: default_timeout() }
    }
}

impl BackendConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("model must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.anthropic.com/v1/messages").expect("Default API URL must be valid")
}

fn default_model() -> String {
    "claude-3-7-sonnet-20250219".to_string()
}

fn default_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = FolioConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.backend.timeout_secs, 60);
        assert_eq!(config.backend.model, "claude-3-7-sonnet-20250219");
    }

    #[test]
    fn validate_rejects_empty_model() {
        let config = BackendConfig { model: "  ".to_string(), ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let config = BackendConfig { timeout_secs: 0, ..Default::default() };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(msg) if msg.contains("timeout_secs")));
    }

    #[test]
    fn parses_partial_toml_with_defaults() {
        let config: FolioConfig = toml::from_str(
            r#"
            [backend]
            model = "test-model"
            "#,
        )
        .unwrap();
        assert_eq!(config.backend.model, "test-model");
        assert_eq!(config.backend.timeout_secs, 60);
    }

    #[test]
    fn rejects_unknown_fields() {
        let parsed: Result<FolioConfig, _> = toml::from_str("[frontend]\nport = 3000\n");
        assert!(parsed.is_err());
    }
}
