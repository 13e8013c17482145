//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default delay before the login form re-checks its overall validity
const DEFAULT_VALIDITY_DEBOUNCE_MS: u64 = 500;

const DEFAULT_LOG_FILTER: &str = "session_tui=info";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Milliseconds to wait after the last validity change before re-checking the form
    pub validity_debounce_ms: Option<u64>,
    /// Render the password as bullets
    pub mask_password: Option<bool>,
    /// tracing filter directive, overridden by `RUST_LOG`
    pub log_filter: Option<String>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "session-tui", "session-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get the log file path
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("session-tui.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                return Self::from_json(&content);
            }
        }

        Ok(Self::default())
    }

    fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn validity_debounce(&self) -> Duration {
        Duration::from_millis(
            self.validity_debounce_ms
                .unwrap_or(DEFAULT_VALIDITY_DEBOUNCE_MS),
        )
    }

    pub fn mask_password(&self) -> bool {
        self.mask_password.unwrap_or(true)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.validity_debounce_ms.is_none());
        assert!(config.mask_password.is_none());
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_defaults_resolve() {
        let config = TuiConfig::default();
        assert_eq!(config.validity_debounce(), Duration::from_millis(500));
        assert!(config.mask_password());
        assert_eq!(config.log_filter(), "session_tui=info");
    }

    #[test]
    fn test_overrides_resolve() {
        let config = TuiConfig {
            validity_debounce_ms: Some(250),
            mask_password: Some(false),
            log_filter: Some("session_tui=trace".to_string()),
        };
        assert_eq!(config.validity_debounce(), Duration::from_millis(250));
        assert!(!config.mask_password());
        assert_eq!(config.log_filter(), "session_tui=trace");
    }

    #[test]
    fn test_partial_json() {
        let parsed = TuiConfig::from_json(r#"{"validity_debounce_ms": 100}"#).unwrap();
        assert_eq!(parsed.validity_debounce_ms, Some(100));
        assert!(parsed.mask_password.is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed = TuiConfig::from_json("{}").unwrap();
        assert!(parsed.validity_debounce_ms.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"mask_password": false, "unknown_field": "value"}"#;
        let parsed = TuiConfig::from_json(json).unwrap();
        assert_eq!(parsed.mask_password, Some(false));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(TuiConfig::from_json(r#"{"validity_debounce_ms": "soon"}"#).is_err());
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = TuiConfig {
            validity_debounce_ms: Some(750),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed = TuiConfig::from_json(&json).unwrap();
        assert_eq!(parsed.validity_debounce_ms, Some(750));
        assert!(parsed.log_filter.is_none());
    }

    #[test]
    fn test_paths_share_project_dirs() {
        // Both resolve or neither does, depending on the environment
        assert_eq!(
            TuiConfig::config_path().is_some(),
            TuiConfig::log_path().is_some()
        );
    }
}
