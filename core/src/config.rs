//! Client configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{ClientError, Result};

pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:3000";
pub const DEFAULT_RELOAD_DELAY_MS: u64 = 3000;

/// Behaviour switches for `TodoClient`. Every field has a default, so an
/// empty JSON object is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin the service paths are resolved against.
    pub origin: String,

    /// Delay before the reconciliation reload that follows an update.
    /// `None` or `0` turns the reload off.
    pub reload_delay_ms: Option<u64>,

    /// Disable the input while an add request is in flight.
    pub disable_input_during_add: bool,

    /// Custom table template; the built-in one is used when unset.
    pub template_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            reload_delay_ms: Some(DEFAULT_RELOAD_DELAY_MS),
            disable_input_during_add: true,
            template_path: None,
        }
    }
}

impl ClientConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| ClientError::Config(e.to_string()))
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ClientError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&raw)
    }

    pub fn reload_delay(&self) -> Option<Duration> {
        self.reload_delay_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = ClientConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.reload_delay(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn null_delay_disables_reload() {
        let config = ClientConfig::from_json_str(r#"{"reload_delay_ms": null}"#).unwrap();
        assert_eq!(config.reload_delay(), None);
    }

    #[test]
    fn zero_delay_disables_reload() {
        let config = ClientConfig::from_json_str(r#"{"reload_delay_ms": 0}"#).unwrap();
        assert_eq!(config.reload_delay_ms, Some(0));
        assert_eq!(config.reload_delay(), None);
    }

    #[test]
    fn partial_override() {
        let config = ClientConfig::from_json_str(
            r#"{"origin": "https://todo.example", "disable_input_during_add": false}"#,
        )
        .unwrap();
        assert_eq!(config.origin, "https://todo.example");
        assert!(!config.disable_input_during_add);
        assert_eq!(config.reload_delay_ms, Some(DEFAULT_RELOAD_DELAY_MS));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = ClientConfig::from_json_str("{").unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
