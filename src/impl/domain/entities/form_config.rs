use std::time::Duration;

use fractic_server_error::ServerError;

use crate::errors::InvalidConfig;

pub const DEFAULT_STORAGE_KEY: &str = "accounting-app:draft";
pub const DEFAULT_SUBMIT_LATENCY_MS: u64 = 800;
pub const DEFAULT_TOAST_DURATION_MS: u64 = 2200;

#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Key of the single draft slot in the storage handle.
    pub storage_key: String,
    /// Delay of the simulated submission.
    pub submit_latency_ms: u64,
    /// How long a toast stays visible after it is shown.
    pub toast_duration_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            submit_latency_ms: DEFAULT_SUBMIT_LATENCY_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl FormConfig {
    /// Parses a config written in RON, e.g. `(storage_key: "tests:draft")`.
    /// Omitted fields keep their defaults.
    pub fn from_ron(s: &str) -> Result<Self, ServerError> {
        ron::from_str(s).map_err(|e| InvalidConfig::with_debug(&e))
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_ron_keeps_defaults() {
        let config = FormConfig::from_ron(r#"(storage_key: "tests:draft")"#).unwrap();
        assert_eq!(config.storage_key, "tests:draft");
        assert_eq!(config.submit_latency(), Duration::from_millis(800));
        assert_eq!(config.toast_duration(), Duration::from_millis(2200));
    }

    #[test]
    fn empty_struct_is_default() {
        assert_eq!(FormConfig::from_ron("()").unwrap(), FormConfig::default());
    }

    #[test]
    fn malformed_ron_is_rejected() {
        assert!(FormConfig::from_ron("(storage_key: 12").is_err());
        assert!(FormConfig::from_ron("(submit_latency_ms: \"slow\")").is_err());
    }
}
