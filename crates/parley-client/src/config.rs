//! Client configuration loaded from environment variables.
//!
//! All settings have sensible defaults so the client can start with zero
//! configuration.

use parley_shared::constants::{REPLY_DELAY_MAX_MS, REPLY_DELAY_MIN_MS};
use parley_shared::error::ConfigError;

use crate::responder::ReplyDelay;

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Inclusive lower bound of the simulated reply delay.
    /// Env: `PARLEY_REPLY_MIN_MS`
    /// Default: `1500`
    pub reply_delay_min_ms: u64,

    /// Exclusive upper bound of the simulated reply delay.
    /// Env: `PARLEY_REPLY_MAX_MS`
    /// Default: `2500`
    pub reply_delay_max_ms: u64,

    /// Whether the sidebar starts with the mock conversations.
    /// Env: `PARLEY_SEED_MOCK_DATA` (true/false)
    /// Default: `true`
    pub seed_mock_data: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            reply_delay_min_ms: REPLY_DELAY_MIN_MS,
            reply_delay_max_ms: REPLY_DELAY_MAX_MS,
            seed_mock_data: true,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`ClientConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(val) = lookup("PARLEY_REPLY_MIN_MS") {
            match parse_millis("PARLEY_REPLY_MIN_MS", &val) {
                Ok(ms) => config.reply_delay_min_ms = ms,
                Err(e) => tracing::warn!(error = %e, "Using default reply delay lower bound"),
            }
        }

        if let Some(val) = lookup("PARLEY_REPLY_MAX_MS") {
            match parse_millis("PARLEY_REPLY_MAX_MS", &val) {
                Ok(ms) => config.reply_delay_max_ms = ms,
                Err(e) => tracing::warn!(error = %e, "Using default reply delay upper bound"),
            }
        }

        if let Some(val) = lookup("PARLEY_SEED_MOCK_DATA") {
            config.seed_mock_data = val != "false" && val != "0";
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter,
        // so we do not store it here.

        config
    }

    /// Reject a reply delay range that cannot be sampled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reply_delay_min_ms >= self.reply_delay_max_ms {
            return Err(ConfigError::InvalidDelayRange {
                min_ms: self.reply_delay_min_ms,
                max_ms: self.reply_delay_max_ms,
            });
        }
        Ok(())
    }

    pub fn reply_delay(&self) -> ReplyDelay {
        ReplyDelay::new(self.reply_delay_min_ms, self.reply_delay_max_ms)
    }
}

fn parse_millis(var: &str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> ClientConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|var| env.get(var).cloned())
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.reply_delay_min_ms, 1500);
        assert_eq!(config.reply_delay_max_ms, 2500);
        assert!(config.seed_mock_data);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PARLEY_REPLY_MIN_MS", "10"),
            ("PARLEY_REPLY_MAX_MS", " 20 "),
            ("PARLEY_SEED_MOCK_DATA", "false"),
        ]);
        assert_eq!(config.reply_delay_min_ms, 10);
        assert_eq!(config.reply_delay_max_ms, 20);
        assert!(!config.seed_mock_data);
    }

    #[test]
    fn test_invalid_value_falls_back() {
        let config = config_from(&[("PARLEY_REPLY_MIN_MS", "soon")]);
        assert_eq!(config.reply_delay_min_ms, 1500);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let config = config_from(&[
            ("PARLEY_REPLY_MIN_MS", "3000"),
            ("PARLEY_REPLY_MAX_MS", "1000"),
        ]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidDelayRange {
                min_ms: 3000,
                max_ms: 1000
            })
        );
    }

    #[test]
    fn test_parse_millis() {
        assert_eq!(parse_millis("X", "42").unwrap(), 42);
        assert!(parse_millis("X", "-1").is_err());
    }
}
