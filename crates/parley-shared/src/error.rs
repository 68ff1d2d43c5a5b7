use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid reply delay range: {min_ms}ms..{max_ms}ms is empty")]
    InvalidDelayRange { min_ms: u64, max_ms: u64 },

    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: String, value: String },
}
