//! Error types for snowflake construction.

use thiserror::Error;

/// Errors that can occur while configuring or building a snowflake.
#[derive(Error, Debug)]
pub enum SnowflakeError {
    /// Options describe geometry that cannot be built.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// Configuration text could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

/// Result type for snowflake operations.
pub type Result<T> = std::result::Result<T, SnowflakeError>;
