//! Error types for G-code generation.

use thiserror::Error;

/// Errors that can occur while generating G-code.
#[derive(Error, Debug)]
pub enum GcodeError {
    /// Settings cannot produce a valid program.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// There is nothing to draw.
    #[error("path is empty")]
    EmptyPath,
}

/// Result type for G-code operations.
pub type Result<T> = std::result::Result<T, GcodeError>;
