//! # Noise Error Types
//!
//! Everything that can go wrong happens before the first sample is taken.
//! Sampling itself is total.

use thiserror::Error;

/// Errors that can occur while building a noise sampler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoiseError {
    /// A constructor parameter is outside its valid domain.
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in the config.
        name: &'static str,
        /// The rejected value.
        value: i32,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Configuration text could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("failed to read config {path}: {message}")]
    ConfigIo {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error message.
        message: String,
    },
}

/// Result type for noise construction.
pub type NoiseResult<T> = Result<T, NoiseError>;
