//! Error types for the frameless core crate.
//!
//! Pointer handling never fails; these errors come from loading and
//! validating configuration.

use thiserror::Error;

use crate::geometry::SizeConstraints;

/// Errors that can occur while building a manipulation configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration text is not valid TOML for this schema.
    #[error("failed to parse manipulation config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The resize hit margin is negative.
    #[error("resize threshold must be non-negative, got {0}")]
    NegativeThreshold(i32),

    /// A minimum size is negative or larger than its maximum.
    #[error(
        "invalid size constraints: width {}..={}, height {}..={}",
        .0.min_width, .0.max_width, .0.min_height, .0.max_height
    )]
    InvalidConstraints(SizeConstraints),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
