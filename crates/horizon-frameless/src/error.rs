//! Error types for the winit adapter.

use horizon_frameless_core::ConfigError;
use thiserror::Error;

/// Errors that can occur while driving a frameless winit window.
#[derive(Error, Debug)]
pub enum FramelessError {
    /// Invalid manipulation settings or size constraints.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The platform cannot report the window position.
    #[error("window position unavailable: {0}")]
    NotSupported(#[from] winit::error::NotSupportedError),

    /// The platform rejected a native drag or resize request.
    #[error("platform window operation failed: {0}")]
    Platform(#[from] winit::error::ExternalError),
}

/// Result type for adapter operations.
pub type FramelessResult<T> = Result<T, FramelessError>;
