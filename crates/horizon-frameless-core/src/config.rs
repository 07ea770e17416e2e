//! Manipulation settings.
//!
//! Settings can be built in code or loaded from TOML:
//!
//! ```
//! use horizon_frameless_core::ManipulationConfig;
//!
//! let config = ManipulationConfig::from_toml_str(
//!     r#"
//!     resize_threshold = 8
//!     resize_enabled = true
//!     drag_enabled = true
//!     "#,
//! )?;
//! assert_eq!(config.resize_threshold(), 8);
//! # Ok::<(), horizon_frameless_core::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::zone::DEFAULT_RESIZE_THRESHOLD;

/// Settings for a [`ManipulationController`](crate::ManipulationController).
///
/// # Defaults
///
/// - Resize threshold: 5 units
/// - Resizing: disabled
/// - Dragging: disabled
///
/// Both capabilities start disabled; the windowing layer enables them once
/// the window is in a state where they make sense (e.g. not maximized).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManipulationConfig {
    /// Hit margin around each window edge for resize zones.
    resize_threshold: i32,
    /// Whether edge and corner drags resize the window.
    resize_enabled: bool,
    /// Whether drags outside resize zones move the window.
    drag_enabled: bool,
}

impl Default for ManipulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ManipulationConfig {
    /// Create a configuration with default values.
    pub const fn new() -> Self {
        Self {
            resize_threshold: DEFAULT_RESIZE_THRESHOLD,
            resize_enabled: false,
            drag_enabled: false,
        }
    }

    /// Parse and validate a configuration from TOML text.
    ///
    /// Missing keys take their default values.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.resize_threshold < 0 {
            return Err(ConfigError::NegativeThreshold(self.resize_threshold));
        }
        Ok(())
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the resize hit margin. Negative values are raised to zero.
    pub fn with_resize_threshold(mut self, threshold: i32) -> Self {
        self.resize_threshold = threshold.max(0);
        self
    }

    /// Enable or disable resizing.
    pub fn with_resize_enabled(mut self, enabled: bool) -> Self {
        self.resize_enabled = enabled;
        self
    }

    /// Enable or disable dragging.
    pub fn with_drag_enabled(mut self, enabled: bool) -> Self {
        self.drag_enabled = enabled;
        self
    }

    // =========================================================================
    // Setters
    // =========================================================================

    pub(crate) fn set_resize_enabled(&mut self, enabled: bool) {
        self.resize_enabled = enabled;
    }

    pub(crate) fn set_drag_enabled(&mut self, enabled: bool) {
        self.drag_enabled = enabled;
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Get the resize hit margin.
    pub fn resize_threshold(&self) -> i32 {
        self.resize_threshold
    }

    /// Check if resizing is enabled.
    pub fn is_resize_enabled(&self) -> bool {
        self.resize_enabled
    }

    /// Check if dragging is enabled.
    pub fn is_drag_enabled(&self) -> bool {
        self.drag_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ManipulationConfig::default();
        assert_eq!(config.resize_threshold(), DEFAULT_RESIZE_THRESHOLD);
        assert!(!config.is_resize_enabled());
        assert!(!config.is_drag_enabled());
    }

    #[test]
    fn test_builder_chain() {
        let config = ManipulationConfig::new()
            .with_resize_threshold(12)
            .with_resize_enabled(true)
            .with_drag_enabled(true);

        assert_eq!(config.resize_threshold(), 12);
        assert!(config.is_resize_enabled());
        assert!(config.is_drag_enabled());
        assert_eq!(
            ManipulationConfig::new().with_resize_threshold(-3).resize_threshold(),
            0
        );
    }

    #[test]
    fn test_from_toml_partial() {
        let config = ManipulationConfig::from_toml_str("drag_enabled = true").unwrap();
        assert!(config.is_drag_enabled());
        assert!(!config.is_resize_enabled());
        assert_eq!(config.resize_threshold(), DEFAULT_RESIZE_THRESHOLD);
    }

    #[test]
    fn test_from_toml_rejects_negative_threshold() {
        let err = ManipulationConfig::from_toml_str("resize_threshold = -1").unwrap_err();
        assert!(matches!(err, ConfigError::NegativeThreshold(-1)));
    }

    #[test]
    fn test_from_toml_rejects_bad_types() {
        let err = ManipulationConfig::from_toml_str("resize_enabled = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ManipulationConfig::new()
            .with_resize_threshold(3)
            .with_resize_enabled(true);
        let text = toml::to_string(&config).unwrap();
        assert_eq!(ManipulationConfig::from_toml_str(&text).unwrap(), config);
    }
}
