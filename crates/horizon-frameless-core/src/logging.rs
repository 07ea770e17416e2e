//! Tracing targets for Horizon Frameless.
//!
//! Window manipulation is instrumented with the `tracing` crate. Operation
//! start and end are logged at `debug`, every bounds update at `trace`.
//! Install a subscriber in the application to see them:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_frameless_core::controller=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Pointer state machine target.
    pub const CONTROLLER: &str = "horizon_frameless_core::controller";
    /// Windowing adapter target.
    pub const ADAPTER: &str = "horizon_frameless::adapter";
}
