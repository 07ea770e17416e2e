//! Horizon Frameless: drag-to-move and edge-to-resize for borderless windows.
//!
//! Windows created without native decorations lose the title bar and borders
//! the platform normally uses for moving and resizing. This crate restores
//! those interactions for winit windows.
//!
//! - [`FramelessWindow`]: wraps a winit window and handles its pointer events
//! - [`ManipulationController`]: the windowing-independent state machine,
//!   usable with any [`WindowHost`] implementation
//! - [`ManipulationConfig`]: resize margin and capability flags, loadable
//!   from TOML
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use horizon_frameless::{FramelessWindow, ManipulationConfig, SizeConstraints};
//!
//! let attrs = Window::default_attributes().with_decorations(false);
//! let window = Arc::new(event_loop.create_window(attrs)?);
//!
//! let mut frameless = FramelessWindow::new(
//!     window,
//!     ManipulationConfig::new()
//!         .with_resize_enabled(true)
//!         .with_drag_enabled(true),
//! );
//! frameless.set_constraints(SizeConstraints::unconstrained().with_min_size(320, 240))?;
//!
//! // Forward every WindowEvent for this window:
//! let consumed = frameless.handle_window_event(&event);
//! ```
//!
//! Run the demo with: `cargo run -p horizon-frameless --example frameless_window`

pub mod error;
pub mod window;

pub use error::{FramelessError, FramelessResult};
pub use window::{FramelessWindow, ManipulationBackend, ResizeDirection};

pub use horizon_frameless_core::{
    ConfigError, ControllerState, CursorShape, DEFAULT_RESIZE_THRESHOLD, MAX_WINDOW_EXTENT,
    ManipulationConfig, ManipulationController, OperationMode, Point, PointerButton, PointerState,
    Rect, ResizeZone, SizeConstraints, WindowHost, classify, cursor_for, initialize_operation,
    logging, move_bounds, resize_bounds,
};
