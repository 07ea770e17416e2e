//! Core logic for Horizon Frameless.
//!
//! Borderless windows have no native title bar or borders, so the
//! application has to provide the usual move and resize interactions itself.
//! This crate contains that logic, independent of any windowing system:
//!
//! - **Zone classification**: which edge or corner a pointer position is on
//! - **Operation selection**: move or resize, decided once per press
//! - **Cursor hints**: the resize cursor for the zone under the pointer
//! - **Bounds computation**: new window bounds from pointer deltas, clamped
//!   to the window's size constraints
//! - **Controller**: the press-move-release state machine tying these together
//!
//! The window is reached through the [`WindowHost`] trait. The
//! `horizon-frameless` crate implements it for `winit` windows.
//!
//! # Example
//!
//! ```
//! use horizon_frameless_core::{
//!     CursorShape, ManipulationConfig, ManipulationController, Point, PointerButton, Rect,
//!     SizeConstraints, WindowHost,
//! };
//!
//! struct Host {
//!     bounds: Rect,
//! }
//!
//! impl WindowHost for Host {
//!     fn bounds(&self) -> Rect {
//!         self.bounds
//!     }
//!     fn set_bounds(&mut self, bounds: Rect) {
//!         self.bounds = bounds;
//!     }
//!     fn constraints(&self) -> SizeConstraints {
//!         SizeConstraints::new(50, 1000, 50, 1000)
//!     }
//!     fn set_cursor_shape(&mut self, _shape: CursorShape) {}
//! }
//!
//! let mut host = Host { bounds: Rect::new(100, 100, 200, 150) };
//! let mut controller = ManipulationController::new(
//!     ManipulationConfig::new()
//!         .with_resize_enabled(true)
//!         .with_drag_enabled(true),
//! );
//!
//! // Grab the bottom-right corner and drag it.
//! controller.pointer_down(&mut host, Point::new(300, 250), PointerButton::Left);
//! controller.pointer_move(&mut host, Point::new(310, 245));
//! controller.pointer_up(&mut host);
//!
//! assert_eq!(host.bounds, Rect::new(100, 100, 210, 145));
//! ```

pub mod bounds;
pub mod config;
pub mod controller;
pub mod cursor;
pub mod error;
pub mod geometry;
pub mod host;
pub mod logging;
pub mod operation;
pub mod zone;

pub use bounds::{move_bounds, resize_bounds};
pub use config::ManipulationConfig;
pub use controller::{ControllerState, ManipulationController, PointerState};
pub use cursor::{CursorShape, cursor_for};
pub use error::{ConfigError, ConfigResult};
pub use geometry::{MAX_WINDOW_EXTENT, Point, Rect, SizeConstraints};
pub use host::WindowHost;
pub use operation::{OperationMode, PointerButton, initialize_operation};
pub use zone::{DEFAULT_RESIZE_THRESHOLD, ResizeZone, classify};
