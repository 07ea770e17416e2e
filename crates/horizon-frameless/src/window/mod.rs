//! Winit integration.
//!
//! [`FramelessWindow`] connects a winit window to the core
//! [`ManipulationController`](horizon_frameless_core::ManipulationController):
//! it converts window events into pointer entry points and applies the
//! resulting bounds and cursor changes back to the window.

mod conversions;
mod frameless_window;
mod winit_host;

pub use conversions::{pointer_button, resize_direction, resize_zone};
pub use frameless_window::{FramelessWindow, ManipulationBackend};

/// Re-export of winit's ResizeDirection for convenience.
pub use winit::window::ResizeDirection;
