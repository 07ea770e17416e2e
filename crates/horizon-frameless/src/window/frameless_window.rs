//! Move and resize for undecorated winit windows.
//!
//! [`FramelessWindow`] owns a [`ManipulationController`] and feeds it the
//! window's pointer events, so a window created with
//! `with_decorations(false)` can still be dragged around and resized from
//! its edges and corners.
//!
//! # Usage
//!
//! ```ignore
//! use horizon_frameless::{FramelessWindow, ManipulationConfig};
//!
//! let window = Arc::new(event_loop.create_window(
//!     Window::default_attributes().with_decorations(false),
//! )?);
//! let mut frameless = FramelessWindow::new(
//!     window,
//!     ManipulationConfig::new()
//!         .with_resize_enabled(true)
//!         .with_drag_enabled(true),
//! );
//!
//! // In ApplicationHandler::window_event:
//! if frameless.handle_window_event(&event) {
//!     return;
//! }
//! ```
//!
//! # Platforms without window positions
//!
//! Some platforms (notably Wayland) do not let applications read or set the
//! window position. There the adapter still classifies presses, then hands
//! the operation to the compositor through `drag_window` and
//! `drag_resize_window`.
//!
//! # Bounds bookkeeping
//!
//! Move and resize requests are applied asynchronously, and the
//! `Moved`/`Resized` events they produce can arrive after newer requests have
//! been issued. While an operation is active the adapter's cached bounds are
//! authoritative and those reports are dropped; once the operation ends the
//! next report brings the cache back in line with the platform.

use std::sync::Arc;

use horizon_frameless_core::logging::targets;
use horizon_frameless_core::{
    MAX_WINDOW_EXTENT, ManipulationConfig, ManipulationController, OperationMode, Point, Rect,
    SizeConstraints,
};
use tracing::{debug, trace, warn};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::window::Window;

use super::conversions::{pointer_button, resize_direction};
use super::winit_host::{HostState, WinitHost};
use crate::error::FramelessResult;

/// Who carries out a move or resize once it has been chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManipulationBackend {
    /// Bounds are computed from pointer deltas and applied by the adapter.
    Controller,
    /// The press is handed to the platform's interactive move/resize.
    Platform,
}

/// An undecorated winit window with pointer-driven move and resize.
pub struct FramelessWindow {
    window: Arc<Window>,
    controller: ManipulationController,
    host: HostState,
    backend: ManipulationBackend,
    /// Last pointer position in window coordinates.
    cursor_position: PhysicalPosition<f64>,
}

impl FramelessWindow {
    /// Wrap a window and start tracking its pointer events.
    pub fn new(window: Arc<Window>, config: ManipulationConfig) -> Self {
        let (bounds, backend) = match outer_bounds(&window) {
            Ok(bounds) => (bounds, ManipulationBackend::Controller),
            Err(err) => {
                debug!(
                    target: targets::ADAPTER,
                    error = %err,
                    "window position unavailable, using platform move/resize"
                );
                let size = window.inner_size();
                (
                    Rect::new(0, 0, size.width as i32, size.height as i32),
                    ManipulationBackend::Platform,
                )
            }
        };

        let mut host = HostState::new(bounds);
        host.mouse_tracking = config.is_resize_enabled();

        Self {
            window,
            controller: ManipulationController::new(config),
            host,
            backend,
            cursor_position: PhysicalPosition::new(0.0, 0.0),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The wrapped window.
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// The manipulation state machine.
    pub fn controller(&self) -> &ManipulationController {
        &self.controller
    }

    /// The window bounds as last requested or reported.
    pub fn bounds(&self) -> Rect {
        self.host.bounds
    }

    /// The size constraints applied to resizing.
    pub fn constraints(&self) -> SizeConstraints {
        self.host.constraints
    }

    /// How moves and resizes are carried out on this platform.
    pub fn backend(&self) -> ManipulationBackend {
        self.backend
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set the minimum and maximum window size.
    ///
    /// The constraints are validated, used to clamp interactive resizing and
    /// passed on to the platform.
    pub fn set_constraints(&mut self, constraints: SizeConstraints) -> FramelessResult<()> {
        let constraints = constraints.validated()?;

        self.window.set_min_inner_size(Some(PhysicalSize::new(
            constraints.min_width as u32,
            constraints.min_height as u32,
        )));
        let max = (constraints.max_width < MAX_WINDOW_EXTENT
            || constraints.max_height < MAX_WINDOW_EXTENT)
            .then(|| {
                PhysicalSize::new(constraints.max_width as u32, constraints.max_height as u32)
            });
        self.window.set_max_inner_size(max);

        self.host.constraints = constraints;
        Ok(())
    }

    /// Enable or disable edge and corner resizing, e.g. off while maximized.
    pub fn set_resizable(&mut self, enabled: bool) {
        let mut host = WinitHost {
            window: &self.window,
            state: &mut self.host,
        };
        self.controller.set_resizable(&mut host, enabled);
    }

    /// Enable or disable dragging the window by its body.
    pub fn set_draggable(&mut self, enabled: bool) {
        self.controller.set_draggable(enabled);
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Handle a window event.
    ///
    /// Returns `true` if the event was consumed by a move or resize, `false`
    /// to let the application perform its default processing. A left press
    /// that starts a move or resize counts as consumed; any other press is
    /// left to the application.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_position = *position;
                if !self.controller.pointer().pressed && !self.host.mouse_tracking {
                    return false;
                }
                let global = self.global_position();
                let mut host = WinitHost {
                    window: &self.window,
                    state: &mut self.host,
                };
                self.controller.pointer_move(&mut host, global)
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                let global = self.global_position();
                let mut host = WinitHost {
                    window: &self.window,
                    state: &mut self.host,
                };
                let started = self
                    .controller
                    .pointer_down(&mut host, global, pointer_button(*button));

                if started
                    && self.backend == ManipulationBackend::Platform
                    && let Err(err) = self.hand_off_to_platform()
                {
                    warn!(target: targets::ADAPTER, error = %err, "platform move/resize failed");
                }
                started
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                ..
            } => {
                let mut host = WinitHost {
                    window: &self.window,
                    state: &mut self.host,
                };
                self.controller.pointer_up(&mut host)
            }
            WindowEvent::Focused(false) => {
                let mut host = WinitHost {
                    window: &self.window,
                    state: &mut self.host,
                };
                self.controller.cancel(&mut host);
                false
            }
            WindowEvent::Moved(position) => {
                if self.backend == ManipulationBackend::Controller {
                    let origin = Point::new(position.x, position.y);
                    if !self
                        .host
                        .apply_reported_origin(origin, self.controller.is_active())
                    {
                        trace!(
                            target: targets::ADAPTER,
                            x = origin.x,
                            y = origin.y,
                            "position report ignored during operation"
                        );
                    }
                }
                false
            }
            WindowEvent::Resized(size) => {
                let (width, height) = (size.width as i32, size.height as i32);
                if !self
                    .host
                    .apply_reported_size(width, height, self.controller.is_active())
                {
                    trace!(
                        target: targets::ADAPTER,
                        width,
                        height,
                        "size report ignored during operation"
                    );
                }
                false
            }
            _ => false,
        }
    }

    /// The pointer position in the coordinate space of the bounds.
    ///
    /// With the controller backend that is the screen. Cursor positions are
    /// relative to where the window actually is, which can trail the cached
    /// bounds while a request is pending, so the offset comes from the
    /// platform and the cached origin is only a fallback. With the platform
    /// backend bounds are window-relative already.
    fn global_position(&self) -> Point {
        let local = Point::new(
            self.cursor_position.x.round() as i32,
            self.cursor_position.y.round() as i32,
        );
        match self.backend {
            ManipulationBackend::Platform => local,
            ManipulationBackend::Controller => {
                let origin = self
                    .window
                    .inner_position()
                    .map(|p| Point::new(p.x, p.y))
                    .unwrap_or_else(|_| self.host.bounds.origin());
                origin + local
            }
        }
    }

    /// Start the chosen operation as a platform-driven interaction.
    ///
    /// The platform owns the pointer until the operation ends, so the
    /// controller is reset right away.
    fn hand_off_to_platform(&mut self) -> FramelessResult<()> {
        let mode = self.controller.mode();
        let mut host = WinitHost {
            window: &self.window,
            state: &mut self.host,
        };
        self.controller.cancel(&mut host);

        match mode {
            OperationMode::Resize(zone) => self.window.drag_resize_window(resize_direction(zone))?,
            OperationMode::Move => self.window.drag_window()?,
            OperationMode::None => {}
        }
        Ok(())
    }
}

impl std::fmt::Debug for FramelessWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FramelessWindow")
            .field("window", &self.window.id())
            .field("controller", &self.controller)
            .field("bounds", &self.host.bounds)
            .field("backend", &self.backend)
            .finish()
    }
}

/// Read the window's outer bounds from the platform.
fn outer_bounds(window: &Window) -> FramelessResult<Rect> {
    let position = window.outer_position()?;
    let size = window.outer_size();
    Ok(Rect::new(
        position.x,
        position.y,
        size.width as i32,
        size.height as i32,
    ))
}
