//! [`WindowHost`] implementation for winit windows.

use horizon_frameless_core::{CursorShape, Point, Rect, SizeConstraints, WindowHost};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::window::Window;

/// Window state the adapter keeps between events.
///
/// `bounds` holds the last bounds requested from or reported by the
/// platform. Position and size requests are applied asynchronously on most
/// platforms, so incremental resizing works from this copy instead of
/// querying the window after each request. While an operation is active the
/// copy is authoritative and platform reports are not applied to it.
#[derive(Debug, Clone)]
pub(crate) struct HostState {
    pub(crate) bounds: Rect,
    pub(crate) constraints: SizeConstraints,
    pub(crate) mouse_tracking: bool,
    pub(crate) cursor: CursorShape,
}

impl HostState {
    pub(crate) fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            constraints: SizeConstraints::unconstrained(),
            mouse_tracking: false,
            cursor: CursorShape::Arrow,
        }
    }

    /// Record a window position reported by the platform.
    ///
    /// Reports received during a move or resize can lag behind the bounds
    /// already requested, so they are dropped until the operation ends.
    /// Returns whether the report was applied.
    pub(crate) fn apply_reported_origin(&mut self, origin: Point, operation_active: bool) -> bool {
        if operation_active {
            return false;
        }
        self.bounds = self.bounds.with_origin(origin);
        true
    }

    /// Record a window size reported by the platform. Same rule as
    /// [`apply_reported_origin`](Self::apply_reported_origin).
    pub(crate) fn apply_reported_size(
        &mut self,
        width: i32,
        height: i32,
        operation_active: bool,
    ) -> bool {
        if operation_active {
            return false;
        }
        self.bounds.width = width;
        self.bounds.height = height;
        true
    }
}

/// A winit window paired with the adapter state, borrowed for one event.
pub(crate) struct WinitHost<'a> {
    pub(crate) window: &'a Window,
    pub(crate) state: &'a mut HostState,
}

impl WindowHost for WinitHost<'_> {
    fn bounds(&self) -> Rect {
        self.state.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.window
            .set_outer_position(PhysicalPosition::new(bounds.x, bounds.y));

        let requested = PhysicalSize::new(extent(bounds.width), extent(bounds.height));
        let mut applied = bounds;
        if let Some(size) = self.window.request_inner_size(requested) {
            applied.width = size.width as i32;
            applied.height = size.height as i32;
        }
        self.state.bounds = applied;
    }

    fn set_position(&mut self, origin: Point) {
        self.window
            .set_outer_position(PhysicalPosition::new(origin.x, origin.y));
        self.state.bounds = self.state.bounds.with_origin(origin);
    }

    fn constraints(&self) -> SizeConstraints {
        self.state.constraints
    }

    fn set_cursor_shape(&mut self, shape: CursorShape) {
        if self.state.cursor != shape {
            self.window.set_cursor(shape.to_cursor_icon());
            self.state.cursor = shape;
        }
    }

    fn set_mouse_tracking(&mut self, enabled: bool) {
        self.state.mouse_tracking = enabled;
    }
}

/// Window sizes are at least one pixel in each dimension.
pub(crate) fn extent(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0).max(1)
}
