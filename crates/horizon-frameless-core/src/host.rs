//! The windowing-system side of window manipulation.

use crate::cursor::CursorShape;
use crate::geometry::{Point, Rect, SizeConstraints};

/// Access to the window being manipulated.
///
/// Implemented by the windowing layer (see the `horizon-frameless` crate for
/// a `winit` implementation). All calls happen on the thread that delivers
/// pointer events.
pub trait WindowHost {
    /// The current window bounds in global screen coordinates.
    fn bounds(&self) -> Rect;

    /// Set the window position and size.
    fn set_bounds(&mut self, bounds: Rect);

    /// Move the window without resizing it.
    fn set_position(&mut self, origin: Point) {
        let bounds = self.bounds().with_origin(origin);
        self.set_bounds(bounds);
    }

    /// The minimum and maximum window size.
    fn constraints(&self) -> SizeConstraints;

    /// Change the cursor shown over the window.
    fn set_cursor_shape(&mut self, shape: CursorShape);

    /// Request pointer-move events even while no button is held.
    ///
    /// Hover cursor hints need this. Hosts that always deliver motion events
    /// can keep the default.
    fn set_mouse_tracking(&mut self, _enabled: bool) {}
}
