//! Operation selection at pointer press.

use crate::geometry::{Point, Rect};
use crate::zone::{ResizeZone, classify};

/// A mouse button, as reported by the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
    /// Any other button, identified by its platform index.
    Other(u16),
}

/// The interaction active for one press-drag-release cycle.
///
/// The resize zone is latched inside [`OperationMode::Resize`] when the
/// press happens and does not change until release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OperationMode {
    /// No operation: pointer events are not manipulating the window.
    #[default]
    None,
    /// The window follows the pointer.
    Move,
    /// The given edge or corner follows the pointer.
    Resize(ResizeZone),
}

impl OperationMode {
    /// Check if this mode manipulates the window.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// The latched resize zone, if this is a resize.
    pub fn zone(&self) -> Option<ResizeZone> {
        match self {
            Self::Resize(zone) => Some(*zone),
            _ => None,
        }
    }
}

/// Pick the operation for a press at `global_pos`.
///
/// Resizing takes priority: if it is enabled and the press lands in a resize
/// zone, the result is a resize from that zone even when dragging is also
/// enabled. Otherwise a press anywhere starts a move if dragging is enabled.
pub fn initialize_operation(
    global_pos: Point,
    resize_enabled: bool,
    drag_enabled: bool,
    bounds: Rect,
    threshold: i32,
) -> OperationMode {
    if resize_enabled
        && let Some(zone) = classify(global_pos, bounds, threshold)
    {
        return OperationMode::Resize(zone);
    }

    if drag_enabled {
        OperationMode::Move
    } else {
        OperationMode::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect::new(100, 100, 200, 150);

    #[test]
    fn test_nothing_enabled() {
        let mode = initialize_operation(Point::new(100, 100), false, false, BOUNDS, 5);
        assert_eq!(mode, OperationMode::None);
        assert!(!mode.is_active());
    }

    #[test]
    fn test_resize_beats_move() {
        let mode = initialize_operation(Point::new(101, 102), true, true, BOUNDS, 5);
        assert_eq!(mode, OperationMode::Resize(ResizeZone::TopLeft));
        assert_eq!(mode.zone(), Some(ResizeZone::TopLeft));
    }

    #[test]
    fn test_interior_press_moves() {
        let mode = initialize_operation(Point::new(200, 175), true, true, BOUNDS, 5);
        assert_eq!(mode, OperationMode::Move);
        assert_eq!(mode.zone(), None);
    }

    #[test]
    fn test_edge_press_moves_when_resize_disabled() {
        let mode = initialize_operation(Point::new(100, 175), false, true, BOUNDS, 5);
        assert_eq!(mode, OperationMode::Move);
    }

    #[test]
    fn test_interior_press_without_drag_does_nothing() {
        let mode = initialize_operation(Point::new(200, 175), true, false, BOUNDS, 5);
        assert_eq!(mode, OperationMode::None);
    }
}
