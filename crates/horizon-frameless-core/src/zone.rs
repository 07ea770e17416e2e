//! Resize zone classification.
//!
//! A resize zone is the edge or corner of a window that a pointer position
//! maps to. The zone found at press time is latched for the rest of the drag.

use crate::cursor::CursorShape;
use crate::geometry::{Point, Rect};

/// Default hit margin around each window edge, in screen units.
pub const DEFAULT_RESIZE_THRESHOLD: i32 = 5;

/// An edge or corner of a window used as a resize handle.
///
/// "No zone" is expressed as `Option::<ResizeZone>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeZone {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl ResizeZone {
    /// All zones, corners first, in classification priority order.
    pub const ALL: [ResizeZone; 8] = [
        ResizeZone::TopLeft,
        ResizeZone::TopRight,
        ResizeZone::BottomRight,
        ResizeZone::BottomLeft,
        ResizeZone::Left,
        ResizeZone::Right,
        ResizeZone::Top,
        ResizeZone::Bottom,
    ];

    /// Classify a point with the default threshold.
    pub fn classify(global_pos: Point, bounds: Rect) -> Option<ResizeZone> {
        classify(global_pos, bounds, DEFAULT_RESIZE_THRESHOLD)
    }

    /// Check if this zone is a corner.
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomRight | Self::BottomLeft
        )
    }

    /// Whether resizing from this zone moves the left edge.
    pub fn moves_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft | Self::Left)
    }

    /// Whether resizing from this zone moves the right edge.
    pub fn moves_right(self) -> bool {
        matches!(self, Self::TopRight | Self::BottomRight | Self::Right)
    }

    /// Whether resizing from this zone moves the top edge.
    pub fn moves_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight | Self::Top)
    }

    /// Whether resizing from this zone moves the bottom edge.
    pub fn moves_bottom(self) -> bool {
        matches!(self, Self::BottomLeft | Self::BottomRight | Self::Bottom)
    }

    /// The cursor shown while hovering this zone.
    pub fn cursor_shape(self) -> CursorShape {
        match self {
            Self::TopLeft | Self::BottomRight => CursorShape::ResizeNwSe,
            Self::TopRight | Self::BottomLeft => CursorShape::ResizeNeSw,
            Self::Left | Self::Right => CursorShape::ResizeHorizontal,
            Self::Top | Self::Bottom => CursorShape::ResizeVertical,
        }
    }
}

/// Determine which resize zone, if any, a global point falls in.
///
/// Distances are measured to the outermost pixel column or row inside
/// `bounds` on each side, so all four margins cover `threshold + 1` pixels
/// of the window. Corners are tested before edges, so a point near two
/// adjacent edges always yields the corner. A negative threshold matches
/// nothing.
pub fn classify(global_pos: Point, bounds: Rect, threshold: i32) -> Option<ResizeZone> {
    let last_column = bounds.right() - 1;
    let last_row = bounds.bottom() - 1;

    let left = (global_pos.x - bounds.left()).abs() <= threshold;
    let top = (global_pos.y - bounds.top()).abs() <= threshold;
    let right = (global_pos.x - last_column).abs() <= threshold;
    let bottom = (global_pos.y - last_row).abs() <= threshold;

    // Corners
    if left && top {
        return Some(ResizeZone::TopLeft);
    }
    if right && top {
        return Some(ResizeZone::TopRight);
    }
    if right && bottom {
        return Some(ResizeZone::BottomRight);
    }
    if left && bottom {
        return Some(ResizeZone::BottomLeft);
    }

    // Edges
    if left {
        return Some(ResizeZone::Left);
    }
    if right {
        return Some(ResizeZone::Right);
    }
    if top {
        return Some(ResizeZone::Top);
    }
    if bottom {
        return Some(ResizeZone::Bottom);
    }

    None
}
