//! New window bounds from pointer deltas.
//!
//! Resizing is incremental: each pointer-move event contributes the delta
//! since the previous event. For every zone, the edges facing away from the
//! zone stay fixed and the size is recomputed from them, so the same code
//! path handles all eight zones.

use crate::geometry::{Point, Rect, SizeConstraints};
use crate::zone::ResizeZone;

/// Which end of a one-dimensional span is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MovingEdge {
    Neither,
    Start,
    End,
}

/// Compute the bounds produced by dragging `zone` by `delta`.
///
/// Returns `current` unchanged when there is no zone.
pub fn resize_bounds(
    zone: Option<ResizeZone>,
    delta: Point,
    current: Rect,
    constraints: &SizeConstraints,
) -> Rect {
    match zone {
        Some(zone) => zone.resize(delta, current, constraints),
        None => current,
    }
}

/// Translate `current` by `delta`. No clamping is applied.
pub fn move_bounds(delta: Point, current: Rect) -> Rect {
    current.translated(delta)
}

impl ResizeZone {
    /// Compute the bounds produced by dragging this zone by `delta`.
    ///
    /// Moving edges are clamped so the resulting size lies within
    /// `constraints`; a clamped edge is placed relative to the fixed opposite
    /// edge. A dimension whose edges do not move keeps its current size.
    pub fn resize(self, delta: Point, current: Rect, constraints: &SizeConstraints) -> Rect {
        let horizontal = if self.moves_left() {
            MovingEdge::Start
        } else if self.moves_right() {
            MovingEdge::End
        } else {
            MovingEdge::Neither
        };
        let vertical = if self.moves_top() {
            MovingEdge::Start
        } else if self.moves_bottom() {
            MovingEdge::End
        } else {
            MovingEdge::Neither
        };

        let (left, right) = resize_span(
            current.left(),
            current.right(),
            delta.x,
            horizontal,
            constraints.min_width,
            constraints.max_width,
        );
        let (top, bottom) = resize_span(
            current.top(),
            current.bottom(),
            delta.y,
            vertical,
            constraints.min_height,
            constraints.max_height,
        );

        Rect::from_edges(left, top, right, bottom)
    }
}

/// Move one end of `[start, end)` by `delta`, keeping the other end fixed
/// and the length within `[min, max]`.
fn resize_span(
    start: i32,
    end: i32,
    delta: i32,
    moving: MovingEdge,
    min: i32,
    max: i32,
) -> (i32, i32) {
    match moving {
        MovingEdge::Neither => (start, end),
        MovingEdge::Start => {
            let fixed = end;
            let length = fixed - (start + delta);
            (fixed - clamp_length(length, min, max), fixed)
        }
        MovingEdge::End => {
            let fixed = start;
            let length = (end + delta) - fixed;
            (fixed, fixed + clamp_length(length, min, max))
        }
    }
}

/// Minimum is checked first; with inconsistent limits the minimum wins.
#[inline]
fn clamp_length(length: i32, min: i32, max: i32) -> i32 {
    if length < min {
        min
    } else if length > max {
        max
    } else {
        length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect::new(100, 100, 200, 150);
    const LIMITS: SizeConstraints = SizeConstraints::new(50, 1000, 50, 1000);

    #[test]
    fn test_bottom_right_scenario() {
        let result = resize_bounds(
            Some(ResizeZone::BottomRight),
            Point::new(10, -5),
            BOUNDS,
            &LIMITS,
        );
        assert_eq!(result, Rect::new(100, 100, 210, 145));
    }

    #[test]
    fn test_left_clamps_to_minimum_width() {
        let result = resize_bounds(Some(ResizeZone::Left), Point::new(190, 0), BOUNDS, &LIMITS);
        assert_eq!(result, Rect::new(250, 100, 50, 150));
        assert_eq!(result.right(), BOUNDS.right());
    }

    #[test]
    fn test_each_zone_moves_expected_edges() {
        let delta = Point::new(7, 11);
        let cases = [
            (ResizeZone::TopLeft, Rect::from_edges(107, 111, 300, 250)),
            (ResizeZone::Top, Rect::from_edges(100, 111, 300, 250)),
            (ResizeZone::TopRight, Rect::from_edges(100, 111, 307, 250)),
            (ResizeZone::Right, Rect::from_edges(100, 100, 307, 250)),
            (ResizeZone::BottomRight, Rect::from_edges(100, 100, 307, 261)),
            (ResizeZone::Bottom, Rect::from_edges(100, 100, 300, 261)),
            (ResizeZone::BottomLeft, Rect::from_edges(107, 100, 300, 261)),
            (ResizeZone::Left, Rect::from_edges(107, 100, 300, 250)),
        ];

        for (zone, expected) in cases {
            assert_eq!(zone.resize(delta, BOUNDS, &LIMITS), expected, "{zone:?}");
        }
    }

    #[test]
    fn test_top_left_clamps_both_axes_to_maximum() {
        let limits = SizeConstraints::new(50, 250, 50, 180);
        let result = ResizeZone::TopLeft.resize(Point::new(-500, -500), BOUNDS, &limits);
        assert_eq!(result, Rect::from_edges(50, 70, 300, 250));
    }

    #[test]
    fn test_right_clamps_from_fixed_left_edge() {
        let result = ResizeZone::Right.resize(Point::new(-400, 0), BOUNDS, &LIMITS);
        assert_eq!(result, Rect::new(100, 100, 50, 150));

        let result = ResizeZone::Right.resize(Point::new(5000, 0), BOUNDS, &LIMITS);
        assert_eq!(result, Rect::new(100, 100, 1000, 150));
    }

    #[test]
    fn test_bottom_clamps_from_fixed_top_edge() {
        let result = ResizeZone::Bottom.resize(Point::new(0, -149), BOUNDS, &LIMITS);
        assert_eq!(result, Rect::new(100, 100, 200, 50));
    }

    #[test]
    fn test_untouched_axis_ignores_constraints() {
        // Height already violates the limits, but a Left drag never touches it.
        let tall = Rect::new(0, 0, 200, 5000);
        let result = ResizeZone::Left.resize(Point::new(10, 10), tall, &LIMITS);
        assert_eq!(result, Rect::new(10, 0, 190, 5000));
    }

    #[test]
    fn test_no_zone_is_noop() {
        let result = resize_bounds(None, Point::new(42, -42), BOUNDS, &LIMITS);
        assert_eq!(result, BOUNDS);
    }

    #[test]
    fn test_move_translates() {
        assert_eq!(
            move_bounds(Point::new(-30, 12), BOUNDS),
            Rect::new(70, 112, 200, 150)
        );
    }
}
