//! Integer geometry types for window manipulation.
//!
//! Window positions and pointer coordinates are expressed in global screen
//! units. Integer coordinates keep incremental resizing exact: summing many
//! small pointer deltas produces the same bounds as one large delta.

use std::ops::{Add, Sub};

use crate::error::{ConfigError, ConfigResult};

/// The largest width or height a window may be given.
///
/// This mirrors the conventional toolkit maximum used when a window has no
/// explicit maximum size.
pub const MAX_WINDOW_EXTENT: i32 = 16_777_215;

/// A point (or displacement) in global screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Window bounds: origin plus size.
///
/// The right and bottom edges are exclusive: `right() == x + width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle from origin and size.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from its four edges.
    #[inline]
    pub const fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Left edge x coordinate.
    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// Top edge y coordinate.
    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Right edge x coordinate.
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge y coordinate.
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Return a copy of this rectangle moved to a new origin.
    #[inline]
    pub const fn with_origin(self, origin: Point) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            ..self
        }
    }

    /// Return a copy of this rectangle translated by `delta`.
    #[inline]
    pub const fn translated(self, delta: Point) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..self
        }
    }
}

impl From<(i32, i32, i32, i32)> for Rect {
    fn from((x, y, width, height): (i32, i32, i32, i32)) -> Self {
        Self::new(x, y, width, height)
    }
}

/// Minimum and maximum window size.
///
/// Read-only to the manipulation logic. Values where a minimum exceeds its
/// maximum are not rejected here; see [`SizeConstraints::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeConstraints {
    pub min_width: i32,
    pub max_width: i32,
    pub min_height: i32,
    pub max_height: i32,
}

impl Default for SizeConstraints {
    fn default() -> Self {
        Self::unconstrained()
    }
}

impl SizeConstraints {
    /// Create constraints from explicit bounds.
    pub const fn new(min_width: i32, max_width: i32, min_height: i32, max_height: i32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Constraints that allow any non-negative size up to [`MAX_WINDOW_EXTENT`].
    pub const fn unconstrained() -> Self {
        Self::new(0, MAX_WINDOW_EXTENT, 0, MAX_WINDOW_EXTENT)
    }

    /// Set the minimum size.
    pub fn with_min_size(mut self, width: i32, height: i32) -> Self {
        self.min_width = width;
        self.min_height = height;
        self
    }

    /// Set the maximum size.
    pub fn with_max_size(mut self, width: i32, height: i32) -> Self {
        self.max_width = width;
        self.max_height = height;
        self
    }

    /// Check that every minimum is non-negative and no larger than its maximum.
    pub fn is_valid(&self) -> bool {
        self.min_width >= 0
            && self.min_height >= 0
            && self.min_width <= self.max_width
            && self.min_height <= self.max_height
    }

    /// Return these constraints if they are valid, or an error describing them.
    pub fn validated(self) -> ConfigResult<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ConfigError::InvalidConstraints(self))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(100, 50, 200, 150);
        assert_eq!(rect.left(), 100);
        assert_eq!(rect.top(), 50);
        assert_eq!(rect.right(), 300);
        assert_eq!(rect.bottom(), 200);
        assert_eq!(Rect::from_edges(100, 50, 300, 200), rect);
    }

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(10, 20);
        let b = Point::new(3, -4);
        assert_eq!(a + b, Point::new(13, 16));
        assert_eq!(a - b, Point::new(7, 24));
    }

    #[test]
    fn test_rect_translation() {
        let rect = Rect::new(0, 0, 10, 10).translated(Point::new(-5, 7));
        assert_eq!(rect, Rect::new(-5, 7, 10, 10));
        assert_eq!(rect.with_origin(Point::ZERO), Rect::new(0, 0, 10, 10));
    }

    #[test]
    fn test_constraints_validity() {
        assert!(SizeConstraints::default().is_valid());
        assert!(SizeConstraints::new(50, 1000, 50, 1000).is_valid());
        assert!(!SizeConstraints::new(500, 100, 50, 1000).is_valid());
        assert!(!SizeConstraints::unconstrained().with_min_size(-1, 0).is_valid());
    }

    #[test]
    fn test_constraints_validated() {
        let limits = SizeConstraints::new(50, 1000, 50, 1000);
        assert_eq!(limits.validated().unwrap(), limits);

        let err = SizeConstraints::new(50, 1000, 900, 100).validated().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConstraints(c) if c.min_height == 900));
        assert!(err.to_string().contains("height 900..=100"));
    }
}
