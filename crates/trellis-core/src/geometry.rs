//! Geometric primitives for flow layout.
//!
//! This module provides the geometric types Trellis uses to describe the
//! items it places, the container they are placed into and the resulting
//! positions.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in layout space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangle defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Trellis uses a screen-style coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward
//!
//! Rows therefore stack in increasing `y`, and the leading edge of a row is
//! its minimum `x`.

/// A 2D point representing a position in layout space.
///
/// # Examples
///
/// ```
/// # use trellis_core::geometry::Point;
/// let point = Point::new(10.0, 20.0);
/// assert_eq!(point.x(), 10.0);
/// assert_eq!(point.y(), 20.0);
/// assert!(point.is_finite());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks if both coordinates are finite numbers
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Represents the dimensions of an item with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Merges two sizes horizontally by adding their widths and taking the maximum height
    ///
    /// This is how a row grows as items are appended to it.
    pub fn merge_horizontal(self, other: Size) -> Self {
        Self {
            width: self.width + other.width,
            height: self.height.max(other.height),
        }
    }
}

/// Represents a rectangle with minimum and maximum coordinates
///
/// Items handed to the layout engine and the container they are laid out in
/// are both expressed as `Bounds`.
///
/// # Examples
///
/// ```
/// # use trellis_core::geometry::{Bounds, Point, Size};
/// let bounds = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(100.0, 50.0));
/// assert_eq!(bounds.max_x(), 110.0);
/// assert_eq!(bounds.width(), 100.0);
/// assert_eq!(bounds.height(), 50.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Creates a new bounds at the origin with the given size
    pub fn from_size(size: Size) -> Self {
        Self::new_from_top_left(Point::default(), size)
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trellis_core::geometry::{Bounds, Point, Size};
    /// let first = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 30.0));
    /// let second = Bounds::new_from_top_left(Point::new(10.0, 40.0), Size::new(120.0, 80.0));
    ///
    /// let combined = first.merge(&second);
    /// assert_eq!(combined.min_x(), 0.0);
    /// assert_eq!(combined.width(), 130.0);
    /// assert_eq!(combined.height(), 120.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Returns a copy of these bounds moved so its top-left corner sits at `position`.
    pub fn with_min_point(&self, position: Point) -> Self {
        Self::new_from_top_left(position, self.to_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_default() {
        let point = Point::default();
        assert_eq!(point, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_point_is_finite() {
        assert!(Point::new(1.0, -1.0).is_finite());
        assert!(!Point::new(f32::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f32::INFINITY).is_finite());
    }

    #[test]
    fn test_size_merge_horizontal() {
        let row = Size::default()
            .merge_horizontal(Size::new(20.0, 20.0))
            .merge_horizontal(Size::new(70.0, 30.0));
        assert_eq!(row.width(), 90.0);
        assert_eq!(row.height(), 30.0);
    }

    #[test]
    fn test_bounds_new_from_top_left_zero_size() {
        let bounds = Bounds::new_from_top_left(Point::new(5.0, 5.0), Size::default());
        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.height(), 0.0);
        assert_eq!(bounds.min_point(), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_bounds_from_size() {
        let bounds = Bounds::from_size(Size::new(375.0, 90.0));
        assert_eq!(bounds.min_point(), Point::default());
        assert_eq!(bounds.to_size(), Size::new(375.0, 90.0));
    }

    #[test]
    fn test_bounds_merge() {
        let b1 = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(20.0, 20.0));
        let b2 = Bounds::new_from_top_left(Point::new(90.0, 40.0), Size::new(10.0, 10.0));
        let merged = b1.merge(&b2);
        assert_eq!(merged.min_point(), Point::new(0.0, 0.0));
        assert_eq!(merged.max_x(), 100.0);
        assert_eq!(merged.max_y(), 50.0);
    }

    #[test]
    fn test_bounds_with_min_point() {
        let bounds = Bounds::new_from_top_left(Point::new(3.0, 4.0), Size::new(20.0, 10.0));
        let placed = bounds.with_min_point(Point::new(40.0, 0.0));
        assert_eq!(placed.min_point(), Point::new(40.0, 0.0));
        assert_eq!(placed.max_x(), 60.0);
        assert_eq!(placed.max_y(), 10.0);
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (
            -1000.0f32..1000.0,
            -1000.0f32..1000.0,
            0.0f32..500.0,
            0.0f32..500.0,
        )
            .prop_map(|(x, y, w, h)| Bounds::new_from_top_left(Point::new(x, y), Size::new(w, h)))
    }

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Placing bounds at a new corner preserves its size.
    fn check_with_min_point_preserves_size(
        bounds: Bounds,
        position: Point,
    ) -> Result<(), TestCaseError> {
        let placed = bounds.with_min_point(position);

        prop_assert_eq!(placed.min_point(), position);
        prop_assert!(approx_eq!(f32, placed.width(), bounds.width(), epsilon = 0.01));
        prop_assert!(approx_eq!(f32, placed.height(), bounds.height(), epsilon = 0.01));
        Ok(())
    }

    /// Merged bounds should contain both original bounds.
    fn check_bounds_merge_contains_both(b1: Bounds, b2: Bounds) -> Result<(), TestCaseError> {
        let merged = b1.merge(&b2);

        for bounds in [b1, b2] {
            prop_assert!(merged.min_x() <= bounds.min_x());
            prop_assert!(merged.min_y() <= bounds.min_y());
            prop_assert!(merged.max_x() >= bounds.max_x());
            prop_assert!(merged.max_y() >= bounds.max_y());
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn with_min_point_preserves_size(bounds in bounds_strategy(), position in point_strategy()) {
            check_with_min_point_preserves_size(bounds, position)?;
        }

        #[test]
        fn bounds_merge_contains_both(b1 in bounds_strategy(), b2 in bounds_strategy()) {
            check_bounds_merge_contains_both(b1, b2)?;
        }
    }
}
