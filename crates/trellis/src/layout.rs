//! Flow layout: packing items into rows and positioning them.
//!
//! [`FlowLayout`] runs the row builder once over all items and then the row
//! positioner over each row, producing a [`Layout`] whose positions are
//! index-aligned with the input items.

mod engine;
pub mod options;
mod positioning;
mod row;

pub use engine::{FlowLayout, FlowLayoutBuilder};

use trellis_core::geometry::{Bounds, Point};

/// The result of a flow layout calculation.
///
/// `positions()[i]` is the top-left corner of the `i`-th input item,
/// regardless of the configured direction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    fitting_height: f32,
    positions: Vec<Point>,
}

impl Layout {
    pub(crate) fn new(fitting_height: f32, positions: Vec<Point>) -> Self {
        Self {
            fitting_height,
            positions,
        }
    }

    /// Height needed to show every row, including the spacing between rows.
    pub fn fitting_height(&self) -> f32 {
        self.fitting_height
    }

    /// Positions of the items, in input order
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Number of positioned items
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the layout has no items
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Consumes the layout, returning the positions
    pub fn into_positions(self) -> Vec<Point> {
        self.positions
    }

    /// Yields the placed rectangle of each item.
    ///
    /// `items` must be the slice this layout was calculated from; each frame
    /// keeps the item's size and moves it to its calculated position.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trellis::{FlowLayout, geometry::{Bounds, Point, Size}};
    /// let items = [Bounds::from_size(Size::new(20.0, 10.0))];
    /// let container = Bounds::from_size(Size::new(100.0, 0.0));
    ///
    /// let engine = FlowLayout::builder()
    ///     .with_horizontal_alignment(trellis::HorizontalAlignment::Trailing)
    ///     .build()
    ///     .unwrap();
    /// let layout = engine.position(&items, container).unwrap();
    ///
    /// let frame = layout.frames(&items).next().unwrap();
    /// assert_eq!(frame.min_point(), Point::new(80.0, 0.0));
    /// assert_eq!(frame.max_x(), 100.0);
    /// ```
    pub fn frames<'a>(&'a self, items: &'a [Bounds]) -> impl Iterator<Item = Bounds> + 'a {
        items
            .iter()
            .zip(&self.positions)
            .map(|(item, position)| item.with_min_point(*position))
    }

    /// Smallest rectangle containing every placed item, or `None` when empty.
    pub fn content_bounds(&self, items: &[Bounds]) -> Option<Bounds> {
        self.frames(items).reduce(|acc, frame| acc.merge(&frame))
    }
}
