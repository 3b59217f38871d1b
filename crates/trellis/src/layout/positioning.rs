//! Row positioning algorithms
//!
//! Turns a built [`Row`] into one [`Point`] per item, applying the configured
//! direction and horizontal and vertical alignment.

use trellis_core::geometry::{Bounds, Point};

use crate::layout::{
    options::{Direction, HorizontalAlignment, VerticalAlignment},
    row::Row,
};

/// Places the items of a single row.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RowPositioner {
    direction: Direction,
    horizontal_alignment: HorizontalAlignment,
    vertical_alignment: VerticalAlignment,
    horizontal_spacing: f32,
}

impl RowPositioner {
    pub fn new(
        direction: Direction,
        horizontal_alignment: HorizontalAlignment,
        vertical_alignment: VerticalAlignment,
        horizontal_spacing: f32,
    ) -> Self {
        Self {
            direction,
            horizontal_alignment,
            vertical_alignment,
            horizontal_spacing,
        }
    }

    /// Appends the position of every item in `row` to `positions`.
    ///
    /// Positions are appended in the row's input order for both directions.
    pub fn position(&self, row: &Row<'_>, bounds: Bounds, positions: &mut Vec<Point>) {
        let xs = self.horizontal_offsets(row, bounds);

        positions.extend(row.items().iter().zip(xs).map(|(item, x)| {
            let shift = self
                .vertical_alignment
                .shift(row.height() - item.height());
            Point::new(x, row.top_offset() + shift)
        }));
    }

    /// The x-coordinate of the row's first visual slot.
    fn initial_leading_offset(&self, row: &Row<'_>, bounds: Bounds) -> f32 {
        let gaps_width = row.gaps() as f32 * self.horizontal_spacing;
        let remaining_space = bounds.width() - (row.total_items_width() + gaps_width);
        bounds.min_x() + self.horizontal_alignment.shift(remaining_space)
    }

    /// Computes the x-coordinate of each item, index-aligned with `row.items()`.
    ///
    /// Reverse flow places the reversed items and then reverses the offsets
    /// back, so the last item lands in the first slot.
    fn horizontal_offsets(&self, row: &Row<'_>, bounds: Bounds) -> Vec<f32> {
        let start = self.initial_leading_offset(row, bounds);
        let items = row.items().iter();

        match self.direction {
            Direction::Forward => self.place(items, start),
            Direction::Reverse => {
                let mut offsets = self.place(items.rev(), start);
                offsets.reverse();
                offsets
            }
        }
    }

    fn place<'a>(&self, items: impl Iterator<Item = &'a Bounds>, start: f32) -> Vec<f32> {
        let mut leading_offset = start;
        items
            .map(|item| {
                let x = leading_offset;
                leading_offset += item.width() + self.horizontal_spacing;
                x
            })
            .collect()
    }
}
