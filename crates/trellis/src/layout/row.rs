//! Row building for flow layout.
//!
//! Items are packed greedily into rows in a single forward pass. Each row is a
//! contiguous slice of the caller's item sequence, so building rows never
//! copies or reorders items.

use log::trace;

use trellis_core::geometry::{Bounds, Size};

/// A horizontal band of consecutive items sharing one top offset.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Row<'a> {
    items: &'a [Bounds],
    top_offset: f32,
    /// Sum of item widths (excluding spacing) and the tallest item height.
    content: Size,
}

impl<'a> Row<'a> {
    /// The items of this row, in input order
    pub fn items(&self) -> &'a [Bounds] {
        self.items
    }

    /// The y-coordinate of the top of the row
    pub fn top_offset(&self) -> f32 {
        self.top_offset
    }

    /// The height of the tallest item in the row
    pub fn height(&self) -> f32 {
        self.content.height()
    }

    /// The sum of item widths, not counting spacing between items
    pub fn total_items_width(&self) -> f32 {
        self.content.width()
    }

    /// Number of spacing gaps between the items of this row
    pub fn gaps(&self) -> usize {
        self.items.len().saturating_sub(1)
    }
}

/// Result of packing items into rows.
#[derive(Debug)]
pub(crate) struct Rows<'a> {
    rows: Vec<Row<'a>>,
    fitting_height: f32,
}

impl<'a> Rows<'a> {
    /// The rows in top-to-bottom order
    pub fn rows(&self) -> &[Row<'a>] {
        &self.rows
    }

    /// Total height of all rows including the spacing between them
    pub fn fitting_height(&self) -> f32 {
        self.fitting_height
    }
}

/// Packs `items` into rows that fit horizontally within `bounds`.
///
/// An item closes the current row when the running leading offset plus the
/// width of the next item would pass `bounds.max_x()`. The check only looks
/// at the next candidate, so every row receives at least one item even if that
/// item alone is wider than the bounds.
pub(crate) fn build_rows(
    items: &[Bounds],
    bounds: Bounds,
    horizontal_spacing: f32,
    vertical_spacing: f32,
) -> Rows<'_> {
    let mut rows: Vec<Row<'_>> = Vec::new();
    let mut cursor = 0;

    while cursor < items.len() {
        let top_offset = rows.last().map_or(bounds.min_y(), |previous| {
            previous.top_offset + previous.height() + vertical_spacing
        });

        let start = cursor;
        let mut content = Size::default();
        let mut leading_offset = bounds.min_x();

        loop {
            let item = items[cursor];
            content = content.merge_horizontal(item.to_size());
            leading_offset += item.width() + horizontal_spacing;
            cursor += 1;

            match items.get(cursor) {
                Some(next) if leading_offset + next.width() <= bounds.max_x() => {}
                _ => break,
            }
        }

        let row = Row {
            items: &items[start..cursor],
            top_offset,
            content,
        };
        trace!(
            index = rows.len(),
            items = row.items.len(),
            top_offset = row.top_offset,
            height = row.height();
            "Row built"
        );
        rows.push(row);
    }

    let gaps = rows.len().saturating_sub(1) as f32;
    let fitting_height = rows.iter().map(Row::height).sum::<f32>() + gaps * vertical_spacing;

    Rows {
        rows,
        fitting_height,
    }
}
