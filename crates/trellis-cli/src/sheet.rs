//! Item sheet input and position output.
//!
//! An item sheet is a TOML document describing the container bounds and the
//! items to lay out:
//!
//! ```toml
//! [bounds]
//! width = 375.0
//!
//! [[items]]
//! width = 100.0
//! height = 40.0
//! ```

use std::fmt::Write;

use serde::Deserialize;

use trellis::{
    Layout, TrellisError,
    geometry::{Bounds, Point, Size},
};

/// A rectangle as written in an item sheet.
#[derive(Debug, Clone, Copy, Deserialize)]
struct RectSpec {
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
    width: f32,
    #[serde(default)]
    height: f32,
}

impl From<RectSpec> for Bounds {
    fn from(spec: RectSpec) -> Self {
        Bounds::new_from_top_left(
            Point::new(spec.x, spec.y),
            Size::new(spec.width, spec.height),
        )
    }
}

/// Bounds and items read from an item sheet.
#[derive(Debug, Clone)]
pub struct ItemSheet {
    bounds: Bounds,
    items: Vec<Bounds>,
}

#[derive(Deserialize)]
struct RawSheet {
    bounds: RectSpec,
    #[serde(default)]
    items: Vec<RectSpec>,
}

impl ItemSheet {
    /// Parse an item sheet from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError::Config`] if the source is not a valid item sheet.
    pub fn parse(source: &str) -> Result<Self, TrellisError> {
        let raw: RawSheet = toml::from_str(source)
            .map_err(|err| TrellisError::Config(format!("Invalid item sheet: {err}")))?;

        Ok(Self {
            bounds: raw.bounds.into(),
            items: raw.items.into_iter().map(Bounds::from).collect(),
        })
    }

    /// The container bounds
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The items, in sheet order
    pub fn items(&self) -> &[Bounds] {
        &self.items
    }
}

/// Render a layout as text: one `index x y width height` line per item,
/// followed by a `fitting_height` line.
pub fn render_layout(layout: &Layout, items: &[Bounds], precision: usize) -> String {
    let mut out = String::new();

    for (index, frame) in layout.frames(items).enumerate() {
        writeln!(
            out,
            "{index} {:.p$} {:.p$} {:.p$} {:.p$}",
            frame.min_x(),
            frame.min_y(),
            frame.width(),
            frame.height(),
            p = precision,
        )
        .expect("Writing to String buffer is infallible");
    }
    writeln!(
        out,
        "fitting_height {:.p$}",
        layout.fitting_height(),
        p = precision
    )
    .expect("Writing to String buffer is infallible");

    out
}

#[cfg(test)]
mod tests {
    use trellis::FlowLayout;

    use super::*;

    #[test]
    fn test_parse_sheet() {
        let sheet = ItemSheet::parse(
            r#"
            [bounds]
            x = 5.0
            y = 10.0
            width = 375.0

            [[items]]
            width = 100.0
            height = 40.0

            [[items]]
            x = 3.0
            width = 50.0
            height = 20.0
            "#,
        )
        .unwrap();

        assert_eq!(sheet.bounds().min_point(), Point::new(5.0, 10.0));
        assert_eq!(sheet.bounds().width(), 375.0);
        assert_eq!(sheet.items().len(), 2);
        assert_eq!(sheet.items()[1].to_size(), Size::new(50.0, 20.0));
    }

    #[test]
    fn test_parse_sheet_without_items() {
        let sheet = ItemSheet::parse("[bounds]\nwidth = 10.0\n").unwrap();
        assert!(sheet.items().is_empty());
    }

    #[test]
    fn test_parse_sheet_requires_bounds() {
        let result = ItemSheet::parse("[[items]]\nwidth = 10.0\n");
        assert!(matches!(result, Err(TrellisError::Config(_))));
    }

    #[test]
    fn test_render_layout() {
        let items = [
            Bounds::from_size(Size::new(20.0, 20.0)),
            Bounds::from_size(Size::new(40.0, 40.0)),
        ];
        let engine = FlowLayout::builder()
            .with_horizontal_spacing(10.0)
            .build()
            .unwrap();
        let layout = engine
            .position(&items, Bounds::from_size(Size::new(100.0, 100.0)))
            .unwrap();

        let text = render_layout(&layout, &items, 1);
        assert_eq!(
            text,
            "0 0.0 0.0 20.0 20.0\n1 30.0 0.0 40.0 40.0\nfitting_height 40.0\n"
        );
    }

    #[test]
    fn test_render_empty_layout() {
        let layout = FlowLayout::default()
            .position(&[], Bounds::from_size(Size::new(100.0, 100.0)))
            .unwrap();

        assert_eq!(render_layout(&layout, &[], 2), "fitting_height 0.00\n");
    }
}
