//! Flow layout engine and its builder.

use log::debug;

use trellis_core::geometry::{Bounds, Point, Size};

use crate::{
    config::FlowConfig,
    error::TrellisError,
    layout::{
        Layout,
        options::{Direction, HorizontalAlignment, VerticalAlignment},
        positioning::RowPositioner,
        row::build_rows,
    },
};

/// A configured flow layout engine.
///
/// The engine is an immutable value: configuration is fixed when it is built
/// and every call to [`FlowLayout::position`] is a pure function of that
/// configuration and its arguments. It is `Copy` and `Sync`, so one engine can
/// be shared across threads freely.
///
/// # Examples
///
/// ```
/// use trellis::{FlowLayout, HorizontalAlignment, geometry::{Bounds, Point, Size}};
///
/// let engine = FlowLayout::builder()
///     .with_horizontal_alignment(HorizontalAlignment::Center)
///     .with_horizontal_spacing(20.0)
///     .with_vertical_spacing(20.0)
///     .build()
///     .expect("spacing is valid");
///
/// let items = [
///     Bounds::from_size(Size::new(20.0, 20.0)),
///     Bounds::from_size(Size::new(70.0, 30.0)),
///     Bounds::from_size(Size::new(10.0, 10.0)),
/// ];
/// let layout = engine
///     .position(&items, Bounds::from_size(Size::new(100.0, 100.0)))
///     .expect("items are valid");
///
/// assert_eq!(
///     layout.positions(),
///     &[Point::new(40.0, 0.0), Point::new(0.0, 40.0), Point::new(90.0, 40.0)]
/// );
/// assert_eq!(layout.fitting_height(), 70.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlowLayout {
    direction: Direction,
    horizontal_alignment: HorizontalAlignment,
    vertical_alignment: VerticalAlignment,
    horizontal_spacing: f32,
    vertical_spacing: f32,
}

impl FlowLayout {
    /// Create a builder starting from the default configuration
    pub fn builder() -> FlowLayoutBuilder {
        FlowLayoutBuilder::new()
    }

    /// The flow direction within each row
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The horizontal alignment of each row within the bounds
    pub fn horizontal_alignment(&self) -> HorizontalAlignment {
        self.horizontal_alignment
    }

    /// The vertical alignment of each item within its row
    pub fn vertical_alignment(&self) -> VerticalAlignment {
        self.vertical_alignment
    }

    /// Spacing between neighbouring items in a row
    pub fn horizontal_spacing(&self) -> f32 {
        self.horizontal_spacing
    }

    /// Spacing between neighbouring rows
    pub fn vertical_spacing(&self) -> f32 {
        self.vertical_spacing
    }

    /// Calculate the position of every item within `bounds`.
    ///
    /// Only the width and height of each item are used. Only the minimum x,
    /// maximum x and minimum y of `bounds` are used; its height is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError::InvalidArgument`] if any item has a negative or
    /// non-finite width or height, or if the minimum x, maximum x or minimum y
    /// of `bounds` is non-finite, or if `bounds` has a negative width. Nothing
    /// is positioned in that case.
    pub fn position(&self, items: &[Bounds], bounds: Bounds) -> Result<Layout, TrellisError> {
        validate_bounds(bounds)?;
        validate_items(items)?;

        let rows = build_rows(
            items,
            bounds,
            self.horizontal_spacing,
            self.vertical_spacing,
        );

        let positioner = RowPositioner::new(
            self.direction,
            self.horizontal_alignment,
            self.vertical_alignment,
            self.horizontal_spacing,
        );
        let mut positions: Vec<Point> = Vec::with_capacity(items.len());
        for row in rows.rows() {
            positioner.position(row, bounds, &mut positions);
        }

        debug!(
            items = items.len(),
            rows = rows.rows().len(),
            fitting_height = rows.fitting_height();
            "Flow layout calculated"
        );

        Ok(Layout::new(rows.fitting_height(), positions))
    }

    /// Calculate only the height needed to fit `items` in a container `width` wide.
    ///
    /// This is the measuring pass a host runs before it knows its own height.
    ///
    /// # Errors
    ///
    /// Same conditions as [`FlowLayout::position`].
    pub fn fitting_height(&self, items: &[Bounds], width: f32) -> Result<f32, TrellisError> {
        let bounds = Bounds::from_size(Size::new(width, 0.0));
        validate_bounds(bounds)?;
        validate_items(items)?;

        let rows = build_rows(
            items,
            bounds,
            self.horizontal_spacing,
            self.vertical_spacing,
        );
        Ok(rows.fitting_height())
    }
}

impl TryFrom<&FlowConfig> for FlowLayout {
    type Error = TrellisError;

    fn try_from(config: &FlowConfig) -> Result<Self, Self::Error> {
        FlowLayoutBuilder::new()
            .with_direction(config.direction())
            .with_horizontal_alignment(config.horizontal_alignment())
            .with_vertical_alignment(config.vertical_alignment())
            .with_horizontal_spacing(config.horizontal_spacing())
            .with_vertical_spacing(config.vertical_spacing())
            .build()
    }
}

/// Builder for creating and configuring a [`FlowLayout`].
#[derive(Debug, Clone, Default)]
pub struct FlowLayoutBuilder {
    layout: FlowLayout,
}

impl FlowLayoutBuilder {
    /// Create a new builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flow direction within each row
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.layout.direction = direction;
        self
    }

    /// Set the horizontal alignment of rows
    pub fn with_horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.layout.horizontal_alignment = alignment;
        self
    }

    /// Set the vertical alignment of items within their row
    pub fn with_vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.layout.vertical_alignment = alignment;
        self
    }

    /// Set the spacing between items in a row
    pub fn with_horizontal_spacing(mut self, spacing: f32) -> Self {
        self.layout.horizontal_spacing = spacing;
        self
    }

    /// Set the spacing between rows
    pub fn with_vertical_spacing(mut self, spacing: f32) -> Self {
        self.layout.vertical_spacing = spacing;
        self
    }

    /// Freeze the configuration into a [`FlowLayout`].
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError::InvalidArgument`] if either spacing is negative
    /// or non-finite.
    pub fn build(self) -> Result<FlowLayout, TrellisError> {
        validate_spacing("horizontal spacing", self.layout.horizontal_spacing)?;
        validate_spacing("vertical spacing", self.layout.vertical_spacing)?;
        Ok(self.layout)
    }
}

fn is_valid_length(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

fn validate_spacing(name: &str, value: f32) -> Result<(), TrellisError> {
    if is_valid_length(value) {
        Ok(())
    } else {
        Err(TrellisError::invalid_argument(format!(
            "{name} must be finite and non-negative, got {value}"
        )))
    }
}

fn validate_bounds(bounds: Bounds) -> Result<(), TrellisError> {
    // The bounds height is never read, so an unbounded max_y is accepted.
    if !bounds.min_point().is_finite() || !bounds.max_x().is_finite() {
        return Err(TrellisError::invalid_argument(format!(
            "bounds origin and max x must be finite, got {bounds:?}"
        )));
    }
    if bounds.width() < 0.0 {
        return Err(TrellisError::invalid_argument(format!(
            "bounds width must be non-negative, got {}",
            bounds.width()
        )));
    }
    Ok(())
}

fn validate_items(items: &[Bounds]) -> Result<(), TrellisError> {
    let invalid = items
        .iter()
        .position(|item| !is_valid_length(item.width()) || !is_valid_length(item.height()));

    match invalid {
        Some(index) => Err(TrellisError::invalid_argument(format!(
            "item {index} must have a finite, non-negative size, got {:?}",
            items[index].to_size()
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(width: f32, height: f32) -> Bounds {
        Bounds::from_size(Size::new(width, height))
    }

    fn container(width: f32) -> Bounds {
        Bounds::from_size(Size::new(width, 100.0))
    }

    #[test]
    fn test_builder_defaults() {
        let engine = FlowLayout::builder().build().unwrap();
        assert_eq!(engine, FlowLayout::default());
        assert_eq!(engine.direction(), Direction::Forward);
        assert_eq!(engine.horizontal_alignment(), HorizontalAlignment::Leading);
        assert_eq!(engine.vertical_alignment(), VerticalAlignment::Top);
        assert_eq!(engine.horizontal_spacing(), 0.0);
        assert_eq!(engine.vertical_spacing(), 0.0);
    }

    #[test]
    fn test_builder_rejects_invalid_spacing() {
        for spacing in [-1.0, f32::NAN, f32::INFINITY] {
            let result = FlowLayout::builder().with_horizontal_spacing(spacing).build();
            assert!(matches!(result, Err(TrellisError::InvalidArgument(_))));

            let result = FlowLayout::builder().with_vertical_spacing(spacing).build();
            assert!(matches!(result, Err(TrellisError::InvalidArgument(_))));
        }
    }

    #[test]
    fn test_position_rejects_invalid_items() {
        let engine = FlowLayout::default();
        let items = [item(10.0, 10.0), item(-5.0, 10.0)];

        let err = engine.position(&items, container(100.0)).unwrap_err();
        assert!(err.to_string().contains("item 1"), "unexpected message: {err}");

        let items = [item(10.0, f32::NAN)];
        assert!(engine.position(&items, container(100.0)).is_err());
    }

    #[test]
    fn test_position_rejects_invalid_bounds() {
        let engine = FlowLayout::default();
        let items = [item(10.0, 10.0)];

        assert!(engine.position(&items, container(f32::INFINITY)).is_err());
        assert!(engine.position(&items, container(-10.0)).is_err());

        let origin = Bounds::new_from_top_left(Point::new(f32::NAN, 0.0), Size::new(100.0, 100.0));
        assert!(engine.position(&items, origin).is_err());
    }

    #[test]
    fn test_position_accepts_unbounded_height() {
        let engine = FlowLayout::default();
        let items = [item(20.0, 10.0)];
        let unbounded = Bounds::from_size(Size::new(100.0, f32::INFINITY));

        let layout = engine.position(&items, unbounded).unwrap();
        assert_eq!(layout.positions(), &[Point::new(0.0, 0.0)]);
        assert_eq!(layout.fitting_height(), 10.0);
    }

    #[test]
    fn test_position_empty() {
        let layout = FlowLayout::default().position(&[], container(100.0)).unwrap();
        assert!(layout.is_empty());
        assert_eq!(layout.fitting_height(), 0.0);
    }

    #[test]
    fn test_position_single_item_default() {
        let layout = FlowLayout::default()
            .position(&[item(20.0, 15.0)], container(100.0))
            .unwrap();
        assert_eq!(layout.positions(), &[Point::new(0.0, 0.0)]);
        assert_eq!(layout.fitting_height(), 15.0);
    }

    #[test]
    fn test_position_respects_bounds_origin() {
        let engine = FlowLayout::builder()
            .with_vertical_spacing(10.0)
            .build()
            .unwrap();
        let bounds = Bounds::new_from_top_left(Point::new(15.0, 25.0), Size::new(50.0, 0.0));
        let layout = engine
            .position(&[item(40.0, 10.0), item(40.0, 10.0)], bounds)
            .unwrap();

        assert_eq!(
            layout.positions(),
            &[Point::new(15.0, 25.0), Point::new(15.0, 45.0)]
        );
        assert_eq!(layout.fitting_height(), 30.0);
    }

    #[test]
    fn test_fitting_height_matches_position() {
        let engine = FlowLayout::builder()
            .with_horizontal_spacing(10.0)
            .with_vertical_spacing(10.0)
            .build()
            .unwrap();
        let items = [item(100.0, 40.0); 4];

        let height = engine.fitting_height(&items, 375.0).unwrap();
        let layout = engine.position(&items, container(375.0)).unwrap();
        assert_eq!(height, 90.0);
        assert_eq!(height, layout.fitting_height());
    }

    #[test]
    fn test_try_from_config() {
        let config: FlowConfig = FlowConfig::new(
            Direction::Reverse,
            HorizontalAlignment::Trailing,
            VerticalAlignment::Bottom,
            4.0,
            8.0,
        );
        let engine = FlowLayout::try_from(&config).unwrap();

        assert_eq!(engine.direction(), Direction::Reverse);
        assert_eq!(engine.horizontal_alignment(), HorizontalAlignment::Trailing);
        assert_eq!(engine.vertical_alignment(), VerticalAlignment::Bottom);
        assert_eq!(engine.horizontal_spacing(), 4.0);
        assert_eq!(engine.vertical_spacing(), 8.0);
    }
}
