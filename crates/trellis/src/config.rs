//! Configuration types for flow layout.
//!
//! [`FlowConfig`] mirrors the options of [`FlowLayout`](crate::FlowLayout) in a
//! form that implements [`serde::Deserialize`], so engines can be described in
//! external configuration files. Every field is optional and falls back to the
//! engine default.
//!
//! # Example
//!
//! ```
//! # use trellis::{FlowLayout, Direction, config::FlowConfig};
//! let config = FlowConfig::default();
//! let engine = FlowLayout::try_from(&config).expect("default config is valid");
//! assert_eq!(engine.direction(), Direction::Forward);
//! ```

use serde::Deserialize;

use crate::layout::options::{Direction, HorizontalAlignment, VerticalAlignment};

/// Flow layout settings as read from configuration.
///
/// Spacing values are validated when the config is turned into a
/// [`FlowLayout`](crate::FlowLayout), not when it is deserialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct FlowConfig {
    /// Flow direction within each row.
    #[serde(default)]
    direction: Direction,

    /// Alignment of each row within the bounds.
    #[serde(default)]
    horizontal_alignment: HorizontalAlignment,

    /// Alignment of each item within its row.
    #[serde(default)]
    vertical_alignment: VerticalAlignment,

    /// Spacing between items in a row.
    #[serde(default)]
    horizontal_spacing: f32,

    /// Spacing between rows.
    #[serde(default)]
    vertical_spacing: f32,
}

impl FlowConfig {
    /// Creates a new [`FlowConfig`] with every option specified.
    pub fn new(
        direction: Direction,
        horizontal_alignment: HorizontalAlignment,
        vertical_alignment: VerticalAlignment,
        horizontal_spacing: f32,
        vertical_spacing: f32,
    ) -> Self {
        Self {
            direction,
            horizontal_alignment,
            vertical_alignment,
            horizontal_spacing,
            vertical_spacing,
        }
    }

    /// Returns the configured [`Direction`].
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the configured [`HorizontalAlignment`].
    pub fn horizontal_alignment(&self) -> HorizontalAlignment {
        self.horizontal_alignment
    }

    /// Returns the configured [`VerticalAlignment`].
    pub fn vertical_alignment(&self) -> VerticalAlignment {
        self.vertical_alignment
    }

    /// Returns the spacing between items in a row.
    pub fn horizontal_spacing(&self) -> f32 {
        self.horizontal_spacing
    }

    /// Returns the spacing between rows.
    pub fn vertical_spacing(&self) -> f32 {
        self.vertical_spacing
    }

    /// Returns a copy with the direction replaced.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Returns a copy with the horizontal alignment replaced.
    pub fn with_horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    /// Returns a copy with the vertical alignment replaced.
    pub fn with_vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    /// Returns a copy with the horizontal spacing replaced.
    pub fn with_horizontal_spacing(mut self, spacing: f32) -> Self {
        self.horizontal_spacing = spacing;
        self
    }

    /// Returns a copy with the vertical spacing replaced.
    pub fn with_vertical_spacing(mut self, spacing: f32) -> Self {
        self.vertical_spacing = spacing;
        self
    }
}
