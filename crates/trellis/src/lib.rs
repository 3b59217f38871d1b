//! Trellis - a flow (wrap) layout engine.
//!
//! Given the sizes of a sequence of rectangular items and a containing
//! bounds, Trellis places the items left to right in rows, wraps to a new row
//! whenever the next item would pass the right edge of the bounds, and reports
//! the total height the rows need.
//!
//! Trellis does not measure anything: callers supply item sizes and apply the
//! returned positions themselves.
//!
//! # Examples
//!
//! ```
//! use trellis::{FlowLayout, geometry::{Bounds, Point, Size}};
//!
//! let engine = FlowLayout::builder()
//!     .with_horizontal_spacing(10.0)
//!     .with_vertical_spacing(10.0)
//!     .build()
//!     .expect("spacing is valid");
//!
//! let items = [Bounds::from_size(Size::new(100.0, 40.0)); 4];
//! let layout = engine
//!     .position(&items, Bounds::from_size(Size::new(375.0, 0.0)))
//!     .expect("items are valid");
//!
//! assert_eq!(layout.positions()[3], Point::new(0.0, 50.0));
//! assert_eq!(layout.fitting_height(), 90.0);
//! ```

pub mod config;

mod error;
mod layout;

pub use trellis_core::geometry;

pub use error::TrellisError;
pub use layout::{
    FlowLayout, FlowLayoutBuilder, Layout,
    options::{Direction, HorizontalAlignment, VerticalAlignment},
};
