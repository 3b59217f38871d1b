//! Direction and alignment options for flow layout.
//!
//! The names match external configuration strings (snake_case) so the same
//! values can be read from TOML, parsed from the command line and printed back.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::Deserialize;

/// Order in which the items of a row flow along the horizontal axis.
///
/// Rows always stack top to bottom; direction only affects placement within a row.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Items flow from the leading edge towards the trailing edge (default)
    #[default]
    Forward,
    /// Items flow from the trailing edge back towards the leading edge
    Reverse,
}

/// Placement of a row's content within the free horizontal space of the bounds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlignment {
    /// Content starts at the minimum x of the bounds (default)
    #[default]
    Leading,
    /// Free space is split evenly on both sides of the content
    Center,
    /// Content ends at the maximum x of the bounds
    Trailing,
}

impl HorizontalAlignment {
    /// Returns the offset from the leading edge for a row with `free_space` left over.
    ///
    /// `free_space` may be negative when the row content is wider than the
    /// bounds, which moves centered and trailing content past the leading edge.
    pub fn shift(self, free_space: f32) -> f32 {
        match self {
            Self::Leading => 0.0,
            Self::Center => free_space / 2.0,
            Self::Trailing => free_space,
        }
    }
}

/// Placement of an item within the height of its row.
///
/// Baseline alignment is not supported.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlignment {
    /// Items hang from the top of the row (default)
    #[default]
    Top,
    /// Items are centered in the row
    Center,
    /// Items sit on the bottom of the row
    Bottom,
}

impl VerticalAlignment {
    /// Returns the offset from the row top for an item `free_space` shorter than the row.
    pub fn shift(self, free_space: f32) -> f32 {
        match self {
            Self::Top => 0.0,
            Self::Center => free_space / 2.0,
            Self::Bottom => free_space,
        }
    }
}

impl FromStr for Direction {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forward" => Ok(Self::Forward),
            "reverse" => Ok(Self::Reverse),
            _ => Err("Unsupported direction"),
        }
    }
}

impl From<Direction> for &'static str {
    fn from(val: Direction) -> Self {
        match val {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

impl FromStr for HorizontalAlignment {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "leading" => Ok(Self::Leading),
            "center" => Ok(Self::Center),
            "trailing" => Ok(Self::Trailing),
            _ => Err("Unsupported horizontal alignment"),
        }
    }
}

impl From<HorizontalAlignment> for &'static str {
    fn from(val: HorizontalAlignment) -> Self {
        match val {
            HorizontalAlignment::Leading => "leading",
            HorizontalAlignment::Center => "center",
            HorizontalAlignment::Trailing => "trailing",
        }
    }
}

impl Display for HorizontalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

impl FromStr for VerticalAlignment {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "center" => Ok(Self::Center),
            "bottom" => Ok(Self::Bottom),
            _ => Err("Unsupported vertical alignment"),
        }
    }
}

impl From<VerticalAlignment> for &'static str {
    fn from(val: VerticalAlignment) -> Self {
        match val {
            VerticalAlignment::Top => "top",
            VerticalAlignment::Center => "center",
            VerticalAlignment::Bottom => "bottom",
        }
    }
}

impl Display for VerticalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}
