//! Anchor placement tokens for floating panels.
//!
//! Placement is a fixed CSS offset mapping relative to the trigger wrapper. There is no
//! collision detection against the viewport; a panel near an edge can overflow.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// One of the eight supported placements.
pub enum Placement {
    /// Above, aligned to the trigger's start edge.
    TopStart,
    /// Above, aligned to the trigger's end edge.
    TopEnd,
    /// Below, aligned to the trigger's start edge.
    #[default]
    BottomStart,
    /// Below, aligned to the trigger's end edge.
    BottomEnd,
    /// Left, aligned to the trigger's top edge.
    LeftStart,
    /// Left, aligned to the trigger's bottom edge.
    LeftEnd,
    /// Right, aligned to the trigger's top edge.
    RightStart,
    /// Right, aligned to the trigger's bottom edge.
    RightEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side of the trigger the panel sits on.
pub enum PlacementSide {
    /// Above.
    Top,
    /// Below.
    Bottom,
    /// Left.
    Left,
    /// Right.
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Alignment along the cross axis.
pub enum PlacementAlign {
    /// Start edge.
    Start,
    /// End edge.
    End,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown placement `{0}`")]
/// Returned when parsing an unrecognized placement token.
pub struct PlacementParseError(pub String);

impl Placement {
    /// All placements in declaration order.
    pub const ALL: [Placement; 8] = [
        Self::TopStart,
        Self::TopEnd,
        Self::BottomStart,
        Self::BottomEnd,
        Self::LeftStart,
        Self::LeftEnd,
        Self::RightStart,
        Self::RightEnd,
    ];

    /// Stable `data-ui-placement` token.
    pub fn token(self) -> &'static str {
        match self {
            Self::TopStart => "top-start",
            Self::TopEnd => "top-end",
            Self::BottomStart => "bottom-start",
            Self::BottomEnd => "bottom-end",
            Self::LeftStart => "left-start",
            Self::LeftEnd => "left-end",
            Self::RightStart => "right-start",
            Self::RightEnd => "right-end",
        }
    }

    /// Side of the trigger the panel occupies.
    pub fn side(self) -> PlacementSide {
        match self {
            Self::TopStart | Self::TopEnd => PlacementSide::Top,
            Self::BottomStart | Self::BottomEnd => PlacementSide::Bottom,
            Self::LeftStart | Self::LeftEnd => PlacementSide::Left,
            Self::RightStart | Self::RightEnd => PlacementSide::Right,
        }
    }

    /// Cross-axis alignment.
    pub fn align(self) -> PlacementAlign {
        match self {
            Self::TopStart | Self::BottomStart | Self::LeftStart | Self::RightStart => {
                PlacementAlign::Start
            }
            _ => PlacementAlign::End,
        }
    }

    /// Inline style positioning the panel against a `position: relative` trigger wrapper.
    pub fn offset_style(self, gap_px: u16) -> String {
        let main = match self.side() {
            PlacementSide::Top => format!("bottom: calc(100% + {gap_px}px)"),
            PlacementSide::Bottom => format!("top: calc(100% + {gap_px}px)"),
            PlacementSide::Left => format!("right: calc(100% + {gap_px}px)"),
            PlacementSide::Right => format!("left: calc(100% + {gap_px}px)"),
        };
        let cross = match (self.side(), self.align()) {
            (PlacementSide::Top | PlacementSide::Bottom, PlacementAlign::Start) => "left: 0",
            (PlacementSide::Top | PlacementSide::Bottom, PlacementAlign::End) => "right: 0",
            (PlacementSide::Left | PlacementSide::Right, PlacementAlign::Start) => "top: 0",
            (PlacementSide::Left | PlacementSide::Right, PlacementAlign::End) => "bottom: 0",
        };
        format!("position: absolute; {main}; {cross};")
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Placement {
    type Err = PlacementParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|placement| placement.token() == raw)
            .ok_or_else(|| PlacementParseError(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tokens_parse_back() {
        for placement in Placement::ALL {
            assert_eq!(placement.token().parse::<Placement>(), Ok(placement));
        }
        assert!("center".parse::<Placement>().is_err());
    }

    #[test]
    fn offsets_follow_side_and_alignment() {
        assert_eq!(
            Placement::BottomEnd.offset_style(4),
            "position: absolute; top: calc(100% + 4px); right: 0;"
        );
        assert_eq!(
            Placement::LeftStart.offset_style(8),
            "position: absolute; right: calc(100% + 8px); top: 0;"
        );
    }

    #[test]
    fn default_is_bottom_start() {
        assert_eq!(Placement::default(), Placement::BottomStart);
        assert_eq!(Placement::default().side(), PlacementSide::Bottom);
    }
}
