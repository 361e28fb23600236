// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Scroll axis a reading direction flows along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/right scrolling.
    Horizontal,
    /// Up/down scrolling.
    Vertical,
}

/// Reading-flow orientation of a scrolling strip.
///
/// One value per viewer session. The direction controls both the default
/// reading order of the strip and which axis wheel input lands on. It is
/// persisted externally as a two-letter code and restored on viewer mount;
/// [`ScrollDirection::code`] and [`ScrollDirection::from_code`] convert to
/// and from that form, and the optional `serde` derives serialize the same
/// codes.
///
/// Any direction may switch to any other directly; there are no transition
/// restrictions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    /// Pages flow top to bottom; reading starts at the top edge.
    #[cfg_attr(feature = "serde", serde(rename = "TB"))]
    TopToBottom,
    /// Pages flow bottom to top; reading starts at the bottom edge.
    #[cfg_attr(feature = "serde", serde(rename = "BT"))]
    BottomToTop,
    /// Pages flow left to right; reading starts at the left edge.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "LR"))]
    LeftToRight,
    /// Pages flow right to left; reading starts at the right edge.
    #[cfg_attr(feature = "serde", serde(rename = "RL"))]
    RightToLeft,
}

impl ScrollDirection {
    /// Returns the axis this direction reads along.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::TopToBottom | Self::BottomToTop => Axis::Vertical,
            Self::LeftToRight | Self::RightToLeft => Axis::Horizontal,
        }
    }

    /// Returns `true` for the horizontal directions.
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        self.axis() == Axis::Horizontal
    }

    /// Returns `true` for the vertical directions.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        self.axis() == Axis::Vertical
    }

    /// Returns `true` when reading starts at the maximal scroll offset.
    ///
    /// Bottom-to-top and right-to-left strips begin at the far edge of their
    /// axis; the other two begin at offset zero.
    #[must_use]
    pub fn is_reverse(self) -> bool {
        matches!(self, Self::BottomToTop | Self::RightToLeft)
    }

    /// Returns the persisted two-letter code for this direction.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::TopToBottom => "TB",
            Self::BottomToTop => "BT",
            Self::LeftToRight => "LR",
            Self::RightToLeft => "RL",
        }
    }

    /// Parses a persisted two-letter code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "TB" => Some(Self::TopToBottom),
            "BT" => Some(Self::BottomToTop),
            "LR" => Some(Self::LeftToRight),
            "RL" => Some(Self::RightToLeft),
            _ => None,
        }
    }
}
