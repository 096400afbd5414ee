// SPDX-License-Identifier: MPL-2.0
//! Layout axis and slide direction.
//!
//! Both enums are closed: every lookup is an exhaustive `match`, so adding a
//! variant forces every table below to be revisited.

use iced::Vector;
use serde::{Deserialize, Serialize};

/// Orientation of a panel stack.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Axis {
    Vertical,
    #[default]
    Horizontal,
}

impl Axis {
    /// Returns the slide direction for a move along this axis.
    ///
    /// `moving_forward` is true when the target index is greater than the
    /// currently selected one.
    #[must_use]
    pub fn direction(self, moving_forward: bool) -> Direction {
        match (self, moving_forward) {
            (Axis::Vertical, true) => Direction::Down,
            (Axis::Vertical, false) => Direction::Up,
            (Axis::Horizontal, true) => Direction::Left,
            (Axis::Horizontal, false) => Direction::Right,
        }
    }

    /// Returns the other axis.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Axis::Vertical => Axis::Horizontal,
            Axis::Horizontal => Axis::Vertical,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Vertical => write!(f, "vertical"),
            Axis::Horizontal => write!(f, "horizontal"),
        }
    }
}

impl std::str::FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vertical" => Ok(Axis::Vertical),
            "horizontal" => Ok(Axis::Horizontal),
            other => Err(format!("invalid axis: {other}")),
        }
    }
}

/// Direction in which the outgoing panel leaves during a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn reverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Translation applied to a panel sliding in this direction.
    #[must_use]
    pub fn offset(self, distance: f32) -> Vector {
        match self {
            Direction::Up => Vector::new(0.0, distance),
            Direction::Down => Vector::new(0.0, -distance),
            Direction::Right => Vector::new(distance, 0.0),
            Direction::Left => Vector::new(-distance, 0.0),
        }
    }

    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}
