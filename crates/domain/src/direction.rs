//! Compass and vertical exit directions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// One of the six exits every room exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "n")]
    North,
    #[serde(rename = "s")]
    South,
    #[serde(rename = "e")]
    East,
    #[serde(rename = "w")]
    West,
    #[serde(rename = "u")]
    Up,
    #[serde(rename = "d")]
    Down,
}

impl Direction {
    /// All directions, in the order exits are listed.
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// Single-letter wire code (`n`, `s`, `e`, `w`, `u`, `d`).
    pub fn code(&self) -> &'static str {
        match self {
            Direction::North => "n",
            Direction::South => "s",
            Direction::East => "e",
            Direction::West => "w",
            Direction::Up => "u",
            Direction::Down => "d",
        }
    }

    /// Upper-cased code as shown in location events.
    pub fn display_code(&self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::East => "E",
            Direction::West => "W",
            Direction::Up => "U",
            Direction::Down => "D",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Direction {
    type Err = DomainError;

    /// Parses a single-letter code, case-insensitively. Surrounding
    /// whitespace is not trimmed: `" n"` is not a direction.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "n" => Ok(Direction::North),
            "s" => Ok(Direction::South),
            "e" => Ok(Direction::East),
            "w" => Ok(Direction::West),
            "u" => Ok(Direction::Up),
            "d" => Ok(Direction::Down),
            _ => Err(DomainError::parse(format!(
                "Unknown direction: '{}'. Valid values: n, s, e, w, u, d",
                s
            ))),
        }
    }
}
