use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

/// Direction in a hexagonal coordinate system
///
/// Assumes that the major orientation is horizontal.
///
/// Displays and parses as its short token (case sensitive): `e`, `se`, `sw`, `w`, `nw`, `ne`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    parse_display::Display,
    parse_display::FromStr,
)]
pub enum Direction {
    #[display("e")]
    East,
    #[display("se")]
    Southeast,
    #[display("sw")]
    Southwest,
    #[display("w")]
    West,
    #[display("nw")]
    Northwest,
    #[display("ne")]
    Northeast,
}

impl Direction {
    /// Iterate through all `Direction`s, clockwise from `East`.
    pub fn iter() -> impl Iterator<Item = Direction> {
        std::iter::successors(Some(Direction::East), |direction| {
            use Direction::*;

            match direction {
                East => Some(Southeast),
                Southeast => Some(Southwest),
                Southwest => Some(West),
                West => Some(Northwest),
                Northwest => Some(Northeast),
                Northeast => None,
            }
        })
    }

    /// The axial displacement of a single step in this direction.
    pub const fn offset(self) -> Coordinate {
        match self {
            Direction::East => Coordinate::new(1, 0),
            Direction::Southeast => Coordinate::new(0, 1),
            Direction::Southwest => Coordinate::new(-1, 1),
            Direction::West => Coordinate::new(-1, 0),
            Direction::Northwest => Coordinate::new(0, -1),
            Direction::Northeast => Coordinate::new(1, -1),
        }
    }

    pub const fn reverse(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::Southeast => Direction::Northwest,
            Direction::Southwest => Direction::Northeast,
            Direction::West => Direction::East,
            Direction::Northwest => Direction::Southeast,
            Direction::Northeast => Direction::Southwest,
        }
    }
}

impl From<Direction> for Coordinate {
    fn from(direction: Direction) -> Self {
        direction.offset()
    }
}
