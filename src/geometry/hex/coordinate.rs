use std::{
    hash::{Hash, Hasher},
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Axial hex coordinates.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates-axial).
///
/// Nothing here depends on the grid being hexagonal: a `Coordinate` is just a pair of
/// integers with vector addition, so it works equally well as a point on a square plane.
///
/// Arithmetic wraps on overflow in every build profile. Use [`Coordinate::checked_add`]
/// where that matters.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    parse_display::Display,
    parse_display::FromStr,
)]
#[display("({x},{y})")]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Coordinate { x, y }
    }

    /// `x + (y << 8)`, widened so that it is defined for every pair of `i32`.
    ///
    /// This is the value [`CoordinateHasher`](super::CoordinateHasher) produces. It is cheap
    /// and collision-free for small grids, but `x` spills into the `y` field once
    /// `|x| > 255`: `(300, 0)` and `(44, 1)` share a fingerprint.
    pub const fn fingerprint(self) -> i64 {
        self.x as i64 + ((self.y as i64) << 8)
    }

    /// Add two coordinates, returning `None` if either axis overflows.
    pub fn checked_add(self, rhs: Coordinate) -> Option<Coordinate> {
        Some(Coordinate {
            x: self.x.checked_add(rhs.x)?,
            y: self.y.checked_add(rhs.y)?,
        })
    }

    /// The six cells adjacent to this one, clockwise from `East`.
    pub fn neighbors(self) -> impl 'static + Iterator<Item = Coordinate> {
        Direction::iter().map(move |direction| self + direction)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Coordinate::new(x, y)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.x, coordinate.y)
    }
}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i64(self.fingerprint());
    }
}

impl AddAssign for Coordinate {
    fn add_assign(&mut self, rhs: Coordinate) {
        self.x = self.x.wrapping_add(rhs.x);
        self.y = self.y.wrapping_add(rhs.y);
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(mut self, rhs: Coordinate) -> Self::Output {
        self += rhs;
        self
    }
}

impl SubAssign for Coordinate {
    fn sub_assign(&mut self, rhs: Coordinate) {
        self.x = self.x.wrapping_sub(rhs.x);
        self.y = self.y.wrapping_sub(rhs.y);
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(mut self, rhs: Coordinate) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Neg for Coordinate {
    type Output = Coordinate;

    fn neg(self) -> Self::Output {
        Coordinate::new(self.x.wrapping_neg(), self.y.wrapping_neg())
    }
}

impl AddAssign<Direction> for Coordinate {
    fn add_assign(&mut self, rhs: Direction) {
        *self += rhs.offset();
    }
}

impl Add<Direction> for Coordinate {
    type Output = Coordinate;

    fn add(mut self, rhs: Direction) -> Self::Output {
        self += rhs;
        self
    }
}

impl Sum for Coordinate {
    fn sum<I: Iterator<Item = Coordinate>>(iter: I) -> Self {
        iter.fold(Coordinate::ORIGIN, |sum, coordinate| sum + coordinate)
    }
}

impl Sum<Direction> for Coordinate {
    fn sum<I: Iterator<Item = Direction>>(iter: I) -> Self {
        iter.fold(Coordinate::ORIGIN, |sum, direction| sum + direction)
    }
}
