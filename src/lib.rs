pub mod geometry;

pub use geometry::hex::{Coordinate, CoordinateHasher, CoordinateMap, CoordinateSet, Direction};
