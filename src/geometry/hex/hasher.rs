use std::{
    collections::{HashMap, HashSet},
    hash::{BuildHasherDefault, Hash, Hasher},
};

use rustc_hash::FxHasher;

use super::coordinate::Coordinate;

/// Pass-through hasher for [`Coordinate`] keys.
///
/// A coordinate hashes to its [`fingerprint`](Coordinate::fingerprint), `x + (y << 8)`,
/// unchanged. This is only suitable for small coordinates; see the fingerprint docs for the
/// collision behavior.
///
/// Small fingerprints leave the high bits of the hash all zeros (or all ones when negative).
/// `HashMap` filters bucket candidates on the top 7 bits, so with this hasher that filter never
/// rejects anything and every probe falls through to a key comparison. Lookups stay correct but
/// slow down as a set grows into the thousands of cells; prefer `rustc_hash::FxBuildHasher` or
/// the std default there.
///
/// Anything other than a lone `i64` write (i.e. any key that is not a bare `Coordinate`) is
/// hashed by an inner [`FxHasher`].
#[derive(Default, Clone)]
pub struct CoordinateHasher {
    fingerprint: Option<u64>,
    writes: usize,
    fallback: FxHasher,
}

impl CoordinateHasher {
    /// The hash a [`CoordinateSet`] or [`CoordinateMap`] uses for this coordinate.
    pub fn hash_coordinate(coordinate: Coordinate) -> u64 {
        let mut hasher = CoordinateHasher::default();
        coordinate.hash(&mut hasher);
        hasher.finish()
    }
}

impl Hasher for CoordinateHasher {
    fn write(&mut self, bytes: &[u8]) {
        self.writes += 1;
        self.fallback.write(bytes);
    }

    fn write_i64(&mut self, i: i64) {
        self.writes += 1;
        self.fingerprint = Some(i as u64);
        self.fallback.write_i64(i);
    }

    fn finish(&self) -> u64 {
        match (self.writes, self.fingerprint) {
            (1, Some(fingerprint)) => fingerprint,
            _ => self.fallback.finish(),
        }
    }
}

pub type CoordinateBuildHasher = BuildHasherDefault<CoordinateHasher>;

pub type CoordinateSet = HashSet<Coordinate, CoordinateBuildHasher>;

pub type CoordinateMap<V> = HashMap<Coordinate, V, CoordinateBuildHasher>;
