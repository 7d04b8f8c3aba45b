//! Simplex noise in 2, 3 and 4 dimensions.
//!
//! Based on Stefan Gustavson's reference construction: skew the query into
//! a simplex lattice, pick the simplex corners the point lies between, and
//! sum a radially attenuated gradient contribution from each corner.

mod dim2;
mod dim3;
mod dim4;
pub mod kernel;

pub use dim2::triangle_corner;
pub use dim3::tetrahedron_corners;
pub use dim4::{axis_ranks, pentachoron_corners};

use crate::noise::{Noise2D, Noise3D, Noise4D};
use crate::permutation::{PermutationTable, RandomSource};
use crate::rng::DeterministicRng;

/// Simplex noise generator.
///
/// Evaluation is a pure function of the coordinates and the permutation
/// table fixed at construction, so a shared instance can be sampled from
/// any number of threads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimplexNoise {
    perm: PermutationTable,
}

impl SimplexNoise {
    /// Create a generator from an optional seed.
    ///
    /// `None` and `Some(0)` select the reference permutation. Any other seed
    /// randomizes the table through a PCG32 stream seeded with it.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            None | Some(0) => Self::from_table(PermutationTable::reference()),
            Some(seed) => Self::with_random_source(&mut DeterministicRng::new(seed)),
        }
    }

    /// Shorthand for `SimplexNoise::new(Some(seed))`.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Create a generator whose table is drawn from a caller-provided source.
    pub fn with_random_source<R: RandomSource + ?Sized>(source: &mut R) -> Self {
        Self::from_table(PermutationTable::randomized(source))
    }

    pub fn from_table(perm: PermutationTable) -> Self {
        Self { perm }
    }

    pub fn permutation(&self) -> &PermutationTable {
        &self.perm
    }

    /// 1D noise, an alias for `value_2d(x, 0.0)`.
    #[inline]
    pub fn value_1d(&self, x: f64) -> f64 {
        self.value_2d(x, 0.0)
    }

    /// 2D noise, nominally in [-1, 1].
    #[inline]
    pub fn value_2d(&self, x: f64, y: f64) -> f64 {
        dim2::noise2(&self.perm, x, y)
    }

    /// 3D noise, nominally in [-1, 1].
    #[inline]
    pub fn value_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        dim3::noise3(&self.perm, x, y, z)
    }

    /// 4D noise, nominally in [-1, 1].
    #[inline]
    pub fn value_4d(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        dim4::noise4(&self.perm, x, y, z, w)
    }
}

impl Noise2D for SimplexNoise {
    fn sample_2d(&self, x: f64, y: f64) -> f64 {
        self.value_2d(x, y)
    }
}

impl Noise3D for SimplexNoise {
    fn sample_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        self.value_3d(x, y, z)
    }
}

impl Noise4D for SimplexNoise {
    fn sample_4d(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.value_4d(x, y, z, w)
    }
}
