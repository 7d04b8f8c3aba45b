//! Permutation table used to hash lattice coordinates into gradient indices.
//!
//! The table is built once and never mutated. Lookups use the expanded
//! 512-entry form so that `perm[i + perm[j]]` never needs wrapping for
//! `i, j` in `0..=256`.

/// Ken Perlin's reference permutation of `0..=255`.
///
/// Used whenever no randomization is requested, so unseeded noise is
/// identical across runs and across implementations sharing this table.
pub const REFERENCE_PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

/// Number of slots in the base table.
pub const TABLE_SIZE: usize = 256;

/// Source of uniformly distributed integers used to randomize a table.
pub trait RandomSource {
    /// Return a value uniformly distributed in `[0, bound)`.
    fn next_uint(&mut self, bound: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_uint(&mut self, bound: u32) -> u32 {
        (**self).next_uint(bound)
    }
}

/// Base permutation plus its expanded and mod-12 derivations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    base: [u8; TABLE_SIZE],
    expanded: [u8; TABLE_SIZE * 2],
    expanded_mod12: [u8; TABLE_SIZE * 2],
}

impl PermutationTable {
    /// Build a table, randomizing it with `source` when one is given.
    pub fn build(source: Option<&mut dyn RandomSource>) -> Self {
        match source {
            Some(source) => Self::randomized(source),
            None => Self::reference(),
        }
    }

    /// Table populated from [`REFERENCE_PERMUTATION`].
    pub fn reference() -> Self {
        Self::from_base(REFERENCE_PERMUTATION)
    }

    /// Table whose slots are each an independent draw from `source`.
    ///
    /// Draws are not a shuffle: the same value can land in several slots,
    /// so the result is generally not a permutation of `0..=255`.
    pub fn randomized<R: RandomSource + ?Sized>(source: &mut R) -> Self {
        let mut base = [0u8; TABLE_SIZE];
        for slot in base.iter_mut() {
            *slot = (source.next_uint(TABLE_SIZE as u32) & 0xFF) as u8;
        }
        Self::from_base(base)
    }

    /// Derive the expanded tables from an explicit base.
    pub fn from_base(base: [u8; TABLE_SIZE]) -> Self {
        let mut expanded = [0u8; TABLE_SIZE * 2];
        let mut expanded_mod12 = [0u8; TABLE_SIZE * 2];
        for i in 0..TABLE_SIZE * 2 {
            expanded[i] = base[i % TABLE_SIZE];
            expanded_mod12[i] = expanded[i] % 12;
        }
        Self {
            base,
            expanded,
            expanded_mod12,
        }
    }

    pub fn base(&self) -> &[u8; TABLE_SIZE] {
        &self.base
    }

    pub fn expanded(&self) -> &[u8; TABLE_SIZE * 2] {
        &self.expanded
    }

    pub fn expanded_mod12(&self) -> &[u8; TABLE_SIZE * 2] {
        &self.expanded_mod12
    }

    /// Number of distinct values in the base table.
    pub fn distinct_values(&self) -> usize {
        let mut seen = [false; TABLE_SIZE];
        for &v in &self.base {
            seen[v as usize] = true;
        }
        seen.iter().filter(|&&s| s).count()
    }

    /// Whether the base table contains every value in `0..=255` exactly once.
    pub fn is_bijection(&self) -> bool {
        self.distinct_values() == TABLE_SIZE
    }

    #[inline]
    pub(crate) fn perm(&self, index: usize) -> usize {
        self.expanded[index] as usize
    }

    #[inline]
    pub(crate) fn perm_mod12(&self, index: usize) -> usize {
        self.expanded_mod12[index] as usize
    }
}

impl Default for PermutationTable {
    fn default() -> Self {
        Self::reference()
    }
}
