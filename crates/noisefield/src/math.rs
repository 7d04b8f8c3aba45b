//! Skew constants and the floor used to locate simplex cells.

/// Skewing factor for 2D: `0.5 * (sqrt(3) - 1)`.
pub const F2: f64 = 0.3660254037844386;
/// Unskewing factor for 2D: `(3 - sqrt(3)) / 6`.
pub const G2: f64 = 0.21132486540518713;
/// Skewing factor for 3D.
pub const F3: f64 = 1.0 / 3.0;
/// Unskewing factor for 3D.
pub const G3: f64 = 1.0 / 6.0;
/// Skewing factor for 4D: `(sqrt(5) - 1) / 4`.
pub const F4: f64 = 0.30901699437494745;
/// Unskewing factor for 4D: `(5 - sqrt(5)) / 20`.
pub const G4: f64 = 0.1381966011250105;

/// Floor without going through `f64::floor`.
///
/// Exact for every finite input inside the `i64` range. Larger magnitudes
/// saturate and NaN maps to 0; callers get no guard against either.
#[inline]
pub fn fast_floor(x: f64) -> i64 {
    let xi = x as i64;
    if x < xi as f64 {
        xi.saturating_sub(1)
    } else {
        xi
    }
}

/// Low 8 bits of a cell index, as a table offset.
#[inline]
pub(crate) fn wrap(i: i64) -> usize {
    (i & 255) as usize
}
