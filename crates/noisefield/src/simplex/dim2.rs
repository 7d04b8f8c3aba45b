//! 2D simplex noise. The simplex is a triangle with three corners.

use super::kernel::{corner2, SCALE_2D};
use crate::math::{fast_floor, wrap, F2, G2};
use crate::permutation::PermutationTable;

/// Offset of the middle corner of the triangle containing `(x0, y0)`.
///
/// Steps along i first when `x0 > y0`, otherwise along j (ties included).
#[inline]
pub fn triangle_corner(x0: f64, y0: f64) -> [usize; 2] {
    if x0 > y0 {
        // lower triangle, XY order: (0,0)->(1,0)->(1,1)
        [1, 0]
    } else {
        // upper triangle, YX order: (0,0)->(0,1)->(1,1)
        [0, 1]
    }
}

pub(crate) fn noise2(perm: &PermutationTable, x: f64, y: f64) -> f64 {
    // Skew the input space to determine which simplex cell we're in
    let s = (x + y) * F2;
    let i = fast_floor(x + s);
    let j = fast_floor(y + s);

    // Unskew the cell origin back to (x, y) space
    let t = (i as f64 + j as f64) * G2;
    let x0 = x - (i as f64 - t);
    let y0 = y - (j as f64 - t);

    let [i1, j1] = triangle_corner(x0, y0);

    let x1 = x0 - i1 as f64 + G2;
    let y1 = y0 - j1 as f64 + G2;
    let x2 = x0 - 1.0 + 2.0 * G2;
    let y2 = y0 - 1.0 + 2.0 * G2;

    let ii = wrap(i);
    let jj = wrap(j);
    let gi0 = perm.perm_mod12(ii + perm.perm(jj));
    let gi1 = perm.perm_mod12(ii + i1 + perm.perm(jj + j1));
    let gi2 = perm.perm_mod12(ii + 1 + perm.perm(jj + 1));

    let n0 = corner2(gi0, x0, y0);
    let n1 = corner2(gi1, x1, y1);
    let n2 = corner2(gi2, x2, y2);

    SCALE_2D * (n0 + n1 + n2)
}
