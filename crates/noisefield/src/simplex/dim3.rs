//! 3D simplex noise. The simplex is a tetrahedron with four corners.

use super::kernel::{corner3, SCALE_3D};
use crate::math::{fast_floor, wrap, F3, G3};
use crate::permutation::PermutationTable;

/// Offsets of the second and third corners of the tetrahedron containing
/// `(x0, y0, z0)`.
///
/// The first corner is the cell origin and the last is `(1, 1, 1)`. The two
/// in between step along the largest local offset first, then the next
/// largest.
#[inline]
pub fn tetrahedron_corners(x0: f64, y0: f64, z0: f64) -> [[usize; 3]; 2] {
    if x0 >= y0 {
        if y0 >= z0 {
            // X Y Z order
            [[1, 0, 0], [1, 1, 0]]
        } else if x0 >= z0 {
            // X Z Y order
            [[1, 0, 0], [1, 0, 1]]
        } else {
            // Z X Y order
            [[0, 0, 1], [1, 0, 1]]
        }
    } else if y0 < z0 {
        // Z Y X order
        [[0, 0, 1], [0, 1, 1]]
    } else if x0 < z0 {
        // Y Z X order
        [[0, 1, 0], [0, 1, 1]]
    } else {
        // Y X Z order
        [[0, 1, 0], [1, 1, 0]]
    }
}

pub(crate) fn noise3(perm: &PermutationTable, x: f64, y: f64, z: f64) -> f64 {
    let s = (x + y + z) * F3;
    let i = fast_floor(x + s);
    let j = fast_floor(y + s);
    let k = fast_floor(z + s);

    let t = (i as f64 + j as f64 + k as f64) * G3;
    let x0 = x - (i as f64 - t);
    let y0 = y - (j as f64 - t);
    let z0 = z - (k as f64 - t);

    let [[i1, j1, k1], [i2, j2, k2]] = tetrahedron_corners(x0, y0, z0);

    let x1 = x0 - i1 as f64 + G3;
    let y1 = y0 - j1 as f64 + G3;
    let z1 = z0 - k1 as f64 + G3;
    let x2 = x0 - i2 as f64 + 2.0 * G3;
    let y2 = y0 - j2 as f64 + 2.0 * G3;
    let z2 = z0 - k2 as f64 + 2.0 * G3;
    let x3 = x0 - 1.0 + 3.0 * G3;
    let y3 = y0 - 1.0 + 3.0 * G3;
    let z3 = z0 - 1.0 + 3.0 * G3;

    let ii = wrap(i);
    let jj = wrap(j);
    let kk = wrap(k);
    let gi0 = perm.perm_mod12(ii + perm.perm(jj + perm.perm(kk)));
    let gi1 = perm.perm_mod12(ii + i1 + perm.perm(jj + j1 + perm.perm(kk + k1)));
    let gi2 = perm.perm_mod12(ii + i2 + perm.perm(jj + j2 + perm.perm(kk + k2)));
    let gi3 = perm.perm_mod12(ii + 1 + perm.perm(jj + 1 + perm.perm(kk + 1)));

    let n0 = corner3(gi0, x0, y0, z0);
    let n1 = corner3(gi1, x1, y1, z1);
    let n2 = corner3(gi2, x2, y2, z2);
    let n3 = corner3(gi3, x3, y3, z3);

    SCALE_3D * (n0 + n1 + n2 + n3)
}
