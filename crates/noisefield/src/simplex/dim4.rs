//! 4D simplex noise. The simplex is a 5-cell with five corners.
//!
//! The visiting order of the three intermediate corners comes from ranking
//! the four local offsets. Six pairwise comparisons each award one point to
//! the larger side (the right side on ties), so the ranks always form a
//! permutation of `0..=3`. Corner `n` (1-based, n in 1..=3) then steps along
//! every axis whose rank is at least `4 - n`.

use super::kernel::{corner4, SCALE_4D};
use crate::math::{fast_floor, wrap, F4, G4};
use crate::permutation::PermutationTable;

/// Rank of each local offset among the four axes (3 = largest).
#[inline]
pub fn axis_ranks(x0: f64, y0: f64, z0: f64, w0: f64) -> [u8; 4] {
    let mut rankx = 0;
    let mut ranky = 0;
    let mut rankz = 0;
    let mut rankw = 0;
    if x0 > y0 {
        rankx += 1;
    } else {
        ranky += 1;
    }
    if x0 > z0 {
        rankx += 1;
    } else {
        rankz += 1;
    }
    if x0 > w0 {
        rankx += 1;
    } else {
        rankw += 1;
    }
    if y0 > z0 {
        ranky += 1;
    } else {
        rankz += 1;
    }
    if y0 > w0 {
        ranky += 1;
    } else {
        rankw += 1;
    }
    if z0 > w0 {
        rankz += 1;
    } else {
        rankw += 1;
    }
    [rankx, ranky, rankz, rankw]
}

/// Offsets of the second, third and fourth corners of the 5-cell containing
/// `(x0, y0, z0, w0)`.
#[inline]
pub fn pentachoron_corners(x0: f64, y0: f64, z0: f64, w0: f64) -> [[usize; 4]; 3] {
    let ranks = axis_ranks(x0, y0, z0, w0);
    let step = |threshold: u8| ranks.map(|r| usize::from(r >= threshold));
    [step(3), step(2), step(1)]
}

pub(crate) fn noise4(perm: &PermutationTable, x: f64, y: f64, z: f64, w: f64) -> f64 {
    let s = (x + y + z + w) * F4;
    let i = fast_floor(x + s);
    let j = fast_floor(y + s);
    let k = fast_floor(z + s);
    let l = fast_floor(w + s);

    let t = (i as f64 + j as f64 + k as f64 + l as f64) * G4;
    let x0 = x - (i as f64 - t);
    let y0 = y - (j as f64 - t);
    let z0 = z - (k as f64 - t);
    let w0 = w - (l as f64 - t);

    let [[i1, j1, k1, l1], [i2, j2, k2, l2], [i3, j3, k3, l3]] =
        pentachoron_corners(x0, y0, z0, w0);

    let x1 = x0 - i1 as f64 + G4;
    let y1 = y0 - j1 as f64 + G4;
    let z1 = z0 - k1 as f64 + G4;
    let w1 = w0 - l1 as f64 + G4;
    let x2 = x0 - i2 as f64 + 2.0 * G4;
    let y2 = y0 - j2 as f64 + 2.0 * G4;
    let z2 = z0 - k2 as f64 + 2.0 * G4;
    let w2 = w0 - l2 as f64 + 2.0 * G4;
    let x3 = x0 - i3 as f64 + 3.0 * G4;
    let y3 = y0 - j3 as f64 + 3.0 * G4;
    let z3 = z0 - k3 as f64 + 3.0 * G4;
    let w3 = w0 - l3 as f64 + 3.0 * G4;
    let x4 = x0 - 1.0 + 4.0 * G4;
    let y4 = y0 - 1.0 + 4.0 * G4;
    let z4 = z0 - 1.0 + 4.0 * G4;
    let w4 = w0 - 1.0 + 4.0 * G4;

    let ii = wrap(i);
    let jj = wrap(j);
    let kk = wrap(k);
    let ll = wrap(l);
    let hash = |di: usize, dj: usize, dk: usize, dl: usize| {
        perm.perm(ii + di + perm.perm(jj + dj + perm.perm(kk + dk + perm.perm(ll + dl)))) % 32
    };
    let gi0 = hash(0, 0, 0, 0);
    let gi1 = hash(i1, j1, k1, l1);
    let gi2 = hash(i2, j2, k2, l2);
    let gi3 = hash(i3, j3, k3, l3);
    let gi4 = hash(1, 1, 1, 1);

    let n0 = corner4(gi0, x0, y0, z0, w0);
    let n1 = corner4(gi1, x1, y1, z1, w1);
    let n2 = corner4(gi2, x2, y2, z2, w2);
    let n3 = corner4(gi3, x3, y3, z3, w3);
    let n4 = corner4(gi4, x4, y4, z4, w4);

    SCALE_4D * (n0 + n1 + n2 + n3 + n4)
}
