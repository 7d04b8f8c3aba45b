//! Per-corner falloff kernel.
//!
//! Each corner contributes `t^4 * dot(gradient, offset)` where
//! `t = radius - |offset|^2`, or nothing once `t` goes negative.

use crate::gradient::{dot2, dot3, dot4, GRAD3, GRAD4};

/// Squared kernel radius for 2D.
pub const RADIUS_2D: f64 = 0.5;
/// Squared kernel radius for 3D. Wider than the 0.5 that would keep
/// contributions continuous across simplex faces.
pub const RADIUS_3D: f64 = 0.6;
/// Squared kernel radius for 4D. Same caveat as [`RADIUS_3D`].
pub const RADIUS_4D: f64 = 0.6;

/// Output scale for 2D.
pub const SCALE_2D: f64 = 70.0;
/// Output scale for 3D.
pub const SCALE_3D: f64 = 32.0;
/// Output scale for 4D.
pub const SCALE_4D: f64 = 27.0;

#[inline]
pub(crate) fn corner2(gi: usize, x: f64, y: f64) -> f64 {
    let t = RADIUS_2D - x * x - y * y;
    if t < 0.0 {
        0.0
    } else {
        let t = t * t;
        t * t * dot2(&GRAD3[gi], x, y)
    }
}

#[inline]
pub(crate) fn corner3(gi: usize, x: f64, y: f64, z: f64) -> f64 {
    let t = RADIUS_3D - x * x - y * y - z * z;
    if t < 0.0 {
        0.0
    } else {
        let t = t * t;
        t * t * dot3(&GRAD3[gi], x, y, z)
    }
}

#[inline]
pub(crate) fn corner4(gi: usize, x: f64, y: f64, z: f64, w: f64) -> f64 {
    let t = RADIUS_4D - x * x - y * y - z * z - w * w;
    if t < 0.0 {
        0.0
    } else {
        let t = t * t;
        t * t * dot4(&GRAD4[gi], x, y, z, w)
    }
}
