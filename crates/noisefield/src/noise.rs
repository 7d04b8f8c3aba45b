//! Sampling traits shared by the simplex generator and the fractal layer.

/// A scalar field over the plane, nominally in [-1, 1].
pub trait Noise2D {
    fn sample_2d(&self, x: f64, y: f64) -> f64;

    /// [`Noise2D::sample_2d`] remapped to [0, 1].
    fn sample_2d_01(&self, x: f64, y: f64) -> f64 {
        to_unit(self.sample_2d(x, y))
    }
}

/// A scalar field over 3D space.
pub trait Noise3D {
    fn sample_3d(&self, x: f64, y: f64, z: f64) -> f64;

    fn sample_3d_01(&self, x: f64, y: f64, z: f64) -> f64 {
        to_unit(self.sample_3d(x, y, z))
    }
}

/// A scalar field over 4D space.
pub trait Noise4D {
    fn sample_4d(&self, x: f64, y: f64, z: f64, w: f64) -> f64;

    fn sample_4d_01(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        to_unit(self.sample_4d(x, y, z, w))
    }
}

impl<N: Noise2D + ?Sized> Noise2D for &N {
    fn sample_2d(&self, x: f64, y: f64) -> f64 {
        (**self).sample_2d(x, y)
    }
}

impl<N: Noise3D + ?Sized> Noise3D for &N {
    fn sample_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        (**self).sample_3d(x, y, z)
    }
}

impl<N: Noise4D + ?Sized> Noise4D for &N {
    fn sample_4d(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        (**self).sample_4d(x, y, z, w)
    }
}

/// Map [-1, 1] onto [0, 1]. Overshoot is passed through, not clamped.
#[inline]
pub fn to_unit(v: f64) -> f64 {
    (v + 1.0) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(f64);

    impl Noise2D for Constant {
        fn sample_2d(&self, _x: f64, _y: f64) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_sample_01_remaps() {
        assert_eq!(Constant(-1.0).sample_2d_01(0.0, 0.0), 0.0);
        assert_eq!(Constant(0.0).sample_2d_01(0.0, 0.0), 0.5);
        assert_eq!(Constant(1.0).sample_2d_01(0.0, 0.0), 1.0);
    }

    #[test]
    fn test_to_unit_does_not_clamp() {
        assert!(to_unit(1.02) > 1.0);
        assert!(to_unit(-1.02) < 0.0);
    }
}
