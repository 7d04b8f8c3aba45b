//! Fractal layering of a base field.
//!
//! Octave `k` samples the base at `lacunarity^k` times the input
//! coordinates, weighted by `persistence^k`. The sum is divided by the total
//! weight, so a single octave reproduces the base field exactly.

use crate::noise::{Noise2D, Noise3D, Noise4D};

/// Fractal Brownian motion over any [`Noise2D`], [`Noise3D`] or [`Noise4D`].
#[derive(Debug, Clone)]
pub struct Fbm<N> {
    base: N,
    octaves: u8,
    persistence: f64,
    lacunarity: f64,
}

impl<N> Fbm<N> {
    /// Four octaves, halving amplitude and doubling frequency each step.
    pub fn new(base: N) -> Self {
        Self {
            base,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }

    /// Zero is raised to one.
    pub fn with_octaves(self, octaves: u8) -> Self {
        Self {
            octaves: octaves.max(1),
            ..self
        }
    }

    pub fn with_persistence(self, persistence: f64) -> Self {
        Self {
            persistence,
            ..self
        }
    }

    pub fn with_lacunarity(self, lacunarity: f64) -> Self {
        Self { lacunarity, ..self }
    }

    pub fn octaves(&self) -> u8 {
        self.octaves
    }

    pub fn persistence(&self) -> f64 {
        self.persistence
    }

    pub fn lacunarity(&self) -> f64 {
        self.lacunarity
    }

    pub fn base(&self) -> &N {
        &self.base
    }

    fn layer(&self, sample: impl Fn(f64) -> f64) -> f64 {
        let mut sum = 0.0;
        let mut weight = 0.0;
        let mut amplitude = 1.0;
        let mut scale = 1.0;
        for _ in 0..self.octaves {
            sum += amplitude * sample(scale);
            weight += amplitude;
            amplitude *= self.persistence;
            scale *= self.lacunarity;
        }
        sum / weight
    }
}

impl<N: Noise2D> Noise2D for Fbm<N> {
    fn sample_2d(&self, x: f64, y: f64) -> f64 {
        self.layer(|s| self.base.sample_2d(x * s, y * s))
    }
}

impl<N: Noise3D> Noise3D for Fbm<N> {
    fn sample_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        self.layer(|s| self.base.sample_3d(x * s, y * s, z * s))
    }
}

impl<N: Noise4D> Noise4D for Fbm<N> {
    fn sample_4d(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.layer(|s| self.base.sample_4d(x * s, y * s, z * s, w * s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplex::SimplexNoise;

    /// Returns its x coordinate, so each octave's scale is visible.
    struct Ramp;

    impl Noise2D for Ramp {
        fn sample_2d(&self, x: f64, _y: f64) -> f64 {
            x
        }
    }

    #[test]
    fn test_builder_settings() {
        let fbm = Fbm::new(Ramp)
            .with_octaves(6)
            .with_persistence(0.4)
            .with_lacunarity(3.0);
        assert_eq!(fbm.octaves(), 6);
        assert_eq!(fbm.persistence(), 0.4);
        assert_eq!(fbm.lacunarity(), 3.0);
    }

    #[test]
    fn test_weighted_sum_of_scaled_octaves() {
        // Octaves sample x, 2x and 4x with weights 1, 0.5 and 0.25.
        let fbm = Fbm::new(Ramp).with_octaves(3);
        let expected = (1.0 + 0.5 * 2.0 + 0.25 * 4.0) / 1.75;
        assert!((fbm.sample_2d(1.0, 0.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_single_octave_is_base_noise() {
        let base = SimplexNoise::default();
        let fbm = Fbm::new(base.clone()).with_octaves(1);

        for i in 0..50 {
            let x = i as f64 * 0.21 - 3.0;
            let y = i as f64 * 0.17 + 1.0;
            assert_eq!(fbm.sample_2d(x, y), base.value_2d(x, y));
            assert_eq!(fbm.sample_3d(x, y, 0.3), base.value_3d(x, y, 0.3));
            assert_eq!(fbm.sample_4d(x, y, 0.3, 0.9), base.value_4d(x, y, 0.3, 0.9));
        }
    }

    #[test]
    fn test_zero_octaves_clamp_to_one() {
        let fbm = Fbm::new(SimplexNoise::default()).with_octaves(0);
        assert_eq!(fbm.octaves(), 1);
    }

    #[test]
    fn test_layered_simplex_stays_in_range() {
        let fbm = Fbm::new(SimplexNoise::with_seed(42)).with_octaves(8);
        for i in 0..200 {
            let x = i as f64 * 0.173;
            let y = i as f64 * 0.311;
            for v in [fbm.sample_2d(x, y), fbm.sample_3d(x, y, 0.5), fbm.sample_4d(x, y, 0.5, -1.0)] {
                assert!((-1.05..=1.05).contains(&v), "fbm value out of range: {v}");
            }
        }
    }
}
