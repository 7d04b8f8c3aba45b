//! Noisefield: deterministic simplex gradient noise.
//!
//! This crate samples continuous pseudo-random scalar fields over 2, 3 and
//! 4 dimensional coordinates using the simplex method. Every evaluation is
//! a pure function of the coordinates and a permutation table fixed at
//! construction.
//!
//! # Features
//!
//! - **Simplex noise**: 2D, 3D and 4D evaluators plus a 1D alias
//! - **Permutation tables**: the reference table, or one drawn from a seed
//!   or from any [`RandomSource`]
//! - **FBM**: fractal layering over any field
//! - **Rendering**: field slices to grayscale buffers and deterministic PNG
//!
//! # Example
//!
//! ```
//! use noisefield::SimplexNoise;
//!
//! let noise = SimplexNoise::new(None);
//! assert_eq!(noise.value_2d(0.0, 0.0), 0.0);
//!
//! let seeded = SimplexNoise::with_seed(42);
//! let v = seeded.value_3d(1.5, -2.0, 0.25);
//! assert!((-1.05..=1.05).contains(&v));
//! ```
//!
//! # Determinism
//!
//! - Seed 0 (or no seed) uses Ken Perlin's reference permutation
//! - Other seeds drive a PCG32 stream, identical on every platform
//! - PNG encoding uses fixed compression settings

pub mod fbm;
pub mod gradient;
pub mod maps;
pub mod math;
pub mod noise;
pub mod permutation;
pub mod png;
pub mod render;
pub mod rng;
pub mod settings;
pub mod simplex;

// Re-export main types for convenience
pub use fbm::Fbm;
pub use maps::GrayscaleBuffer;
pub use noise::{Noise2D, Noise3D, Noise4D};
pub use permutation::{PermutationTable, RandomSource};
pub use render::{render_field, render_with, save_png, RenderError};
pub use rng::DeterministicRng;
pub use settings::{Dimensions, FieldSettings, SettingsError};
pub use simplex::SimplexNoise;
