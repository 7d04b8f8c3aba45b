//! Field rendering configuration.
//!
//! Settings are plain serde data so they can be stored as JSON next to the
//! images they produce. [`FieldSettings::validate`] must pass before a
//! render starts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted image edge, in pixels.
pub const MAX_RESOLUTION: u32 = 8192;
/// Largest accepted octave count.
pub const MAX_OCTAVES: u8 = 16;

/// Errors from settings validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("resolution must be between 1 and {max} on each axis, got {width}x{height}")]
    InvalidResolution { width: u32, height: u32, max: u32 },

    #[error("octaves must be between 1 and {max}, got {octaves}")]
    InvalidOctaves { octaves: u8, max: u8 },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}

/// Dimensionality of the sampled field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimensions {
    /// Plain 2D noise over the image plane.
    #[default]
    Two,
    /// 3D noise, sliced at `slice[0]` on the z axis.
    Three,
    /// 4D noise, sliced at `slice[0]` (z) and `slice[1]` (w).
    Four,
}

impl Dimensions {
    pub fn count(self) -> usize {
        match self {
            Dimensions::Two => 2,
            Dimensions::Three => 3,
            Dimensions::Four => 4,
        }
    }

    pub fn from_count(count: usize) -> Option<Self> {
        match count {
            2 => Some(Dimensions::Two),
            3 => Some(Dimensions::Three),
            4 => Some(Dimensions::Four),
            _ => None,
        }
    }
}

/// Everything needed to rasterise a slice of the noise field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSettings {
    /// Permutation seed. 0 selects the reference table.
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub dimensions: Dimensions,
    /// World units per pixel.
    #[serde(default = "default_frequency")]
    pub frequency: f64,
    #[serde(default = "default_octaves")]
    pub octaves: u8,
    #[serde(default = "default_persistence")]
    pub persistence: f64,
    #[serde(default = "default_lacunarity")]
    pub lacunarity: f64,
    /// World coordinate of pixel (0, 0).
    #[serde(default)]
    pub origin: [f64; 2],
    /// Fixed z and w coordinates for 3D and 4D fields.
    #[serde(default)]
    pub slice: [f64; 2],
    /// Image size as [width, height].
    #[serde(default = "default_resolution")]
    pub resolution: [u32; 2],
}

pub(crate) fn default_frequency() -> f64 {
    1.0 / 32.0
}

pub(crate) fn default_octaves() -> u8 {
    1
}

pub(crate) fn default_persistence() -> f64 {
    0.5
}

pub(crate) fn default_lacunarity() -> f64 {
    2.0
}

pub(crate) fn default_resolution() -> [u32; 2] {
    [256, 256]
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            seed: 0,
            dimensions: Dimensions::default(),
            frequency: default_frequency(),
            octaves: default_octaves(),
            persistence: default_persistence(),
            lacunarity: default_lacunarity(),
            origin: [0.0, 0.0],
            slice: [0.0, 0.0],
            resolution: default_resolution(),
        }
    }
}

impl FieldSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        let [width, height] = self.resolution;
        if !(1..=MAX_RESOLUTION).contains(&width) || !(1..=MAX_RESOLUTION).contains(&height) {
            return Err(SettingsError::InvalidResolution {
                width,
                height,
                max: MAX_RESOLUTION,
            });
        }

        if !(1..=MAX_OCTAVES).contains(&self.octaves) {
            return Err(SettingsError::InvalidOctaves {
                octaves: self.octaves,
                max: MAX_OCTAVES,
            });
        }

        let finite_fields = [
            ("frequency", self.frequency),
            ("persistence", self.persistence),
            ("lacunarity", self.lacunarity),
            ("origin[0]", self.origin[0]),
            ("origin[1]", self.origin[1]),
            ("slice[0]", self.slice[0]),
            ("slice[1]", self.slice[1]),
        ];
        for (field, value) in finite_fields {
            if !value.is_finite() {
                return Err(SettingsError::NonFinite { field, value });
            }
        }

        for (field, value) in [("frequency", self.frequency), ("lacunarity", self.lacunarity)] {
            if value <= 0.0 {
                return Err(SettingsError::NotPositive { field, value });
            }
        }

        Ok(())
    }
}
