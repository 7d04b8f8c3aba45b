//! Rasterising a slice of the noise field.

use std::path::Path;

use thiserror::Error;

use crate::fbm::Fbm;
use crate::maps::GrayscaleBuffer;
use crate::noise::{Noise2D, Noise3D, Noise4D};
use crate::png::{self, PngConfig, PngError};
use crate::settings::{Dimensions, FieldSettings, SettingsError};
use crate::simplex::SimplexNoise;

/// Errors from rendering a field to an image.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("PNG error: {0}")]
    Png(#[from] PngError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render the field described by `settings` into a [0, 1] grayscale buffer.
pub fn render_field(settings: &FieldSettings) -> Result<GrayscaleBuffer, RenderError> {
    let noise = SimplexNoise::new(Some(settings.seed));
    render_with(&noise, settings)
}

/// Render using an already constructed generator. `settings.seed` is ignored.
pub fn render_with(
    noise: &SimplexNoise,
    settings: &FieldSettings,
) -> Result<GrayscaleBuffer, RenderError> {
    settings.validate()?;

    let fbm = Fbm::new(noise)
        .with_octaves(settings.octaves)
        .with_persistence(settings.persistence)
        .with_lacunarity(settings.lacunarity);

    let [width, height] = settings.resolution;
    let [ox, oy] = settings.origin;
    let [z, w] = settings.slice;
    let mut buffer = GrayscaleBuffer::new(width, height, 0.0);

    for py in 0..height {
        let y = oy + py as f64 * settings.frequency;
        for px in 0..width {
            let x = ox + px as f64 * settings.frequency;
            let value = match settings.dimensions {
                Dimensions::Two => fbm.sample_2d_01(x, y),
                Dimensions::Three => fbm.sample_3d_01(x, y, z),
                Dimensions::Four => fbm.sample_4d_01(x, y, z, w),
            };
            buffer.set(px, py, value);
        }
    }

    Ok(buffer)
}

/// Encode `buffer` as PNG, write it to `path`, and return the BLAKE3 hash.
pub fn save_png(
    buffer: &GrayscaleBuffer,
    path: &Path,
    config: &PngConfig,
) -> Result<String, RenderError> {
    let encoded = png::encode_to_vec(buffer, config)?;
    std::fs::write(path, &encoded.bytes)?;
    Ok(encoded.hash)
}
