//! PNG encoding for rendered fields.
//!
//! Encoder settings are pinned, so a buffer always produces the same bytes
//! and the BLAKE3 digest of those bytes identifies a render.

use std::io::Write;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::maps::GrayscaleBuffer;

/// Errors from PNG encoding.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("failed to write PNG data: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoder rejected the image: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("buffer holds {actual} samples but {width}x{height} needs {expected}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Pinned encoder settings.
#[derive(Debug, Clone)]
pub struct PngConfig {
    pub compression: Compression,
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Smallest files, slowest encode.
    pub fn smallest() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }

    pub fn fastest() -> Self {
        Self {
            compression: Compression::Fast,
            filter: FilterType::NoFilter,
        }
    }
}

/// Encoded image bytes and their BLAKE3 hex digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPng {
    pub bytes: Vec<u8>,
    pub hash: String,
}

/// Encode `buffer` as an 8-bit grayscale PNG into `out`.
pub fn encode_grayscale<W: Write>(
    buffer: &GrayscaleBuffer,
    out: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let expected = buffer.width as usize * buffer.height as usize;
    if buffer.data.len() != expected {
        return Err(PngError::SizeMismatch {
            width: buffer.width,
            height: buffer.height,
            expected,
            actual: buffer.data.len(),
        });
    }

    let mut encoder = Encoder::new(out, buffer.width, buffer.height);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    // no tIME chunk is written unless asked for
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&buffer.to_luma8())?;
    Ok(())
}

/// Encode into memory and hash the result.
pub fn encode_to_vec(buffer: &GrayscaleBuffer, config: &PngConfig) -> Result<EncodedPng, PngError> {
    let mut bytes = Vec::new();
    encode_grayscale(buffer, &mut bytes, config)?;
    let hash = hash_png(&bytes);
    Ok(EncodedPng { bytes, hash })
}

/// BLAKE3 hex digest of encoded PNG bytes.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}
