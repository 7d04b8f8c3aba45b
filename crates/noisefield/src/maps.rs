//! Single-channel raster that renders are written into.

/// Row-major `f64` samples, nominally in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct GrayscaleBuffer {
    pub width: u32,
    pub height: u32,
    /// `width * height` samples, row by row from the top-left pixel.
    pub data: Vec<f64>,
}

impl GrayscaleBuffer {
    pub fn new(width: u32, height: u32, fill: f64) -> Self {
        Self {
            width,
            height,
            data: vec![fill; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f64 {
        self.data[self.offset(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f64) {
        let offset = self.offset(x, y);
        self.data[offset] = value;
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }

    /// Smallest and largest sample, or `None` for an empty buffer.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let (&first, rest) = self.data.split_first()?;
        Some(rest.iter().fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))))
    }

    /// 8-bit luma, one byte per sample. Out-of-range samples saturate.
    pub fn to_luma8(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect()
    }
}
