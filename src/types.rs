// Core types used by the outline pipeline.
// Everything here is plain data: 8-bit grayscale planes plus the tiny
// per-pixel values (sample window, blend parameters) that flow between stages.

use crate::error::Error;

/// Row-major 8-bit grayscale plane with a (possibly padded) row stride.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayBuffer {
    width: usize,  // visible pixels per row
    height: usize, // number of rows
    stride: usize, // bytes per row, >= width
    pixels: Vec<u8>,
}

impl GrayBuffer {
    /// Zero-filled buffer without row padding.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_stride(width, height, width)
    }

    /// Zero-filled buffer whose rows are `stride` bytes apart.
    /// A stride smaller than the width is bumped up to the width.
    pub fn with_stride(width: usize, height: usize, stride: usize) -> Self {
        let stride = stride.max(width);
        Self { width, height, stride, pixels: vec![0u8; stride * height] }
    }

    /// Wrap existing bytes. The last row only needs `width` bytes.
    pub fn from_raw(width: usize, height: usize, stride: usize, pixels: Vec<u8>) -> Result<Self, Error> {
        if stride < width {
            return Err(Error::InvalidBuffer(format!("stride {stride} is smaller than width {width}")));
        }
        let needed = if height == 0 { 0 } else { stride * (height - 1) + width };
        if pixels.len() < needed {
            return Err(Error::InvalidBuffer(format!(
                "{} bytes cannot hold {width}x{height} with stride {stride} (need {needed})",
                pixels.len()
            )));
        }
        Ok(Self { width, height, stride, pixels })
    }

    #[inline] pub fn width(&self) -> usize { self.width }
    #[inline] pub fn height(&self) -> usize { self.height }
    #[inline] pub fn stride(&self) -> usize { self.stride }

    /// The visible `width` bytes of row `y` (padding excluded).
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.pixels[start..start + self.width]
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        &mut self.pixels[start..start + self.width]
    }

    /// Iterate mutable visible rows top to bottom.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        let width = self.width;
        let height = self.height;
        self.pixels
            .chunks_mut(self.stride.max(1))
            .take(height)
            .map(move |row| &mut row[..width])
    }

    /// Raw storage including row padding, `stride` bytes per row.
    #[inline] pub fn as_bytes(&self) -> &[u8] { &self.pixels }
    #[inline] pub fn as_bytes_mut(&mut self) -> &mut [u8] { &mut self.pixels }

    /// Pixel at (x,y), or None when outside the visible area.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.stride + x])
    }

    /// Write a pixel if (x,y) is inside bounds; out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.pixels[y * self.stride + x] = value;
    }

    pub fn fill(&mut self, value: u8) {
        for row in self.rows_mut() {
            row.fill(value);
        }
    }

    /// Copy of the visible pixels without padding, row after row.
    pub fn to_packed(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.width * self.height);
        for y in 0..self.height {
            out.extend_from_slice(self.row(y));
        }
        out
    }
}

/// The destination surface: background first, outline composited on top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub buffer: GrayBuffer,
}

/// Binary shape membership, read-only once built. Any value > 0 is inside.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    pub(crate) buffer: GrayBuffer,
}

/// 3x3 binary neighbourhood around one pixel, 1.0 = inside, 0.0 = outside.
/// Order: top-left, top, top-right, left, center, right, bottom-left, bottom, bottom-right.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SampleWindow(pub [f64; 9]);

impl SampleWindow {
    pub const TOP_LEFT: usize = 0;
    pub const TOP: usize = 1;
    pub const TOP_RIGHT: usize = 2;
    pub const LEFT: usize = 3;
    pub const CENTER: usize = 4;
    pub const RIGHT: usize = 5;
    pub const BOTTOM_LEFT: usize = 6;
    pub const BOTTOM: usize = 7;
    pub const BOTTOM_RIGHT: usize = 8;

    /// Build from membership flags in window order.
    pub fn from_flags(flags: [bool; 9]) -> Self {
        Self(flags.map(|inside| if inside { 1.0 } else { 0.0 }))
    }
}

/// What the compositor needs for one pixel: opacity and gray level, both in [0,1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlendParams {
    pub alpha: f64,
    pub source_color: f64,
}
