// Canvas initializer: a vertical gray ramp behind the outline.
// Visual: dark at the top (32), light at the bottom (224), so both the black
// and the white parts of the stroke are visible somewhere on screen.

use crate::types::{Canvas, GrayBuffer};

pub const GRADIENT_TOP: u8 = 32;
pub const GRADIENT_BOTTOM: u8 = 224;

impl Canvas {
    /// Blank (black) canvas.
    pub fn new(width: usize, height: usize) -> Self {
        Self { buffer: GrayBuffer::new(width, height) }
    }

    pub fn from_buffer(buffer: GrayBuffer) -> Self {
        Self { buffer }
    }

    /// Canvas already painted with the default background ramp.
    pub fn with_gradient(width: usize, height: usize) -> Self {
        let mut canvas = Self::new(width, height);
        canvas.fill_vertical_gradient(GRADIENT_TOP, GRADIENT_BOTTOM);
        canvas
    }

    #[inline] pub fn width(&self) -> usize { self.buffer.width() }
    #[inline] pub fn height(&self) -> usize { self.buffer.height() }

    /// Linear ramp from `top` at y=0 to `bottom` at y=height, sampled at row centres.
    pub fn fill_vertical_gradient(&mut self, top: u8, bottom: u8) {
        let height = self.height();
        if height == 0 {
            return;
        }
        let (top, bottom) = (top as f64, bottom as f64);
        for (y, row) in self.buffer.rows_mut().enumerate() {
            let t = (y as f64 + 0.5) / height as f64;
            let v = (top + (bottom - top) * t).round().clamp(0.0, 255.0) as u8;
            row.fill(v);
        }
    }
}
