// Mask provider: where the shape membership image comes from.
// Either decoded from a file (any format `image` understands, forced to 8-bit
// luma) or rasterized from an analytic circle.

use std::path::Path;

use crate::config::{Circle, Point};
use crate::error::Error;
use crate::types::{Canvas, GrayBuffer, Mask};

impl Mask {
    pub fn from_buffer(buffer: GrayBuffer) -> Self {
        Self { buffer }
    }

    /// Decode an image file and convert it to single-channel 8-bit grayscale.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let fail = |reason: String| Error::MaskLoad { path: path.to_path_buf(), reason };

        let luma = image::ImageReader::open(path)
            .map_err(|e| fail(e.to_string()))?
            .with_guessed_format()
            .map_err(|e| fail(e.to_string()))?
            .decode()
            .map_err(|e| fail(e.to_string()))?
            .into_luma8();

        let (w, h) = luma.dimensions();
        let buffer = GrayBuffer::from_raw(w as usize, h as usize, w as usize, luma.into_raw())?;
        tracing::debug!(path = %path.display(), width = w, height = h, "mask decoded");
        Ok(Self { buffer })
    }

    /// Build a mask from a membership predicate evaluated per pixel (x, y).
    pub fn from_fn(width: usize, height: usize, mut inside: impl FnMut(usize, usize) -> bool) -> Self {
        let mut buffer = GrayBuffer::new(width, height);
        for (y, row) in buffer.rows_mut().enumerate() {
            for (x, px) in row.iter_mut().enumerate() {
                *px = if inside(x, y) { 255 } else { 0 };
            }
        }
        Self { buffer }
    }

    /// Rasterize a circle: a pixel is inside when its centre (x+0.5, y+0.5) is.
    /// Sampling this mask gives the same windows as sampling the circle directly.
    pub fn from_circle(width: usize, height: usize, circle: &Circle) -> Self {
        Self::from_fn(width, height, |x, y| {
            circle.contains(Point::new(x as f64 + 0.5, y as f64 + 0.5))
        })
    }

    #[inline] pub fn width(&self) -> usize { self.buffer.width() }
    #[inline] pub fn height(&self) -> usize { self.buffer.height() }
    #[inline] pub fn buffer(&self) -> &GrayBuffer { &self.buffer }

    /// Binary read: nonzero is inside. Out-of-bounds reads are outside.
    #[inline]
    pub fn is_inside(&self, x: usize, y: usize) -> bool {
        self.buffer.get(x, y).is_some_and(|v| v > 0)
    }

    /// The mask must be at least as large as the canvas in both axes.
    pub fn check_covers(&self, canvas: &Canvas) -> Result<(), Error> {
        self.check_size(canvas.width(), canvas.height())
    }

    pub fn check_size(&self, width: usize, height: usize) -> Result<(), Error> {
        if self.width() < width || self.height() < height {
            return Err(Error::DimensionMismatch {
                mask_width: self.width(),
                mask_height: self.height(),
                canvas_width: width,
                canvas_height: height,
            });
        }
        Ok(())
    }
}
