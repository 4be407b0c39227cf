// Writing the finished canvas to disk, so a render can be checked without a window.

use std::path::Path;

use image::GrayImage;

use crate::error::Error;
use crate::types::Canvas;

impl Canvas {
    /// Save as an 8-bit grayscale image; the format follows the file extension.
    pub fn save_png(&self, path: &Path) -> Result<(), Error> {
        let fail = |reason: String| Error::ImageSave { path: path.to_path_buf(), reason };
        let img = GrayImage::from_raw(self.width() as u32, self.height() as u32, self.buffer.to_packed())
            .ok_or_else(|| fail("canvas bytes do not match its dimensions".into()))?;
        img.save(path).map_err(|e| fail(e.to_string()))?;
        tracing::info!(path = %path.display(), "canvas saved");
        Ok(())
    }
}
