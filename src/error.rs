// One error type for the whole program.
// Every variant states *where* things went wrong.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The mask file is missing or could not be decoded.
    #[error("failed to load mask {}: {reason}", path.display())]
    MaskLoad { path: PathBuf, reason: String },

    /// The mask is smaller than the canvas in at least one axis.
    #[error("mask is {mask_width}x{mask_height} but the canvas is {canvas_width}x{canvas_height}")]
    DimensionMismatch {
        mask_width: usize,
        mask_height: usize,
        canvas_width: usize,
        canvas_height: usize,
    },

    /// Raw bytes do not describe a valid grayscale plane.
    #[error("invalid pixel buffer: {0}")]
    InvalidBuffer(String),

    #[error("failed to save {}: {reason}", path.display())]
    ImageSave { path: PathBuf, reason: String },

    #[error("window init error: {0}")]
    WindowInit(String),

    #[error("window update error: {0}")]
    WindowUpdate(String),
}
