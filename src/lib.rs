//! Antialiased outlines around a binary shape mask.
//!
//! The mask is sampled as a 3x3 binary neighbourhood per pixel, blurred with a
//! binomial kernel, and the blurred value is mapped to an alpha/gray pair that
//! is composited onto a grayscale canvas in place.
//!
//! ```no_run
//! use mask_outline::{render_scene, RenderConfig};
//!
//! let canvas = render_scene(&RenderConfig::default())?;
//! canvas.save_png(std::path::Path::new("outline.png"))?;
//! # Ok::<(), mask_outline::Error>(())
//! ```

pub mod composite;
pub mod config;
pub mod contour;
pub mod error;
mod export;
mod gradient;
mod mask;
pub mod outline;
pub mod policy;
pub mod sampler;
pub mod types;

pub use config::{Circle, Execution, MaskSource, OutlineStyle, Point, RenderConfig};
pub use error::Error;
pub use gradient::{GRADIENT_BOTTOM, GRADIENT_TOP};
pub use outline::{render_scene, OutlineRenderer, OutlineStats};
pub use sampler::ShapeSampler;
pub use types::{BlendParams, Canvas, GrayBuffer, Mask, SampleWindow};
