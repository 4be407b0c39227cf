// The outline pass: sample -> blur -> map -> composite, once per pixel.
// Visual: a soft stroke appears exactly where the shape edge crosses the
// canvas; everything well inside or outside keeps its background.

use std::time::Instant;

use rayon::prelude::*;

use crate::composite::blend_in_place;
use crate::config::{Execution, MaskSource, OutlineStyle, RenderConfig};
use crate::contour::{estimate, is_on_contour};
use crate::error::Error;
use crate::sampler::ShapeSampler;
use crate::types::{Canvas, Mask};

/// What a pass did, for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutlineStats {
    /// Interior pixels visited (the 1-pixel border is never touched).
    pub visited: usize,
    /// Pixels whose blend actually ran (contour value in (0,1) and alpha > 0).
    pub painted: usize,
}

impl std::ops::Add for OutlineStats {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { visited: self.visited + rhs.visited, painted: self.painted + rhs.painted }
    }
}

/// Sampler and style chosen once; `render` can then run any number of times.
pub struct OutlineRenderer {
    sampler: ShapeSampler,
    style: OutlineStyle,
    execution: Execution,
}

impl OutlineRenderer {
    /// Resolve the mask source for a `config.width` x `config.height` canvas.
    /// A missing/undecodable file or an undersized mask fails here, before any pixel is touched.
    pub fn new(config: &RenderConfig) -> Result<Self, Error> {
        let sampler = match &config.mask {
            MaskSource::Image(path) => {
                let mask = Mask::load(path)?;
                mask.check_size(config.width, config.height)?;
                ShapeSampler::Mask(mask)
            }
            MaskSource::AnalyticCircle(circle) => ShapeSampler::Circle(*circle),
        };
        Ok(Self { sampler, style: config.style, execution: config.execution })
    }

    pub fn from_parts(sampler: ShapeSampler, style: OutlineStyle) -> Self {
        Self { sampler, style, execution: Execution::Serial }
    }

    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    pub fn style(&self) -> OutlineStyle { self.style }
    pub fn sampler(&self) -> &ShapeSampler { &self.sampler }

    /// Composite the outline into `canvas` in place.
    /// The background must already be painted; each pixel only reads its own pre-pass value.
    pub fn render(&self, canvas: &mut Canvas) -> Result<OutlineStats, Error> {
        if let Some(mask) = self.sampler.mask() {
            mask.check_covers(canvas)?;
        }

        let (w, h) = (canvas.width(), canvas.height());
        if w < 3 || h < 3 {
            tracing::debug!(width = w, height = h, "canvas has no interior, nothing to outline");
            return Ok(OutlineStats::default());
        }

        tracing::debug!(width = w, height = h, style = ?self.style, execution = ?self.execution, "outline pass");
        let started = Instant::now();

        let stats = match self.execution {
            Execution::Serial => {
                let mut total = OutlineStats::default();
                for y in 1..h - 1 {
                    total = total + self.render_row(y, canvas.buffer.row_mut(y));
                }
                total
            }
            Execution::Parallel => {
                // Workers own disjoint rows; the sampler is shared read-only.
                let stride = canvas.buffer.stride();
                canvas
                    .buffer
                    .as_bytes_mut()
                    .par_chunks_mut(stride)
                    .enumerate()
                    .skip(1)
                    .take(h - 2)
                    .map(|(y, row)| self.render_row(y, &mut row[..w]))
                    .reduce(OutlineStats::default, |a, b| a + b)
            }
        };

        tracing::info!(
            painted = stats.painted,
            visited = stats.visited,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "outline pass done"
        );
        Ok(stats)
    }

    /// One canvas row, skipping the first and last column.
    fn render_row(&self, y: usize, row: &mut [u8]) -> OutlineStats {
        let w = row.len();
        let mut stats = OutlineStats::default();
        for x in 1..w - 1 {
            stats.visited += 1;
            let v = estimate(&self.sampler.sample(x, y));
            if !is_on_contour(v) {
                continue;
            }
            if let Some(params) = self.style.blend_params(v) {
                blend_in_place(&mut row[x], params);
                stats.painted += 1;
            }
        }
        stats
    }
}

/// Build the canvas, paint the background ramp and run the outline pass once.
pub fn render_scene(config: &RenderConfig) -> Result<Canvas, Error> {
    let renderer = OutlineRenderer::new(config)?;
    let mut canvas = Canvas::with_gradient(config.width, config.height);
    renderer.render(&mut canvas)?;
    Ok(canvas)
}
