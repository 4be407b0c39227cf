//! Render settings, resolved once before the outline pass runs.

use std::path::PathBuf;

/// Default canvas side, in pixels.
pub const CANVAS_SIZE: usize = 512;
/// Radius of the built-in analytic circle.
pub const DEFAULT_RADIUS: f64 = 100.0;

/// A point in continuous canvas coordinates (pixel centres sit at +0.5).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub fn squared_distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

pub fn distance(a: Point, b: Point) -> f64 {
    squared_distance(a, b).sqrt()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Circle of `radius` centred on a `width` x `height` canvas.
    /// The centre is the integer midpoint, like `(512 / 2, 512 / 2)`.
    pub fn centered(width: usize, height: usize, radius: f64) -> Self {
        Self::new(Point::new((width / 2) as f64, (height / 2) as f64), radius)
    }

    /// Distance from `p` to the rim; negative inside.
    pub fn signed_distance(&self, p: Point) -> f64 {
        distance(p, self.center) - self.radius
    }

    /// Points on the rim count as inside.
    pub fn contains(&self, p: Point) -> bool {
        distance(p, self.center) <= self.radius
    }
}

/// Where the shape comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum MaskSource {
    /// Grayscale image on disk; any nonzero pixel is inside.
    Image(PathBuf),
    /// Evaluate circle membership directly at each pixel centre.
    AnalyticCircle(Circle),
}

/// How the blurred contour value turns into ink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutlineStyle {
    /// Opaque plateau with a black-to-white contrast ramp across the edge.
    #[default]
    #[value(name = "black-and-white")]
    BlackAndWhite,
    /// Thin black line on the outside half of the edge only.
    Simple,
}

/// Whether the pass runs on one thread or splits rows across rayon workers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Execution {
    #[default]
    Serial,
    Parallel,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub mask: MaskSource,
    pub style: OutlineStyle,
    pub execution: Execution,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: CANVAS_SIZE,
            height: CANVAS_SIZE,
            mask: MaskSource::AnalyticCircle(Circle::centered(CANVAS_SIZE, CANVAS_SIZE, DEFAULT_RADIUS)),
            style: OutlineStyle::default(),
            execution: Execution::default(),
        }
    }
}
