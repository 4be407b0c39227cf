// Mask sampler: turns the shape into a 3x3 binary neighbourhood per pixel.
// Two interchangeable sources behind one contract:
// - a mask image, read in a binary fashion (0 = outside, >0 = inside)
// - an analytic circle, evaluated at each neighbour's pixel centre (+0.5)

use crate::config::{Circle, Point};
use crate::types::{Mask, SampleWindow};

/// Neighbour offsets in window order (dx, dy).
const OFFSETS: [(isize, isize); 9] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0), (0,  0), (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

pub enum ShapeSampler {
    Mask(Mask),
    Circle(Circle),
}

impl ShapeSampler {
    /// Sample the 3x3 window centred at (x, y).
    /// Callers keep 1 <= x < width-1 and 1 <= y < height-1; the mask variant
    /// treats anything past its edge as outside rather than panicking.
    pub fn sample(&self, x: usize, y: usize) -> SampleWindow {
        match self {
            ShapeSampler::Mask(mask) => sample_mask(mask, x, y),
            ShapeSampler::Circle(circle) => sample_circle(circle, x, y),
        }
    }

    /// The backing mask, if this sampler reads one.
    pub fn mask(&self) -> Option<&Mask> {
        match self {
            ShapeSampler::Mask(mask) => Some(mask),
            ShapeSampler::Circle(_) => None,
        }
    }
}

/// Read three mask rows once and pick the 3x3 block out of them.
fn sample_mask(mask: &Mask, x: usize, y: usize) -> SampleWindow {
    let buf = mask.buffer();
    if x == 0 || y == 0 || x + 1 >= buf.width() || y + 1 >= buf.height() {
        // Edge of the mask: go through the bounds-checked path.
        let mut flags = [false; 9];
        for (flag, (dx, dy)) in flags.iter_mut().zip(OFFSETS) {
            *flag = match (x.checked_add_signed(dx), y.checked_add_signed(dy)) {
                (Some(nx), Some(ny)) => mask.is_inside(nx, ny),
                _ => false,
            };
        }
        return SampleWindow::from_flags(flags);
    }

    let above = &buf.row(y - 1)[x - 1..=x + 1];
    let here = &buf.row(y)[x - 1..=x + 1];
    let below = &buf.row(y + 1)[x - 1..=x + 1];

    let bit = |v: u8| if v > 0 { 1.0 } else { 0.0 };
    SampleWindow([
        bit(above[0]), bit(above[1]), bit(above[2]),
        bit(here[0]),  bit(here[1]),  bit(here[2]),
        bit(below[0]), bit(below[1]), bit(below[2]),
    ])
}

fn sample_circle(circle: &Circle, x: usize, y: usize) -> SampleWindow {
    let (cx, cy) = (x as f64 + 0.5, y as f64 + 0.5);
    let flags = OFFSETS.map(|(dx, dy)| circle.contains(Point::new(cx + dx as f64, cy + dy as f64)));
    SampleWindow::from_flags(flags)
}
