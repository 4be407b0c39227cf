// Window that shows the finished canvas.
// Visual: the gradient with the outline on top, redrawn unchanged every frame
// until you close the window or press ESC.

use mask_outline::{Canvas, Error};
use minifb::{Key, Window, WindowOptions};

/// 0x00RRGGBB pixels, the layout minifb wants.
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl FrameBuffer {
    /// Replicate each gray byte into R, G and B.
    pub fn from_canvas(canvas: &Canvas) -> Self {
        let mut pixels = Vec::with_capacity(canvas.width() * canvas.height());
        for y in 0..canvas.height() {
            pixels.extend(canvas.buffer.row(y).iter().map(|&g| gray_to_rgb(g)));
        }
        Self { width: canvas.width(), height: canvas.height(), pixels }
    }
}

#[inline]
fn gray_to_rgb(g: u8) -> u32 {
    let g = g as u32;
    (g << 16) | (g << 8) | g
}

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        // Static image: no need to spin faster than this.
        window.set_target_fps(30);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }
}

/// Blit the canvas until the window is closed.
pub fn show(title: &str, canvas: &Canvas) -> Result<(), Error> {
    let frame = FrameBuffer::from_canvas(canvas);
    let mut drawer = Drawer::new(title, frame.width, frame.height)?;
    while drawer.is_open() && !drawer.esc_pressed() {
        drawer.present(&frame)?;
    }
    Ok(())
}
