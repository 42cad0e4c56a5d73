use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Pixel rows indexed as [y][x]; each pixel is 0 (off) or 1 (on).
pub type Pixels = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// # Frame buffer
///
/// The 64x32 monochrome display.
/// Pixels are only ever flipped, never set, which is what lets sprite drawing detect collisions.
/// Coordinates wrap around the edges of the display.
///
/// `dirty` records whether anything changed since a renderer last looked; the interpreter never
/// reads it. A new frame buffer starts dirty so the blank screen gets shown once.
#[derive(Clone)]
pub struct FrameBuffer {
    pixels: Pixels,
    dirty: bool,
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            pixels: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            dirty: true,
        }
    }

    /// Turns every pixel off.
    pub fn reset(&mut self) {
        self.pixels = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        self.dirty = true;
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> u8 {
        self.pixels[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH]
    }

    pub fn flip_pixel(&mut self, x: usize, y: usize) {
        self.pixels[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH] ^= 1;
        self.dirty = true;
    }

    pub fn pixels(&self) -> &Pixels {
        &self.pixels
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
