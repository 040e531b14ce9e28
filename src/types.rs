// Core types shared by the drawing code and the segment logic.

use glam::Vec3;

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Fill the whole frame with one color.
    /// Visual: wipes the previous frame; called once per frame with black.
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }
}

/// Pack an RGB-float triple (each component in [0,255]) into 0x00RRGGBB.
/// Components are truncated to integers, not rounded.
#[inline]
pub fn pack_rgb(color: Vec3) -> u32 {
    ((color.x as u32) << 16) | ((color.y as u32) << 8) | (color.z as u32)
}
