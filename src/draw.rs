// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the trail framebuffer.
// 2) Polling for the pointer position and the hotkeys.
// 3) A 1-pixel straight line primitive (minifb has no drawing primitives).

use crate::error::Error;
use crate::types::FrameBuffer;
use glam::Vec2;
use minifb::{Key, KeyRepeat, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a fixed-size window.
    /// Visual: a new black window appears with the chosen title.
    /// `target_fps` caps the present rate; a huge value means effectively uncapped.
    pub fn new(title: &str, width: usize, height: usize, target_fps: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(target_fps);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new image. This call also
    /// blocks until the frame limiter admits the next frame.
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

    /// Keys that went down since the last frame, without auto-repeat.
    /// Classification into commands happens in `input`.
    pub fn keys_pressed(&self) -> Vec<Key> {
        self.window.get_keys_pressed(KeyRepeat::No)
    }

    /// Current pointer position in window pixel coordinates (clamped to the
    /// window). None until the pointer has entered the window at least once.
    pub fn mouse_pos(&self) -> Option<Vec2> {
        self.window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| Vec2::new(x.max(0.0).floor(), y.max(0.0).floor()))
    }
}

/* ---------- Software drawing: pixels and lines ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Draw a thin line between (x0,y0) and (x1,y1) using Bresenham.
/// Visual: a straight 1-pixel line appears on the frame. Endpoints outside
/// the framebuffer are fine; out-of-bounds pixels are skipped.
pub fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let (mut x0, mut y0, x1, y1) = (x0, y0, x1, y1);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(fb, x0, y0, color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}
