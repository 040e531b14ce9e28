// Per-run loop state and the per-frame step, kept free of the window so the
// whole loop body is testable headless.

use crate::input::Command;
use crate::segment::SegmentMaker;
use crate::trail::TrailBuffer;
use crate::types::FrameBuffer;
use glam::Vec2;

pub const MAX_LINES: usize = 100_000;
pub const MAX_LINE_COEF: f64 = 1.5;
const BG_COLOR: u32 = 0x0000_0000; // black

pub struct App {
    trail: TrailBuffer,
    maker: SegmentMaker,
    cur_max_lines: usize, // in [1, MAX_LINES]
    lines_on: bool,
    running: bool,
}

impl App {
    pub fn new(maker: SegmentMaker) -> Self {
        Self {
            trail: TrailBuffer::new(),
            maker,
            cur_max_lines: 100,
            lines_on: false, // emission starts off; Space turns it on
            running: true,
        }
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn cur_max_lines(&self) -> usize {
        self.cur_max_lines
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    /// Apply one routed command. Commands take effect immediately; Quit makes
    /// `running()` false so the caller stops before doing any more work.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Quit => self.running = false,
            Command::ToggleEmission => self.lines_on = !self.lines_on,
            Command::IncreaseLimit => {
                self.cur_max_lines = if self.cur_max_lines < 2 {
                    2
                } else {
                    MAX_LINES.min((self.cur_max_lines as f64 * MAX_LINE_COEF).round() as usize)
                };
                println!("MAX LINE: {}", self.cur_max_lines);
            }
            Command::DecreaseLimit => {
                self.cur_max_lines = ((self.cur_max_lines as f64 / MAX_LINE_COEF).round() as usize).max(1);
                println!("MAX LINE: {}", self.cur_max_lines);
            }
            Command::Clear => self.trail.clear(),
        }
    }

    /// One frame after input handling: emit, trim, wipe, fade + draw.
    /// `pointer` is None until the pointer has entered the window; emission
    /// is skipped that frame.
    pub fn frame(&mut self, pointer: Option<Vec2>, fb: &mut FrameBuffer) {
        if self.lines_on {
            if let Some(center) = pointer {
                let segment = self.maker.make(center);
                self.trail.push(segment);
            }
        }
        self.trail.trim_to(self.cur_max_lines);

        fb.clear(BG_COLOR);
        for segment in self.trail.iter_mut() {
            segment.fade();
            segment.draw(fb);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorSource;

    fn app() -> App {
        App::new(SegmentMaker::new(ColorSource::gradient(100)))
    }

    fn run_frames(app: &mut App, fb: &mut FrameBuffer, n: usize) {
        let pointer = Some(Vec2::new(100.0, 50.0));
        for _ in 0..n {
            app.frame(pointer, fb);
        }
    }

    #[test]
    fn emission_off_produces_nothing() {
        let mut app = app();
        let mut fb = FrameBuffer::new(200, 100);
        run_frames(&mut app, &mut fb, 20);
        assert_eq!(app.trail_len(), 0);
        assert!(fb.pixels.iter().all(|&p| p == BG_COLOR));
    }

    #[test]
    fn buffer_stabilizes_at_the_limit_and_follows_limit_changes() {
        let mut app = app();
        let mut fb = FrameBuffer::new(200, 100);
        assert_eq!(app.cur_max_lines(), 100);

        app.apply(Command::ToggleEmission);
        run_frames(&mut app, &mut fb, 150);
        assert_eq!(app.trail_len(), 100);

        app.apply(Command::IncreaseLimit);
        assert_eq!(app.cur_max_lines(), 150); // round(100 * 1.5)
        run_frames(&mut app, &mut fb, 60);
        assert_eq!(app.trail_len(), 150);

        app.apply(Command::Clear);
        assert_eq!(app.trail_len(), 0);

        app.apply(Command::Quit);
        assert!(!app.running());
    }

    #[test]
    fn limit_grows_by_half_and_shrinks_back_within_bounds() {
        let mut app = app();
        app.apply(Command::DecreaseLimit); // 100 -> 67
        assert_eq!(app.cur_max_lines(), 67);
        for _ in 0..50 {
            app.apply(Command::DecreaseLimit);
        }
        assert_eq!(app.cur_max_lines(), 1); // floor is 1

        app.apply(Command::IncreaseLimit); // below 2 jumps straight to 2
        assert_eq!(app.cur_max_lines(), 2);
        app.apply(Command::IncreaseLimit);
        assert_eq!(app.cur_max_lines(), 3);

        for _ in 0..40 {
            app.apply(Command::IncreaseLimit);
        }
        assert_eq!(app.cur_max_lines(), MAX_LINES); // ceiling is MAX_LINES
    }

    #[test]
    fn no_pointer_means_no_emission() {
        let mut app = app();
        let mut fb = FrameBuffer::new(200, 100);
        app.apply(Command::ToggleEmission);
        app.frame(None, &mut fb);
        assert_eq!(app.trail_len(), 0);
        app.frame(Some(Vec2::new(10.0, 10.0)), &mut fb);
        assert_eq!(app.trail_len(), 1);
    }

    #[test]
    fn frames_draw_segments_into_the_buffer() {
        let mut app = app();
        let mut fb = FrameBuffer::new(200, 100);
        app.apply(Command::ToggleEmission);
        run_frames(&mut app, &mut fb, 1);
        // first segment is (nearly) pure red through the center
        assert!(fb.pixels.iter().any(|&p| p != BG_COLOR));
    }
}
