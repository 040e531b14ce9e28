// What you SEE:
// • A black window; move the mouse and press Space to start emitting lines.
// • Each frame adds one line centered on the pointer, slowly rotating and
//   cycling through a red/green/blue gradient; old lines get evicted.
// • + / = grows the line limit, - shrinks it, C clears, closing the window quits.

mod app;
mod color;
mod draw;
mod error;
mod input;
mod segment;
mod trail;
mod types;

use app::App;
use color::ColorSource;
use draw::Drawer;
use error::Error;
use input::{classify, Command};
use segment::SegmentMaker;
use std::time::{Duration, Instant};
use types::FrameBuffer;

const WIDTH: usize = 1800;
const HEIGHT: usize = 900;
// Effectively uncapped; the loop runs as fast as present allows.
const TARGET_FPS: usize = 10_000_000;

fn main() -> Result<(), Error> {
    /* --- Window + screen buffer setup ---
       Visual: a fixed-size black window opens. */
    let mut drawer = Drawer::new("Draw lines", WIDTH, HEIGHT, TARGET_FPS)?;
    let mut screen = FrameBuffer::new(WIDTH, HEIGHT);

    /* --- Loop state ---
       Emission starts off; the gradient color source is the default look. */
    let mut app = App::new(SegmentMaker::new(ColorSource::gradient(100)));

    /* --- FPS side channel ---
       Measured rate goes to the terminal once per second; debugging only. */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while app.running() {
        /* 1) Inputs: drain this frame's key presses and the close request.
           Commands apply immediately; Quit skips the rest of the frame. */
        for key in drawer.keys_pressed() {
            if let Some(command) = classify(key) {
                app.apply(command);
            }
        }
        if !drawer.is_open() {
            app.apply(Command::Quit);
        }
        if !app.running() {
            break;
        }

        /* 2..7) Emit at the pointer, trim, wipe to black, fade + draw.
           Visual: the trail follows the mouse while emission is on. */
        app.frame(drawer.mouse_pos(), &mut screen);

        /* 8) Present. This also blocks until the frame limiter admits the
           next frame (with TARGET_FPS this is no meaningful throttle). */
        drawer.present(&screen)?;

        /* FPS counter (terminal side channel, once per second) */
        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            println!("FPS: {:.1}", frames_this_second as f32 / secs);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
