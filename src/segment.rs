// One fading line segment, plus the generators that place new ones.
// Visual outcomes:
// - Each frame a new segment appears centered on the pointer, rotated a bit
//   further than the previous one, in the next gradient color.
// - Every live segment's color is multiplied by `fade_rate` per frame. With
//   the default rate of 1.01 (> 1) that drives components UP to the 255
//   ceiling, so old segments saturate toward full brightness rather than
//   dimming. Intentional: keep this exact arithmetic.

use crate::color::ColorSource;
use crate::draw::draw_line;
use crate::types::{pack_rgb, FrameBuffer};
use glam::{Vec2, Vec3};

pub const DEFAULT_FADE_RATE: f32 = 1.01;
pub const DEFAULT_ANGLE_STEP: f32 = 0.1;      // degrees per new segment
pub const DEFAULT_NORM_SQUARE: f32 = 100_000.0;

/// Stateful, infinite angle generator: yields 0, step, 2*step, ... wrapping
/// at 360 by a single subtraction (not a modulo) so the stepping stays exact.
pub struct AngleSource {
    angle: f32, // in [0, 360)
    step: f32,  // must be < 360 or wraps are lost
}

impl AngleSource {
    pub fn new(step: f32) -> Self {
        Self { angle: 0.0, step }
    }

    /// Current angle in degrees; advances for the next call.
    pub fn next(&mut self) -> f32 {
        let angle = self.angle;
        self.angle += self.step;
        if self.angle >= 360.0 {
            self.angle -= 360.0;
        }
        angle
    }
}

/// Offset from a segment's center to one of its endpoints.
/// `coord` fixes the half-length; the (cos+sin, cos-sin) pair rotates the
/// segment as the angle sweeps. The result's squared norm is NOT
/// `norm_square`; the formula is kept as-is for the visual effect.
pub fn offset_vector(angle_degrees: f32, norm_square: f32) -> Vec2 {
    let coord = (norm_square / 2.0).sqrt() / 2.0;
    let theta = angle_degrees.to_radians();
    Vec2::new(
        (theta.cos() + theta.sin()) * coord,
        (theta.cos() - theta.sin()) * coord,
    )
}

/// A single fading line. Owned by the trail buffer once appended.
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
    pub color: Vec3,    // components in [0,255]
    pub fade_rate: f32, // > 1.0
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2, color: Vec3) -> Self {
        Self { start, end, color, fade_rate: DEFAULT_FADE_RATE }
    }

    /// One fade step: scale the color and clamp to [0,255] per component.
    /// Visual: the segment drifts toward saturated full-brightness and then
    /// holds there (rate > 1 grows components up to the clamp ceiling).
    pub fn fade(&mut self) {
        self.color = (self.color * self.fade_rate).clamp(Vec3::ZERO, Vec3::splat(255.0));
    }

    /// Draw the segment into the framebuffer in its current color.
    /// Color components are truncated to integers when packed.
    pub fn draw(&self, fb: &mut FrameBuffer) {
        draw_line(
            fb,
            self.start.x as i32,
            self.start.y as i32,
            self.end.x as i32,
            self.end.y as i32,
            pack_rgb(self.color),
        );
    }
}

/// Builds new segments centered on a point, advancing the angle and color
/// generators once per segment.
pub struct SegmentMaker {
    angles: AngleSource,
    colors: ColorSource,
    norm_square: f32,
}

impl SegmentMaker {
    pub fn new(colors: ColorSource) -> Self {
        Self {
            angles: AngleSource::new(DEFAULT_ANGLE_STEP),
            colors,
            norm_square: DEFAULT_NORM_SQUARE,
        }
    }

    pub fn make(&mut self, center: Vec2) -> Segment {
        let offset = offset_vector(self.angles.next(), self.norm_square);
        Segment::new(center - offset, center + offset, self.colors.next())
    }
}
