// Color sources for new segments.
// Visual outcomes:
// - Solid: every new segment starts in the same color (default white).
// - Gradient: new segments sweep red -> green -> blue -> red, `grain` steps
//   per blend, at constant perceived brightness.

use glam::Vec3;

// Tiny offset so a "pure" channel never produces a zero vector, which would
// make the norm rescale divide by zero.
const EPS: f32 = 1e-9;

const HUES: [Vec3; 3] = [
    Vec3::new(255.0, EPS, EPS), // red
    Vec3::new(EPS, 255.0, EPS), // green
    Vec3::new(EPS, EPS, 255.0), // blue
];

/// Stateful, infinite color generator. Each `next()` call yields the color
/// for one new segment and advances the internal state.
pub enum ColorSource {
    Solid(Vec3),
    Gradient {
        grain: u32,    // calls per hue-to-hue blend
        step: u32,     // in [0, grain)
        base_idx: usize, // in [0, 3)
    },
}

impl ColorSource {
    /// Constant color, components in [0,255]. Default is pure white.
    pub fn solid(color: Vec3) -> Self {
        ColorSource::Solid(color)
    }

    pub fn solid_white() -> Self {
        ColorSource::Solid(Vec3::splat(255.0))
    }

    /// Cyclic red/green/blue gradient; `grain` calls per blend leg, so the
    /// full cycle repeats every 3*grain calls.
    pub fn gradient(grain: u32) -> Self {
        ColorSource::Gradient { grain, step: 0, base_idx: 0 }
    }

    /// Next color sample, components in [0,255].
    pub fn next(&mut self) -> Vec3 {
        match self {
            ColorSource::Solid(color) => *color,
            ColorSource::Gradient { grain, step, base_idx } => {
                let frac = *step as f32 / *grain as f32;
                let base = HUES[*base_idx];
                let target = HUES[(*base_idx + 1) % HUES.len()];

                // Linear blend, then rescale so the Euclidean norm is 255.
                // The rescale keeps mid-blend colors as bright as the pure
                // hues instead of dipping toward gray.
                let mut color = base * (1.0 - frac) + target * frac;
                color *= 255.0 / color.length();
                let color = color.clamp(Vec3::ZERO, Vec3::splat(255.0));

                // Advance only after computing this call's color.
                *step += 1;
                if *step >= *grain {
                    *step = 0;
                    *base_idx = (*base_idx + 1) % HUES.len();
                }

                color
            }
        }
    }
}
