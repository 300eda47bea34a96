use glam::DVec2;
use rand::Rng;

use super::config::FieldConfig;

/// Pixel size of the drawing surface. Every particle wraps against these.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Negative and NaN dimensions collapse to 0.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Half-open containment: `[0, width) x [0, height)`.
    pub fn contains(&self, p: DVec2) -> bool {
        (0.0..self.width).contains(&p.x) && (0.0..self.height).contains(&p.y)
    }
}

/// A single drifting dot. Plain data; [`advance`] moves it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    /// Units per frame.
    pub velocity: DVec2,
    /// Circle radius.
    pub size: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn new(position: DVec2, velocity: DVec2, size: f64, opacity: f64) -> Self {
        Self {
            position,
            velocity,
            size,
            opacity,
        }
    }

    /// Sample a particle uniformly inside `bounds`. `config` must already be
    /// validated.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds, config: &FieldConfig) -> Self {
        let s = config.speed_range;
        Self {
            position: DVec2::new(
                sample_axis(rng, bounds.width),
                sample_axis(rng, bounds.height),
            ),
            velocity: DVec2::new(rng.gen_range(-s..=s), rng.gen_range(-s..=s)),
            size: rng.gen_range(config.size_range[0]..config.size_range[1]),
            opacity: rng.gen_range(config.opacity_range[0]..config.opacity_range[1]),
        }
    }
}

#[inline]
fn sample_axis<R: Rng + ?Sized>(rng: &mut R, dim: f64) -> f64 {
    if dim > 0.0 {
        rng.gen_range(0.0..dim)
    } else {
        0.0
    }
}

/// Move one frame forward and wrap each axis independently.
#[inline]
pub fn advance(p: &mut Particle, bounds: Bounds) {
    let next = p.position + p.velocity;
    p.position = DVec2::new(
        wrap_axis(next.x, bounds.width),
        wrap_axis(next.y, bounds.height),
    );
}

/// Snap wrap: at or past the far edge jumps to 0, below 0 jumps to the far
/// edge. Not a modulo; the overshoot is discarded.
///
/// The far edge is the largest `f64` strictly below `dim`, so the result
/// always lands in `[0, dim)`. A zero-length axis pins the coordinate to 0.
#[inline]
pub fn wrap_axis(coord: f64, dim: f64) -> f64 {
    if dim <= 0.0 {
        0.0
    } else if coord >= dim {
        0.0
    } else if coord < 0.0 {
        just_below(dim)
    } else {
        coord
    }
}

// Next representable value toward zero; `dim` is positive here.
#[inline]
fn just_below(dim: f64) -> f64 {
    if dim.is_finite() {
        f64::from_bits(dim.to_bits() - 1)
    } else {
        f64::MAX
    }
}
