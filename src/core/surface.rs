//! Drawing-surface abstraction.
//!
//! The field never holds on to a drawing context; it is handed a `Surface`
//! for the duration of one `render` call. The web front-end implements it on
//! top of `CanvasRenderingContext2d`; `RecordingSurface` keeps the calls in
//! memory for headless hosts and tests.

use glam::DVec2;

use super::particle::Bounds;

/// Colour with 8-bit channels and a floating-point alpha, as CSS expects it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: [u8; 3],
    pub alpha: f64,
}

impl Rgba {
    pub fn new(rgb: [u8; 3], alpha: f64) -> Self {
        Self { rgb, alpha }
    }

    /// CSS colour string, e.g. `rgba(0, 0, 0, 0.35)`.
    pub fn css(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("rgba({}, {}, {}, {})", r, g, b, self.alpha)
    }
}

pub trait Surface {
    /// Wipe the whole area covered by `bounds`.
    fn clear(&mut self, bounds: Bounds);
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba);
    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Rgba);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Bounds),
    Circle {
        center: DVec2,
        radius: f64,
        color: Rgba,
    },
    Line {
        from: DVec2,
        to: DVec2,
        width: f64,
        color: Rgba,
    },
}

#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .count()
    }

    pub fn lines(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count()
    }

    pub fn clears(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Clear(_)))
            .count()
    }

    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, bounds: Bounds) {
        self.ops.push(DrawOp::Clear(bounds));
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Rgba) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            width,
            color,
        });
    }
}
