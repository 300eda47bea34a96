//! Lifecycle of one background instance.
//!
//! Hosts drive it with three hooks: `start` at mount, `frame` once per
//! display refresh, `teardown` at unmount. `frame` reports whether the host
//! should schedule another call, so the scheduling chain ends by itself once
//! the instance is torn down.

use rand::Rng;

use super::config::{ConfigError, FieldConfig};
use super::field::ParticleField;
use super::particle::Bounds;
use super::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    /// Request another frame.
    Next,
    /// Torn down; do not request more frames.
    Stop,
}

#[derive(Debug)]
pub struct Animation {
    field: ParticleField,
    active: bool,
    frames: u64,
}

impl Animation {
    pub fn start<R: Rng + ?Sized>(
        config: FieldConfig,
        viewport: Bounds,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let field = ParticleField::new(config, viewport, rng)?;
        log::info!(
            "[particles] start count={} bounds={}x{}",
            field.len(),
            viewport.width,
            viewport.height
        );
        Ok(Self::from_field(field))
    }

    pub fn from_field(field: ParticleField) -> Self {
        Self {
            field,
            active: true,
            frames: 0,
        }
    }

    /// One display frame: move, then draw. Draws nothing once torn down.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Schedule {
        if !self.active {
            return Schedule::Stop;
        }
        self.field.step();
        self.field.render(surface);
        self.frames += 1;
        Schedule::Next
    }

    pub fn resize(&mut self, viewport: Bounds) {
        if !self.active {
            return;
        }
        log::debug!(
            "[particles] resize {}x{}",
            viewport.width,
            viewport.height
        );
        self.field.resize(viewport);
    }

    pub fn teardown(&mut self) {
        if self.active {
            log::info!("[particles] teardown after {} frames", self.frames);
        }
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }
}
