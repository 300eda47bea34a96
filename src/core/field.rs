//! The particle field: a fixed population of dots, the bounds they wrap
//! against, and the per-frame proximity pass that links nearby dots.

use rand::Rng;

use super::config::{ConfigError, FieldConfig};
use super::constants::GRID_MIN_PARTICLES;
use super::grid::ProximityGrid;
use super::particle::{advance, Bounds, Particle};
use super::surface::{Rgba, Surface};

/// Transient link between two particles closer than the proximity threshold.
/// Always `a < b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
}

/// Line alpha for a pair at `distance`: `max` when coincident, fading
/// linearly to 0 at `threshold`.
#[inline]
pub fn line_alpha(distance: f64, threshold: f64, max: f64) -> f64 {
    max * (1.0 - distance / threshold)
}

/// Quadratic pair scan. Fine for the default population; the grid takes over
/// past `GRID_MIN_PARTICLES`.
pub fn proximity_edges(particles: &[Particle], threshold: f64, out: &mut Vec<Edge>) {
    for (a, pa) in particles.iter().enumerate() {
        for (offset, pb) in particles[a + 1..].iter().enumerate() {
            let distance = pa.position.distance(pb.position);
            if distance < threshold {
                out.push(Edge {
                    a,
                    b: a + 1 + offset,
                    distance,
                });
            }
        }
    }
}

#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Bounds,
    config: FieldConfig,
    grid: ProximityGrid,
    edges: Vec<Edge>,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(
        config: FieldConfig,
        bounds: Bounds,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let particles = (0..config.count)
            .map(|_| Particle::spawn(rng, bounds, &config))
            .collect();
        Ok(Self::from_particles(config, bounds, particles))
    }

    /// Build a field around an explicit population.
    pub fn from_particles(config: FieldConfig, bounds: Bounds, particles: Vec<Particle>) -> Self {
        Self {
            particles,
            bounds,
            config,
            grid: ProximityGrid::new(),
            edges: Vec::new(),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            advance(p, bounds);
        }
    }

    /// New wrap bounds for every particle. Positions and velocities are left
    /// alone; anything now outside wraps back on its next step.
    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Current proximity edges.
    pub fn edges(&mut self) -> &[Edge] {
        self.collect_edges();
        &self.edges
    }

    fn collect_edges(&mut self) {
        self.edges.clear();
        let threshold = self.config.proximity_threshold;
        if self.particles.len() >= GRID_MIN_PARTICLES {
            self.grid.rebuild(&self.particles, threshold);
            self.grid.edges(&self.particles, threshold, &mut self.edges);
        } else {
            proximity_edges(&self.particles, threshold, &mut self.edges);
        }
    }

    /// Clear, draw the dots, then the links between close pairs.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.bounds);
        let rgb = self.config.color;
        for p in &self.particles {
            surface.fill_circle(p.position, p.size, Rgba::new(rgb, p.opacity));
        }

        self.collect_edges();
        let threshold = self.config.proximity_threshold;
        let max = self.config.line_alpha_max;
        for e in &self.edges {
            let alpha = line_alpha(e.distance, threshold, max);
            surface.stroke_line(
                self.particles[e.a].position,
                self.particles[e.b].position,
                self.config.line_width,
                Rgba::new(rgb, alpha),
            );
        }
    }
}
