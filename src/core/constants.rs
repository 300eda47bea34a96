// Default tuning for the particle field. `FieldConfig::default()` is built from these.

// Population
pub const PARTICLE_COUNT: usize = 80;
pub const MAX_PARTICLES: usize = 5000; // per-frame cost stays bounded even on the grid path

// Motion (units per frame, per axis)
pub const SPEED_RANGE: f64 = 0.25; // velocity drawn from [-SPEED_RANGE, SPEED_RANGE]

// Appearance
pub const SIZE_MIN: f64 = 1.0; // radius, inclusive
pub const SIZE_MAX: f64 = 4.0; // radius, exclusive
pub const OPACITY_MIN: f64 = 0.2;
pub const OPACITY_MAX: f64 = 0.7;
pub const PARTICLE_RGB: [u8; 3] = [0, 0, 0]; // uniform hue; alpha comes from opacity

// Proximity edges
pub const PROXIMITY_THRESHOLD: f64 = 120.0; // strict: pairs at exactly this distance get no line
pub const LINE_ALPHA_MAX: f64 = 0.1; // alpha of a line between coincident particles
pub const LINE_WIDTH: f64 = 1.0;

// Above this many particles the edge pass goes through the spatial grid
pub const GRID_MIN_PARTICLES: usize = 200;
