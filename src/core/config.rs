//! Tunable parameters for a particle field.
//!
//! Defaults reproduce the stock background (80 particles, 120px proximity).
//! Hosts can override individual values by key, which is how the web
//! front-end applies `data-*` attributes found on the canvas element.

use thiserror::Error;

use super::constants::*;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name}: range [{min}, {max}) is empty")]
    EmptyRange {
        name: &'static str,
        min: f64,
        max: f64,
    },
    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("{name} must lie in [0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f64 },
    #[error("count must be at most {max}, got {count}")]
    TooManyParticles { count: usize, max: usize },
    #[error("unknown config key `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    /// Half-width of the per-axis velocity range.
    pub speed_range: f64,
    /// Radius range, `[min, max)`.
    pub size_range: [f64; 2],
    /// Opacity range, `[min, max)`.
    pub opacity_range: [f64; 2],
    pub proximity_threshold: f64,
    pub line_alpha_max: f64,
    pub line_width: f64,
    pub color: [u8; 3],
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            speed_range: SPEED_RANGE,
            size_range: [SIZE_MIN, SIZE_MAX],
            opacity_range: [OPACITY_MIN, OPACITY_MAX],
            proximity_threshold: PROXIMITY_THRESHOLD,
            line_alpha_max: LINE_ALPHA_MAX,
            line_width: LINE_WIDTH,
            color: PARTICLE_RGB,
        }
    }
}

impl FieldConfig {
    /// Check every value before it reaches the sampler; `gen_range` panics on
    /// empty ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count > MAX_PARTICLES {
            return Err(ConfigError::TooManyParticles {
                count: self.count,
                max: MAX_PARTICLES,
            });
        }
        if !(self.speed_range >= 0.0 && self.speed_range.is_finite()) {
            return Err(ConfigError::NotPositive {
                name: "speed-range",
                value: self.speed_range,
            });
        }
        check_range("size", self.size_range)?;
        if self.size_range[0] <= 0.0 {
            return Err(ConfigError::NotPositive {
                name: "size-min",
                value: self.size_range[0],
            });
        }
        check_range("opacity", self.opacity_range)?;
        check_unit("opacity-min", self.opacity_range[0])?;
        check_unit("opacity-max", self.opacity_range[1])?;
        check_positive("proximity-threshold", self.proximity_threshold)?;
        check_unit("line-alpha", self.line_alpha_max)?;
        check_positive("line-width", self.line_width)?;
        Ok(())
    }

    /// Apply a single string override, e.g. `("count", "150")`.
    ///
    /// The result is not validated; call [`FieldConfig::validate`] once all
    /// overrides are in.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        let value = value.trim();
        match key {
            "count" => self.count = value.parse().map_err(|_| invalid())?,
            "speed-range" => self.speed_range = value.parse().map_err(|_| invalid())?,
            "size-min" => self.size_range[0] = value.parse().map_err(|_| invalid())?,
            "size-max" => self.size_range[1] = value.parse().map_err(|_| invalid())?,
            "opacity-min" => self.opacity_range[0] = value.parse().map_err(|_| invalid())?,
            "opacity-max" => self.opacity_range[1] = value.parse().map_err(|_| invalid())?,
            "proximity-threshold" => {
                self.proximity_threshold = value.parse().map_err(|_| invalid())?
            }
            "line-alpha" => self.line_alpha_max = value.parse().map_err(|_| invalid())?,
            "line-width" => self.line_width = value.parse().map_err(|_| invalid())?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Defaults plus `(key, value)` overrides. A bad override is logged and
    /// skipped; if the combined result does not validate, the defaults are
    /// returned unchanged.
    pub fn from_overrides<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        let mut config = Self::default();
        for (key, value) in overrides {
            if let Err(e) = config.apply_override(key, &value) {
                log::warn!("[particles] ignoring override: {}", e);
            }
        }
        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("[particles] invalid config ({}), using defaults", e);
                Self::default()
            }
        }
    }
}

/// Keys understood by [`FieldConfig::apply_override`].
pub const OVERRIDE_KEYS: &[&str] = &[
    "count",
    "speed-range",
    "size-min",
    "size-max",
    "opacity-min",
    "opacity-max",
    "proximity-threshold",
    "line-alpha",
    "line-width",
];

fn check_range(name: &'static str, [min, max]: [f64; 2]) -> Result<(), ConfigError> {
    // also rejects NaN
    if min < max && min.is_finite() && max.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::EmptyRange { name, min, max })
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn check_unit(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { name, value })
    }
}
