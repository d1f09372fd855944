use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, LoadError};

/// Matching distance used by the letter-tracing game (path-space units).
pub const DEFAULT_TOLERANCE_RADIUS: f32 = 0.35;
/// How close a pointer-down must land to begin or resume a stroke.
pub const DEFAULT_START_TOLERANCE: f32 = 0.5;
/// Largest index jump a single move may make.
pub const DEFAULT_MAX_FORWARD_SKIP: usize = 3;

/// Recognizer options, supplied once when a session is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Maximum distance between an input point and a checkpoint for a match.
    pub tolerance_radius: f32,
    /// Radius around the stroke start (or resume point) that accepts a pointer-down.
    /// Usually at least `tolerance_radius` so that starting is forgiving.
    pub start_tolerance: f32,
    /// Maximum number of checkpoint indices one accepted move may advance.
    pub max_forward_skip: usize,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            tolerance_radius: DEFAULT_TOLERANCE_RADIUS,
            start_tolerance: DEFAULT_START_TOLERANCE,
            max_forward_skip: DEFAULT_MAX_FORWARD_SKIP,
        }
    }
}

impl TraceConfig {
    /// Check that every option is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tolerance_radius.is_finite() && self.tolerance_radius > 0.0) {
            return Err(ConfigError::ToleranceRadius(self.tolerance_radius));
        }
        if !(self.start_tolerance.is_finite() && self.start_tolerance > 0.0) {
            return Err(ConfigError::StartTolerance(self.start_tolerance));
        }
        if self.max_forward_skip == 0 {
            return Err(ConfigError::MaxForwardSkip);
        }
        if self.start_tolerance < self.tolerance_radius {
            log::warn!(
                "start_tolerance {} is tighter than tolerance_radius {}",
                self.start_tolerance,
                self.tolerance_radius
            );
        }
        Ok(())
    }

    /// Parse and validate a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
