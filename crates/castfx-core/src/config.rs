//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_FRAME_DT, DEFAULT_TICK_RATE, MAX_TIME_SCALE, MIN_TIME_SCALE};

/// Configuration for starting a new session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Frames per second the driver runs at.
    pub tick_rate: u32,
    /// Simulation speed multiplier (1.0 = normal).
    pub time_scale: f32,
    /// Upper bound on the dt of a single frame, after scaling.
    pub max_frame_dt: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            time_scale: 1.0,
            max_frame_dt: DEFAULT_MAX_FRAME_DT,
        }
    }
}

impl SessionConfig {
    /// Return a copy with every field forced into its valid range.
    pub fn sanitized(self) -> Self {
        let time_scale = if self.time_scale.is_finite() {
            self.time_scale.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE)
        } else {
            1.0
        };
        let max_frame_dt = if self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0 {
            self.max_frame_dt
        } else {
            DEFAULT_MAX_FRAME_DT
        };
        Self {
            tick_rate: self.tick_rate.max(1),
            time_scale,
            max_frame_dt,
        }
    }

    /// Seconds one fixed frame advances the simulation by.
    pub fn frame_dt(&self) -> f32 {
        (self.time_scale / self.tick_rate.max(1) as f32).min(self.max_frame_dt)
    }
}
