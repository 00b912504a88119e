//! Scheduler constants and tuning defaults.

use crate::types::Vec3;

/// Default frame rate of the session driver (Hz).
pub const DEFAULT_TICK_RATE: u32 = 30;

/// Default seconds per frame.
pub const DEFAULT_DT: f32 = 1.0 / DEFAULT_TICK_RATE as f32;

/// Largest dt a single frame may advance by. Keeps a stalled host from
/// expiring every effect in one step.
pub const DEFAULT_MAX_FRAME_DT: f32 = 0.25;

/// Allowed time scale range.
pub const MIN_TIME_SCALE: f32 = 0.0;
pub const MAX_TIME_SCALE: f32 = 4.0;

/// Gravity used by ballistic flying objects when none is authored (m/s², z-up).
pub const DEFAULT_GRAVITY: Vec3 = Vec3::new(0.0, 0.0, -9.81);
