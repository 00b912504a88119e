//! Registration-time validation errors.
//!
//! These are the only failures the scheduler reports. Per-frame ticking never
//! fails: terminal re-entrancy is a no-op and missing auxiliary parameters
//! degrade to skipped updates.

use thiserror::Error;

/// Rejection of an action registration. The schedule is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScheduleError {
    /// Delay was negative or not a number.
    #[error("action delay must be a non-negative number of seconds, got {0}")]
    NegativeDelay(f32),

    /// Descriptor duration was negative or not a number.
    #[error("action duration must be a non-negative number of seconds, got {0}")]
    NegativeDuration(f32),
}

impl ScheduleError {
    /// Validate a `(delay, duration)` pair for registration.
    pub fn check(delay: f32, duration: f32) -> Result<(), Self> {
        // Written as negated comparisons so NaN is rejected too.
        if !(delay >= 0.0) {
            return Err(Self::NegativeDelay(delay));
        }
        if !(duration >= 0.0) {
            return Err(Self::NegativeDuration(duration));
        }
        Ok(())
    }
}
