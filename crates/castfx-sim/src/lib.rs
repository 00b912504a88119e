//! Frame-driven action, effect and flying-object scheduler for castfx.
//!
//! Everything here runs on the single update thread: each stateful type
//! exposes one `tick(dt)` entry point called once per frame by the session
//! driver, and nothing blocks or runs concurrently.

pub mod cast;
pub mod effect;
pub mod engine;
pub mod flying;
pub mod headless;
pub mod reap;
pub mod schedule;

pub use castfx_core as core;
pub use engine::Session;

/// Clamp a time step to be non-negative. NaN becomes zero.
pub(crate) fn sanitize_dt(dt: f32) -> f32 {
    dt.max(0.0)
}
