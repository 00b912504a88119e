//! Time-boxed effects applied to a subject.
//!
//! `Effect` owns the timing state machine:
//!
//! ```text
//! Armed --(delay reaches 0)--> Active --(elapsed >= duration)--> Ended
//!   \__________________________ forced_end _______________________/
//! ```
//!
//! Variants only supply the `on_start` / `on_update` / `on_end` hooks through
//! [`EffectHooks`]. Effects are not registered centrally; whoever starts one
//! owns it and ticks it (normally a `Cast`).

pub mod curve_param;
pub mod movement;

use castfx_core::events::EffectTag;
use castfx_core::interfaces::{CurveEvaluator, Subject};

pub use curve_param::CurveParamEffect;
pub use movement::MoveEffect;

/// Collaborators an effect hook may touch.
pub struct EffectCx<'a> {
    pub subject: &'a mut dyn Subject,
    pub curves: &'a dyn CurveEvaluator,
}

/// Per-variant behavior of an effect. All hooks default to doing nothing.
pub trait EffectHooks {
    fn tag(&self) -> EffectTag {
        EffectTag::Custom
    }

    /// Called once, when the delay has elapsed.
    fn on_start(&mut self, _cx: &mut EffectCx<'_>) {}

    /// Called on every active tick after the start tick. `elapsed` already includes `dt`.
    fn on_update(&mut self, _cx: &mut EffectCx<'_>, _dt: f32, _elapsed: f32) {}

    /// Called exactly once when the effect ends, naturally or by force.
    fn on_end(&mut self, _cx: &mut EffectCx<'_>, _duration: f32) {}
}

impl<H: EffectHooks + ?Sized> EffectHooks for Box<H> {
    fn tag(&self) -> EffectTag {
        (**self).tag()
    }

    fn on_start(&mut self, cx: &mut EffectCx<'_>) {
        (**self).on_start(cx);
    }

    fn on_update(&mut self, cx: &mut EffectCx<'_>, dt: f32, elapsed: f32) {
        (**self).on_update(cx, dt, elapsed);
    }

    fn on_end(&mut self, cx: &mut EffectCx<'_>, duration: f32) {
        (**self).on_end(cx, duration);
    }
}

/// Lifecycle phase of an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectPhase {
    /// Counting down the start delay. No visible mutation yet.
    Armed,
    /// Duration elapsing, `on_update` every tick.
    Active,
    /// Terminal. `on_end` has fired.
    Ended,
}

/// A running effect: timing state plus the variant's hooks.
pub struct Effect<H = Box<dyn EffectHooks>> {
    hooks: H,
    phase: EffectPhase,
    delay_remaining: f32,
    elapsed: f32,
    duration: f32,
}

impl<H: EffectHooks> Effect<H> {
    /// Create and start an effect.
    ///
    /// With `delay <= 0` the start hook runs before this returns, and if
    /// `duration <= 0` as well the end hook runs too.
    pub fn start(hooks: H, delay: f32, duration: f32, cx: &mut EffectCx<'_>) -> Self {
        let delay = crate::sanitize_dt(delay);
        let mut effect = Self {
            hooks,
            phase: EffectPhase::Armed,
            delay_remaining: delay,
            elapsed: 0.0,
            duration: crate::sanitize_dt(duration),
        };
        if delay <= 0.0 {
            effect.activate(cx);
            if effect.elapsed >= effect.duration {
                effect.finish(cx);
            }
        }
        effect
    }

    /// Advance by `dt`. Returns true if the effect ended during this call.
    ///
    /// The call that moves the effect from Armed to Active only runs
    /// `on_start`; updates begin on the following tick. One large `dt` may
    /// therefore carry a short effect from Armed to Ended without ever
    /// calling `on_update`.
    pub fn tick(&mut self, dt: f32, cx: &mut EffectCx<'_>) -> bool {
        let dt = crate::sanitize_dt(dt);
        match self.phase {
            EffectPhase::Ended => false,
            EffectPhase::Armed => {
                self.delay_remaining -= dt;
                if self.delay_remaining <= 0.0 {
                    self.activate(cx);
                }
                false
            }
            EffectPhase::Active => {
                self.elapsed += dt;
                self.hooks.on_update(cx, dt, self.elapsed);
                if self.elapsed >= self.duration {
                    self.finish(cx);
                    return true;
                }
                false
            }
        }
    }

    /// End the effect now. Returns false if it had already ended.
    ///
    /// An effect still Armed goes straight to Ended: `on_start` is skipped
    /// and only `on_end` runs.
    pub fn forced_end(&mut self, cx: &mut EffectCx<'_>) -> bool {
        if self.phase == EffectPhase::Ended {
            return false;
        }
        self.delay_remaining = 0.0;
        self.elapsed = self.duration;
        self.finish(cx);
        true
    }

    fn activate(&mut self, cx: &mut EffectCx<'_>) {
        self.delay_remaining = 0.0;
        self.phase = EffectPhase::Active;
        self.hooks.on_start(cx);
    }

    fn finish(&mut self, cx: &mut EffectCx<'_>) {
        self.phase = EffectPhase::Ended;
        self.hooks.on_end(cx, self.duration);
    }

    pub fn is_ended(&self) -> bool {
        self.phase == EffectPhase::Ended
    }

    pub fn phase(&self) -> EffectPhase {
        self.phase
    }

    pub fn tag(&self) -> EffectTag {
        self.hooks.tag()
    }

    pub fn delay_remaining(&self) -> f32 {
        self.delay_remaining
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }
}

impl<H: EffectHooks> std::fmt::Debug for Effect<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Effect")
            .field("tag", &self.hooks.tag())
            .field("phase", &self.phase)
            .field("delay_remaining", &self.delay_remaining)
            .field("elapsed", &self.elapsed)
            .field("duration", &self.duration)
            .finish()
    }
}
