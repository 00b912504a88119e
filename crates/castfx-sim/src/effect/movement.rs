//! Move effect: translates the subject at a constant velocity while active.

use castfx_core::events::EffectTag;
use castfx_core::types::Vec3;

use super::{EffectCx, EffectHooks};

/// Advances the subject by `direction * speed * dt` on every active tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveEffect {
    direction: Vec3,
    speed: f32,
}

impl MoveEffect {
    /// `direction` is normalized; a zero vector yields a stationary effect.
    pub fn new(direction: Vec3, speed: f32) -> Self {
        Self {
            direction: direction.normalize_or_zero(),
            speed,
        }
    }

    pub fn velocity(&self) -> Vec3 {
        self.direction * self.speed
    }
}

impl EffectHooks for MoveEffect {
    fn tag(&self) -> EffectTag {
        EffectTag::Move
    }

    fn on_update(&mut self, cx: &mut EffectCx<'_>, dt: f32, _elapsed: f32) {
        let position = cx.subject.position() + self.velocity() * dt;
        cx.subject.set_position(position);
    }
}
