//! Cast: one subject's action schedule plus the effects its actions started.
//!
//! The cast is the logic that owns effects: it ticks them, reaps the ended
//! ones, and fires due actions. A fired action either mutates the subject
//! directly (animation), starts an effect owned by this cast, or hands a
//! flying object to the session's manager.

use std::sync::Arc;

use castfx_core::descriptors::{ActionDescriptor, ActionKind};
use castfx_core::events::CastEvent;
use castfx_core::interfaces::{CurveEvaluator, Subject, VisualFactory};
use castfx_core::types::CastId;
use castfx_core::ScheduleError;

use crate::effect::{CurveParamEffect, Effect, EffectCx, EffectHooks, MoveEffect};
use crate::flying::{movement, FlyingObjectManager};
use crate::reap::Reaper;
use crate::schedule::ActionSchedule;

/// Session-owned collaborators a cast needs while ticking.
pub struct CastEnv<'a> {
    pub flying: &'a mut FlyingObjectManager,
    pub visuals: &'a mut dyn VisualFactory,
    pub curves: &'a dyn CurveEvaluator,
    pub events: &'a mut Vec<CastEvent>,
}

pub struct Cast<S> {
    id: CastId,
    subject: S,
    schedule: ActionSchedule,
    effects: Vec<Effect>,
    reaper: Reaper,
    interrupted: bool,
}

impl<S: Subject> Cast<S> {
    pub fn new(id: CastId, subject: S) -> Self {
        Self {
            id,
            subject,
            schedule: ActionSchedule::new(),
            effects: Vec::new(),
            reaper: Reaper::new(),
            interrupted: false,
        }
    }

    /// Register an action on this cast's schedule.
    pub fn add_action(
        &mut self,
        descriptor: Arc<ActionDescriptor>,
        delay: f32,
    ) -> Result<u32, ScheduleError> {
        let kind = descriptor.tag();
        self.schedule.add_action(descriptor, delay).inspect_err(|err| {
            tracing::warn!(cast = self.id.0, ?kind, %err, "action registration rejected");
        })
    }

    /// Start an effect owned by this cast outside of any action.
    pub fn start_effect(
        &mut self,
        hooks: Box<dyn EffectHooks>,
        delay: f32,
        duration: f32,
        env: &mut CastEnv<'_>,
    ) {
        start_effect(self.id, &mut self.subject, &mut self.effects, hooks, delay, duration, env);
    }

    /// Advance by `dt`: tick and reap effects, then fire due actions.
    ///
    /// Effects started by actions fired this tick get their first update on
    /// the next tick.
    pub fn tick(&mut self, dt: f32, env: &mut CastEnv<'_>) {
        let Self {
            id,
            subject,
            schedule,
            effects,
            reaper,
            ..
        } = self;
        let id = *id;

        reaper.scan(effects, |effect| {
            let mut cx = EffectCx {
                subject: &mut *subject,
                curves: env.curves,
            };
            if effect.tick(dt, &mut cx) {
                tracing::trace!(cast = id.0, effect = ?effect.tag(), "effect ended");
                env.events.push(CastEvent::EffectEnded {
                    cast: id,
                    effect: effect.tag(),
                    forced: false,
                });
            }
            effect.is_ended()
        });
        reaper.reap(effects);

        schedule.tick(dt, |seq, descriptor| {
            tracing::debug!(cast = id.0, seq, action = ?descriptor.tag(), "action fired");
            env.events.push(CastEvent::ActionFired {
                cast: id,
                seq,
                action: descriptor.tag(),
            });
            fire(id, descriptor, &mut *subject, effects, env);
        });
    }

    /// Stop the cast: drop pending actions and force every live effect to end.
    /// Returns false if the cast was already interrupted.
    pub fn interrupt(&mut self, env: &mut CastEnv<'_>) -> bool {
        if self.interrupted {
            return false;
        }
        self.interrupted = true;
        let dropped = self.schedule.clear_pending();

        let mut cx = EffectCx {
            subject: &mut self.subject,
            curves: env.curves,
        };
        for effect in &mut self.effects {
            if effect.forced_end(&mut cx) {
                env.events.push(CastEvent::EffectEnded {
                    cast: self.id,
                    effect: effect.tag(),
                    forced: true,
                });
            }
        }
        self.effects.clear();

        tracing::debug!(cast = self.id.0, dropped, "cast interrupted");
        env.events.push(CastEvent::CastInterrupted { cast: self.id });
        true
    }

    /// True once nothing is left to do: interrupted, or every action has
    /// fired, the schedule has run its full duration, and every effect ended.
    pub fn is_finished(&self) -> bool {
        self.interrupted
            || (self.schedule.is_done()
                && self.schedule.pending().is_empty()
                && self.effects.iter().all(Effect::is_ended))
    }

    pub fn is_interrupted(&self) -> bool {
        self.interrupted
    }

    pub fn id(&self) -> CastId {
        self.id
    }

    pub fn subject(&self) -> &S {
        &self.subject
    }

    pub fn subject_mut(&mut self) -> &mut S {
        &mut self.subject
    }

    pub fn schedule(&self) -> &ActionSchedule {
        &self.schedule
    }

    /// Effects still owned by this cast (ended ones are dropped on the next tick).
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn into_subject(self) -> S {
        self.subject
    }
}

/// Run the payload of a fired action.
fn fire(
    cast: CastId,
    descriptor: &ActionDescriptor,
    subject: &mut dyn Subject,
    effects: &mut Vec<Effect>,
    env: &mut CastEnv<'_>,
) {
    let duration = descriptor.duration();
    match descriptor.kind() {
        ActionKind::Move { direction, speed } => {
            let hooks = Box::new(MoveEffect::new(*direction, *speed));
            start_effect(cast, subject, effects, hooks, 0.0, duration, env);
        }
        ActionKind::Animation { name, blend_secs } => {
            subject.play_animation(name, *blend_secs);
        }
        ActionKind::CurveParam { param, curve } => {
            let hooks = Box::new(CurveParamEffect::new(*param, *curve));
            start_effect(cast, subject, effects, hooks, 0.0, duration, env);
        }
        ActionKind::FlyingObject {
            template,
            offset,
            movement: spec,
        } => {
            let position = subject.position() + *offset;
            let id = env.flying.spawn(
                position,
                duration,
                *template,
                movement::from_spec(*spec),
                &mut *env.visuals,
            );
            env.events
                .push(CastEvent::FlyingObjectSpawned { id, position });
        }
    }
}

fn start_effect(
    cast: CastId,
    subject: &mut dyn Subject,
    effects: &mut Vec<Effect>,
    hooks: Box<dyn EffectHooks>,
    delay: f32,
    duration: f32,
    env: &mut CastEnv<'_>,
) {
    let mut cx = EffectCx {
        subject,
        curves: env.curves,
    };
    let effect = Effect::start(hooks, delay, duration, &mut cx);
    env.events.push(CastEvent::EffectStarted {
        cast,
        effect: effect.tag(),
    });
    if effect.is_ended() {
        env.events.push(CastEvent::EffectEnded {
            cast,
            effect: effect.tag(),
            forced: false,
        });
    }
    effects.push(effect);
}

impl<S> std::fmt::Debug for Cast<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cast")
            .field("id", &self.id)
            .field("schedule", &self.schedule)
            .field("effects", &self.effects)
            .field("interrupted", &self.interrupted)
            .finish()
    }
}
