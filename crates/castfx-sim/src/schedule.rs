//! Action schedule: the pending delayed actions of one cast.
//!
//! Every tick advances a time cursor and counts each pending action's delay
//! down. Actions whose delay reaches zero fire in registration order, even
//! when several become ready in the same tick, and are then reaped.

use std::sync::Arc;

use castfx_core::descriptors::ActionDescriptor;
use castfx_core::ScheduleError;

use crate::reap::Reaper;

/// One registered action waiting for its delay to elapse.
#[derive(Debug, Clone)]
pub struct ScheduledAction {
    /// Registration ordinal within the schedule.
    pub seq: u32,
    pub delay_remaining: f32,
    pub descriptor: Arc<ActionDescriptor>,
}

/// Pending actions plus elapsed/duration bookkeeping for one subject.
#[derive(Debug, Default)]
pub struct ActionSchedule {
    pending: Vec<ScheduledAction>,
    elapsed: f32,
    total_duration: f32,
    next_seq: u32,
    reaper: Reaper,
}

impl ActionSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `descriptor` to fire after `delay` seconds.
    ///
    /// Returns the action's registration ordinal. A negative delay or
    /// descriptor duration is rejected and leaves the schedule untouched.
    /// Registering after ticking has begun extends the schedule; the delay
    /// counts from the moment of registration.
    pub fn add_action(
        &mut self,
        descriptor: Arc<ActionDescriptor>,
        delay: f32,
    ) -> Result<u32, ScheduleError> {
        ScheduleError::check(delay, descriptor.duration())?;

        let seq = self.next_seq;
        self.next_seq += 1;
        self.total_duration = self.total_duration.max(delay + descriptor.duration());
        self.pending.push(ScheduledAction {
            seq,
            delay_remaining: delay,
            descriptor,
        });
        Ok(seq)
    }

    /// Advance by `dt` seconds, calling `fire` for every action that became ready.
    pub fn tick(&mut self, dt: f32, mut fire: impl FnMut(u32, &Arc<ActionDescriptor>)) {
        let dt = crate::sanitize_dt(dt);
        self.elapsed += dt;

        let ready = self.reaper.scan(&mut self.pending, |action| {
            action.delay_remaining -= dt;
            action.delay_remaining <= 0.0
        });
        for &index in ready {
            let action = &self.pending[index];
            fire(action.seq, &action.descriptor);
        }
        self.reaper.reap(&mut self.pending);
    }

    /// True once the time cursor has reached the total duration.
    pub fn is_done(&self) -> bool {
        self.elapsed >= self.total_duration
    }

    /// Drop every action that has not fired yet. Bookkeeping is kept.
    pub fn clear_pending(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    pub fn pending(&self) -> &[ScheduledAction] {
        &self.pending
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Latest `registration delay + duration` over all registered actions.
    pub fn total_duration(&self) -> f32 {
        self.total_duration
    }
}
