//! Session: the frame driver.
//!
//! `Session` owns the flying object manager and every live cast, advances
//! them once per frame and returns a `FrameReport`. It is created when play
//! starts and must be ended with [`Session::shutdown`] so every visual is
//! released. Completely headless; hosts supply subjects, visuals and curves.

use castfx_core::config::SessionConfig;
use castfx_core::events::CastEvent;
use castfx_core::interfaces::{CurveEvaluator, Subject, VisualFactory};
use castfx_core::state::FrameReport;
use castfx_core::types::{CastId, SimTime};

use crate::cast::{Cast, CastEnv};
use crate::flying::FlyingObjectManager;
use crate::reap::Reaper;

pub struct Session<S> {
    config: SessionConfig,
    time: SimTime,
    flying: FlyingObjectManager,
    casts: Vec<Cast<S>>,
    next_cast_id: u32,
    reaper: Reaper,
    events: Vec<CastEvent>,
}

impl<S: Subject> Session<S> {
    pub fn new(config: SessionConfig) -> Self {
        let config = config.sanitized();
        tracing::debug!(?config, "session started");
        Self {
            config,
            time: SimTime::default(),
            flying: FlyingObjectManager::new(),
            casts: Vec::new(),
            next_cast_id: 0,
            reaper: Reaper::new(),
            events: Vec::new(),
        }
    }

    /// Begin a cast on `subject`. Register its actions through [`Session::cast_mut`].
    pub fn begin_cast(&mut self, subject: S) -> CastId {
        let id = CastId(self.next_cast_id);
        self.next_cast_id += 1;
        self.casts.push(Cast::new(id, subject));
        tracing::debug!(cast = id.0, "cast begun");
        id
    }

    pub fn cast(&self, id: CastId) -> Option<&Cast<S>> {
        self.casts.iter().find(|cast| cast.id() == id)
    }

    pub fn cast_mut(&mut self, id: CastId) -> Option<&mut Cast<S>> {
        self.casts.iter_mut().find(|cast| cast.id() == id)
    }

    pub fn casts(&self) -> &[Cast<S>] {
        &self.casts
    }

    /// Interrupt a live cast. It is removed on the next frame.
    /// Returns false if the cast is unknown or already interrupted.
    pub fn interrupt_cast(
        &mut self,
        id: CastId,
        visuals: &mut dyn VisualFactory,
        curves: &dyn CurveEvaluator,
    ) -> bool {
        let Some(cast) = self.casts.iter_mut().find(|cast| cast.id() == id) else {
            return false;
        };
        let mut env = CastEnv {
            flying: &mut self.flying,
            visuals: &mut *visuals,
            curves,
            events: &mut self.events,
        };
        cast.interrupt(&mut env)
    }

    /// Advance one fixed frame of `config.frame_dt()` seconds.
    pub fn tick(
        &mut self,
        visuals: &mut dyn VisualFactory,
        curves: &dyn CurveEvaluator,
    ) -> FrameReport {
        let dt = self.config.frame_dt();
        self.tick_dt(dt, visuals, curves)
    }

    /// Advance one frame of `dt` seconds (negative or NaN counts as zero).
    ///
    /// Flying objects tick before casts, so an object launched by an action
    /// this frame moves for the first time next frame.
    pub fn tick_dt(
        &mut self,
        dt: f32,
        visuals: &mut dyn VisualFactory,
        curves: &dyn CurveEvaluator,
    ) -> FrameReport {
        let dt = crate::sanitize_dt(dt);

        // 1. Flying objects
        self.flying.tick(dt, visuals, &mut self.events);

        // 2. Casts (effects, then due actions); reap the finished ones
        let mut env = CastEnv {
            flying: &mut self.flying,
            visuals: &mut *visuals,
            curves,
            events: &mut self.events,
        };
        self.reaper.scan(&mut self.casts, |cast| {
            if !cast.is_interrupted() {
                cast.tick(dt, &mut env);
            }
            if !cast.is_finished() {
                return false;
            }
            if !cast.is_interrupted() {
                tracing::debug!(cast = cast.id().0, "cast finished");
                env.events.push(CastEvent::CastFinished { cast: cast.id() });
            }
            true
        });
        self.reaper.reap(&mut self.casts);

        self.time.advance(dt);
        self.report()
    }

    fn report(&mut self) -> FrameReport {
        FrameReport {
            time: self.time,
            events: std::mem::take(&mut self.events),
            active_casts: self.casts.len(),
            flying_objects: self.flying.views(),
        }
    }

    /// End the session: interrupt every cast and release every flying object.
    /// Returns the events produced by the teardown.
    pub fn shutdown(
        mut self,
        visuals: &mut dyn VisualFactory,
        curves: &dyn CurveEvaluator,
    ) -> Vec<CastEvent> {
        let mut env = CastEnv {
            flying: &mut self.flying,
            visuals: &mut *visuals,
            curves,
            events: &mut self.events,
        };
        for cast in &mut self.casts {
            cast.interrupt(&mut env);
        }
        self.casts.clear();
        self.flying.shutdown(visuals);
        tracing::debug!(frames = self.time.frame, "session shut down");
        std::mem::take(&mut self.events)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn flying(&self) -> &FlyingObjectManager {
        &self.flying
    }

    /// Direct access for hosts that launch flying objects outside of casts.
    pub fn flying_mut(&mut self) -> &mut FlyingObjectManager {
        &mut self.flying
    }

    /// True when no cast and no flying object is alive.
    pub fn is_idle(&self) -> bool {
        self.casts.is_empty() && self.flying.is_empty()
    }
}
