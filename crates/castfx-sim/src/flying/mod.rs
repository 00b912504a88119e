//! Flying objects: free-standing, positioned, time-boxed entities.
//!
//! An instance moves along its trajectory until its duration elapses, then
//! ends and releases its visual. There is no delay phase:
//!
//! ```text
//! Alive --(elapsed >= duration)--> Ended
//!   \_________ forced_end ________/
//! ```
//!
//! Instances live in the session's [`FlyingObjectManager`] from the moment
//! they are spawned until the frame after they end.

pub mod manager;
pub mod movement;

use castfx_core::interfaces::{VisualFactory, VisualHandle};
use castfx_core::state::FlyingObjectView;
use castfx_core::types::{FlyingObjectId, Vec3, VisualTemplateId};

pub use manager::FlyingObjectManager;
pub use movement::{BallisticMovement, Movement, StraightMovement};

/// One flying object and the visual it exclusively owns.
pub struct FlyingObjectInstance {
    id: FlyingObjectId,
    position: Vec3,
    elapsed: f32,
    duration: f32,
    /// `None` once released.
    visual: Option<VisualHandle>,
    movement: Box<dyn Movement>,
    ended: bool,
}

impl FlyingObjectInstance {
    /// Instantiate the visual from `template` and place it at `position`.
    ///
    /// A non-positive duration ends the instance immediately, releasing the
    /// visual before this returns.
    pub(crate) fn start(
        id: FlyingObjectId,
        position: Vec3,
        duration: f32,
        template: VisualTemplateId,
        movement: Box<dyn Movement>,
        visuals: &mut dyn VisualFactory,
    ) -> Self {
        let visual = visuals.instantiate(template);
        visuals.set_position(&visual, position);

        let mut instance = Self {
            id,
            position,
            elapsed: 0.0,
            duration: crate::sanitize_dt(duration),
            visual: Some(visual),
            movement,
            ended: false,
        };
        if instance.duration <= 0.0 {
            instance.finish(visuals);
        }
        instance
    }

    /// Advance by `dt`. Returns true if the instance ended during this call.
    pub fn tick(&mut self, dt: f32, visuals: &mut dyn VisualFactory) -> bool {
        if self.ended {
            return false;
        }
        let dt = crate::sanitize_dt(dt);
        self.elapsed += dt;
        self.movement.on_update(&mut self.position, dt);
        if let Some(visual) = &self.visual {
            visuals.set_position(visual, self.position);
        }
        if self.elapsed >= self.duration {
            self.finish(visuals);
            return true;
        }
        false
    }

    /// End the instance now. Returns false if it had already ended.
    pub fn forced_end(&mut self, visuals: &mut dyn VisualFactory) -> bool {
        if self.ended {
            return false;
        }
        self.elapsed = self.duration;
        self.finish(visuals);
        true
    }

    fn finish(&mut self, visuals: &mut dyn VisualFactory) {
        self.ended = true;
        self.movement.on_end(self.position);
        if let Some(visual) = self.visual.take() {
            visuals.destroy(visual);
        }
    }

    pub fn id(&self) -> FlyingObjectId {
        self.id
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// The owned visual, until it is released.
    pub fn visual(&self) -> Option<&VisualHandle> {
        self.visual.as_ref()
    }

    pub fn view(&self) -> FlyingObjectView {
        FlyingObjectView {
            id: self.id,
            position: self.position,
            elapsed: self.elapsed,
            duration: self.duration,
        }
    }
}

impl std::fmt::Debug for FlyingObjectInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlyingObjectInstance")
            .field("id", &self.id)
            .field("position", &self.position)
            .field("elapsed", &self.elapsed)
            .field("duration", &self.duration)
            .field("visual", &self.visual)
            .field("ended", &self.ended)
            .finish()
    }
}
