//! Session-scoped registry of live flying objects.
//!
//! Created with the session, ticked once per frame by the session driver and
//! torn down by [`FlyingObjectManager::shutdown`] when the session ends.

use castfx_core::events::CastEvent;
use castfx_core::interfaces::VisualFactory;
use castfx_core::state::FlyingObjectView;
use castfx_core::types::{FlyingObjectId, Vec3, VisualTemplateId};

use super::{FlyingObjectInstance, Movement};
use crate::reap::Reaper;

#[derive(Debug, Default)]
pub struct FlyingObjectManager {
    active: Vec<FlyingObjectInstance>,
    next_id: u32,
    reaper: Reaper,
}

impl FlyingObjectManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a flying object and register it immediately.
    ///
    /// The new object is ticked from the next manager tick on.
    pub fn spawn(
        &mut self,
        position: Vec3,
        duration: f32,
        template: VisualTemplateId,
        movement: Box<dyn Movement>,
        visuals: &mut dyn VisualFactory,
    ) -> FlyingObjectId {
        let id = FlyingObjectId(self.next_id);
        self.next_id += 1;

        let instance =
            FlyingObjectInstance::start(id, position, duration, template, movement, visuals);
        tracing::debug!(id = id.0, ?position, duration, "flying object spawned");
        self.active.push(instance);
        id
    }

    /// Tick every live object, then remove the ones that have ended.
    ///
    /// Objects ended by `forced_end` since the last tick are removed here as
    /// well. Survivors keep their order. Returns how many were removed.
    pub fn tick(
        &mut self,
        dt: f32,
        visuals: &mut dyn VisualFactory,
        events: &mut Vec<CastEvent>,
    ) -> usize {
        if self.active.is_empty() {
            return 0;
        }
        self.reaper.scan(&mut self.active, |instance| {
            instance.tick(dt, visuals);
            if !instance.is_ended() {
                return false;
            }
            tracing::debug!(id = instance.id().0, "flying object expired");
            events.push(CastEvent::FlyingObjectExpired {
                id: instance.id(),
                position: instance.position(),
            });
            true
        });
        self.reaper.reap(&mut self.active)
    }

    /// End one object early. Returns false if it is unknown or already ended.
    /// It stays registered until the next tick removes it.
    pub fn forced_end(&mut self, id: FlyingObjectId, visuals: &mut dyn VisualFactory) -> bool {
        match self.active.iter_mut().find(|instance| instance.id() == id) {
            Some(instance) => {
                let ended = instance.forced_end(visuals);
                if ended {
                    tracing::debug!(id = id.0, "flying object forced to end");
                }
                ended
            }
            None => false,
        }
    }

    /// End and drop every object, releasing all visuals.
    pub fn shutdown(&mut self, visuals: &mut dyn VisualFactory) {
        for instance in &mut self.active {
            instance.forced_end(visuals);
        }
        if !self.active.is_empty() {
            tracing::debug!(count = self.active.len(), "flying object manager shut down");
        }
        self.active.clear();
    }

    pub fn get(&self, id: FlyingObjectId) -> Option<&FlyingObjectInstance> {
        self.active.iter().find(|instance| instance.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlyingObjectInstance> {
        self.active.iter()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn views(&self) -> Vec<FlyingObjectView> {
        self.active.iter().map(FlyingObjectInstance::view).collect()
    }
}

impl Drop for FlyingObjectManager {
    fn drop(&mut self) {
        let live = self.active.iter().filter(|i| i.visual().is_some()).count();
        if live > 0 {
            tracing::warn!(live, "flying object manager dropped without shutdown; visuals leaked");
        }
    }
}
