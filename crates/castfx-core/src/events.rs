//! Events emitted by the scheduler for host feedback (audio, UI, logs).

use serde::{Deserialize, Serialize};

use crate::descriptors::ActionTag;
use crate::types::{CastId, FlyingObjectId, Vec3};

/// Kind of a running effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectTag {
    Move,
    CurveParam,
    /// Host-defined effect started through `Cast::start_effect`.
    Custom,
}

/// Something that happened during a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CastEvent {
    /// A scheduled action's delay elapsed and its payload ran.
    /// `seq` is the action's registration ordinal within its cast.
    ActionFired {
        cast: CastId,
        seq: u32,
        action: ActionTag,
    },
    /// An effect was created (it may still be counting down its delay).
    EffectStarted { cast: CastId, effect: EffectTag },
    /// An effect reached its end, naturally or by force.
    EffectEnded {
        cast: CastId,
        effect: EffectTag,
        forced: bool,
    },
    /// A flying object was registered with the manager.
    FlyingObjectSpawned { id: FlyingObjectId, position: Vec3 },
    /// A flying object ended and was removed from the manager.
    FlyingObjectExpired { id: FlyingObjectId, position: Vec3 },
    /// A cast finished its schedule and all of its effects.
    CastFinished { cast: CastId },
    /// A cast was interrupted before finishing.
    CastInterrupted { cast: CastId },
}
