//! Frame report: the visible scheduler state handed to the host after each frame.

use serde::{Deserialize, Serialize};

use crate::events::CastEvent;
use crate::types::{FlyingObjectId, SimTime, Vec3};

/// Everything that happened in one frame plus what is still alive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    pub time: SimTime,
    /// Events in the order they happened during the frame.
    pub events: Vec<CastEvent>,
    pub active_casts: usize,
    pub flying_objects: Vec<FlyingObjectView>,
}

/// A live flying object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlyingObjectView {
    pub id: FlyingObjectId,
    pub position: Vec3,
    pub elapsed: f32,
    pub duration: f32,
}
