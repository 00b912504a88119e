//! Action descriptors: immutable templates for delayed actions.
//!
//! A descriptor is built once (by whatever loads abilities) and shared by
//! `Arc` across every schedule that registers it. Nothing here mutates after
//! construction.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_GRAVITY;
use crate::types::{AuxParamKind, CurveHandle, Vec3, VisualTemplateId};

/// Immutable description of one delayed action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionDescriptor {
    kind: ActionKind,
    duration: f32,
}

/// What an action does when its delay elapses.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionKind {
    /// Start a move effect on the subject: `position += direction * speed * dt`.
    Move { direction: Vec3, speed: f32 },
    /// Trigger an animation on the subject directly.
    Animation { name: String, blend_secs: f32 },
    /// Start a curve-driven effect on one of the subject's auxiliary parameters.
    CurveParam { param: AuxParamKind, curve: CurveHandle },
    /// Launch a flying object from the subject's position.
    FlyingObject {
        template: VisualTemplateId,
        /// Spawn offset relative to the subject's position.
        offset: Vec3,
        movement: MovementSpec,
    },
}

/// Trajectory of a flying object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MovementSpec {
    /// Constant direction and speed, fixed at creation.
    Straight { direction: Vec3, speed: f32 },
    /// Initial velocity under constant acceleration.
    Ballistic { velocity: Vec3, gravity: Vec3 },
}

/// Coarse action kind, used in events and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionTag {
    Move,
    Animation,
    CurveParam,
    FlyingObject,
}

impl ActionDescriptor {
    pub fn new(kind: ActionKind, duration: f32) -> Self {
        Self { kind, duration }
    }

    /// Shorthand for a shared move descriptor.
    pub fn movement(duration: f32, direction: Vec3, speed: f32) -> Arc<Self> {
        Arc::new(Self::new(ActionKind::Move { direction, speed }, duration))
    }

    /// Shorthand for a shared animation descriptor.
    pub fn animation(duration: f32, name: impl Into<String>, blend_secs: f32) -> Arc<Self> {
        Arc::new(Self::new(
            ActionKind::Animation {
                name: name.into(),
                blend_secs,
            },
            duration,
        ))
    }

    /// Shorthand for a shared curve-parameter descriptor.
    pub fn curve_param(duration: f32, param: AuxParamKind, curve: CurveHandle) -> Arc<Self> {
        Arc::new(Self::new(ActionKind::CurveParam { param, curve }, duration))
    }

    /// Shorthand for a shared flying-object descriptor.
    pub fn flying_object(
        duration: f32,
        template: VisualTemplateId,
        offset: Vec3,
        movement: MovementSpec,
    ) -> Arc<Self> {
        Arc::new(Self::new(
            ActionKind::FlyingObject {
                template,
                offset,
                movement,
            },
            duration,
        ))
    }

    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    /// Seconds the action's payload runs for once fired.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn tag(&self) -> ActionTag {
        self.kind.tag()
    }
}

impl ActionKind {
    pub fn tag(&self) -> ActionTag {
        match self {
            Self::Move { .. } => ActionTag::Move,
            Self::Animation { .. } => ActionTag::Animation,
            Self::CurveParam { .. } => ActionTag::CurveParam,
            Self::FlyingObject { .. } => ActionTag::FlyingObject,
        }
    }
}

impl MovementSpec {
    /// Straight-line trajectory.
    pub fn straight(direction: Vec3, speed: f32) -> Self {
        Self::Straight { direction, speed }
    }

    /// Ballistic trajectory under default gravity.
    pub fn ballistic(velocity: Vec3) -> Self {
        Self::Ballistic {
            velocity,
            gravity: DEFAULT_GRAVITY,
        }
    }
}
