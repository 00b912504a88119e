//! Fundamental geometric, identifier and timing types.

use serde::{Deserialize, Serialize};

/// World-space vector (meters). x = East, y = North, z = Up.
pub use glam::Vec3;

/// Identifier of a flying object, unique within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FlyingObjectId(pub u32);

/// Identifier of a cast, unique within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CastId(pub u32);

/// Template a visual is instantiated from. Resolved by the host's visual factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisualTemplateId(pub u32);

/// Opaque handle to a curve owned by the curve provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurveHandle(pub u32);

/// Auxiliary parameters a subject may expose to curve-driven effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuxParamKind {
    /// Material opacity (0 = invisible, 1 = opaque).
    Opacity,
    /// Dissolve threshold used by burn-away shaders.
    Dissolve,
    /// Emission intensity multiplier.
    Emission,
}

/// Session time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of frames driven so far.
    pub frame: u64,
    /// Accumulated simulated seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.frame += 1;
        self.elapsed_secs += f64::from(dt);
    }
}
