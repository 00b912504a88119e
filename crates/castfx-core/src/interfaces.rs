//! Narrow contracts to engine-side collaborators.
//!
//! The scheduler never renders, animates or loads anything itself. Hosts
//! implement these traits over their own entity, scene and curve systems.

use crate::types::{AuxParamKind, CurveHandle, Vec3, VisualTemplateId};

/// The entity effects and actions mutate.
pub trait Subject {
    fn position(&self) -> Vec3;

    fn set_position(&mut self, position: Vec3);

    /// Cross-fade into the named animation over `blend_secs`.
    fn play_animation(&mut self, name: &str, blend_secs: f32);

    /// Mutable access to an auxiliary parameter, if the subject has one of
    /// this kind. `None` is a valid answer, not an error.
    fn aux_param_mut(&mut self, kind: AuxParamKind) -> Option<&mut f32>;
}

impl<S: Subject + ?Sized> Subject for &mut S {
    fn position(&self) -> Vec3 {
        (**self).position()
    }

    fn set_position(&mut self, position: Vec3) {
        (**self).set_position(position);
    }

    fn play_animation(&mut self, name: &str, blend_secs: f32) {
        (**self).play_animation(name, blend_secs);
    }

    fn aux_param_mut(&mut self, kind: AuxParamKind) -> Option<&mut f32> {
        (**self).aux_param_mut(kind)
    }
}

/// Opaque handle to a host-side visual.
///
/// Deliberately neither `Clone` nor `Copy`: whoever holds it owns the visual,
/// and `VisualFactory::destroy` consumes it, so a handle is released at most once.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct VisualHandle(u64);

impl VisualHandle {
    /// Wrap a host-side identifier. Only visual factories should call this.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Creates, moves and destroys visuals.
pub trait VisualFactory {
    fn instantiate(&mut self, template: VisualTemplateId) -> VisualHandle;

    fn set_position(&mut self, handle: &VisualHandle, position: Vec3);

    fn destroy(&mut self, handle: VisualHandle);
}

/// Samples time-indexed curves. Domain and extrapolation are the provider's business.
pub trait CurveEvaluator {
    fn evaluate(&self, curve: CurveHandle, t: f32) -> f32;
}
