//! Curve-parameter effect: drives one auxiliary subject parameter from a curve.
//!
//! Each active tick samples the curve at the effect's elapsed time and writes
//! the value into the subject's parameter of the configured kind. On end the
//! curve is sampled at the full duration, so the final value does not depend
//! on how the frames fell. A subject without that parameter is not an error:
//! updates are skipped.

use castfx_core::events::EffectTag;
use castfx_core::types::{AuxParamKind, CurveHandle};

use super::{EffectCx, EffectHooks};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParamEffect {
    param: AuxParamKind,
    curve: CurveHandle,
    missing_logged: bool,
}

impl CurveParamEffect {
    pub fn new(param: AuxParamKind, curve: CurveHandle) -> Self {
        Self {
            param,
            curve,
            missing_logged: false,
        }
    }

    pub fn param(&self) -> AuxParamKind {
        self.param
    }

    fn write(&mut self, cx: &mut EffectCx<'_>, t: f32) {
        let value = cx.curves.evaluate(self.curve, t);
        match cx.subject.aux_param_mut(self.param) {
            Some(slot) => *slot = value,
            None => {
                if !self.missing_logged {
                    self.missing_logged = true;
                    tracing::debug!(
                        param = ?self.param,
                        "subject has no auxiliary parameter; curve updates skipped"
                    );
                }
            }
        }
    }
}

impl EffectHooks for CurveParamEffect {
    fn tag(&self) -> EffectTag {
        EffectTag::CurveParam
    }

    fn on_start(&mut self, cx: &mut EffectCx<'_>) {
        self.write(cx, 0.0);
    }

    fn on_update(&mut self, cx: &mut EffectCx<'_>, _dt: f32, elapsed: f32) {
        self.write(cx, elapsed);
    }

    fn on_end(&mut self, cx: &mut EffectCx<'_>, duration: f32) {
        self.write(cx, duration);
    }
}
