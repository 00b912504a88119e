//! Headless collaborators: in-memory subject, visual factory and curves.
//!
//! Used by the harness binary and the tests to drive a session without an
//! engine. They record what was done to them so runs can be inspected.

use std::collections::{BTreeMap, HashMap};

use castfx_core::interfaces::{CurveEvaluator, Subject, VisualFactory, VisualHandle};
use castfx_core::types::{AuxParamKind, CurveHandle, Vec3, VisualTemplateId};

/// A subject that is just data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadlessSubject {
    pub position: Vec3,
    /// Every animation played, in order: `(name, blend_secs)`.
    pub animations: Vec<(String, f32)>,
    pub aux_params: HashMap<AuxParamKind, f32>,
}

impl HeadlessSubject {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Give the subject an auxiliary parameter with an initial value.
    pub fn with_param(mut self, kind: AuxParamKind, value: f32) -> Self {
        self.aux_params.insert(kind, value);
        self
    }

    pub fn param(&self, kind: AuxParamKind) -> Option<f32> {
        self.aux_params.get(&kind).copied()
    }
}

impl Subject for HeadlessSubject {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn play_animation(&mut self, name: &str, blend_secs: f32) {
        self.animations.push((name.to_owned(), blend_secs));
    }

    fn aux_param_mut(&mut self, kind: AuxParamKind) -> Option<&mut f32> {
        self.aux_params.get_mut(&kind)
    }
}

/// A visual that exists only as a map entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlessVisual {
    pub template: VisualTemplateId,
    pub position: Vec3,
}

/// Visual factory that tracks live visuals and every release.
#[derive(Debug, Default)]
pub struct HeadlessVisuals {
    next_raw: u64,
    live: BTreeMap<u64, HeadlessVisual>,
    /// Raw ids of released handles, in release order.
    pub destroyed: Vec<u64>,
    /// Releases of handles that were not live. Always zero unless something is broken.
    pub double_releases: u32,
}

impl HeadlessVisuals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn get(&self, raw: u64) -> Option<&HeadlessVisual> {
        self.live.get(&raw)
    }

    /// Total visuals ever created.
    pub fn created_count(&self) -> u64 {
        self.next_raw
    }
}

impl VisualFactory for HeadlessVisuals {
    fn instantiate(&mut self, template: VisualTemplateId) -> VisualHandle {
        let raw = self.next_raw;
        self.next_raw += 1;
        self.live.insert(
            raw,
            HeadlessVisual {
                template,
                position: Vec3::ZERO,
            },
        );
        VisualHandle::new(raw)
    }

    fn set_position(&mut self, handle: &VisualHandle, position: Vec3) {
        if let Some(visual) = self.live.get_mut(&handle.raw()) {
            visual.position = position;
        }
    }

    fn destroy(&mut self, handle: VisualHandle) {
        let raw = handle.raw();
        if self.live.remove(&raw).is_none() {
            self.double_releases += 1;
        }
        self.destroyed.push(raw);
    }
}

/// Piecewise-linear curves keyed by handle. Clamps outside the key range;
/// unknown handles evaluate to zero.
#[derive(Debug, Clone, Default)]
pub struct CurveTable {
    curves: HashMap<CurveHandle, Vec<(f32, f32)>>,
}

impl CurveTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a curve from `(time, value)` keys. Keys are sorted by time.
    pub fn insert(&mut self, handle: CurveHandle, mut keys: Vec<(f32, f32)>) {
        keys.sort_by(|a, b| a.0.total_cmp(&b.0));
        self.curves.insert(handle, keys);
    }

    pub fn with(mut self, handle: CurveHandle, keys: Vec<(f32, f32)>) -> Self {
        self.insert(handle, keys);
        self
    }
}

impl CurveEvaluator for CurveTable {
    fn evaluate(&self, curve: CurveHandle, t: f32) -> f32 {
        let Some(keys) = self.curves.get(&curve) else {
            return 0.0;
        };
        let (Some(first), Some(last)) = (keys.first(), keys.last()) else {
            return 0.0;
        };
        if t <= first.0 {
            return first.1;
        }
        if t >= last.0 {
            return last.1;
        }
        for pair in keys.windows(2) {
            let (t0, v0) = pair[0];
            let (t1, v1) = pair[1];
            if t <= t1 {
                let span = t1 - t0;
                if span <= f32::EPSILON {
                    return v1;
                }
                return v0 + (v1 - v0) * ((t - t0) / span);
            }
        }
        last.1
    }
}
