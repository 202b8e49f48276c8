//! Arena of named animation parameters.

use tracing::debug;

use super::phase::Phase;

/// Index of a parameter inside a [`ParameterStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(usize);

/// A named scalar with a legal range and an optional running timeline.
#[derive(Debug, Clone)]
pub struct AnimationParameter {
    pub name: &'static str,
    pub min: f32,
    pub max: f32,
    value: f32,
    start_value: f32,
    started_at_ms: f64,
    timeline: Option<Phase>,
}

impl AnimationParameter {
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_animating(&self) -> bool {
        self.timeline.is_some()
    }

    pub fn in_range(&self) -> bool {
        (self.min..=self.max).contains(&self.value)
    }
}

/// Owns every animated scalar of a view.
///
/// Values are pulled: [`ParameterStore::tick`] re-evaluates each timeline
/// at the given clock time. After [`ParameterStore::stop_all`] ticks are
/// silent no-ops and values stay frozen.
#[derive(Debug, Default)]
pub struct ParameterStore {
    params: Vec<AnimationParameter>,
    stopped: bool,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parameter with its initial value and legal range.
    pub fn add(&mut self, name: &'static str, initial: f32, min: f32, max: f32) -> ParamId {
        debug_assert!(min <= max, "{name}: empty range");
        debug_assert!(
            (min..=max).contains(&initial),
            "{name}: initial value {initial} outside [{min}, {max}]"
        );
        self.params.push(AnimationParameter {
            name,
            min,
            max,
            value: initial,
            start_value: initial,
            started_at_ms: 0.0,
            timeline: None,
        });
        ParamId(self.params.len() - 1)
    }

    /// Start `timeline` on `id` from its current value at `now_ms`.
    pub fn animate(&mut self, id: ParamId, timeline: Phase, now_ms: f64) {
        if self.stopped {
            return;
        }
        let Some(param) = self.params.get_mut(id.0) else {
            return;
        };
        debug_assert!(
            timeline
                .targets()
                .iter()
                .all(|t| (param.min..=param.max).contains(t)),
            "{}: timeline target outside [{}, {}]",
            param.name,
            param.min,
            param.max
        );
        param.start_value = param.value;
        param.started_at_ms = now_ms;
        param.timeline = Some(timeline);
    }

    /// Re-evaluate every running timeline at `now_ms`.
    pub fn tick(&mut self, now_ms: f64) {
        if self.stopped {
            return;
        }
        for param in &mut self.params {
            if let Some(timeline) = &param.timeline {
                param.value = timeline.value_at(param.start_value, now_ms - param.started_at_ms);
            }
        }
    }

    /// Cancel every timeline. Idempotent.
    pub fn stop_all(&mut self) {
        if self.stopped {
            return;
        }
        for param in &mut self.params {
            param.timeline = None;
        }
        self.stopped = true;
        debug!(count = self.params.len(), "animation parameters stopped");
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn value(&self, id: ParamId) -> f32 {
        self.params.get(id.0).map_or(0.0, |p| p.value)
    }

    pub fn get(&self, id: ParamId) -> Option<&AnimationParameter> {
        self.params.get(id.0)
    }

    pub fn find(&self, name: &str) -> Option<ParamId> {
        self.params.iter().position(|p| p.name == name).map(ParamId)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnimationParameter> {
        self.params.iter()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
