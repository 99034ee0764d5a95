use std::collections::BTreeMap;

use crate::{
    animation::{ease::Ease, props::PropertyState},
    foundation::error::ScrollweaveResult,
    foundation::math::lerp,
    timeline::model::{Position, Repeat, StepKind, Timeline},
};

/// One property tween with its absolute start time resolved.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScheduledTween {
    /// Animated target.
    pub target: String,
    /// Animated property.
    pub property: String,
    /// Absolute start in seconds.
    pub start: f64,
    /// Duration in seconds.
    pub duration: f64,
    /// Start value.
    pub from: f64,
    /// End value.
    pub to: f64,
    /// Easing curve.
    pub ease: Ease,
    /// Render `from` before the tween starts.
    pub immediate: bool,
}

impl ScheduledTween {
    /// Absolute end time.
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    fn value_at(&self, t: f64) -> f64 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let p = ((t - self.start) / self.duration).clamp(0.0, 1.0);
        lerp(self.from, self.to, self.ease.apply(p))
    }
}

/// Labelled marker produced by a `call` step.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Marker {
    /// Absolute time in seconds.
    pub time: f64,
    /// Label reported when crossed.
    pub label: String,
}

/// A timeline with every position, stagger and implicit value resolved.
///
/// Sampling is a pure function of time, so seeking backwards replays the timeline in reverse
/// exactly instead of re-firing it.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct CompiledTimeline {
    tweens: Vec<ScheduledTween>,
    markers: Vec<Marker>,
    base: PropertyState,
    duration: f64,
    repeat: Repeat,
}

/// Resting value used for properties with no declared base.
pub fn default_property_value(property: &str) -> f64 {
    match property {
        "opacity" | "scale" | "scaleX" | "scaleY" | "scaleZ" => 1.0,
        _ => 0.0,
    }
}

struct RawTween {
    target: String,
    property: String,
    start: f64,
    duration: f64,
    from: Option<f64>,
    to: Option<f64>,
    ease: Ease,
    immediate: bool,
    order: usize,
}

impl Timeline {
    /// Resolve the step list into a [`CompiledTimeline`].
    ///
    /// `Sequential` and `AfterEnd` positions are measured from the end of everything added so
    /// far; `AfterStart` from the previous step's start. Negative starts clamp to 0. Implicit
    /// start/end values are taken from the latest earlier-starting tween of the same property,
    /// else the timeline base, else [`default_property_value`].
    #[tracing::instrument(skip_all, fields(steps = self.steps.len()))]
    pub fn compile(&self) -> ScrollweaveResult<CompiledTimeline> {
        let mut raw = Vec::new();
        let mut markers = Vec::new();
        let mut prev_start = 0.0f64;
        let mut end = 0.0f64;

        for (i, step) in self.steps.iter().enumerate() {
            step.validate(i)?;

            let start = match step.position {
                Position::Sequential => end,
                Position::At(t) => t,
                Position::AfterEnd(o) => end + o,
                Position::AfterStart(o) => prev_start + o,
            }
            .max(0.0);
            let duration = match step.kind {
                StepKind::Set | StepKind::Call => 0.0,
                _ => step.duration,
            };

            if step.kind == StepKind::Call {
                markers.push(Marker {
                    time: start,
                    label: step.label.clone().unwrap_or_default(),
                });
                prev_start = start;
                end = end.max(start);
                continue;
            }

            let immediate = matches!(step.kind, StepKind::From | StepKind::FromTo);
            for (ti, target) in step.targets.iter().enumerate() {
                let t_start = start + step.stagger * ti as f64;
                let mut names: Vec<&String> = step.from.keys().chain(step.to.keys()).collect();
                names.sort();
                names.dedup();
                for property in names {
                    raw.push(RawTween {
                        target: target.clone(),
                        property: property.clone(),
                        start: t_start,
                        duration,
                        from: step.from.get(property).copied(),
                        to: step.to.get(property).copied(),
                        ease: step.ease,
                        immediate,
                        order: raw.len(),
                    });
                }
            }

            let span = step.stagger * step.targets.len().saturating_sub(1) as f64 + duration;
            prev_start = start;
            end = end.max(start + span);
        }

        raw.sort_by(|a, b| a.start.total_cmp(&b.start).then(a.order.cmp(&b.order)));

        let mut current: BTreeMap<(String, String), f64> = BTreeMap::new();
        let mut tweens = Vec::with_capacity(raw.len());
        for r in raw {
            let key = (r.target.clone(), r.property.clone());
            let cur = current.get(&key).copied().unwrap_or_else(|| {
                self.base
                    .get(&r.target, &r.property)
                    .unwrap_or_else(|| default_property_value(&r.property))
            });
            let from = r.from.unwrap_or(cur);
            let to = r.to.unwrap_or(cur);
            current.insert(key, to);
            tweens.push(ScheduledTween {
                target: r.target,
                property: r.property,
                start: r.start,
                duration: r.duration,
                from,
                to,
                ease: r.ease,
                immediate: r.immediate,
            });
        }

        markers.sort_by(|a, b| a.time.total_cmp(&b.time));
        tracing::trace!(tweens = tweens.len(), duration = end, "timeline compiled");

        Ok(CompiledTimeline {
            tweens,
            markers,
            base: self.base.clone(),
            duration: end,
            repeat: self.repeat,
        })
    }
}

impl CompiledTimeline {
    /// Total duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Loop count of wall-clock playback.
    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    /// Scheduled tweens sorted by start time.
    pub fn tweens(&self) -> &[ScheduledTween] {
        &self.tweens
    }

    /// Markers sorted by time.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Every animated property at time `t`.
    ///
    /// Before a property's first tween starts it shows that tween's `from` when the tween renders
    /// immediately (`from` / `from_to`), otherwise its base value.
    pub fn values_at(&self, t: f64) -> PropertyState {
        let mut out = PropertyState::new();
        for tw in &self.tweens {
            if out.get(&tw.target, &tw.property).is_some() {
                continue;
            }
            let rest = if tw.immediate {
                tw.from
            } else {
                self.base
                    .get(&tw.target, &tw.property)
                    .unwrap_or_else(|| default_property_value(&tw.property))
            };
            out.set(&tw.target, &tw.property, rest);
        }
        for tw in &self.tweens {
            if t >= tw.start {
                out.set(&tw.target, &tw.property, tw.value_at(t));
            }
        }
        out
    }

    /// Labels crossed when moving the playhead from `from` to `to`, in crossing order.
    ///
    /// Forward moves report markers in `(from, to]`, backward moves `(to, from]`. Markers placed
    /// at 0 are reported both when a forward move leaves 0 and when a backward move lands on it.
    pub fn markers_crossed(&self, from: f64, to: f64) -> Vec<&str> {
        if to > from {
            self.markers
                .iter()
                .filter(|m| (m.time > from || (from <= 0.0 && m.time <= 0.0)) && m.time <= to)
                .map(|m| m.label.as_str())
                .collect()
        } else if to < from {
            self.markers
                .iter()
                .rev()
                .filter(|m| m.time <= from && (m.time > to || (to <= 0.0 && m.time <= 0.0)))
                .map(|m| m.label.as_str())
                .collect()
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/schedule.rs"]
mod tests;
