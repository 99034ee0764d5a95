use std::str::FromStr;

use crate::{
    animation::{
        ease::Ease,
        props::{PropMap, PropertyState},
    },
    foundation::error::{ScrollweaveError, ScrollweaveResult},
    trigger::anchor::TriggerSpec,
};

/// What a step does to its targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Tween from the current value to `to`.
    To,
    /// Tween from `from` to the current value; renders `from` before it starts.
    From,
    /// Tween from `from` to `to`; renders `from` before it starts.
    FromTo,
    /// Jump to `to` (zero duration).
    Set,
    /// Zero-duration marker; the playhead reports its label when crossed.
    Call,
}

/// Where a step starts relative to the steps before it.
///
/// String form: `""` (sequential), `"1.5"` (absolute), `"+=0.5"` / `"-=0.4"` (relative to the
/// timeline end so far), `"<"` / `"<0.2"` (relative to the previous step's start).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Position {
    /// Right after everything added so far.
    #[default]
    Sequential,
    /// Absolute time in seconds.
    At(f64),
    /// Offset from the end of the timeline so far.
    AfterEnd(f64),
    /// Offset from the previous step's start.
    AfterStart(f64),
}

impl FromStr for Position {
    type Err = ScrollweaveError;

    fn from_str(s: &str) -> ScrollweaveResult<Self> {
        let s = s.trim();
        let num = |v: &str| -> ScrollweaveResult<f64> {
            let v = v.trim();
            if v.is_empty() {
                return Ok(0.0);
            }
            let parsed: f64 = v.parse().map_err(|_| {
                ScrollweaveError::animation(format!("invalid position offset '{v}'"))
            })?;
            if !parsed.is_finite() {
                return Err(ScrollweaveError::animation("position offset must be finite"));
            }
            Ok(parsed)
        };

        if s.is_empty() || s == ">" {
            return Ok(Self::Sequential);
        }
        if let Some(rest) = s.strip_prefix("+=") {
            return Ok(Self::AfterEnd(num(rest)?));
        }
        if let Some(rest) = s.strip_prefix("-=") {
            return Ok(Self::AfterEnd(-num(rest)?));
        }
        if let Some(rest) = s.strip_prefix('<') {
            let rest = rest.strip_prefix("+=").unwrap_or(rest);
            return Ok(Self::AfterStart(num(rest)?));
        }
        Ok(Self::At(num(s)?))
    }
}

impl TryFrom<String> for Position {
    type Error = ScrollweaveError;

    fn try_from(value: String) -> ScrollweaveResult<Self> {
        value.parse()
    }
}

impl From<Position> for String {
    fn from(value: Position) -> Self {
        match value {
            Position::Sequential => String::new(),
            Position::At(t) => format!("{t}"),
            Position::AfterEnd(o) if o < 0.0 => format!("-={}", -o),
            Position::AfterEnd(o) => format!("+={o}"),
            Position::AfterStart(o) => format!("<{o}"),
        }
    }
}

fn default_duration() -> f64 {
    0.5
}

fn default_ease() -> Ease {
    Ease::OutQuad
}

/// One declarative animation step.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Step {
    /// Step kind.
    pub kind: StepKind,
    /// Animated targets, in stagger order.
    #[serde(default)]
    pub targets: Vec<String>,
    /// Explicit start values (`from` / `from_to`).
    #[serde(default)]
    pub from: PropMap,
    /// End values (`to` / `from_to` / `set`).
    #[serde(default)]
    pub to: PropMap,
    /// Duration in seconds per target.
    #[serde(default = "default_duration")]
    pub duration: f64,
    /// Easing curve.
    #[serde(default = "default_ease")]
    pub ease: Ease,
    /// Delay between consecutive targets.
    #[serde(default)]
    pub stagger: f64,
    /// Placement inside the timeline.
    #[serde(default)]
    pub position: Position,
    /// Marker label (`call` steps).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Bind this step to its own viewport trigger instead of the owning timeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<TriggerSpec>,
}

fn props<'a>(values: impl IntoIterator<Item = (&'a str, f64)>) -> PropMap {
    values
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

impl Step {
    fn base(kind: StepKind, targets: &[&str]) -> Self {
        Self {
            kind,
            targets: targets.iter().map(|t| t.to_string()).collect(),
            from: PropMap::new(),
            to: PropMap::new(),
            duration: default_duration(),
            ease: default_ease(),
            stagger: 0.0,
            position: Position::Sequential,
            label: None,
            trigger: None,
        }
    }

    /// Tween targets to the given values.
    pub fn to<'a>(targets: &[&str], to: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self {
            to: props(to),
            ..Self::base(StepKind::To, targets)
        }
    }

    /// Tween targets from the given values back to their current values.
    pub fn from<'a>(targets: &[&str], from: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self {
            from: props(from),
            ..Self::base(StepKind::From, targets)
        }
    }

    /// Tween targets between explicit values.
    pub fn from_to<'a, 'b>(
        targets: &[&str],
        from: impl IntoIterator<Item = (&'a str, f64)>,
        to: impl IntoIterator<Item = (&'b str, f64)>,
    ) -> Self {
        Self {
            from: props(from),
            to: props(to),
            ..Self::base(StepKind::FromTo, targets)
        }
    }

    /// Jump targets to values.
    pub fn set<'a>(targets: &[&str], to: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self {
            to: props(to),
            duration: 0.0,
            ..Self::base(StepKind::Set, targets)
        }
    }

    /// Labelled marker.
    pub fn call(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            duration: 0.0,
            ..Self::base(StepKind::Call, &[])
        }
    }

    /// Set the duration.
    pub fn duration(mut self, secs: f64) -> Self {
        self.duration = secs;
        self
    }

    /// Set the ease.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Set the per-target stagger.
    pub fn stagger(mut self, secs: f64) -> Self {
        self.stagger = secs;
        self
    }

    /// Set the placement.
    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Bind the step to its own trigger.
    pub fn trigger(mut self, spec: TriggerSpec) -> Self {
        self.trigger = Some(spec);
        self
    }

    pub(crate) fn validate(&self, index: usize) -> ScrollweaveResult<()> {
        let err = |msg: &str| ScrollweaveError::animation(format!("step {index}: {msg}"));
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(err("duration must be finite and >= 0"));
        }
        if !self.stagger.is_finite() || self.stagger < 0.0 {
            return Err(err("stagger must be finite and >= 0"));
        }
        if self
            .from
            .values()
            .chain(self.to.values())
            .any(|v| !v.is_finite())
        {
            return Err(err("property values must be finite"));
        }
        match self.kind {
            StepKind::Call => {
                if self.label.as_deref().is_none_or(|l| l.trim().is_empty()) {
                    return Err(err("call steps need a label"));
                }
            }
            _ if self.targets.is_empty() => return Err(err("at least one target is required")),
            StepKind::To | StepKind::Set if self.to.is_empty() => {
                return Err(err("`to` values are required"));
            }
            StepKind::From if self.from.is_empty() => {
                return Err(err("`from` values are required"));
            }
            StepKind::FromTo if self.from.is_empty() || self.to.is_empty() => {
                return Err(err("`from` and `to` values are required"));
            }
            _ => {}
        }
        Ok(())
    }
}

/// How many times a timeline plays back to back.
///
/// JSON form: `{ "times": 2 }` for two extra loops, `"forever"` for an endless loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Repeat {
    /// Extra loops after the first play; 0 plays once.
    Times(u32),
    /// Loop until stopped.
    Forever,
}

impl Default for Repeat {
    fn default() -> Self {
        Self::Times(0)
    }
}

/// Ordered sequence of steps, optionally bound to one viewport trigger as a whole.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Steps in declaration order.
    #[serde(default)]
    pub steps: Vec<Step>,
    /// Trigger driving the whole timeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<TriggerSpec>,
    /// Values properties hold before any step touches them.
    #[serde(default)]
    pub base: PropertyState,
    /// Loop count of wall-clock playback.
    #[serde(default)]
    pub repeat: Repeat,
}

impl Timeline {
    /// Empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step.
    pub fn then(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Bind the whole timeline to a trigger.
    pub fn with_trigger(mut self, spec: TriggerSpec) -> Self {
        self.trigger = Some(spec);
        self
    }

    /// Loop the timeline.
    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Declare the resting value of a property.
    pub fn with_base(mut self, target: &str, property: &str, value: f64) -> Self {
        self.base.set(target, property, value);
        self
    }

    /// Split step-level triggers into their own timelines.
    ///
    /// Returns the remaining timeline (which keeps the timeline-level trigger, if any) and one
    /// single-step timeline per trigger-bound step. An absolute position on a split step becomes
    /// its delay; relative positions collapse to the start of the new timeline. Split steps play
    /// once; the loop count stays with the remainder.
    pub fn split_by_trigger(self) -> (Timeline, Vec<(TriggerSpec, Timeline)>) {
        let mut rest = Vec::with_capacity(self.steps.len());
        let mut split = Vec::new();
        for mut step in self.steps {
            match step.trigger.take() {
                Some(spec) => {
                    step.position = match step.position {
                        Position::At(t) => Position::At(t),
                        _ => Position::Sequential,
                    };
                    let tl = Timeline {
                        steps: vec![step],
                        trigger: None,
                        base: self.base.clone(),
                        repeat: Repeat::default(),
                    };
                    split.push((spec, tl));
                }
                None => rest.push(step),
            }
        }
        let main = Timeline {
            steps: rest,
            trigger: self.trigger,
            base: self.base,
            repeat: self.repeat,
        };
        (main, split)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;
