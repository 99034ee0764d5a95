use crate::{
    animation::{ease::Ease, props::PropertyState},
    foundation::error::{ScrollweaveError, ScrollweaveResult},
    timeline::{
        model::Timeline,
        player::{TimelineEvent, TimelinePlayer},
    },
    trigger::{
        anchor::{ToggleAction, ToggleActions, TriggerMode, TriggerSpec},
        registry::{TriggerDescriptor, TriggerEvent, TriggerEventKind, TriggerKey},
    },
};

const SCRUB_SNAP: f64 = 1e-4;

/// Timeline event tagged with where it came from.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScopeEvent {
    /// Owning scope.
    pub scope: String,
    /// Slot of the timeline inside the scope.
    pub slot: usize,
    /// What happened.
    pub event: TimelineEvent,
}

#[derive(Clone, Debug)]
enum Driver {
    Immediate,
    Toggle {
        spec: TriggerSpec,
        actions: ToggleActions,
    },
    Scrub {
        spec: TriggerSpec,
        lag: f64,
        target: f64,
        smoothed: f64,
    },
}

#[derive(Clone, Debug)]
struct Slot {
    player: TimelinePlayer,
    driver: Driver,
}

/// Owner of every timeline and trigger created by one mounted component.
///
/// Setup code registers timelines; a single [`AnimationScope::dispose`] releases all of them. The
/// scope publishes its triggers as a declarative descriptor list for the registry to reconcile.
#[derive(Clone, Debug)]
pub struct AnimationScope {
    name: String,
    slots: Vec<Slot>,
    disposed: bool,
}

impl AnimationScope {
    /// Empty scope.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: Vec::new(),
            disposed: false,
        }
    }

    /// Scope name; prefixes its trigger keys.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of registered timelines.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True after [`AnimationScope::dispose`].
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Register a timeline and return the slots it occupies.
    ///
    /// Steps bound to their own trigger become separate slots. The remainder plays immediately
    /// unless the timeline carries a trigger. Nothing is registered when compilation fails.
    pub fn add(&mut self, timeline: Timeline) -> ScrollweaveResult<Vec<usize>> {
        if self.disposed {
            return Err(ScrollweaveError::validation(format!(
                "scope '{}' is disposed",
                self.name
            )));
        }

        let (main, split) = timeline.split_by_trigger();
        let mut pending = Vec::with_capacity(split.len() + 1);
        if !main.steps.is_empty() {
            let spec = main.trigger.clone();
            pending.push((main.compile()?, spec));
        }
        for (spec, tl) in split {
            pending.push((tl.compile()?, Some(spec)));
        }

        let mut slots = Vec::with_capacity(pending.len());
        for (compiled, spec) in pending {
            let mut player = TimelinePlayer::new(compiled);
            let driver = match spec {
                None => {
                    player.play();
                    Driver::Immediate
                }
                Some(spec) => match spec.mode {
                    TriggerMode::Toggle(actions) => Driver::Toggle { spec, actions },
                    TriggerMode::Scrub { lag } => Driver::Scrub {
                        spec,
                        lag,
                        target: 0.0,
                        smoothed: 0.0,
                    },
                },
            };
            slots.push(self.slots.len());
            self.slots.push(Slot { player, driver });
        }
        tracing::trace!(scope = %self.name, slots = slots.len(), "timeline registered");
        Ok(slots)
    }

    /// Triggers this scope wants registered.
    pub fn descriptors(&self) -> Vec<TriggerDescriptor> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| {
                let spec = match &s.driver {
                    Driver::Immediate => return None,
                    Driver::Toggle { spec, .. } | Driver::Scrub { spec, .. } => spec,
                };
                Some(TriggerDescriptor {
                    key: TriggerKey::new(self.name.clone(), i),
                    spec: spec.clone(),
                })
            })
            .collect()
    }

    /// Apply a registry event addressed to this scope.
    ///
    /// Toggle actions only change how the playhead moves; what it crosses is reported by the next
    /// [`AnimationScope::advance`].
    pub fn handle_event(&mut self, event: &TriggerEvent) {
        if self.disposed || event.key.scope != self.name {
            return;
        }
        let Some(slot) = self.slots.get_mut(event.key.slot) else {
            return;
        };
        match &mut slot.driver {
            Driver::Immediate => {}
            Driver::Toggle { actions, .. } => {
                let action = match event.kind {
                    TriggerEventKind::Enter => actions.on_enter,
                    TriggerEventKind::Leave => actions.on_leave,
                    TriggerEventKind::EnterBack => actions.on_enter_back,
                    TriggerEventKind::LeaveBack => actions.on_leave_back,
                    TriggerEventKind::Progress(_) => ToggleAction::None,
                };
                apply_action(&mut slot.player, action);
            }
            Driver::Scrub { target, .. } => {
                if let TriggerEventKind::Progress(p) = event.kind {
                    *target = p;
                }
            }
        }
    }

    /// Advance every timeline by `dt` seconds.
    ///
    /// Scrubbed timelines close `dt / lag` of the gap to their trigger progress (all of it when
    /// `lag` is 0) and snap once the gap is below 1e-4.
    pub fn advance(&mut self, dt: f64) -> Vec<ScopeEvent> {
        if self.disposed {
            return Vec::new();
        }
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let mut out = Vec::new();
        for (i, slot) in self.slots.iter_mut().enumerate() {
            let events = match &mut slot.driver {
                Driver::Immediate | Driver::Toggle { .. } => slot.player.advance(dt),
                Driver::Scrub {
                    lag,
                    target,
                    smoothed,
                    ..
                } => {
                    let gap = *target - *smoothed;
                    if *lag <= 0.0 || gap.abs() < SCRUB_SNAP {
                        *smoothed = *target;
                    } else {
                        *smoothed += gap * (dt / *lag).min(1.0);
                    }
                    slot.player.set_progress(*smoothed)
                }
            };
            out.extend(events.into_iter().map(|event| ScopeEvent {
                scope: self.name.clone(),
                slot: i,
                event,
            }));
        }
        out
    }

    /// Current values of every registered timeline, later slots winning.
    pub fn values(&self) -> PropertyState {
        let mut out = PropertyState::new();
        for s in &self.slots {
            out.merge(&s.player.values());
        }
        out
    }

    /// Player of one slot.
    pub fn player(&self, slot: usize) -> Option<&TimelinePlayer> {
        self.slots.get(slot).map(|s| &s.player)
    }

    /// Release every timeline and trigger. Further registrations fail and events are ignored.
    pub fn dispose(&mut self) {
        if !self.disposed {
            tracing::debug!(scope = %self.name, slots = self.slots.len(), "scope disposed");
        }
        self.slots.clear();
        self.disposed = true;
    }

    /// Ease the time multiplier of every timeline animating `target` toward `scale`.
    ///
    /// Returns how many timelines matched.
    pub fn ease_time_scale(&mut self, target: &str, scale: f64, secs: f64, ease: Ease) -> usize {
        let mut n = 0;
        for slot in &mut self.slots {
            if slot.player.timeline().tweens().iter().any(|t| t.target == target) {
                slot.player.ease_time_scale(scale, secs, ease);
                n += 1;
            }
        }
        n
    }
}

fn apply_action(player: &mut TimelinePlayer, action: ToggleAction) {
    match action {
        ToggleAction::Play => player.play(),
        ToggleAction::Pause => player.pause(),
        ToggleAction::Resume => player.resume(),
        ToggleAction::Reverse => player.reverse(),
        ToggleAction::Restart => player.restart(),
        ToggleAction::Reset => player.reset(),
        ToggleAction::Complete => player.complete(),
        ToggleAction::None => {}
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/scope.rs"]
mod tests;
