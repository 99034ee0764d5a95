use std::collections::BTreeMap;

use crate::{
    foundation::{
        core::{Rect, RegionId, Vec2},
        math::{clamp01, inv_lerp},
    },
    trigger::{
        anchor::{TriggerMode, TriggerSpec},
        layout::Layout,
    },
};

/// Identity of a trigger: the owning scope and a slot inside it.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TriggerKey {
    /// Owning scope name.
    pub scope: String,
    /// Slot within the scope.
    pub slot: usize,
}

impl TriggerKey {
    /// Build a key.
    pub fn new(scope: impl Into<String>, slot: usize) -> Self {
        Self {
            scope: scope.into(),
            slot,
        }
    }
}

impl std::fmt::Display for TriggerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.scope, self.slot)
    }
}

/// One entry of the declarative trigger list.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TriggerDescriptor {
    /// Identity.
    pub key: TriggerKey,
    /// Desired trigger.
    pub spec: TriggerSpec,
}

/// Result of diffing a descriptor list against the registered triggers.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ReconcileDiff {
    /// Keys registered for the first time.
    pub added: Vec<TriggerKey>,
    /// Keys no longer declared.
    pub removed: Vec<TriggerKey>,
    /// Keys whose spec changed; their state was reset.
    pub changed: Vec<TriggerKey>,
}

impl ReconcileDiff {
    /// True when nothing changed.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

/// Boundary crossing or scrub update.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum TriggerEventKind {
    /// Scrolled down into the window.
    Enter,
    /// Scrolled down past the window.
    Leave,
    /// Scrolled up back into the window.
    EnterBack,
    /// Scrolled up above the window.
    LeaveBack,
    /// New window progress of a scrub trigger.
    Progress(f64),
}

/// Event reported by [`TriggerRegistry::update`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TriggerEvent {
    /// Trigger that fired.
    pub key: TriggerKey,
    /// What happened.
    pub kind: TriggerEventKind,
}

/// Where the scroll offset sits relative to a window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    /// Above the start.
    #[default]
    Before,
    /// Between start and end, inclusive.
    Inside,
    /// Past the end.
    After,
}

/// Live state of one trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct TriggerState {
    /// Resolved `(start, end)` scroll window; `None` until the region is mounted.
    pub window: Option<(f64, f64)>,
    /// Progress through the window.
    pub progress: f64,
    /// True while the offset is inside the window.
    pub active: bool,
    /// Vertical translation holding a pinned region in place.
    pub pin_offset: f64,
    /// Zone at the last update.
    pub zone: Zone,
}

#[derive(Clone, Debug)]
struct Entry {
    spec: TriggerSpec,
    state: TriggerState,
}

#[derive(Clone, Copy, Debug)]
struct PinSpacing {
    bottom: f64,
    spacing: f64,
}

/// Registered viewport triggers with their resolved windows.
///
/// Windows are computed by [`TriggerRegistry::refresh`] from a [`Layout`], all triggers at once,
/// because pin spacing of one trigger moves every region below it.
#[derive(Clone, Debug, Default)]
pub struct TriggerRegistry {
    entries: BTreeMap<TriggerKey, Entry>,
    dirty: bool,
    fingerprint: Option<u64>,
    content_height: f64,
    pins: Vec<PinSpacing>,
}

impl TriggerRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered triggers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered keys in key order.
    pub fn keys(&self) -> impl Iterator<Item = &TriggerKey> {
        self.entries.keys()
    }

    /// Spec of a registered trigger.
    pub fn spec(&self, key: &TriggerKey) -> Option<&TriggerSpec> {
        self.entries.get(key).map(|e| &e.spec)
    }

    /// State of a registered trigger.
    pub fn state(&self, key: &TriggerKey) -> Option<&TriggerState> {
        self.entries.get(key).map(|e| &e.state)
    }

    /// Document height including pin spacing, as of the last refresh.
    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    /// Total spacing added by pins, as of the last refresh.
    pub fn pin_spacing(&self) -> f64 {
        self.pins.iter().map(|p| p.spacing).sum()
    }

    /// Document offset of a layout `y` once pin spacing above it is applied.
    pub fn document_y(&self, y: f64) -> f64 {
        y + shift_for(&self.pins, y)
    }

    /// Make the registry match `descriptors`.
    ///
    /// Unchanged triggers keep their state; changed ones restart from scratch. Any difference
    /// schedules a refresh.
    pub fn reconcile(&mut self, descriptors: &[TriggerDescriptor]) -> ReconcileDiff {
        let mut diff = ReconcileDiff::default();
        let mut next = BTreeMap::new();
        let mut prev = std::mem::take(&mut self.entries);

        for d in descriptors {
            if next.contains_key(&d.key) {
                tracing::debug!(key = %d.key, "duplicate trigger key, keeping the first");
                continue;
            }
            let entry = match prev.remove(&d.key) {
                Some(e) if e.spec == d.spec => e,
                Some(_) => {
                    diff.changed.push(d.key.clone());
                    Entry::new(d.spec.clone())
                }
                None => {
                    diff.added.push(d.key.clone());
                    Entry::new(d.spec.clone())
                }
            };
            next.insert(d.key.clone(), entry);
        }
        diff.removed.extend(prev.into_keys());
        self.entries = next;

        if !diff.is_empty() {
            tracing::debug!(
                added = diff.added.len(),
                removed = diff.removed.len(),
                changed = diff.changed.len(),
                "triggers reconciled"
            );
            self.dirty = true;
        }
        diff
    }

    /// Force the next [`TriggerRegistry::needs_refresh`] to report true.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// True when windows are stale for `layout`.
    pub fn needs_refresh(&self, layout: &Layout) -> bool {
        self.dirty || self.fingerprint != Some(layout.fingerprint())
    }

    /// Recompute every window from `layout`.
    ///
    /// Pinned triggers are resolved first, in document order. Each pin adds its window length as
    /// spacing below its region, so regions starting at or below that region's bottom move down
    /// by the accumulated spacing. Triggers whose region is not mounted keep no window.
    #[tracing::instrument(skip_all, fields(triggers = self.entries.len()))]
    pub fn refresh(&mut self, layout: &Layout) {
        let vh = layout.viewport.height;
        let mut pins: Vec<PinSpacing> = Vec::new();

        let mut pinned: Vec<(TriggerKey, Rect)> = Vec::new();
        for (key, e) in &self.entries {
            if !e.spec.pin {
                continue;
            }
            if let Some(rect) = layout.region(&e.spec.region) {
                pinned.push((key.clone(), rect));
            }
        }
        pinned.sort_by(|a, b| a.1.y0.total_cmp(&b.1.y0).then_with(|| a.0.cmp(&b.0)));

        for (key, rect) in pinned {
            let shifted = rect + Vec2::new(0.0, shift_for(&pins, rect.y0));
            if let Some(e) = self.entries.get_mut(&key) {
                let (start, end) = e.spec.window(shifted, vh);
                e.state.window = Some((start, end));
                pins.push(PinSpacing {
                    bottom: rect.y1,
                    spacing: end - start,
                });
            }
        }

        for (key, e) in self.entries.iter_mut() {
            if e.spec.pin {
                if layout.region(&e.spec.region).is_none() {
                    missing(key, &e.spec.region);
                    e.state.window = None;
                }
                continue;
            }
            match layout.region(&e.spec.region) {
                Some(rect) => {
                    let shifted = rect + Vec2::new(0.0, shift_for(&pins, rect.y0));
                    e.state.window = Some(e.spec.window(shifted, vh));
                }
                None => {
                    missing(key, &e.spec.region);
                    e.state.window = None;
                }
            }
        }

        let spacing: f64 = pins.iter().map(|p| p.spacing).sum();
        self.content_height = layout.content_height + spacing;
        self.pins = pins;
        self.fingerprint = Some(layout.fingerprint());
        self.dirty = false;
    }

    /// Recompute per-trigger state for `offset` and report crossings.
    ///
    /// A jump across a whole window reports both the entering and the leaving event. Scrub
    /// triggers also report their progress whenever it changes.
    pub fn update(&mut self, offset: f64) -> Vec<TriggerEvent> {
        let mut events = Vec::new();
        for (key, e) in self.entries.iter_mut() {
            let Some((start, end)) = e.state.window else {
                continue;
            };
            let zone = if offset < start {
                Zone::Before
            } else if offset > end {
                Zone::After
            } else {
                Zone::Inside
            };

            let mut push = |kind| {
                events.push(TriggerEvent {
                    key: key.clone(),
                    kind,
                })
            };
            use TriggerEventKind::*;
            match (e.state.zone, zone) {
                (Zone::Before, Zone::Inside) => push(Enter),
                (Zone::Before, Zone::After) => {
                    push(Enter);
                    push(Leave);
                }
                (Zone::Inside, Zone::After) => push(Leave),
                (Zone::After, Zone::Inside) => push(EnterBack),
                (Zone::After, Zone::Before) => {
                    push(EnterBack);
                    push(LeaveBack);
                }
                (Zone::Inside, Zone::Before) => push(LeaveBack),
                _ => {}
            }

            let progress = clamp01(inv_lerp(start, end, offset));
            if matches!(e.spec.mode, TriggerMode::Scrub { .. })
                && (progress != e.state.progress || e.state.zone != zone)
            {
                push(Progress(progress));
            }

            e.state.zone = zone;
            e.state.active = zone == Zone::Inside;
            e.state.progress = progress;
            e.state.pin_offset = if e.spec.pin {
                offset.max(start).min(end) - start
            } else {
                0.0
            };
        }
        events
    }

    /// Pin translation of every pinned, mounted region.
    pub fn pin_offsets(&self) -> BTreeMap<RegionId, f64> {
        self.entries
            .values()
            .filter(|e| e.spec.pin && e.state.window.is_some())
            .map(|e| (e.spec.region.clone(), e.state.pin_offset))
            .collect()
    }

    /// Drop every trigger.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            self.dirty = true;
        }
        self.entries.clear();
    }
}

impl Entry {
    fn new(spec: TriggerSpec) -> Self {
        Self {
            spec,
            state: TriggerState::default(),
        }
    }
}

fn shift_for(pins: &[PinSpacing], y: f64) -> f64 {
    pins.iter()
        .filter(|p| y >= p.bottom)
        .map(|p| p.spacing)
        .sum()
}

fn missing(key: &TriggerKey, region: &RegionId) {
    tracing::debug!(key = %key, region = %region, "trigger region not mounted, skipping");
}

#[cfg(test)]
#[path = "../../tests/unit/trigger/registry.rs"]
mod tests;
