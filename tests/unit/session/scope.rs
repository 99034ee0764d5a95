use super::*;
use crate::{animation::ease::Ease, timeline::model::Step};

fn event(scope: &str, slot: usize, kind: TriggerEventKind) -> TriggerEvent {
    TriggerEvent {
        key: TriggerKey::new(scope, slot),
        kind,
    }
}

fn reveal(region: &str, actions: ToggleActions) -> Timeline {
    Timeline::new()
        .then(
            Step::from_to(&[region], [("opacity", 0.0)], [("opacity", 1.0)])
                .duration(1.0)
                .ease(Ease::Linear),
        )
        .with_trigger(TriggerSpec::toggle(region, "top 80%").unwrap().actions(actions))
}

#[test]
fn immediate_timelines_play_on_registration() {
    let mut scope = AnimationScope::new("hero");
    let slots = scope
        .add(Timeline::new().then(Step::from(&["line"], [("y", 100.0)]).duration(1.0)))
        .unwrap();
    assert_eq!(slots, vec![0]);
    assert!(scope.descriptors().is_empty());
    scope.advance(2.0);
    assert_eq!(scope.values().get("line", "y"), Some(0.0));
}

#[test]
fn step_triggers_split_into_their_own_slots() {
    let mut scope = AnimationScope::new("work");
    let tl = Timeline::new()
        .then(Step::from(&["header"], [("y", 100.0)]))
        .then(
            Step::from(&["card-0"], [("y", 100.0)])
                .trigger(TriggerSpec::toggle("card-0", "top 90%").unwrap()),
        )
        .then(
            Step::from(&["card-1"], [("y", 100.0)])
                .trigger(TriggerSpec::toggle("card-1", "top 90%").unwrap()),
        );
    assert_eq!(scope.add(tl).unwrap(), vec![0, 1, 2]);
    let keys: Vec<TriggerKey> = scope.descriptors().into_iter().map(|d| d.key).collect();
    assert_eq!(keys, vec![TriggerKey::new("work", 1), TriggerKey::new("work", 2)]);
}

#[test]
fn play_once_toggle_ignores_later_crossings() {
    let mut scope = AnimationScope::new("home");
    scope.add(reveal("about", ToggleActions::default())).unwrap();
    assert_eq!(scope.values().get("about", "opacity"), Some(0.0));

    scope.handle_event(&event("home", 0, TriggerEventKind::Enter));
    scope.advance(0.5);
    scope.handle_event(&event("home", 0, TriggerEventKind::LeaveBack));
    scope.advance(0.5);
    assert_eq!(scope.values().get("about", "opacity"), Some(1.0));
}

#[test]
fn mirrored_toggle_reverses_on_leave_back() {
    let mut scope = AnimationScope::new("home");
    scope.add(reveal("about", ToggleActions::mirrored())).unwrap();
    scope.handle_event(&event("home", 0, TriggerEventKind::Enter));
    scope.advance(1.0);
    scope.handle_event(&event("home", 0, TriggerEventKind::LeaveBack));
    let events = scope.advance(1.0);
    assert_eq!(scope.values().get("about", "opacity"), Some(0.0));
    assert!(events.iter().any(|e| e.event == TimelineEvent::ReverseCompleted));
}

#[test]
fn events_for_other_scopes_are_ignored() {
    let mut scope = AnimationScope::new("home");
    scope.add(reveal("about", ToggleActions::default())).unwrap();
    scope.handle_event(&event("agency", 0, TriggerEventKind::Enter));
    scope.advance(1.0);
    assert_eq!(scope.values().get("about", "opacity"), Some(0.0));
}

fn scrubbed(lag: f64) -> AnimationScope {
    let mut scope = AnimationScope::new("services");
    let tl = Timeline::new()
        .then(
            Step::to(&["track"], [("x", -1000.0)])
                .duration(1.0)
                .ease(Ease::Linear),
        )
        .with_trigger(TriggerSpec::scrub("services", "top top", "+=2000", lag).unwrap());
    scope.add(tl).unwrap();
    scope
}

#[test]
fn scrub_without_lag_follows_progress_exactly() {
    let mut scope = scrubbed(0.0);
    scope.handle_event(&event("services", 0, TriggerEventKind::Progress(0.25)));
    scope.advance(1.0 / 60.0);
    assert_eq!(scope.values().get("track", "x"), Some(-250.0));
}

#[test]
fn scrub_lag_closes_gap_gradually() {
    let mut scope = scrubbed(1.0);
    scope.handle_event(&event("services", 0, TriggerEventKind::Progress(1.0)));
    scope.advance(0.5);
    assert!((scope.values().get("track", "x").unwrap() + 500.0).abs() < 1e-9);
    for _ in 0..200 {
        scope.advance(0.1);
    }
    assert_eq!(scope.values().get("track", "x"), Some(-1000.0));
}

#[test]
fn scrub_round_trip_restores_initial_values() {
    let mut scope = scrubbed(0.0);
    let initial = scope.values();
    for p in [0.3, 0.8, 1.0, 0.6, 0.1, 0.0] {
        scope.handle_event(&event("services", 0, TriggerEventKind::Progress(p)));
        scope.advance(1.0 / 60.0);
    }
    assert_eq!(scope.values(), initial);
}

#[test]
fn dispose_releases_everything() {
    let mut scope = scrubbed(0.0);
    assert_eq!(scope.descriptors().len(), 1);
    scope.dispose();
    assert!(scope.is_disposed());
    assert!(scope.descriptors().is_empty());
    assert!(scope.values().is_empty());
    scope.handle_event(&event("services", 0, TriggerEventKind::Progress(0.5)));
    assert!(scope.advance(1.0).is_empty());
    assert!(scope.add(Timeline::new()).is_err());
}

#[test]
fn failed_compilation_registers_nothing() {
    let mut scope = AnimationScope::new("x");
    let bad = Timeline::new()
        .then(Step::to(&["a"], [("x", 1.0)]))
        .then(Step::to(&["b"], [("x", 1.0)]).duration(-1.0));
    assert!(scope.add(bad).is_err());
    assert!(scope.is_empty());
}
