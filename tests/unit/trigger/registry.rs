use super::*;
use crate::foundation::core::Size;

fn desc(slot: usize, spec: TriggerSpec) -> TriggerDescriptor {
    TriggerDescriptor {
        key: TriggerKey::new("home", slot),
        spec,
    }
}

fn layout(vh: f64) -> Layout {
    Layout::new(Size::new(1440.0, vh), 2500.0)
        .with_region("hero", Rect::new(0.0, 0.0, 1440.0, 1000.0))
        .with_region("services", Rect::new(0.0, 1000.0, 1440.0, 2000.0))
        .with_region("footer", Rect::new(0.0, 2000.0, 1440.0, 2500.0))
}

fn kinds(events: &[TriggerEvent]) -> Vec<TriggerEventKind> {
    events.iter().map(|e| e.kind).collect()
}

#[test]
fn reconcile_reports_added_removed_changed() {
    let mut reg = TriggerRegistry::new();
    let a = desc(0, TriggerSpec::toggle("hero", "top 80%").unwrap());
    let b = desc(1, TriggerSpec::toggle("footer", "top 80%").unwrap());
    let diff = reg.reconcile(&[a.clone(), b.clone()]);
    assert_eq!(diff.added.len(), 2);
    assert!(reg.needs_refresh(&layout(1000.0)));
    reg.refresh(&layout(1000.0));

    assert!(reg.reconcile(&[a.clone(), b]).is_empty());
    assert!(!reg.needs_refresh(&layout(1000.0)));

    let a2 = desc(0, TriggerSpec::toggle("hero", "top 60%").unwrap());
    let diff = reg.reconcile(&[a2]);
    assert_eq!(diff.changed, vec![a.key]);
    assert_eq!(diff.removed, vec![TriggerKey::new("home", 1)]);
    assert!(diff.added.is_empty());
    assert_eq!(reg.len(), 1);
}

#[test]
fn toggle_crossings_in_both_directions() {
    let mut reg = TriggerRegistry::new();
    reg.reconcile(&[desc(0, TriggerSpec::toggle("services", "top 80%").unwrap())]);
    reg.refresh(&layout(1000.0));
    assert_eq!(reg.state(&TriggerKey::new("home", 0)).unwrap().window, Some((200.0, 2000.0)));

    assert!(reg.update(0.0).is_empty());
    assert_eq!(kinds(&reg.update(300.0)), vec![TriggerEventKind::Enter]);
    assert!(reg.state(&TriggerKey::new("home", 0)).unwrap().active);
    assert_eq!(kinds(&reg.update(2100.0)), vec![TriggerEventKind::Leave]);
    assert_eq!(kinds(&reg.update(300.0)), vec![TriggerEventKind::EnterBack]);
    assert_eq!(kinds(&reg.update(0.0)), vec![TriggerEventKind::LeaveBack]);
}

#[test]
fn jump_across_window_reports_both_events() {
    let mut reg = TriggerRegistry::new();
    reg.reconcile(&[desc(0, TriggerSpec::toggle("services", "top 80%").unwrap())]);
    reg.refresh(&layout(1000.0));
    assert_eq!(
        kinds(&reg.update(2400.0)),
        vec![TriggerEventKind::Enter, TriggerEventKind::Leave]
    );
    assert_eq!(
        kinds(&reg.update(0.0)),
        vec![TriggerEventKind::EnterBack, TriggerEventKind::LeaveBack]
    );
}

#[test]
fn scrub_triggers_report_progress() {
    let mut reg = TriggerRegistry::new();
    let spec = TriggerSpec::scrub("footer", "top bottom", "bottom top", 0.0).unwrap();
    reg.reconcile(&[desc(0, spec)]);
    reg.refresh(&layout(1000.0));
    let events = reg.update(1750.0);
    assert_eq!(
        kinds(&events),
        vec![TriggerEventKind::Enter, TriggerEventKind::Progress(0.5)]
    );
    assert!(reg.update(1750.0).is_empty());
}

#[test]
fn pins_add_spacing_below_their_region() {
    let mut reg = TriggerRegistry::new();
    let pin = TriggerSpec::scrub("services", "top top", "+=1200", 1.0)
        .unwrap()
        .pinned();
    reg.reconcile(&[
        desc(0, TriggerSpec::toggle("hero", "top 80%").unwrap()),
        desc(1, pin),
        desc(2, TriggerSpec::toggle("footer", "top 80%").unwrap()),
    ]);
    reg.refresh(&layout(1000.0));

    let window = |slot| reg.state(&TriggerKey::new("home", slot)).unwrap().window;
    assert_eq!(window(0), Some((-800.0, 1000.0)));
    assert_eq!(window(1), Some((1000.0, 2200.0)));
    assert_eq!(window(2), Some((2400.0, 3700.0)));
    assert_eq!(reg.content_height(), 3700.0);
    assert_eq!(reg.pin_spacing(), 1200.0);

    reg.update(1600.0);
    assert_eq!(reg.pin_offsets().get(&RegionId::from("services")), Some(&600.0));
    reg.update(5000.0);
    assert_eq!(reg.pin_offsets().get(&RegionId::from("services")), Some(&1200.0));
}

#[test]
fn resize_moves_windows_with_their_thresholds() {
    let mut reg = TriggerRegistry::new();
    reg.reconcile(&[desc(0, TriggerSpec::toggle("footer", "top 80%").unwrap())]);
    let desktop = layout(1000.0);
    reg.refresh(&desktop);
    let key = TriggerKey::new("home", 0);
    assert_eq!(reg.state(&key).unwrap().window.unwrap().0, 1200.0);

    let short = desktop.resized(Size::new(1440.0, 500.0));
    assert!(reg.needs_refresh(&short));
    reg.refresh(&short);
    assert_eq!(reg.state(&key).unwrap().window.unwrap().0, 1600.0);
    assert!(reg.update(1400.0).is_empty());
    assert_eq!(kinds(&reg.update(1600.0)), vec![TriggerEventKind::Enter]);
}

#[test]
fn unmounted_regions_are_skipped() {
    let mut reg = TriggerRegistry::new();
    reg.reconcile(&[desc(0, TriggerSpec::toggle("missing", "top 80%").unwrap())]);
    reg.refresh(&layout(1000.0));
    assert_eq!(reg.state(&TriggerKey::new("home", 0)).unwrap().window, None);
    assert!(reg.update(10_000.0).is_empty());
}
