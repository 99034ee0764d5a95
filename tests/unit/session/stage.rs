use super::*;
use crate::navigation::transition::CURTAIN_PARKED;

const DT: f64 = 1.0 / 60.0;

fn stage() -> Stage {
    Stage::new(StageConfig {
        show_loader: false,
        ..StageConfig::default()
    })
    .unwrap()
}

#[test]
fn new_stage_mounts_start_page_with_refreshed_triggers() {
    let s = stage();
    assert_eq!(s.page(), PageId::Home);
    assert_eq!(s.scope().name(), "home");
    assert!(!s.triggers().is_empty());
    assert!(s.triggers().content_height() > s.layout().content_height);
}

#[test]
fn first_frame_reports_parked_curtain_and_top_of_page() {
    let mut s = stage();
    let out = s.frame(DT);
    assert_eq!(out.frame, 0);
    assert_eq!(out.scroll.offset, 0.0);
    assert_eq!(out.phase.index, 0);
    assert_eq!(out.curtain_y_percent, CURTAIN_PARKED);
    assert_eq!(out.properties.get(CURTAIN, "yPercent"), Some(CURTAIN_PARKED));
    assert!(!out.loading);
    assert_eq!(s.frame_count(), 1);
}

#[test]
fn swap_disposes_old_scope_and_resets_scroll() {
    let mut s = stage();
    s.wheel(1500.0);
    for _ in 0..120 {
        s.frame(DT);
    }
    assert!(s.scroll_offset() > 0.0);

    assert_eq!(s.navigate(PageId::Work), NavigateOutcome::Started);
    let mut swapped = false;
    for _ in 0..200 {
        let out = s.frame(DT);
        if out
            .transition_events
            .iter()
            .any(|e| matches!(e, TransitionEvent::PageSwapped { .. }))
        {
            swapped = true;
            assert_eq!(out.scroll.offset, 0.0);
            assert_eq!(s.scope().name(), "work");
        }
    }
    assert!(swapped);
    assert_eq!(s.page(), PageId::Work);
    assert!(s.triggers().keys().all(|k| k.scope == "work"));
}

#[test]
fn resize_regenerates_generated_geometry() {
    let mut s = stage();
    s.frame(DT);
    let before = s.layout().content_height;
    s.resize(Size::new(1440.0, 700.0));
    assert!(s.layout().content_height < before);
    s.resize(Size::new(f64::NAN, 10.0));
    assert_eq!(s.viewport(), Size::new(1440.0, 700.0));
}

#[test]
fn host_layout_is_kept_across_resizes() {
    let mut s = stage();
    let layout = Layout::new(Size::new(1440.0, 900.0), 5000.0);
    s.set_layout(layout).unwrap();
    s.resize(Size::new(1200.0, 800.0));
    assert_eq!(s.layout().content_height, 5000.0);
    assert_eq!(s.layout().viewport, Size::new(1200.0, 800.0));
    let bad = Layout::new(Size::new(1440.0, 900.0), -1.0);
    assert!(s.set_layout(bad).is_err());
}
