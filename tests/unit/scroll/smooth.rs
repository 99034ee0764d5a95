use super::*;

const DT: f64 = 1.0 / 60.0;

#[test]
fn wheel_target_is_clamped_to_extent() {
    let mut s = SmoothScroller::new(SmoothScrollConfig::default(), 1000.0);
    s.wheel(5000.0);
    assert_eq!(s.target(), 1000.0);
    s.wheel(-9000.0);
    assert_eq!(s.target(), 0.0);
}

#[test]
fn lerp_converges_and_snaps() {
    let mut s = SmoothScroller::new(SmoothScrollConfig::default(), 2000.0);
    s.wheel(400.0);
    let first = s.step(DT);
    assert!((first - 40.0).abs() < 1e-9, "one 60 Hz frame covers 10%: {first}");
    for _ in 0..200 {
        s.step(DT);
    }
    assert_eq!(s.offset(), 400.0);
    assert!(!s.is_moving());
}

#[test]
fn scroll_to_finishes_on_time() {
    let mut s = SmoothScroller::new(SmoothScrollConfig::default(), 5000.0);
    s.jump_to(3000.0);
    s.scroll_to(0.0);
    assert!(s.is_moving());
    for _ in 0..89 {
        s.step(DT);
    }
    assert!(s.offset() > 0.0);
    s.step(DT);
    s.step(DT);
    assert_eq!(s.offset(), 0.0);
    assert!(!s.is_moving());
}

#[test]
fn wheel_cancels_programmatic_scroll() {
    let mut s = SmoothScroller::new(SmoothScrollConfig::default(), 5000.0);
    s.jump_to(3000.0);
    s.scroll_to(0.0);
    s.step(DT);
    let at = s.offset();
    s.wheel(100.0);
    assert_eq!(s.target(), (at + 100.0).min(5000.0));
}

#[test]
fn shrinking_extent_reclamps() {
    let mut s = SmoothScroller::new(SmoothScrollConfig::default(), 5000.0);
    s.jump_to(4000.0);
    s.set_extent(1000.0);
    assert_eq!(s.offset(), 1000.0);
    assert_eq!(s.target(), 1000.0);
}
