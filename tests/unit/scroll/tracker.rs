use super::*;

#[test]
fn progress_is_offset_over_extent() {
    let s = compute_scroll_state(500.0, 3000.0, 1000.0);
    assert_eq!(s.max, 2000.0);
    assert_eq!(s.progress, 0.25);
}

#[test]
fn short_content_never_divides_by_zero() {
    let s = compute_scroll_state(0.0, 600.0, 1000.0);
    assert_eq!(s.max, 0.0);
    assert_eq!(s.progress, 0.0);

    let s = compute_scroll_state(0.0, 1000.0, 1000.0);
    assert_eq!(s.progress, 0.0);
    assert!(s.progress.is_finite());
}

#[test]
fn overscroll_is_clamped() {
    assert_eq!(compute_scroll_state(-50.0, 3000.0, 1000.0).progress, 0.0);
    assert_eq!(compute_scroll_state(9000.0, 3000.0, 1000.0).progress, 1.0);
}

#[test]
fn non_finite_offset_reads_as_top() {
    let s = compute_scroll_state(f64::NAN, 3000.0, 1000.0);
    assert_eq!(s.offset, 0.0);
    assert_eq!(s.progress, 0.0);
}

#[test]
fn tracker_remembers_last_sample() {
    let mut t = ScrollTracker::new();
    let s = t.sample(1000.0, 3000.0, 1000.0);
    assert_eq!(t.last(), s);
    assert_eq!(s.progress, 0.5);
}
