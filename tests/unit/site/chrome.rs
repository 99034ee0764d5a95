use super::*;

fn close(a: Option<f64>, b: f64) -> bool {
    a.is_some_and(|a| (a - b).abs() < 1e-9)
}

#[test]
fn loader_sequence_resolves_relative_positions() {
    let c = loader_timeline().compile().unwrap();
    assert!((c.duration() - 6.1).abs() < 1e-9);
    let labels: Vec<(&str, f64)> = c
        .markers()
        .iter()
        .map(|m| (m.label.as_str(), m.time))
        .collect();
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].0, WORD_SWAP);
    assert!((labels[0].1 - 2.4).abs() < 1e-9);
    assert_eq!(labels[1].0, LOADER_EXIT);
    assert!((labels[1].1 - 3.7).abs() < 1e-9);
}

#[test]
fn loader_counter_runs_to_ninety_then_one_hundred() {
    let mut l = Loader::new().unwrap();
    assert_eq!(l.counter(), 0);
    l.advance(2.2);
    assert_eq!(l.counter(), 90);
    l.advance(1.0);
    assert_eq!(l.counter(), 100);
    assert!(!l.is_done());
}

#[test]
fn loader_reports_word_swap_and_finishes_hidden() {
    let mut l = Loader::new().unwrap();
    let mut events = Vec::new();
    for _ in 0..70 {
        events.extend(l.advance(0.1));
    }
    assert!(events.contains(&TimelineEvent::Callback(WORD_SWAP.into())));
    assert_eq!(events.last(), Some(&TimelineEvent::Completed));
    assert!(l.is_done());
    assert_eq!(l.values().get(LOADER, "visible"), Some(0.0));
    assert_eq!(l.values().get(LOADER, "clipBottom"), Some(100.0));
}

#[test]
fn scroll_to_top_flips_at_threshold() {
    let mut b = ScrollToTop::new(SCROLL_TO_TOP_THRESHOLD);
    assert_eq!(b.update(400.0), None);
    assert_eq!(b.values().get(SCROLL_TO_TOP, "opacity"), Some(0.0));

    assert_eq!(b.update(401.0), Some(true));
    assert_eq!(b.update(900.0), None);
    b.advance(0.6);
    assert!(close(b.values().get(SCROLL_TO_TOP, "opacity"), 1.0));
    assert!(close(b.values().get(SCROLL_TO_TOP, "scale"), 1.0));

    assert_eq!(b.update(10.0), Some(false));
    b.advance(0.5);
    assert!(close(b.values().get(SCROLL_TO_TOP, "y"), 30.0));
    assert!(close(b.values().get(SCROLL_TO_TOP, "scale"), 0.8));
}

#[test]
fn hiding_mid_show_starts_from_current_values() {
    let mut b = ScrollToTop::new(SCROLL_TO_TOP_THRESHOLD);
    b.update(1000.0);
    b.advance(0.2);
    let mid = b.values().get(SCROLL_TO_TOP, "opacity").unwrap();
    assert!(mid > 0.0 && mid < 1.0);
    b.update(0.0);
    assert!(close(b.values().get(SCROLL_TO_TOP, "opacity"), mid));
}

#[test]
fn menu_opens_then_closes() {
    let mut m = MobileMenu::new();
    assert!(!m.is_open());
    m.toggle();
    assert!(m.is_open());
    m.advance(0.3);
    assert!(close(m.values().get(MENU_LINKS[0], "opacity"), 0.0));
    m.advance(2.0);
    assert!(close(m.values().get(MENU_BG, "yPercent"), 0.0));
    assert!(close(m.values().get(MENU_LINKS[2], "opacity"), 1.0));

    m.set_open(false);
    m.advance(2.0);
    assert!(close(m.values().get(MENU_BG, "yPercent"), -100.0));
    assert_eq!(m.values().get(MENU_BG, "visible"), Some(0.0));
}

#[test]
fn chrome_without_loader_is_never_loading() {
    let mut c = Chrome::new(false, 400.0).unwrap();
    assert!(!c.is_loading());
    assert!(c.loader().is_none());
    c.update(500.0);
    assert!(c.scroll_to_top().is_visible());
    let with = Chrome::new(true, 400.0).unwrap();
    assert!(with.is_loading());
}
