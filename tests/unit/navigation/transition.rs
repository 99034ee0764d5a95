use super::*;

fn controller() -> TransitionController {
    TransitionController::new(TransitionConfig::default(), PageId::Home).unwrap()
}

fn run_until_idle(c: &mut TransitionController) -> Vec<TransitionEvent> {
    let mut all = Vec::new();
    for _ in 0..200 {
        all.extend(c.tick(1.0 / 60.0));
        if !c.is_transitioning() {
            break;
        }
    }
    all
}

#[test]
fn full_sequence_emits_milestones_in_order() {
    let mut c = controller();
    assert_eq!(c.curtain_y_percent(), CURTAIN_PARKED);
    assert_eq!(c.navigate(PageId::Work), NavigateOutcome::Started);
    assert!(c.state().transitioning);
    assert_eq!(c.current_page(), PageId::Home);

    let events = run_until_idle(&mut c);
    assert_eq!(
        events,
        vec![
            TransitionEvent::CurtainCovered,
            TransitionEvent::PageSwapped {
                from: PageId::Home,
                to: PageId::Work
            },
            TransitionEvent::ScrollReset,
            TransitionEvent::Completed,
        ]
    );
    assert_eq!(
        c.state(),
        NavigationState {
            current_page: PageId::Work,
            transitioning: false
        }
    );
    assert_eq!(c.curtain_y_percent(), CURTAIN_PARKED);
}

#[test]
fn curtain_moves_up_through_both_halves() {
    let mut c = controller();
    c.navigate(PageId::Agency);
    c.tick(0.4);
    let mid_enter = c.curtain_y_percent();
    assert!(mid_enter > 0.0 && mid_enter < 100.0, "{mid_enter}");
    c.tick(0.5);
    assert_eq!(c.phase(), TransitionPhase::Swapping);
    assert_eq!(c.curtain_y_percent(), 0.0);
    c.tick(0.0);
    assert_eq!(c.phase(), TransitionPhase::Exiting);
    c.tick(0.4);
    let mid_exit = c.curtain_y_percent();
    assert!(mid_exit < 0.0 && mid_exit > -100.0, "{mid_exit}");
}

#[test]
fn requests_during_transition_are_dropped() {
    let mut c = controller();
    assert_eq!(c.navigate(PageId::Work), NavigateOutcome::Started);
    assert_eq!(c.navigate(PageId::Contact), NavigateOutcome::Busy);
    assert_eq!(c.navigate(PageId::Work), NavigateOutcome::Busy);
    run_until_idle(&mut c);
    assert_eq!(c.current_page(), PageId::Work);
}

#[test]
fn pending_target_is_busy_until_swapped_then_same_page() {
    let mut c = controller();
    c.navigate(PageId::Work);
    assert_eq!(c.navigate(PageId::Work), NavigateOutcome::Busy);
    assert_eq!(c.navigate(PageId::Home), NavigateOutcome::SamePage);
    while c.phase() != TransitionPhase::Exiting {
        c.tick(0.1);
    }
    assert_eq!(c.current_page(), PageId::Work);
    assert_eq!(c.navigate(PageId::Work), NavigateOutcome::SamePage);
    assert_eq!(c.navigate(PageId::Home), NavigateOutcome::Busy);
}

#[test]
fn same_page_is_idempotent() {
    let mut c = controller();
    assert_eq!(c.navigate(PageId::Home), NavigateOutcome::SamePage);
    assert!(!c.is_transitioning());
    assert!(c.tick(1.0).is_empty());
}

#[test]
fn cancel_drops_pending_work_silently() {
    let mut c = controller();
    c.navigate(PageId::Contact);
    c.tick(0.3);
    c.cancel();
    assert!(!c.is_transitioning());
    assert_eq!(c.current_page(), PageId::Home);
    assert!(c.tick(5.0).is_empty());
    assert_eq!(c.curtain_y_percent(), CURTAIN_PARKED);
    assert_eq!(c.navigate(PageId::Contact), NavigateOutcome::Started);
}

#[test]
fn config_rejects_negative_durations() {
    let cfg = TransitionConfig {
        enter_secs: -1.0,
        ..TransitionConfig::default()
    };
    assert!(TransitionController::new(cfg, PageId::Home).is_err());
}
