use super::*;
use crate::{
    animation::ease::Ease,
    timeline::model::{Repeat, Step, Timeline},
};

fn player() -> TimelinePlayer {
    let tl = Timeline::new()
        .then(Step::to(&["a"], [("x", 10.0)]).duration(1.0).ease(Ease::Linear))
        .then(Step::call("half"))
        .then(Step::to(&["a"], [("x", 20.0)]).duration(1.0).ease(Ease::Linear));
    TimelinePlayer::new(tl.compile().unwrap())
}

fn bracketed() -> TimelinePlayer {
    let tl = Timeline::new()
        .then(Step::call("start"))
        .then(Step::to(&["a"], [("x", 1.0)]).duration(1.0))
        .then(Step::call("end"));
    TimelinePlayer::new(tl.compile().unwrap())
}

fn looping(repeat: Repeat) -> TimelinePlayer {
    let tl = Timeline::new()
        .then(Step::to(&["row"], [("x", 10.0)]).duration(1.0).ease(Ease::Linear))
        .repeat(repeat);
    TimelinePlayer::new(tl.compile().unwrap())
}

#[test]
fn paused_player_ignores_time() {
    let mut p = player();
    assert!(p.advance(0.5).is_empty());
    assert_eq!(p.time(), 0.0);
}

#[test]
fn forward_playback_reports_markers_then_completion() {
    let mut p = player();
    p.play();
    assert!(p.advance(0.5).is_empty());
    assert_eq!(p.advance(0.75), vec![TimelineEvent::Callback("half".into())]);
    assert_eq!(p.advance(5.0), vec![TimelineEvent::Completed]);
    assert!(!p.is_playing());
    assert_eq!(p.time(), 2.0);
    assert_eq!(p.values().get("a", "x"), Some(20.0));
}

#[test]
fn reverse_playback_unwinds_values() {
    let mut p = player();
    p.complete();
    p.reverse();
    let events = p.advance(1.5);
    assert_eq!(events, vec![TimelineEvent::Callback("half".into())]);
    assert!((p.values().get("a", "x").unwrap() - 5.0).abs() < 1e-9);
    assert_eq!(p.advance(1.0), vec![TimelineEvent::ReverseCompleted]);
    assert_eq!(p.progress(), 0.0);
}

#[test]
fn scrubbing_matches_wall_clock_sampling() {
    let mut scrubbed = player();
    let mut played = player();
    scrubbed.set_progress(0.75);
    played.play();
    played.advance(1.5);
    assert_eq!(scrubbed.values(), played.values());
    assert_eq!(scrubbed.progress(), 0.75);
}

#[test]
fn round_trip_scrub_restores_start_values() {
    let mut p = player();
    let start = p.values();
    p.set_progress(1.0);
    let events = p.set_progress(0.0);
    assert_eq!(
        events,
        vec![
            TimelineEvent::Callback("half".into()),
            TimelineEvent::ReverseCompleted
        ]
    );
    assert_eq!(p.values(), start);
}

#[test]
fn reset_and_restart() {
    let mut p = player();
    p.set_progress(0.6);
    p.reset();
    assert_eq!(p.time(), 0.0);
    assert!(!p.is_playing());

    p.set_progress(0.6);
    p.restart();
    assert_eq!(p.time(), 0.0);
    assert!(p.is_playing());
    assert_eq!(p.direction(), Direction::Forward);
}

#[test]
fn finished_timeline_completes_once() {
    let mut p = bracketed();
    p.play();
    assert_eq!(
        p.advance(2.0),
        vec![
            TimelineEvent::Callback("start".into()),
            TimelineEvent::Callback("end".into()),
            TimelineEvent::Completed
        ]
    );
    p.play();
    assert!(p.advance(1.0 / 60.0).is_empty());
    assert!(!p.is_playing());
}

#[test]
fn reversing_at_the_start_reports_nothing() {
    let mut p = bracketed();
    p.reverse();
    assert!(p.advance(1.0 / 60.0).is_empty());
    assert!(!p.is_playing());
    assert_eq!(p.time(), 0.0);
}

#[test]
fn jumps_do_not_report_what_they_skip() {
    let mut p = bracketed();
    p.complete();
    assert_eq!(p.time(), 1.0);
    p.restart();
    assert_eq!(p.time(), 0.0);
    assert_eq!(p.advance(0.5), vec![TimelineEvent::Callback("start".into())]);
    p.reset();
    p.complete();
    assert!(!p.is_playing());
}

#[test]
fn reverse_lands_on_markers_at_zero() {
    let mut p = bracketed();
    p.complete();
    p.reverse();
    assert_eq!(
        p.advance(5.0),
        vec![
            TimelineEvent::Callback("end".into()),
            TimelineEvent::Callback("start".into()),
            TimelineEvent::ReverseCompleted
        ]
    );
}

#[test]
fn zero_length_timeline_completes_on_first_played_advance() {
    let tl = Timeline::new().then(Step::set(&["menu"], [("visible", 1.0)]));
    let mut p = TimelinePlayer::new(tl.compile().unwrap());
    assert!(p.advance(0.1).is_empty());
    p.play();
    assert_eq!(p.advance(0.1), vec![TimelineEvent::Completed]);
    assert!(p.advance(0.1).is_empty());
}

#[test]
fn counted_repeat_wraps_then_completes() {
    let mut p = looping(Repeat::Times(2));
    p.play();
    assert_eq!(
        p.advance(2.5),
        vec![TimelineEvent::Repeated(1), TimelineEvent::Repeated(2)]
    );
    assert_eq!(p.iteration(), 2);
    assert_eq!(p.time(), 0.5);
    assert_eq!(p.values().get("row", "x"), Some(5.0));
    assert_eq!(p.advance(1.0), vec![TimelineEvent::Completed]);
    assert!(!p.is_playing());
    assert_eq!(p.values().get("row", "x"), Some(10.0));
}

#[test]
fn endless_repeat_never_completes() {
    let mut p = looping(Repeat::Forever);
    p.play();
    for _ in 0..600 {
        let events = p.advance(1.0 / 60.0);
        assert!(!events.contains(&TimelineEvent::Completed));
    }
    assert!(p.is_playing());
    assert!(p.iteration() >= 9);

    let mut q = looping(Repeat::Forever);
    q.play();
    assert_eq!(
        q.advance(10.25),
        vec![TimelineEvent::Repeated(9), TimelineEvent::Repeated(10)]
    );
    assert_eq!(q.iteration(), 10);
    assert_eq!(q.time(), 0.25);
}

#[test]
fn reverse_unwinds_through_loops() {
    let mut p = looping(Repeat::Times(1));
    p.play();
    p.advance(1.5);
    assert_eq!(p.iteration(), 1);
    p.reverse();
    assert_eq!(p.advance(1.0), vec![TimelineEvent::Repeated(0)]);
    assert_eq!(p.iteration(), 0);
    assert_eq!(p.time(), 0.5);
    assert_eq!(p.advance(1.0), vec![TimelineEvent::ReverseCompleted]);
}

#[test]
fn time_scale_slows_wall_clock_playback() {
    let mut p = looping(Repeat::Forever);
    p.set_time_scale(0.5);
    p.play();
    p.advance(1.0);
    assert_eq!(p.time(), 0.5);

    p.set_time_scale(-1.0);
    assert_eq!(p.time_scale(), 0.5);

    p.ease_time_scale(0.1, 1.0, Ease::Linear);
    p.advance(0.5);
    assert!((p.time_scale() - 0.3).abs() < 1e-12);
    assert!((p.time() - 0.65).abs() < 1e-12);
    p.advance(1.0);
    assert_eq!(p.time_scale(), 0.1);
}

#[test]
fn scrubbing_ignores_time_scale() {
    let mut p = looping(Repeat::Times(0));
    p.set_time_scale(0.1);
    p.set_progress(0.5);
    assert_eq!(p.values().get("row", "x"), Some(5.0));
}

#[test]
fn seek_clamps_and_ignores_nan() {
    let mut p = player();
    p.seek(99.0);
    assert_eq!(p.time(), 2.0);
    p.seek(f64::NAN);
    assert_eq!(p.time(), 0.0);
}
