use super::*;
use crate::timeline::model::{Repeat, Step};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn sequential_steps_chain_end_to_start() {
    let tl = Timeline::new()
        .then(Step::to(&["a"], [("x", 10.0)]).duration(1.0).ease(Ease::Linear))
        .then(Step::to(&["a"], [("x", 20.0)]).duration(2.0).ease(Ease::Linear));
    let c = tl.compile().unwrap();
    assert!(approx(c.duration(), 3.0));
    assert!(approx(c.tweens()[1].start, 1.0));
    assert!(approx(c.tweens()[1].from, 10.0));
    assert!(approx(c.values_at(0.5).get("a", "x").unwrap(), 5.0));
    assert!(approx(c.values_at(2.0).get("a", "x").unwrap(), 15.0));
    assert!(approx(c.values_at(99.0).get("a", "x").unwrap(), 20.0));
}

#[test]
fn relative_positions_resolve_against_end_and_start() {
    let tl = Timeline::new()
        .then(Step::to(&["a"], [("x", 1.0)]).duration(1.0))
        .then(Step::to(&["b"], [("x", 1.0)]).duration(1.0).at(Position::AfterEnd(-0.4)))
        .then(Step::to(&["c"], [("x", 1.0)]).duration(1.0).at(Position::AfterStart(0.0)))
        .then(Step::call("anchor").at(Position::AfterEnd(0.5)))
        .then(Step::to(&["d"], [("x", 1.0)]).duration(1.0).at(Position::AfterEnd(-5.0)));
    let c = tl.compile().unwrap();
    let start_of = |t: &str| c.tweens().iter().find(|tw| tw.target == t).unwrap().start;
    assert!(approx(start_of("a"), 0.0));
    assert!(approx(start_of("b"), 0.6));
    assert!(approx(start_of("c"), 0.6));
    assert!(approx(c.markers()[0].time, 2.1));
    assert!(approx(start_of("d"), 0.0), "negative starts clamp to 0");
    assert!(approx(c.duration(), 2.1));
}

#[test]
fn stagger_offsets_each_target() {
    let tl = Timeline::new().then(
        Step::from(&["l1", "l2", "l3"], [("yPercent", 100.0)])
            .duration(1.2)
            .stagger(0.15),
    );
    let c = tl.compile().unwrap();
    let starts: Vec<f64> = c.tweens().iter().map(|t| t.start).collect();
    assert!(approx(starts[0], 0.0));
    assert!(approx(starts[1], 0.15));
    assert!(approx(starts[2], 0.3));
    assert!(approx(c.duration(), 1.5));
}

#[test]
fn from_tweens_render_immediately_and_return_to_base() {
    let tl = Timeline::new()
        .with_base("title", "opacity", 1.0)
        .then(Step::from(&["title"], [("opacity", 0.0), ("y", 100.0)]).duration(1.0));
    let c = tl.compile().unwrap();
    let before = c.values_at(0.0);
    assert_eq!(before.get("title", "opacity"), Some(0.0));
    assert_eq!(before.get("title", "y"), Some(100.0));
    let after = c.values_at(1.0);
    assert_eq!(after.get("title", "opacity"), Some(1.0));
    assert_eq!(after.get("title", "y"), Some(0.0));
}

#[test]
fn delayed_to_tween_holds_base_until_start() {
    let tl = Timeline::new()
        .with_base("dot", "scale", 0.5)
        .then(Step::to(&["dot"], [("scale", 2.0)]).duration(1.0).at(Position::At(1.0)));
    let c = tl.compile().unwrap();
    assert_eq!(c.values_at(0.5).get("dot", "scale"), Some(0.5));
    assert_eq!(c.values_at(2.0).get("dot", "scale"), Some(2.0));
}

#[test]
fn implicit_values_default_by_property() {
    let tl = Timeline::new().then(Step::to(&["card"], [("opacity", 0.0), ("x", 5.0)]));
    let c = tl.compile().unwrap();
    let tw = |p: &str| c.tweens().iter().find(|t| t.property == p).unwrap().from;
    assert_eq!(tw("opacity"), 1.0);
    assert_eq!(tw("x"), 0.0);
}

#[test]
fn set_applies_at_its_start() {
    let tl = Timeline::new()
        .then(Step::set(&["curtain"], [("yPercent", 100.0)]))
        .then(Step::to(&["curtain"], [("yPercent", 0.0)]).duration(0.8));
    let c = tl.compile().unwrap();
    assert_eq!(c.values_at(0.0).get("curtain", "yPercent"), Some(100.0));
    assert_eq!(c.values_at(0.8).get("curtain", "yPercent"), Some(0.0));
}

#[test]
fn markers_cross_in_both_directions() {
    let tl = Timeline::new()
        .then(Step::call("start"))
        .then(Step::to(&["a"], [("x", 1.0)]).duration(1.0))
        .then(Step::call("mid"))
        .then(Step::to(&["a"], [("x", 2.0)]).duration(1.0))
        .then(Step::call("end"));
    let c = tl.compile().unwrap();
    assert_eq!(c.markers_crossed(0.0, 1.5), vec!["start", "mid"]);
    assert_eq!(c.markers_crossed(1.5, 2.0), vec!["end"]);
    assert_eq!(c.markers_crossed(2.0, 0.5), vec!["end", "mid"]);
    assert!(c.markers_crossed(1.0, 1.0).is_empty());
}

#[test]
fn markers_at_zero_fire_leaving_and_returning() {
    let tl = Timeline::new()
        .then(Step::call("start"))
        .then(Step::to(&["a"], [("x", 1.0)]).duration(1.0));
    let c = tl.compile().unwrap();
    assert_eq!(c.markers_crossed(0.0, 0.5), vec!["start"]);
    assert!(c.markers_crossed(0.5, 0.2).is_empty());
    assert_eq!(c.markers_crossed(0.5, 0.0), vec!["start"]);
}

#[test]
fn repeat_carries_into_the_compiled_timeline() {
    let tl = Timeline::new()
        .then(Step::to(&["row"], [("x", -100.0)]).duration(40.0))
        .repeat(Repeat::Forever);
    assert_eq!(tl.compile().unwrap().repeat(), Repeat::Forever);
    assert_eq!(Timeline::new().compile().unwrap().repeat(), Repeat::Times(0));
}

#[test]
fn compile_reports_step_index() {
    let tl = Timeline::new()
        .then(Step::to(&["a"], [("x", 1.0)]))
        .then(Step::to(&["a"], [("x", 1.0)]).duration(-2.0));
    let err = tl.compile().unwrap_err().to_string();
    assert!(err.contains("step 1"), "{err}");
}
