use super::*;

fn ph(start: f64, end: f64, from: f64, to: f64) -> Phase<f64> {
    Phase {
        range_start: start,
        range_end: end,
        from,
        to,
        ease: Ease::Linear,
    }
}

fn journey() -> PhaseMap<f64> {
    PhaseMap::new(vec![
        ph(0.0, 0.2, 0.0, 1.0),
        ph(0.2, 0.5, 1.0, 2.0),
        ph(0.5, 0.8, 2.0, 3.0),
        ph(0.8, 1.0, 3.0, 4.0),
    ])
    .unwrap()
}

#[test]
fn example_point_selects_third_phase() {
    let hit = journey().locate(0.6);
    assert_eq!(hit.index, 2);
    assert!((hit.local - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn endpoints_map_to_first_and_last() {
    let m = journey();
    assert_eq!(m.locate(0.0), PhaseHit { index: 0, local: 0.0 });
    assert_eq!(m.locate(1.0), PhaseHit { index: 3, local: 1.0 });
}

#[test]
fn boundaries_are_lower_inclusive() {
    let m = journey();
    assert_eq!(m.locate(0.2), PhaseHit { index: 1, local: 0.0 });
    assert_eq!(m.locate(0.5).index, 2);
    assert_eq!(m.locate(0.8).index, 3);
    assert_eq!(m.locate(0.199_999).index, 0);
}

#[test]
fn every_progress_selects_one_phase_with_local_in_range() {
    let m = journey();
    for i in 0..=1000 {
        let p = f64::from(i) / 1000.0;
        let hit = m.locate(p);
        assert!(hit.index < 4);
        assert!((0.0..=1.0).contains(&hit.local), "p={p} local={}", hit.local);
        let ph = &m.phases()[hit.index];
        assert!(p >= ph.range_start);
        assert!(p < ph.range_end || hit.index == 3);
    }
}

#[test]
fn out_of_range_and_nan_are_clamped() {
    let m = journey();
    assert_eq!(m.locate(-0.5), PhaseHit { index: 0, local: 0.0 });
    assert_eq!(m.locate(1.5), PhaseHit { index: 3, local: 1.0 });
    assert_eq!(m.locate(f64::NAN), PhaseHit { index: 0, local: 0.0 });
}

#[test]
fn sample_interpolates_linearly() {
    let (hit, v) = journey().sample(0.35);
    assert_eq!(hit.index, 1);
    assert!((v - 1.5).abs() < 1e-9);
}

#[test]
fn rejects_gaps_overlaps_and_bad_coverage() {
    assert!(PhaseMap::<f64>::new(vec![]).is_err());
    assert!(PhaseMap::new(vec![ph(0.0, 0.4, 0.0, 1.0), ph(0.5, 1.0, 0.0, 1.0)]).is_err());
    assert!(PhaseMap::new(vec![ph(0.0, 0.6, 0.0, 1.0), ph(0.5, 1.0, 0.0, 1.0)]).is_err());
    assert!(PhaseMap::new(vec![ph(0.1, 1.0, 0.0, 1.0)]).is_err());
    assert!(PhaseMap::new(vec![ph(0.0, 0.9, 0.0, 1.0)]).is_err());
    assert!(PhaseMap::new(vec![ph(0.0, 0.0, 0.0, 1.0), ph(0.0, 1.0, 0.0, 1.0)]).is_err());
    assert!(PhaseMap::new(vec![ph(0.0, 1.0, 0.0, 1.0)]).is_ok());
}
