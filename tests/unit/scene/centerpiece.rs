use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn journey_endpoints() {
    let c = Centerpiece::new(false).unwrap();
    let (hit, start) = c.target(0.0, 0.0);
    assert_eq!(hit.index, 0);
    assert!(approx(start.scale, 1.8));

    let (hit, end) = c.target(1.0, 0.0);
    assert_eq!(hit.index, 3);
    assert!(approx(hit.local, 1.0));
    assert!(approx(end.scale, 2.2));
    assert!(approx(end.emissive_intensity, 5.0));
    assert_eq!(end.position, Vec3::ZERO);
}

#[test]
fn third_phase_at_sixty_percent() {
    let c = Centerpiece::new(false).unwrap();
    let (hit, p) = c.target(0.6, 0.0);
    assert_eq!(hit.index, 2);
    assert!(approx(hit.local, 1.0 / 3.0));
    assert!(approx(p.position.x, 2.5 * (2.0 / 3.0)));
    assert!(approx(p.position.z, -5.0 / 3.0));
    assert!(approx(p.rotation_y, 2.0 + 5.0 / 3.0));
}

#[test]
fn mobile_stays_centered() {
    let c = Centerpiece::new(true).unwrap();
    for p in [0.1, 0.35, 0.5, 0.65, 0.9] {
        assert_eq!(c.target(p, 0.0).1.position.x, 0.0);
    }
}

#[test]
fn base_spin_accumulates_with_time() {
    let c = Centerpiece::new(false).unwrap();
    let (_, p) = c.target(0.0, 10.0);
    assert!(approx(p.rotation_y, 3.0));
}

#[test]
fn follower_eases_pose_but_not_glow() {
    let mut c = Centerpiece::new(false).unwrap();
    let (_, first) = c.step(1.0, 1.0 / 60.0);
    assert!(approx(first.scale, 1.0 + (2.2 - 1.0) * FOLLOW_FACTOR));
    assert!(approx(first.emissive_intensity, 5.0));
    for _ in 0..600 {
        c.step(1.0, 1.0 / 60.0);
    }
    assert!(approx(c.pose().scale, 2.2));
}
