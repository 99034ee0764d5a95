use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(60, 0).is_err());
}

#[test]
fn fps_frame_math() {
    let fps = Fps::new(60, 1).unwrap();
    assert!((fps.frame_duration_secs() - 1.0 / 60.0).abs() < 1e-12);
    let ntsc = Fps::new(30000, 1001).unwrap();
    assert!((ntsc.frame_duration_secs() - 1001.0 / 30000.0).abs() < 1e-15);
}

#[test]
fn region_id_is_transparent_in_json() {
    let id = RegionId::from("services-track");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"services-track\"");
    assert_eq!(id.to_string(), "services-track");
}
