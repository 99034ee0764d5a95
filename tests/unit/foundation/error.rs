use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ScrollweaveError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ScrollweaveError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        ScrollweaveError::navigation("x")
            .to_string()
            .contains("navigation error:")
    );
    assert!(
        ScrollweaveError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ScrollweaveError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
