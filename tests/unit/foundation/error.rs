use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FramecastError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FramecastError::invalid_range("x")
            .to_string()
            .contains("invalid range error:")
    );
    assert!(
        FramecastError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        FramecastError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        FramecastError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        FramecastError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FramecastError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
