use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FramefxError::unknown_kind("glow")
            .to_string()
            .contains("unknown effect kind 'glow'")
    );
    assert!(
        FramefxError::invalid_config("x")
            .to_string()
            .contains("invalid config:")
    );
    assert!(
        FramefxError::invalid_frame("x")
            .to_string()
            .contains("invalid frame:")
    );
    assert!(
        FramefxError::out_of_range("x")
            .to_string()
            .contains("value out of range:")
    );
    assert!(
        FramefxError::invariant("x")
            .to_string()
            .contains("invariant violated:")
    );
    assert!(
        FramefxError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FramefxError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
