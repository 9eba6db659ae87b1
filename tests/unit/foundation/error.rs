use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TurntableError::degenerate_axis("x")
            .to_string()
            .contains("degenerate axis error:")
    );
    assert!(
        TurntableError::encoder_process("x")
            .to_string()
            .contains("encoder process error:")
    );
    assert!(
        TurntableError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        TurntableError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        TurntableError::EmptySequence
            .to_string()
            .contains("empty sequence error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TurntableError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn io_broken_pipe_maps_to_broken_pipe_variant() {
    let err = TurntableError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
    assert!(matches!(err, TurntableError::BrokenPipe(_)));

    let err = TurntableError::from(std::io::Error::from(std::io::ErrorKind::NotFound));
    assert!(matches!(err, TurntableError::Other(_)));
}
