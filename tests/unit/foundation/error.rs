use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SnapreelError::missing_argument("gameId")
            .to_string()
            .contains("missing argument:")
    );
    assert!(
        SnapreelError::not_found("x")
            .to_string()
            .contains("not found:")
    );
    assert!(
        SnapreelError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SnapreelError::source("x")
            .to_string()
            .contains("source error:")
    );
    assert!(
        SnapreelError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn invalid_format_names_argument_and_value() {
    let err = SnapreelError::invalid_format("play id", "12a");
    let msg = err.to_string();
    assert!(msg.contains("invalid play id format"));
    assert!(msg.contains("\"12a\""));
    assert!(err.is_input_error());
    assert!(!SnapreelError::not_found("event").is_input_error());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SnapreelError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
