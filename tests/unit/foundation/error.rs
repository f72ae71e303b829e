use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LayoutError::configuration("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(LayoutError::tree("x").to_string().contains("tree error:"));
    assert!(
        LayoutError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        LayoutError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LayoutError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: LayoutError = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    assert!(matches!(err, LayoutError::Serde(_)));
    assert!(!err.is_configuration());
}
