use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RevealError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(RevealError::asset("x").to_string().contains("asset error:"));
    assert!(
        RevealError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("disk gone");
    let err = RevealError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("disk gone"));
}

#[test]
fn other_keeps_context_chain() {
    let base = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let err = RevealError::from(anyhow::Error::new(base).context("read asset 'cursor.svg'"));
    let RevealError::Other(inner) = &err else {
        panic!("expected Other, got {err:?}");
    };
    assert_eq!(inner.to_string(), "read asset 'cursor.svg'");
    assert!(format!("{inner:#}").contains("no such file"));
}

#[test]
fn in_field_prefixes_validation_only() {
    let err = RevealError::validation("must be > 0").in_field("reveal.duration_ms");
    assert_eq!(
        err.to_string(),
        "validation error: reveal.duration_ms: must be > 0"
    );
    let err = RevealError::asset("bad").in_field("assets.logo");
    assert_eq!(err.to_string(), "asset error: bad");
}
