use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CalheatError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(CalheatError::config("x").to_string().contains("config error:"));
    assert!(CalheatError::render("x").to_string().contains("render error:"));
    assert!(
        CalheatError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CalheatError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
