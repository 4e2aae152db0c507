use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(LiveError::syntax("x").to_string().contains("syntax error:"));
    assert!(LiveError::compile("x").to_string().contains("compile error:"));
    assert!(LiveError::runtime("x").to_string().contains("runtime error:"));
    assert!(LiveError::lex("x").to_string().contains("lex error:"));
}

#[test]
fn user_message_drops_the_prefix() {
    assert_eq!(
        LiveError::syntax("Unbalanced ()").user_message(),
        "Unbalanced ()"
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LiveError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
