use super::*;

fn kinds(src: &str) -> Vec<TokenKind> {
    lex(src).unwrap().into_iter().map(|t| t.kind).collect()
}

fn ident(s: &str) -> TokenKind {
    TokenKind::Ident(s.to_owned())
}

#[test]
fn indentation_becomes_indent_and_dedent() {
    use TokenKind as K;
    assert_eq!(
        kinds("repeat 2 ->\n\tbox\nball"),
        vec![
            ident("repeat"),
            K::Number(2.0),
            K::Arrow,
            K::Newline,
            K::Indent,
            ident("box"),
            K::Newline,
            K::Dedent,
            ident("ball"),
            K::Newline,
            K::Eof,
        ]
    );
}

#[test]
fn blank_and_comment_lines_keep_indentation() {
    use TokenKind as K;
    assert_eq!(
        kinds("a\n\n   // note\n  # other\nb"),
        vec![ident("a"), K::Newline, ident("b"), K::Newline, K::Eof]
    );
}

#[test]
fn unclosed_blocks_are_closed_at_eof() {
    let toks = kinds("if x\n  if y\n    box");
    let dedents = toks.iter().filter(|k| **k == TokenKind::Dedent).count();
    assert_eq!(dedents, 2);
    assert_eq!(toks.last(), Some(&TokenKind::Eof));
}

#[test]
fn inconsistent_dedent_is_rejected() {
    let err = lex("a\n    b\n  c").unwrap_err();
    assert_eq!(err.line, 3);
    assert!(err.message.contains("indentation"));
}

#[test]
fn lexes_operators_strings_and_numbers() {
    use TokenKind as K;
    assert_eq!(
        kinds("x += .5e1 <= 'a\\'b' != \"c\""),
        vec![
            ident("x"),
            K::PlusAssign,
            K::Number(5.0),
            K::Le,
            K::Str("a'b".to_owned()),
            K::Ne,
            K::Str("c".to_owned()),
            K::Newline,
            K::Eof,
        ]
    );
}

#[test]
fn unexpected_character_reports_line() {
    let err = lex("box\nball @").unwrap_err();
    assert_eq!(err.line, 2);
    assert!(err.message.contains('@'));
}

#[test]
fn spans_are_absolute_offsets() {
    let toks = lex("a\n  bc").unwrap();
    let bc = toks
        .iter()
        .find(|t| t.kind == ident("bc"))
        .unwrap();
    assert_eq!(bc.span, Span { start: 4, end: 6 });
}

#[test]
fn increment_is_only_glued_to_a_name() {
    use TokenKind as K;
    assert_eq!(
        kinds("n++ ; m-- ; 1--1"),
        vec![
            ident("n"),
            K::PlusPlus,
            K::Semi,
            ident("m"),
            K::MinusMinus,
            K::Semi,
            K::Number(1.0),
            K::Minus,
            K::Minus,
            K::Number(1.0),
            K::Newline,
            K::Eof,
        ]
    );
}
