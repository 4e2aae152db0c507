use super::*;

const SKETCH: &str = "simpleGradient fuchsia,color(100,200,200),yellow\nscale 2.1\n5 times ->\n\trotate 0,1,time/5000\n\tbox 0.1,0.1,0.1\n// spikes\n\t3 times ->\n\t\tball -.5\n";

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

#[test]
fn lexes_translation_then_mesh() {
    let lx = Lexer::autocoder().unwrap();
    let tokens = lx.lex("rotate 1\nbox").unwrap();
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Translation,
            TokenKind::Space,
            TokenKind::Num,
            TokenKind::Newline,
            TokenKind::Mesh,
        ]
    );
}

#[test]
fn concatenated_tokens_reproduce_input() {
    let lx = Lexer::autocoder().unwrap();
    let tokens = lx.lex(SKETCH).unwrap();
    assert_eq!(emit(&tokens), SKETCH);
}

#[test]
fn longer_word_beats_keyword_prefix() {
    let lx = Lexer::autocoder().unwrap();
    let tokens = lx.lex("boxes linen").unwrap();
    assert_eq!(tokens[0], Token::new(TokenKind::Unknown, "boxes"));
    assert_eq!(tokens[2], Token::new(TokenKind::Colour, "linen"));
}

#[test]
fn equal_length_prefers_earliest_rule() {
    let lx = Lexer::autocoder().unwrap();
    let tokens = lx.lex("time red 4 times ->").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Variable);
    assert_eq!(tokens[2].kind, TokenKind::Colour);
    assert_eq!(tokens[4], Token::new(TokenKind::Iteration, "4 times ->"));
}

#[test]
fn custom_rule_tables_follow_the_same_tie_break() {
    let mut lx = Lexer::new();
    lx.add_rule("ab", TokenKind::Mesh)
        .unwrap()
        .add_rule("[a-z]+", TokenKind::Unknown)
        .unwrap();
    assert_eq!(kinds(&lx.lex("ab").unwrap()), vec![TokenKind::Mesh]);
    assert_eq!(kinds(&lx.lex("abc").unwrap()), vec![TokenKind::Unknown]);
}

#[test]
fn unmatched_input_yields_one_error_then_ends() {
    let lx = Lexer::autocoder().unwrap();
    let mut stream = lx.tokens("box @ ball");
    assert_eq!(stream.next(), Some(Ok(Token::new(TokenKind::Mesh, "box"))));
    assert_eq!(stream.next(), Some(Ok(Token::new(TokenKind::Space, " "))));
    let err = stream.next().unwrap().unwrap_err();
    assert_eq!(err.offset, 4);
    assert!(stream.next().is_none());
}

#[test]
fn stream_restarts_from_an_offset() {
    let lx = Lexer::autocoder().unwrap();
    let mut stream = lx.tokens("move 1\nball");
    stream.next();
    let resumed: Vec<Token> = lx
        .tokens_from("move 1\nball", stream.offset())
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(emit(&resumed), " 1\nball");
}

#[test]
fn restart_inside_a_character_is_an_error() {
    let lx = Lexer::autocoder().unwrap();
    let mut stream = lx.tokens_from("✓doOnce -> ball", 1);
    let err = stream.next().unwrap().unwrap_err();
    assert_eq!(err.offset, 1);
    assert!(stream.next().is_none());

    let tokens: Vec<Token> = lx
        .tokens_from("✓doOnce -> ball", '✓'.len_utf8())
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(emit(&tokens), "doOnce -> ball");
}

#[test]
fn bad_pattern_is_reported() {
    let mut lx = Lexer::new();
    assert!(lx.add_rule("(", TokenKind::Unknown).is_err());
}

#[test]
fn every_builtin_sketch_round_trips() {
    let lx = Lexer::autocoder().unwrap();
    for demo in crate::demos::DEMOS.iter().chain(crate::demos::TUTORIALS) {
        let tokens = lx
            .lex(demo.code)
            .unwrap_or_else(|e| panic!("{}: {e}", demo.name));
        assert_eq!(emit(&tokens), demo.code, "{}", demo.name);
    }
}
