//! Rule-based tokenizer used by the autocoder.
//!
//! The lexer is deliberately loose: it only has to recognise the handful of token kinds the
//! autocoder knows how to mutate, and must reproduce its input byte for byte when the tokens
//! are concatenated again.

pub mod token;

pub use token::{Token, TokenKind, mutate};

use crate::foundation::error::LiveError;
use crate::foundation::palette;
use regex::Regex;
use std::fmt;

/// No rule matched the remaining input, or a rule pattern failed to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub offset: usize,
    pub message: String,
}

impl LexError {
    pub fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lex error at byte {}: {}", self.offset, self.message)
    }
}

impl std::error::Error for LexError {}

impl From<LexError> for LiveError {
    fn from(e: LexError) -> Self {
        LiveError::lex(e.to_string())
    }
}

/// A pattern anchored at the current position plus the kind it produces.
#[derive(Debug, Clone)]
pub struct LexRule {
    re: Regex,
    kind: TokenKind,
}

impl LexRule {
    pub fn new(pattern: &str, kind: TokenKind) -> Result<Self, LexError> {
        let re = Regex::new(&format!("^(?:{pattern})"))
            .map_err(|e| LexError::new(0, format!("bad rule pattern '{pattern}': {e}")))?;
        Ok(Self { re, kind })
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    fn match_len(&self, rest: &str) -> Option<usize> {
        self.re.find(rest).map(|m| m.end())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Lexer {
    rules: Vec<LexRule>,
}

impl Lexer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_rule(&mut self, pattern: &str, kind: TokenKind) -> Result<&mut Self, LexError> {
        self.rules.push(LexRule::new(pattern, kind)?);
        Ok(self)
    }

    pub fn rules(&self) -> &[LexRule] {
        &self.rules
    }

    /// The rule table the autocoder tokenizes editor text with.
    pub fn autocoder() -> Result<Self, LexError> {
        use TokenKind as K;

        let mut lx = Self::new();
        lx.add_rule(r"//.*\n", K::Comment)?
            .add_rule(r"\t", K::Tab)?
            .add_rule(r"-?[0-9]+\.?[0-9]*", K::Num)?
            .add_rule(r"-?\.[0-9]*", K::Num)?
            .add_rule(r"[*|/+\-=]", K::Op)?
            .add_rule(r",", K::ArgDelim)?
            .add_rule(r"[\n\r]{1,2}", K::Newline)?;

        for word in ["rotate", "move", "scale"] {
            lx.add_rule(word, K::Translation)?;
        }
        for name in palette::names() {
            lx.add_rule(&regex::escape(name), K::Colour)?;
        }
        for word in ["background", "fill", "stroke", "simpleGradient"] {
            lx.add_rule(word, K::ColourOp)?;
        }
        for word in ["box", "ball", "peg", "rect", "line"] {
            lx.add_rule(word, K::Mesh)?;
        }
        for pat in ["ambientLight", "noStroke", "ballDetail", r"animationStyle\s\w+"] {
            lx.add_rule(pat, K::StateFun)?;
        }
        lx.add_rule(r"\d+\s+times\s+->", K::Iteration)?
            .add_rule("time", K::Variable)?
            .add_rule("delay", K::Variable)?
            .add_rule(r"[✓]?doOnce\s+->?", K::DoOnce)?
            .add_rule(" +", K::Space)?;

        for pat in [
            "'",
            "\"",
            "==",
            "else",
            r"next-tutorial:\w+",
            r"\w+",
            "if",
            "pushMatrix",
            "popMatrix",
            "play",
            "bpm",
            r"color\s*\(.+\)",
            "noFill",
            "frame",
            "strokeSize",
            r"\(",
            r"\)",
            "%",
            r"[\[\]{}<>!.:;?✓]",
        ] {
            lx.add_rule(pat, K::Unknown)?;
        }
        Ok(lx)
    }

    /// Tokenize `input` lazily from its start.
    pub fn tokens<'a>(&'a self, input: &'a str) -> TokenStream<'a> {
        self.tokens_from(input, 0)
    }

    /// Tokenize `input` lazily, resuming at byte `offset` (a token boundary).
    ///
    /// An offset inside a multi-byte character yields a single `LexError`.
    pub fn tokens_from<'a>(&'a self, input: &'a str, offset: usize) -> TokenStream<'a> {
        TokenStream {
            lexer: self,
            input,
            pos: offset.min(input.len()),
            failed: false,
        }
    }

    /// Tokenize all of `input`, stopping at the first unmatched position.
    pub fn lex(&self, input: &str) -> Result<Vec<Token>, LexError> {
        self.tokens(input).collect()
    }

    /// Longest match at `rest`; on equal length the earliest registered rule wins.
    fn best_match(&self, rest: &str) -> Option<(usize, TokenKind)> {
        let mut best: Option<(usize, TokenKind)> = None;
        for rule in self.rules.iter().rev() {
            let Some(len) = rule.match_len(rest) else {
                continue;
            };
            if len == 0 {
                continue;
            }
            if best.is_none_or(|(best_len, _)| len >= best_len) {
                best = Some((len, rule.kind));
            }
        }
        best
    }
}

/// Lazy token iterator over one input; yields a single `Err` and then ends on failure.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    lexer: &'a Lexer,
    input: &'a str,
    pos: usize,
    failed: bool,
}

impl TokenStream<'_> {
    /// Byte offset of the next token; feed it back to [`Lexer::tokens_from`] to restart here.
    pub fn offset(&self) -> usize {
        self.pos
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.input.len() {
            return None;
        }
        if !self.input.is_char_boundary(self.pos) {
            self.failed = true;
            return Some(Err(LexError::new(
                self.pos,
                "offset is inside a character",
            )));
        }
        let rest = &self.input[self.pos..];
        match self.lexer.best_match(rest) {
            Some((len, kind)) => {
                let tok = Token::new(kind, &rest[..len]);
                self.pos += len;
                Some(Ok(tok))
            }
            None => {
                self.failed = true;
                let snippet: String = rest.chars().take(16).collect();
                Some(Err(LexError::new(
                    self.pos,
                    format!("no rule matches '{snippet}'"),
                )))
            }
        }
    }
}

/// Concatenate token texts back into source.
pub fn emit(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/lexer/lexer.rs"]
mod tests;
