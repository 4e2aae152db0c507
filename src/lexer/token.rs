use crate::foundation::palette;
use rand::Rng;
use rand::seq::IteratorRandom;

/// Lexical category assigned by the autocoder's rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Comment,
    Tab,
    Num,
    Op,
    ArgDelim,
    Newline,
    Translation,
    Colour,
    ColourOp,
    Mesh,
    StateFun,
    Iteration,
    Variable,
    DoOnce,
    Space,
    Unknown,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Comment => "COMMENT",
            Self::Tab => "TAB",
            Self::Num => "NUM",
            Self::Op => "OP",
            Self::ArgDelim => "ARGDLIM",
            Self::Newline => "NEWLINE",
            Self::Translation => "TRANSLATION",
            Self::Colour => "COLOUR",
            Self::ColourOp => "COLOUROP",
            Self::Mesh => "MESH",
            Self::StateFun => "STATEFUN",
            Self::Iteration => "ITERATION",
            Self::Variable => "VARIABLE",
            Self::DoOnce => "DOONCE",
            Self::Space => "SPACE",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexeme and its kind. Tokens are values: mutation produces a new token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Whether [`mutate`] can change this token.
    pub fn is_mutable(&self) -> bool {
        match self.kind {
            TokenKind::Num => self.text.parse::<f64>().is_ok(),
            TokenKind::Iteration => leading_count(&self.text).is_some(),
            TokenKind::Colour => palette::is_colour_name(&self.text),
            TokenKind::Mesh => mesh_alternate(&self.text).is_some(),
            _ => false,
        }
    }
}

/// Mesh keywords that swap with each other; applying the swap twice is the identity.
pub const MESH_SWAPS: &[(&str, &str)] = &[("box", "ball"), ("line", "rect")];

pub fn mesh_alternate(text: &str) -> Option<&'static str> {
    MESH_SWAPS.iter().find_map(|&(a, b)| {
        if text == a {
            Some(b)
        } else if text == b {
            Some(a)
        } else {
            None
        }
    })
}

/// Produce the mutated form of `token`; inert kinds come back unchanged.
pub fn mutate(token: &Token, rng: &mut impl Rng) -> Token {
    let text = match token.kind {
        TokenKind::Num => mutate_number(&token.text, rng),
        TokenKind::Iteration => mutate_iteration(&token.text, rng),
        TokenKind::Colour => mutate_colour(&token.text, rng),
        TokenKind::Mesh => mesh_alternate(&token.text).map(str::to_owned),
        _ => None,
    };
    match text {
        Some(text) => Token::new(token.kind, text),
        None => token.clone(),
    }
}

fn mutate_number(text: &str, rng: &mut impl Rng) -> Option<String> {
    let mut n: f64 = text.parse().ok()?;
    if n == 0.0 {
        n = 0.1;
    }
    let jitter: f64 = rng.gen_range(-1.0..=1.0);
    Some(format!("{:.2}", n + n * jitter))
}

fn leading_count(text: &str) -> Option<(u64, usize)> {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    let n = text[..digits].parse().ok()?;
    Some((n, digits))
}

fn mutate_iteration(text: &str, rng: &mut impl Rng) -> Option<String> {
    let (n, digits) = leading_count(text)?;
    let n = if n == 0 || rng.gen_bool(0.5) {
        n.saturating_add(1)
    } else {
        n - 1
    };
    Some(format!("{n}{}", &text[digits..]))
}

fn mutate_colour(text: &str, rng: &mut impl Rng) -> Option<String> {
    palette::names()
        .filter(|&name| name != text)
        .choose(rng)
        .map(str::to_owned)
}

#[cfg(test)]
#[path = "../../tests/unit/lexer/token.rs"]
mod tests;
