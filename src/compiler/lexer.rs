use crate::compiler::error::CompileError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Ident(String),
    Number(f64),
    Str(String),

    LParen,
    RParen,
    Comma,
    Semi,
    Arrow,

    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Bang,

    Assign,
    PlusAssign,
    MinusAssign,
    StarAssign,
    SlashAssign,

    EqEq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    AndAnd,
    OrOr,
    /// `++` glued to the end of an identifier.
    PlusPlus,
    MinusMinus,

    Newline,
    Indent,
    Dedent,
    Eof,
}

/// Tokenize a script, turning leading whitespace into `Indent`/`Dedent` pairs.
///
/// Each leading space or tab counts as one column. Lines holding only whitespace or a
/// comment do not affect indentation.
pub(crate) fn lex(src: &str) -> Result<Vec<Token>, CompileError> {
    let mut out = Vec::new();
    let mut levels: Vec<usize> = vec![0];
    let mut line_start = 0usize;

    for raw in src.split('\n') {
        let line_end = line_start + raw.len();
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let width = line.len() - line.trim_start_matches([' ', '\t']).len();
        let body_start = line_start + width;
        let body = &line[width..];

        if !(body.is_empty() || body.starts_with("//") || body.starts_with('#')) {
            let current = levels.last().copied().unwrap_or(0);
            let at = Span {
                start: body_start,
                end: body_start,
            };
            if width > current {
                levels.push(width);
                out.push(Token {
                    kind: TokenKind::Indent,
                    span: at,
                });
            } else {
                while levels.last().is_some_and(|&l| l > width) {
                    levels.pop();
                    out.push(Token {
                        kind: TokenKind::Dedent,
                        span: at,
                    });
                }
                if levels.last().copied().unwrap_or(0) != width {
                    return Err(CompileError::at(src, body_start, "inconsistent indentation"));
                }
            }

            lex_line(src, body_start, body, &mut out)?;
            out.push(Token {
                kind: TokenKind::Newline,
                span: Span {
                    start: body_start + body.len(),
                    end: line_end,
                },
            });
        }

        line_start = line_end + 1;
    }

    let end = Span {
        start: src.len(),
        end: src.len(),
    };
    for _ in 1..levels.len() {
        out.push(Token {
            kind: TokenKind::Dedent,
            span: end,
        });
    }
    out.push(Token {
        kind: TokenKind::Eof,
        span: end,
    });
    Ok(out)
}

fn lex_line(src: &str, base: usize, line: &str, out: &mut Vec<Token>) -> Result<(), CompileError> {
    let bytes = line.as_bytes();
    let mut i = 0usize;

    while i < bytes.len() {
        let c = bytes[i] as char;
        if c == ' ' || c == '\t' {
            i += 1;
            continue;
        }
        if c == '#' || line[i..].starts_with("//") {
            break;
        }

        let start = i;
        let span = |end: usize| Span {
            start: base + start,
            end: base + end,
        };

        if c.is_ascii_digit()
            || (c == '.' && i + 1 < bytes.len() && (bytes[i + 1] as char).is_ascii_digit())
        {
            if c == '.' {
                i += 1;
            } else {
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
                if i < bytes.len() && bytes[i] == b'.' {
                    i += 1;
                }
            }
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
                let e_pos = i;
                i += 1;
                if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
                    i += 1;
                }
                let exp_start = i;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
                if exp_start == i {
                    return Err(CompileError::at(
                        src,
                        base + e_pos,
                        "invalid number exponent (expected digits)",
                    ));
                }
            }
            let v: f64 = line[start..i]
                .parse()
                .map_err(|_| CompileError::at(src, base + start, "invalid number"))?;
            out.push(Token {
                kind: TokenKind::Number(v),
                span: span(i),
            });
            continue;
        }

        if c.is_ascii_alphabetic() || c == '_' {
            i += 1;
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                i += 1;
            }
            out.push(Token {
                kind: TokenKind::Ident(line[start..i].to_owned()),
                span: span(i),
            });
            continue;
        }

        if c == '"' || c == '\'' {
            let quote = c;
            let mut s = String::new();
            i += 1;
            let mut closed = false;
            while let Some(ch) = line[i..].chars().next() {
                i += ch.len_utf8();
                if ch == quote {
                    closed = true;
                    break;
                }
                if ch == '\\' {
                    let Some(esc) = line[i..].chars().next() else {
                        break;
                    };
                    i += esc.len_utf8();
                    s.push(match esc {
                        'n' => '\n',
                        't' => '\t',
                        other => other,
                    });
                } else {
                    s.push(ch);
                }
            }
            if !closed {
                return Err(CompileError::at(src, base + start, "unterminated string"));
            }
            out.push(Token {
                kind: TokenKind::Str(s),
                span: span(i),
            });
            continue;
        }

        let after_ident = out
            .last()
            .is_some_and(|t| matches!(t.kind, TokenKind::Ident(_)) && t.span.end == base + i);
        if after_ident && i + 1 < bytes.len() {
            let step = match &bytes[i..i + 2] {
                b"++" => Some(TokenKind::PlusPlus),
                b"--" => Some(TokenKind::MinusMinus),
                _ => None,
            };
            if let Some(kind) = step {
                i += 2;
                out.push(Token {
                    kind,
                    span: span(i),
                });
                continue;
            }
        }

        if i + 1 < bytes.len() {
            let kind = match &bytes[i..i + 2] {
                b"->" => Some(TokenKind::Arrow),
                b"+=" => Some(TokenKind::PlusAssign),
                b"-=" => Some(TokenKind::MinusAssign),
                b"*=" => Some(TokenKind::StarAssign),
                b"/=" => Some(TokenKind::SlashAssign),
                b"==" => Some(TokenKind::EqEq),
                b"!=" => Some(TokenKind::Ne),
                b"<=" => Some(TokenKind::Le),
                b">=" => Some(TokenKind::Ge),
                b"&&" => Some(TokenKind::AndAnd),
                b"||" => Some(TokenKind::OrOr),
                _ => None,
            };
            if let Some(kind) = kind {
                i += 2;
                out.push(Token {
                    kind,
                    span: span(i),
                });
                continue;
            }
        }

        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semi,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '!' => TokenKind::Bang,
            '=' => TokenKind::Assign,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            _ => {
                let ch = line[i..].chars().next().unwrap_or(c);
                return Err(CompileError::at(
                    src,
                    base + start,
                    format!("unexpected character '{ch}'"),
                ));
            }
        };
        i += 1;
        out.push(Token {
            kind,
            span: span(i),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compiler/lexer.rs"]
mod tests;
