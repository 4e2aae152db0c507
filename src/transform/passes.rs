//! Textual rewrite passes from authoring syntax to the canonical script.
//!
//! Every pass keeps the number of lines unchanged, so a line index found while running the
//! rewritten program still points at the same line of the source the user typed.

use crate::compiler::vocabulary;
use crate::foundation::error::{LiveError, LiveResult};
use regex::{Captures, Regex};
use std::sync::LazyLock;

pub type Pass = fn(&str) -> LiveResult<String>;

/// Rewrite passes, in the order they run.
pub const PASSES: &[(&str, Pass)] = &[
    ("remove_ticked_do_once", remove_ticked_do_once),
    ("check_syntax", check_syntax),
    ("adjust_postfix_notation", adjust_postfix_notation),
    ("desugar_times", desugar_times),
    ("instrument_do_once", instrument_do_once),
    ("reject_draw_calls", reject_draw_calls),
    ("normalize_barewords", normalize_barewords),
    ("separate_commands", separate_commands),
];

pub const TICK: char = '✓';

struct Patterns {
    ticked_block: Regex,
    strings_and_comments: Regex,
    strings: Regex,
    postfix_bpm: Regex,
    postfix_colour: [(&'static str, Regex); 3],
    times: Regex,
    inline_do_once: Regex,
    block_do_once: Regex,
    first_statement: Regex,
    draw_call: Regex,
    unmarked_do_once: Regex,
}

impl Patterns {
    fn new() -> Self {
        let postfix = |cmd: &'static str| {
            let re = Regex::new(&format!(r"([a-zA-Z]+)[ ]+{cmd}(\s|$)"))
                .expect("valid postfix command regex");
            (cmd, re)
        };
        Self {
            ticked_block: Regex::new(r"(?m)^([ \t]*)✓[ ]*doOnce[ ]*->[ ]*$")
                .expect("valid ticked doOnce regex"),
            strings_and_comments: Regex::new(
                r#"("(?:[^"\\\n]|\\.)*")|('(?:[^'\\\n]|\\.)*')|(//[^\n]*)|(/\*(?s:.*?)\*/)"#,
            )
            .expect("valid comment regex"),
            strings: Regex::new(r#""(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*'"#)
                .expect("valid string literal regex"),
            postfix_bpm: Regex::new(r"(\d+)[ ]+bpm(\s|$)").expect("valid postfix bpm regex"),
            postfix_colour: [postfix("fill"), postfix("stroke"), postfix("background")],
            times: Regex::new(r"(\d+)[ \t]+times[ ]*->").expect("valid times regex"),
            inline_do_once: Regex::new(r"^(\s*)doOnce[ ]*->[ ]*(\S.*)$")
                .expect("valid inline doOnce regex"),
            block_do_once: Regex::new(r"^(\s*)doOnce[ ]*->[ ]*$")
                .expect("valid block doOnce regex"),
            first_statement: Regex::new(r"^(\s*)(.+)$").expect("valid statement regex"),
            draw_call: Regex::new(r"(^|[\s+;])draw\s*\(").expect("valid draw call regex"),
            unmarked_do_once: Regex::new(r"^(\s*)doOnce([ ]*->.*)$")
                .expect("valid doOnce marking regex"),
        }
    }
}

static PATTERNS: LazyLock<Patterns> = LazyLock::new(Patterns::new);

/// A ticked `doOnce` already ran: a ticked block header becomes `if false ->`, and any
/// other tick turns the rest of its line into a comment.
pub fn remove_ticked_do_once(code: &str) -> LiveResult<String> {
    let out = PATTERNS.ticked_block.replace_all(code, "${1}if false ->");
    Ok(out.replace(TICK, "//"))
}

/// Strip comments and reject unbalanced quotes and brackets.
///
/// Block comments are replaced by as many newlines as they spanned. Delimiters are counted
/// outside complete string literals; the first odd count, checked in the order `'`, `"`,
/// `()`, `{}`, `[]`, names the error.
pub fn check_syntax(code: &str) -> LiveResult<String> {
    let stripped = PATTERNS
        .strings_and_comments
        .replace_all(code, |caps: &Captures<'_>| {
            if let Some(s) = caps.get(1).or_else(|| caps.get(2)) {
                s.as_str().to_owned()
            } else if caps.get(3).is_some() {
                String::new()
            } else {
                let lines = caps[0].matches('\n').count();
                "\n".repeat(lines)
            }
        })
        .into_owned();

    let bare = PATTERNS.strings.replace_all(&stripped, "");
    let mut counts = [0usize; 5];
    for c in bare.chars() {
        let slot = match c {
            '\'' => 0,
            '"' => 1,
            '(' | ')' => 2,
            '{' | '}' => 3,
            '[' | ']' => 4,
            _ => continue,
        };
        counts[slot] += 1;
    }

    const REASONS: [&str; 5] = [
        "Missing '",
        "Missing \"",
        "Unbalanced ()",
        "Unbalanced {}",
        "Unbalanced []",
    ];
    if let Some(i) = counts.iter().position(|n| n % 2 == 1) {
        return Err(LiveError::syntax(REASONS[i]));
    }
    Ok(stripped)
}

/// `60 bpm` becomes `bpm 60`; `red fill`, `red stroke` and `red background` become prefix calls.
pub fn adjust_postfix_notation(code: &str) -> LiveResult<String> {
    let p = &*PATTERNS;
    let mut out = p.postfix_bpm.replace_all(code, "bpm ${1}${2}").into_owned();
    for (cmd, re) in &p.postfix_colour {
        out = re
            .replace_all(&out, format!("{cmd} ${{1}}${{2}}").as_str())
            .into_owned();
    }
    Ok(out)
}

/// `N times ->` becomes `;repeat N ->`.
pub fn desugar_times(code: &str) -> LiveResult<String> {
    Ok(PATTERNS
        .times
        .replace_all(code, ";repeat ${1} ->")
        .into_owned())
}

/// Wrap each `doOnce` in a one-shot repeat that reports its line index when it runs.
pub fn instrument_do_once(code: &str) -> LiveResult<String> {
    if !code.contains("doOnce") {
        return Ok(code.to_owned());
    }
    let p = &*PATTERNS;
    let mut lines: Vec<String> = code.split('\n').map(str::to_owned).collect();
    for i in 0..lines.len() {
        let marker = format!(";{}({i});", vocabulary::DO_ONCE_MARKER);
        let inline = p
            .inline_do_once
            .replace(&lines[i], format!("${{1}}{marker} repeat 1 -> ${{2}}").as_str())
            .into_owned();
        lines[i] = inline;

        if p.block_do_once.is_match(&lines[i]) {
            lines[i] = p
                .block_do_once
                .replace(&lines[i], "${1}repeat 1 ->")
                .into_owned();
            if let Some(next) = lines.get_mut(i + 1) {
                *next = p
                    .first_statement
                    .replace(next, format!("${{1}}{marker} ${{2}}").as_str())
                    .into_owned();
            }
        }
    }
    Ok(lines.join("\n"))
}

/// `draw` is the name of the routine itself and cannot be called from a sketch.
pub fn reject_draw_calls(code: &str) -> LiveResult<String> {
    if PATTERNS.draw_call.is_match(code) {
        return Err(LiveError::syntax("You can't call draw()"));
    }
    Ok(code.to_owned())
}

/// A statement made of a single lower-case word becomes a call: `box` turns into `box()`.
///
/// Statements start at the beginning of a line, after `;` and after `->`.
pub fn normalize_barewords(code: &str) -> LiveResult<String> {
    let lines: Vec<String> = code.split('\n').map(normalize_line).collect();
    Ok(lines.join("\n"))
}

fn normalize_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 4);
    let mut seg_start = 0;
    for (at, sep_len) in statement_breaks(line) {
        out.push_str(&call_if_bareword(&line[seg_start..at]));
        out.push_str(&line[at..at + sep_len]);
        seg_start = at + sep_len;
    }
    out.push_str(&call_if_bareword(&line[seg_start..]));
    out
}

/// Byte offsets of `;` and `->` outside string literals, with the separator length.
fn statement_breaks(line: &str) -> Vec<(usize, usize)> {
    let bytes = line.as_bytes();
    let mut breaks = Vec::new();
    let mut quote: Option<u8> = None;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(_) if b == b'\\' => i += 1,
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None => match b {
                b'"' | b'\'' => quote = Some(b),
                b';' => breaks.push((i, 1)),
                b'-' if bytes.get(i + 1) == Some(&b'>') => {
                    breaks.push((i, 2));
                    i += 1;
                }
                _ => {}
            },
        }
        i += 1;
    }
    breaks
}

fn call_if_bareword(segment: &str) -> String {
    let word = segment.trim();
    let is_bareword = word
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_lowercase())
        && word.chars().all(|c| c.is_ascii_alphanumeric())
        && !vocabulary::is_keyword(word);
    if !is_bareword {
        return segment.to_owned();
    }
    let end = segment.trim_end().len();
    format!("{}(){}", &segment[..end], &segment[end..])
}

/// Insert `;` in front of every command or seed setter that starts an argument list, so
/// that `rotate 1 box 2` reads as two statements.
pub fn separate_commands(code: &str) -> LiveResult<String> {
    let bytes = code.as_bytes();
    let mut out = String::with_capacity(code.len() + 16);
    let mut quote: Option<u8> = None;
    let mut copied = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if let Some(q) = quote {
            if b == b'\\' {
                i += 1;
            } else if b == q {
                quote = None;
            }
            i += 1;
            continue;
        }
        if b == b'"' || b == b'\'' {
            quote = Some(b);
            i += 1;
            continue;
        }
        if b.is_ascii_alphabetic() {
            let start = i;
            while i < bytes.len() && is_ident_byte(bytes[i]) {
                i += 1;
            }
            let word = &code[start..i];
            let follows_space = bytes.get(i).is_some_and(u8::is_ascii_whitespace);
            let preceded = start > 0 && !is_ident_byte(bytes[start - 1]);
            if preceded && follows_space && vocabulary::starts_statement(word) {
                out.push_str(&code[copied..start]);
                out.push(';');
                copied = start;
            }
            continue;
        }
        i += 1;
    }
    out.push_str(&code[copied..]);
    Ok(out)
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Tick the `doOnce` headers on the given 0-based lines of `source`.
///
/// Lines already ticked, out of range or without a `doOnce` header are left alone, so
/// marking the same lines twice gives the same text.
pub fn mark_do_once_lines(source: &str, lines: &[usize]) -> String {
    let mut out: Vec<String> = source.split('\n').map(str::to_owned).collect();
    for &i in lines {
        if let Some(line) = out.get_mut(i) {
            *line = PATTERNS
                .unmarked_do_once
                .replace(line, format!("${{1}}{TICK}doOnce${{2}}").as_str())
                .into_owned();
        }
    }
    out.join("\n")
}

#[cfg(test)]
#[path = "../../tests/unit/transform/passes.rs"]
mod tests;
