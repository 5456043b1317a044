//! Single-pass lexical classification of embedded Python-style code.
//!
//! The scanner is deliberately hand-written, character by character, with a
//! fixed alternative order rather than regexes, so highlighting does not
//! depend on any regex engine's matching semantics.
//!
//! The lossless guarantee: every byte of the input line appears in exactly
//! one token, in order, so concatenating token texts reproduces the line.

use serde::Serialize;

use super::vocab::{BUILTINS, KEYWORDS};

/// Classification tag for one run of characters within a code line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    Whitespace,
    /// String literal, single- or double-quoted (possibly unterminated).
    Str,
    /// Integer or decimal literal.
    Number,
    Keyword,
    /// Well-known built-in function or method name.
    Builtin,
    /// `#` to end of line.
    Comment,
    /// Anything else: identifiers, operators, punctuation.
    Plain,
}

/// A classified, contiguous run of characters from one code line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    fn new(kind: TokenKind, text: &str) -> Self {
        Token {
            kind,
            text: text.to_string(),
        }
    }
}

/// Tokenize one line of code. `line` must not contain a line break.
///
/// Two passes: first a quote-aware scan locates the `#` that starts a
/// comment (if any), then the code part before it is split into lexemes and
/// classified. The comment, including its `#`, becomes one final token.
///
/// Total over all inputs: unterminated quotes run to end of line and
/// unrecognized characters fall back to single-character plain tokens.
pub fn tokenize_line(line: &str) -> Vec<Token> {
    debug_assert!(!line.contains('\n'), "tokenize_line takes a single line");

    let comment_at = comment_start(line);
    let code = &line[..comment_at.unwrap_or(line.len())];

    let mut tokens: Vec<Token> = scan_lexemes(code)
        .into_iter()
        .map(|lexeme| Token::new(classify(lexeme), lexeme))
        .collect();

    if let Some(at) = comment_at {
        tokens.push(Token::new(TokenKind::Comment, &line[at..]));
    }
    tokens
}

/// Tokenize a multi-line code block, line by line.
///
/// Carriage returns are normalized away before splitting on `\n`. Quote and
/// escape state does not cross line boundaries, so a triple-quoted string
/// spanning lines will mis-highlight the lines after its opener. That
/// mirrors the reference behavior and is accepted as a limitation.
pub fn tokenize_block(code: &str) -> Vec<Vec<Token>> {
    code.replace('\r', "")
        .split('\n')
        .map(tokenize_line)
        .collect()
}

/// Find the byte index of the `#` that starts a comment, if any.
///
/// Scans left to right tracking quote and escape state; a `#` inside either
/// kind of quote does not start a comment.
fn comment_start(line: &str) -> Option<usize> {
    let mut in_single = false;
    let mut in_double = false;
    let mut escaped = false;

    for (i, b) in line.bytes().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match b {
            b'\\' => escaped = true,
            b'\'' if !in_double => in_single = !in_single,
            b'"' if !in_single => in_double = !in_double,
            b'#' if !in_single && !in_double => return Some(i),
            _ => {}
        }
    }
    None
}

/// Split the code part into raw lexemes covering it exactly.
///
/// Alternatives are tried in fixed order at each position: double-quoted
/// string, single-quoted string, identifier, number, whitespace run, then a
/// one-character fallback.
fn scan_lexemes(code: &str) -> Vec<&str> {
    let mut lexemes = Vec::new();
    let mut i = 0;

    while i < code.len() {
        let rest = &code[i..];
        // `rest` is non-empty here
        let c = rest.chars().next().unwrap();
        let len = match c {
            '"' | '\'' => string_run(rest, c as u8),
            '_' => ident_run(rest),
            c if c.is_ascii_alphabetic() => ident_run(rest),
            c if c.is_ascii_digit() => number_run(rest),
            c if c.is_whitespace() => whitespace_run(rest),
            c => c.len_utf8(),
        };
        lexemes.push(&code[i..i + len]);
        i += len;
    }
    lexemes
}

/// Length of a quoted string starting at the front of `s`.
///
/// Consumes the opening quote, backslash-escaped pairs, and everything up to
/// and including the closing quote; an unterminated string extends to the
/// end of the line.
fn string_run(s: &str, quote: u8) -> usize {
    let bytes = s.as_bytes();
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                // Escaped character; may be multi-byte
                let escaped_len = s[i + 1..].chars().next().map_or(0, char::len_utf8);
                i += 1 + escaped_len;
            }
            b if b == quote => return i + 1,
            _ => i += s[i..].chars().next().map_or(1, char::len_utf8),
        }
    }
    s.len()
}

fn ident_run(s: &str) -> usize {
    s.bytes()
        .position(|b| !(b.is_ascii_alphanumeric() || b == b'_'))
        .unwrap_or(s.len())
}

/// Length of `[0-9]+(\.[0-9]+)?` at the front of `s`. The dot is only part
/// of the number when a digit follows it.
fn number_run(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i + 1 < bytes.len() && bytes[i] == b'.' && bytes[i + 1].is_ascii_digit() {
        i += 2;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    i
}

fn whitespace_run(s: &str) -> usize {
    s.char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(s.len(), |(i, _)| i)
}

fn classify(lexeme: &str) -> TokenKind {
    let first = lexeme.chars().next();
    match first {
        Some(c) if c.is_whitespace() => TokenKind::Whitespace,
        Some('"') | Some('\'') => TokenKind::Str,
        Some(c) if c.is_ascii_digit() => TokenKind::Number,
        _ if KEYWORDS.contains(lexeme) => TokenKind::Keyword,
        _ if BUILTINS.contains(lexeme) => TokenKind::Builtin,
        _ => TokenKind::Plain,
    }
}
