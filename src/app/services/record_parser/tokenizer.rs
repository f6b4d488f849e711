//! Shell-like tokenization of catalog lines
//!
//! Words are split on whitespace; a double-quoted span is kept as one token
//! with the quotes removed, so names like `"Alpha Centauri Bb"` survive intact.
//! Splitting follows POSIX shell rules via the `shlex` crate, except that `#`
//! never starts a comment: comment lines are recognized before tokenizing.

use crate::constants::COMMENT_MARKER;
use std::borrow::Cow;
use thiserror::Error;

/// Raised when a line cannot be split into tokens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unbalanced quotes in line: {line}")]
pub struct TokenizeError {
    pub line: String,
}

/// Split one line into tokens
///
/// An empty quoted span (`""`) yields an empty token rather than nothing, so
/// downstream validation can reject it explicitly.
pub fn tokenize(line: &str) -> Result<Vec<String>, TokenizeError> {
    let line = line.trim();
    shlex::split(&escape_comment_markers(line)).ok_or_else(|| TokenizeError {
        line: line.to_string(),
    })
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

/// Backslash-escape every unquoted `#` that begins a word
///
/// `shlex` drops the rest of the input after such a marker; escaped, it is
/// kept as a literal character.
fn escape_comment_markers(line: &str) -> Cow<'_, str> {
    if !line.contains(COMMENT_MARKER) {
        return Cow::Borrowed(line);
    }

    let mut escaped = String::with_capacity(line.len() + 4);
    let mut quote = Quote::None;
    let mut word_start = true;
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match (quote, ch) {
            (Quote::None, COMMENT_MARKER) if word_start => escaped.push('\\'),
            (Quote::None, '\'') => quote = Quote::Single,
            (Quote::None, '"') => quote = Quote::Double,
            (Quote::Single, '\'') | (Quote::Double, '"') => quote = Quote::None,
            (Quote::None | Quote::Double, '\\') => {
                escaped.push(ch);
                if let Some(next) = chars.next() {
                    escaped.push(next);
                }
                word_start = false;
                continue;
            }
            _ => {}
        }

        escaped.push(ch);
        word_start = quote == Quote::None && ch.is_whitespace();
    }

    Cow::Owned(escaped)
}
