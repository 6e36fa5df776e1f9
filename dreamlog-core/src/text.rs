//! Body-text paragraph handling.
//!
//! Entry bodies are plain text. Runs of two or more newlines (any mix of
//! `\r\n`, `\r`, `\n`) separate paragraphs; single newlines stay inside a
//! paragraph and become line breaks at render time. Escaping is the
//! rendering layer's job, not ours.

use once_cell::sync::Lazy;
use regex::Regex;

static PARAGRAPH_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\r\n|\r|\n){2,}").expect("paragraph break regex"));

/// Split a body into paragraph slices.
///
/// Splitting keeps empty edge pieces: a body that opens with a blank line
/// yields a leading empty paragraph, matching how the listing has always
/// rendered such entries.
pub fn paragraphs(body: &str) -> Vec<&str> {
    PARAGRAPH_BREAK_RE.split(body).collect()
}
