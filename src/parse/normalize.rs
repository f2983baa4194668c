//! Movetext normalization.
//!
//! Reduces a raw movetext block to bare move tokens: comments, move
//! numbers, and annotation glyphs are stripped, and a trailing result
//! token is split off from the move list.

use once_cell::sync::Lazy;
use regex::Regex;

use super::record::GameResult;

/// Block comments in braces (may span lines) and line comments from a
/// semicolon to the end of its line.
static COMMENTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[^}]*\}|;[^\n]*").unwrap());

/// Move numbers, including the `...` continuation form.
static MOVE_NUMBERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\.+").unwrap());

/// Check, mate, and commentary glyphs attached to tokens.
static ANNOTATIONS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[+#?!]").unwrap());

/// Normalizes one movetext block into move tokens plus the trailing
/// result, if any. Stripping order matters: comments go first so that
/// digits or glyphs inside them never look like movetext.
#[must_use]
pub fn normalize_moves(movetext: &str) -> (Vec<String>, Option<GameResult>) {
    let stripped = COMMENTS.replace_all(movetext, " ");
    let stripped = MOVE_NUMBERS.replace_all(&stripped, " ");
    let stripped = ANNOTATIONS.replace_all(&stripped, "");
    let mut tokens: Vec<String> = stripped.split_whitespace().map(str::to_string).collect();
    let result = tokens.last().and_then(|token| GameResult::from_pgn(token));
    if result.is_some() {
        tokens.pop();
    }
    (tokens, result)
}
