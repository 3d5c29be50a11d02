//! Sentence segmentation.
//!
//! Splits raw text into an ordered list of sentences. Boundaries are:
//! - after full-width terminators `。` `！` `？`, swallowing trailing whitespace
//! - after ASCII `.` `!` `?` when whitespace follows
//! - at any run of newlines
//!
//! Terminators stay attached to their sentence. Pieces are trimmed and empty
//! pieces dropped.

use once_cell::sync::Lazy;
use regex::Regex;

static BOUNDARY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[。！？]\s*|[.!?]\s+|\n+").expect("Invalid regex pattern"));

fn is_terminator(c: char) -> bool {
    matches!(c, '。' | '！' | '？' | '.' | '!' | '?')
}

/// Split `text` into trimmed, non-empty sentences in document order.
pub fn split_sentences(text: &str) -> Vec<String> {
    let text = text.trim();
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in BOUNDARY_PATTERN.find_iter(text) {
        let end = match boundary.as_str().chars().next() {
            Some(c) if is_terminator(c) => boundary.start() + c.len_utf8(),
            _ => boundary.start(),
        };
        push_sentence(&text[start..end], &mut sentences);
        start = boundary.end();
    }
    push_sentence(&text[start..], &mut sentences);

    sentences
}

fn push_sentence(piece: &str, sentences: &mut Vec<String>) {
    let piece = piece.trim();
    if !piece.is_empty() {
        sentences.push(piece.to_string());
    }
}
