//! Sentence boundary splitting shared by all segmenters.

use std::sync::OnceLock;

use regex::Regex;

static SENTENCE_BOUNDARY: OnceLock<Regex> = OnceLock::new();

fn sentence_boundary() -> &'static Regex {
    SENTENCE_BOUNDARY
        .get_or_init(|| Regex::new(r"[.!?]\s+").expect("sentence boundary pattern is valid"))
}

/// Split text after every `.`, `!` or `?` that is followed by whitespace.
///
/// The punctuation stays with the sentence it ends; the whitespace run
/// between sentences is consumed. Empty pieces are never returned.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in sentence_boundary().find_iter(text) {
        // Terminal punctuation is a single ASCII byte.
        let end = m.start() + 1;
        if end > start {
            sentences.push(&text[start..end]);
        }
        start = m.end();
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences
}

/// Length of `text` in characters.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
