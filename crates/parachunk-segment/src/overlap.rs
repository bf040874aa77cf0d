//! Overlap-aware merging segmentation.

use parachunk_core::{OverlapParams, Segmenter, Strategy};
use tracing::{debug, trace};

use crate::sentences::{char_len, split_sentences};

/// Merges paragraphs into chunks of roughly `target_size` characters,
/// repeating the trailing `overlap` words of each chunk at the start of
/// the next.
///
/// Paragraphs longer than `target_size` are fed in sentence by sentence;
/// shorter ones are fed whole. A unit joins the accumulator while the
/// combined length (ignoring the joining space) stays within
/// `target_size`. When it does not fit, the accumulator is emitted if it
/// has reached `min_size` and discarded otherwise.
///
/// `overlap` counts words even though the sizes count characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlapSegmenter {
    params: OverlapParams,
}

impl OverlapSegmenter {
    /// Create a segmenter with default parameters
    /// (target 500 chars, 50 overlap words, minimum 100 chars).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a segmenter with explicit parameters.
    pub fn with_params(params: OverlapParams) -> Self {
        Self { params }
    }

    /// Parameters in use.
    pub fn params(&self) -> &OverlapParams {
        &self.params
    }

    /// Feed one unit (sentence or whole paragraph) into the accumulator.
    fn push_unit(&self, current: &mut String, chunks: &mut Vec<String>, unit: &str) {
        if unit.is_empty() {
            return;
        }

        if char_len(current) + char_len(unit) > self.params.target_size {
            let previous = std::mem::take(current);
            let len = char_len(&previous);

            if !previous.is_empty() && len >= self.params.min_size {
                *current = self.overlap_prefix(&previous);
                chunks.push(previous);
            } else if !previous.is_empty() {
                trace!(len, min_size = self.params.min_size, "discarding short accumulator");
            }
        }

        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(unit);
    }

    /// Trailing words of a flushed chunk that open the next one.
    fn overlap_prefix(&self, flushed: &str) -> String {
        let overlap = self.params.overlap;
        if overlap == 0 || char_len(flushed) <= overlap {
            return String::new();
        }

        let words: Vec<&str> = flushed.split_whitespace().collect();
        words[words.len().saturating_sub(overlap)..].join(" ")
    }
}

impl Segmenter for OverlapSegmenter {
    fn segment<S: AsRef<str>>(&self, paragraphs: &[S]) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current = String::new();

        for para in paragraphs {
            let para = para.as_ref().trim();

            if char_len(para) > self.params.target_size {
                for sentence in split_sentences(para) {
                    self.push_unit(&mut current, &mut chunks, sentence);
                }
            } else {
                self.push_unit(&mut current, &mut chunks, para);
            }
        }

        let len = char_len(&current);
        if !current.is_empty() && len >= self.params.min_size {
            chunks.push(current);
        } else if !current.is_empty() {
            trace!(len, min_size = self.params.min_size, "discarding final accumulator");
        }

        debug!(
            paragraphs = paragraphs.len(),
            chunks = chunks.len(),
            "overlap segmentation complete"
        );
        chunks
    }

    fn strategy(&self) -> Strategy {
        Strategy::Overlap
    }
}
