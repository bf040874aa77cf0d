//! Length-filtered segmentation.

use parachunk_core::{Segmenter, SimpleParams, Strategy};
use tracing::{debug, trace};

use crate::sentences::{char_len, split_sentences};

/// Emits each paragraph as its own chunk, filtered by length.
///
/// - Paragraphs shorter than `min_length` are dropped.
/// - Paragraphs longer than `max_length` are split on sentence boundaries;
///   each sentence of at least `min_length` becomes a chunk, shorter ones
///   are dropped.
/// - Nothing is merged across paragraphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleSegmenter {
    params: SimpleParams,
}

impl SimpleSegmenter {
    /// Create a segmenter with default bounds (50..=1000 characters).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a segmenter with explicit parameters.
    pub fn with_params(params: SimpleParams) -> Self {
        Self { params }
    }

    /// Parameters in use.
    pub fn params(&self) -> &SimpleParams {
        &self.params
    }
}

impl Segmenter for SimpleSegmenter {
    fn segment<S: AsRef<str>>(&self, paragraphs: &[S]) -> Vec<String> {
        let SimpleParams {
            min_length,
            max_length,
        } = self.params;
        let mut chunks = Vec::new();

        for para in paragraphs {
            let para = para.as_ref().trim();
            let len = char_len(para);

            if len < min_length {
                trace!(len, min_length, "dropping short paragraph");
                continue;
            }

            if len > max_length {
                for sentence in split_sentences(para) {
                    if char_len(sentence) >= min_length {
                        chunks.push(sentence.to_string());
                    } else {
                        trace!(min_length, "dropping short sentence");
                    }
                }
            } else {
                chunks.push(para.to_string());
            }
        }

        debug!(
            paragraphs = paragraphs.len(),
            chunks = chunks.len(),
            "simple segmentation complete"
        );
        chunks
    }

    fn strategy(&self) -> Strategy {
        Strategy::Simple
    }
}
