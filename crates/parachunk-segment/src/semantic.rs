//! Token-budget segmentation.

use parachunk_core::{SemanticParams, Segmenter, Strategy};
use tracing::{debug, trace};

use crate::sentences::split_sentences;

/// Estimate the token count of `text` as `floor(words / 0.75)`.
///
/// This is a sizing heuristic, not a tokenizer. It is computed in integers
/// so the floor is exact.
pub fn estimate_tokens(text: &str) -> usize {
    tokens_for_words(text.split_whitespace().count())
}

fn tokens_for_words(words: usize) -> usize {
    words * 4 / 3
}

/// Packs sentences (or whole paragraphs) into chunks of at most
/// `max_tokens` estimated tokens.
///
/// There is no minimum chunk size; whatever is left at the end is emitted.
///
/// Units larger than the budget are handled differently depending on
/// `preserve_sentences`:
/// - `true`: the unit is skipped and appears in no chunk.
/// - `false`: the unit is cut into word groups, each emitted as soon as it
///   reaches the budget. These go out immediately; the pending accumulator
///   keeps collecting and is emitted later.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemanticSegmenter {
    params: SemanticParams,
}

impl SemanticSegmenter {
    /// Create a segmenter with default parameters (500 tokens, sentences preserved).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a segmenter with explicit parameters.
    pub fn with_params(params: SemanticParams) -> Self {
        Self { params }
    }

    /// Parameters in use.
    pub fn params(&self) -> &SemanticParams {
        &self.params
    }

    /// Cut an oversized unit into consecutive word groups.
    fn split_words(&self, unit: &str, chunks: &mut Vec<String>) {
        let mut group: Vec<&str> = Vec::new();

        for word in unit.split_whitespace() {
            group.push(word);
            if tokens_for_words(group.len()) >= self.params.max_tokens {
                chunks.push(group.join(" "));
                group.clear();
            }
        }

        if !group.is_empty() {
            chunks.push(group.join(" "));
        }
    }
}

impl Segmenter for SemanticSegmenter {
    fn segment<S: AsRef<str>>(&self, paragraphs: &[S]) -> Vec<String> {
        let SemanticParams {
            max_tokens,
            preserve_sentences,
        } = self.params;
        let mut chunks = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        let mut current_tokens = 0;

        for para in paragraphs {
            let para = para.as_ref().trim();
            let units = if preserve_sentences {
                split_sentences(para)
            } else {
                vec![para]
            };

            for unit in units.into_iter().filter(|u| !u.is_empty()) {
                let tokens = estimate_tokens(unit);

                if tokens > max_tokens {
                    if preserve_sentences {
                        trace!(tokens, max_tokens, "skipping oversized sentence");
                    } else {
                        self.split_words(unit, &mut chunks);
                    }
                    continue;
                }

                if current_tokens + tokens <= max_tokens {
                    current.push(unit);
                    current_tokens += tokens;
                } else {
                    if !current.is_empty() {
                        chunks.push(current.join(" "));
                    }
                    current = vec![unit];
                    current_tokens = tokens;
                }
            }
        }

        if !current.is_empty() {
            chunks.push(current.join(" "));
        }

        debug!(
            paragraphs = paragraphs.len(),
            chunks = chunks.len(),
            "semantic segmentation complete"
        );
        chunks
    }

    fn strategy(&self) -> Strategy {
        Strategy::Semantic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segmenter(max_tokens: usize, preserve_sentences: bool) -> SemanticSegmenter {
        SemanticSegmenter::with_params(SemanticParams {
            max_tokens,
            preserve_sentences,
        })
    }

    #[test]
    fn test_estimate_tokens_truncates() {
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("one"), 1);
        assert_eq!(estimate_tokens("one two three"), 4);
        assert_eq!(estimate_tokens("one  two\nthree\tfour"), 5);
        assert_eq!(estimate_tokens(&"word ".repeat(375)), 500);
    }

    #[test]
    fn test_sentences_packed_until_budget() {
        let chunks = segmenter(8, true).segment(&[
            "Alpha beta gamma. Delta epsilon zeta.",
            "Eta theta iota.",
        ]);

        assert_eq!(
            chunks,
            vec!["Alpha beta gamma. Delta epsilon zeta.", "Eta theta iota."]
        );
    }

    #[test]
    fn test_oversized_sentence_skipped_when_preserving() {
        let chunks = segmenter(10, true).segment(&[
            "One two three. Four five six.",
            "Seven eight nine ten eleven twelve thirteen fourteen fifteen.",
        ]);

        assert_eq!(chunks, vec!["One two three. Four five six."]);
        assert!(chunks.iter().all(|c| !c.contains("Seven")));
    }

    #[test]
    fn test_oversized_paragraph_split_into_word_groups() {
        let chunks = segmenter(4, false).segment(&["a b c d e f g"]);
        assert_eq!(chunks, vec!["a b c", "d e f", "g"]);
    }

    #[test]
    fn test_word_groups_emitted_before_pending_chunk() {
        let chunks = segmenter(4, false).segment(&["short one", "a b c d e f g", "tail"]);
        assert_eq!(chunks, vec!["a b c", "d e f", "g", "short one tail"]);
    }

    #[test]
    fn test_preserve_flag_controls_unit() {
        let para = ["Hello there friend. Bye."];

        assert_eq!(segmenter(2, true).segment(&para), vec!["Bye."]);
        assert_eq!(
            segmenter(2, false).segment(&para),
            vec!["Hello there", "friend. Bye."]
        );
    }

    #[test]
    fn test_word_groups_stay_near_budget() {
        let para = "lorem ipsum dolor sit amet ".repeat(60);
        let max_tokens = 25;
        let chunks = segmenter(max_tokens, false).segment(&[para]);

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(estimate_tokens(chunk) <= max_tokens + 1);
        }
    }

    #[test]
    fn test_no_minimum_floor() {
        let chunks = SemanticSegmenter::new().segment(&["Hi."]);
        assert_eq!(chunks, vec!["Hi."]);
    }

    #[test]
    fn test_empty_input() {
        let paragraphs: Vec<String> = Vec::new();
        assert!(SemanticSegmenter::new().segment(&paragraphs).is_empty());
        assert!(segmenter(10, false).segment(&paragraphs).is_empty());
    }

    #[test]
    fn test_rerun_on_output_does_not_grow() {
        let paragraphs: Vec<String> = (0..30)
            .map(|i| {
                format!(
                    "Paragraph {} opens with a statement. It then adds a second thought. Finally it closes.",
                    i
                )
            })
            .collect();
        let segmenter = segmenter(60, true);

        let first = segmenter.segment(&paragraphs);
        let second = segmenter.segment(&first);
        assert!(!first.is_empty());
        assert!(second.len() <= first.len());
    }

    #[test]
    fn test_strategy_tag() {
        assert_eq!(SemanticSegmenter::new().strategy(), Strategy::Semantic);
    }
}
