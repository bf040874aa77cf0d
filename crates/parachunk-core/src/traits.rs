//! Core traits defining the interfaces between components.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::Strategy;

/// Paragraph-sequence segmentation.
///
/// Implementations are pure: the same paragraphs and parameters always
/// yield the same chunks, in source order. Segmentation never fails.
pub trait Segmenter: Send + Sync {
    /// Split an ordered paragraph sequence into chunks.
    fn segment<S: AsRef<str>>(&self, paragraphs: &[S]) -> Vec<String>;

    /// The strategy this segmenter implements.
    fn strategy(&self) -> Strategy;
}

/// Source of ordered, trimmed, non-empty paragraphs for one document.
pub trait ParagraphSource {
    /// Human-readable name of the source, used in errors and logs.
    fn name(&self) -> &str;

    /// Read all paragraphs in reading order.
    fn paragraphs(&self) -> Result<Vec<String>>;
}

/// Parameters for length-filtered segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleParams {
    /// Minimum characters per chunk. Shorter paragraphs and sentences are dropped.
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// Maximum characters per paragraph before it is split into sentences.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl Default for SimpleParams {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            max_length: default_max_length(),
        }
    }
}

/// Parameters for overlap-aware merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapParams {
    /// Target chunk size in characters.
    #[serde(default = "default_target_size")]
    pub target_size: usize,

    /// Number of trailing *words* carried into the next chunk.
    #[serde(default = "default_overlap")]
    pub overlap: usize,

    /// Minimum chunk size in characters. Smaller accumulators are discarded.
    #[serde(default = "default_min_size")]
    pub min_size: usize,
}

impl Default for OverlapParams {
    fn default() -> Self {
        Self {
            target_size: default_target_size(),
            overlap: default_overlap(),
            min_size: default_min_size(),
        }
    }
}

/// Parameters for token-budget merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticParams {
    /// Maximum estimated tokens per chunk.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,

    /// Treat sentences, rather than whole paragraphs, as the atomic unit.
    #[serde(default = "default_true")]
    pub preserve_sentences: bool,
}

impl Default for SemanticParams {
    fn default() -> Self {
        Self {
            max_tokens: default_max_tokens(),
            preserve_sentences: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_min_length() -> usize {
    50
}

fn default_max_length() -> usize {
    1000
}

fn default_target_size() -> usize {
    500
}

fn default_overlap() -> usize {
    50
}

fn default_min_size() -> usize {
    100
}

fn default_max_tokens() -> usize {
    500
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_defaults() {
        let simple = SimpleParams::default();
        assert_eq!((simple.min_length, simple.max_length), (50, 1000));

        let overlap = OverlapParams::default();
        assert_eq!(overlap.target_size, 500);
        assert_eq!(overlap.overlap, 50);
        assert_eq!(overlap.min_size, 100);

        let semantic = SemanticParams::default();
        assert_eq!(semantic.max_tokens, 500);
        assert!(semantic.preserve_sentences);
    }
}
