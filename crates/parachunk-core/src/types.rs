//! Core domain types for parachunk.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ChunkError;

/// Segmentation strategy tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Length-filtered paragraphs, oversized ones split on sentences.
    Simple,
    /// Target-sized accumulation with trailing-word overlap.
    Overlap,
    /// Token-budget accumulation of sentences or paragraphs.
    Semantic,
}

impl Strategy {
    /// All strategies, in selector order.
    pub const ALL: [Strategy; 3] = [Strategy::Simple, Strategy::Overlap, Strategy::Semantic];

    /// Lowercase name used in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Overlap => "overlap",
            Self::Semantic => "semantic",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ChunkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "overlap" | "advanced" => Ok(Self::Overlap),
            "semantic" => Ok(Self::Semantic),
            other => Err(ChunkError::invalid_argument(format!(
                "unknown strategy '{}', expected one of simple, overlap, semantic",
                other
            ))),
        }
    }
}

/// Shape of a paragraph sequence, as seen by the strategy selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentProfile {
    /// Number of paragraphs.
    pub paragraph_count: usize,

    /// Length of the longest paragraph, in characters.
    pub longest_paragraph: usize,

    /// Total length of all paragraphs, in characters.
    pub total_chars: usize,
}

impl DocumentProfile {
    /// Profile an ordered paragraph sequence.
    pub fn from_paragraphs<S: AsRef<str>>(paragraphs: &[S]) -> Self {
        paragraphs
            .iter()
            .map(|p| p.as_ref().chars().count())
            .fold(Self::default(), |mut profile, len| {
                profile.paragraph_count += 1;
                profile.longest_paragraph = profile.longest_paragraph.max(len);
                profile.total_chars += len;
                profile
            })
    }

    /// Whether the document has no paragraphs at all.
    pub fn is_empty(&self) -> bool {
        self.paragraph_count == 0
    }
}
