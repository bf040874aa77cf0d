//! Strategy selection based on document shape.

use parachunk_core::{ChunkingConfig, DocumentProfile, Segmenter, SelectorConfig, Strategy};
use tracing::debug;

use crate::{OverlapSegmenter, SemanticSegmenter, SimpleSegmenter};

/// Pick a strategy for a document profile.
///
/// Short documents use [`Strategy::Simple`]; otherwise any overlong paragraph
/// selects [`Strategy::Overlap`]; everything else gets [`Strategy::Semantic`].
pub fn select_for_profile(profile: &DocumentProfile, config: &SelectorConfig) -> Strategy {
    if profile.paragraph_count < config.min_paragraphs {
        Strategy::Simple
    } else if profile.longest_paragraph > config.long_paragraph_chars {
        Strategy::Overlap
    } else {
        Strategy::Semantic
    }
}

/// Pick a strategy for a paragraph sequence using the default thresholds.
pub fn select_strategy<S: AsRef<str>>(paragraphs: &[S]) -> Strategy {
    select_for_profile(
        &DocumentProfile::from_paragraphs(paragraphs),
        &SelectorConfig::default(),
    )
}

/// Select a strategy and segment with that strategy's default parameters.
pub fn select_and_segment<S: AsRef<str>>(paragraphs: &[S]) -> Vec<String> {
    let strategy = select_strategy(paragraphs);
    debug!(%strategy, paragraphs = paragraphs.len(), "selected strategy");
    AnySegmenter::for_strategy(strategy).segment(paragraphs)
}

/// Select a strategy using the configured thresholds and segment with the
/// configured parameters for that strategy.
pub fn select_and_segment_with<S: AsRef<str>>(
    paragraphs: &[S],
    config: &ChunkingConfig,
) -> Vec<String> {
    let profile = DocumentProfile::from_paragraphs(paragraphs);
    let strategy = select_for_profile(&profile, &config.selector);
    debug!(
        %strategy,
        paragraphs = profile.paragraph_count,
        longest = profile.longest_paragraph,
        "selected strategy"
    );
    AnySegmenter::from_config(strategy, config).segment(paragraphs)
}

/// One of the three segmenters, chosen at runtime.
#[derive(Debug, Clone, Copy)]
pub enum AnySegmenter {
    Simple(SimpleSegmenter),
    Overlap(OverlapSegmenter),
    Semantic(SemanticSegmenter),
}

impl AnySegmenter {
    /// Segmenter for `strategy` with its default parameters.
    pub fn for_strategy(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Simple => Self::Simple(SimpleSegmenter::new()),
            Strategy::Overlap => Self::Overlap(OverlapSegmenter::new()),
            Strategy::Semantic => Self::Semantic(SemanticSegmenter::new()),
        }
    }

    /// Segmenter for `strategy` with parameters taken from `config`.
    pub fn from_config(strategy: Strategy, config: &ChunkingConfig) -> Self {
        match strategy {
            Strategy::Simple => Self::Simple(SimpleSegmenter::with_params(config.simple)),
            Strategy::Overlap => Self::Overlap(OverlapSegmenter::with_params(config.overlap)),
            Strategy::Semantic => Self::Semantic(SemanticSegmenter::with_params(config.semantic)),
        }
    }
}

impl Segmenter for AnySegmenter {
    fn segment<S: AsRef<str>>(&self, paragraphs: &[S]) -> Vec<String> {
        match self {
            Self::Simple(s) => s.segment(paragraphs),
            Self::Overlap(s) => s.segment(paragraphs),
            Self::Semantic(s) => s.segment(paragraphs),
        }
    }

    fn strategy(&self) -> Strategy {
        match self {
            Self::Simple(s) => s.strategy(),
            Self::Overlap(s) => s.strategy(),
            Self::Semantic(s) => s.strategy(),
        }
    }
}
