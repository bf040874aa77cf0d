//! parachunk-segment - Paragraph segmentation strategies
//!
//! This crate splits an ordered sequence of paragraphs into chunks sized
//! for embedding. Every segmenter is a pure, single-pass function of the
//! paragraphs and its parameters.
//!
//! # Segmenters
//!
//! - [`SimpleSegmenter`]: Keeps paragraphs within a length window, splitting
//!   oversized ones on sentence boundaries and dropping short ones.
//!
//! - [`OverlapSegmenter`]: Merges paragraphs up to a target size, carrying
//!   trailing words of each chunk into the next.
//!
//! - [`SemanticSegmenter`]: Packs sentences up to an estimated token budget.
//!
//! [`select_and_segment`] picks one of the three from the document's shape.
//!
//! # Example
//!
//! ```rust
//! use parachunk_segment::{select_and_segment, Segmenter, SimpleSegmenter};
//!
//! let paragraphs = [
//!     "Short.",
//!     "This is a sufficiently long first paragraph that exceeds fifty characters easily.",
//! ];
//!
//! let chunks = SimpleSegmenter::new().segment(&paragraphs);
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(select_and_segment(&paragraphs), chunks);
//! ```

mod overlap;
mod selector;
mod semantic;
pub mod sentences;
mod simple;

pub use overlap::OverlapSegmenter;
pub use selector::{
    select_and_segment, select_and_segment_with, select_for_profile, select_strategy,
    AnySegmenter,
};
pub use semantic::{estimate_tokens, SemanticSegmenter};
pub use sentences::split_sentences;
pub use simple::SimpleSegmenter;

// Re-export types for convenience
pub use parachunk_core::{
    ChunkingConfig, DocumentProfile, OverlapParams, SemanticParams, Segmenter, SimpleParams,
    Strategy,
};
