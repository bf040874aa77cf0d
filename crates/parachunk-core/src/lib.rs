//! parachunk-core - Core types and traits for paragraph chunking
//!
//! This crate provides the shared types, traits, configuration and error
//! handling used by the segmenters and the CLI.

pub mod config;
pub mod error;
pub mod source;
pub mod traits;
pub mod types;

pub use config::*;
pub use error::{ChunkError, Result};
pub use source::{split_paragraphs, ParagraphMode, PlainTextSource};
pub use traits::*;
pub use types::*;
