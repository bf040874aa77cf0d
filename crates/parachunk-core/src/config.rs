//! Configuration types for parachunk.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ChunkError, Result};
use crate::traits::{OverlapParams, SemanticParams, SimpleParams};

/// Main chunking configuration.
///
/// Segmenters never read this themselves; callers resolve it and pass the
/// relevant parameter section down.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Length-filtered segmentation.
    #[serde(default)]
    pub simple: SimpleParams,

    /// Overlap-aware merging.
    #[serde(default)]
    pub overlap: OverlapParams,

    /// Token-budget merging.
    #[serde(default)]
    pub semantic: SemanticParams,

    /// Strategy selection thresholds.
    #[serde(default)]
    pub selector: SelectorConfig,
}

/// Thresholds used to pick a strategy from a document's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Documents with fewer paragraphs than this use simple segmentation.
    #[serde(default = "default_min_paragraphs")]
    pub min_paragraphs: usize,

    /// Any paragraph longer than this (in characters) selects overlap merging.
    #[serde(default = "default_long_paragraph_chars")]
    pub long_paragraph_chars: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            min_paragraphs: default_min_paragraphs(),
            long_paragraph_chars: default_long_paragraph_chars(),
        }
    }
}

fn default_min_paragraphs() -> usize {
    10
}

fn default_long_paragraph_chars() -> usize {
    1000
}

impl ChunkingConfig {
    /// Load configuration from file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| ChunkError::config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded chunking config");
        Ok(config)
    }

    /// Load configuration from default paths.
    pub fn load_default() -> Result<Self> {
        // Try user config first
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("parachunk").join("config.toml");
            if user_config.exists() {
                return Self::load(&user_config);
            }
        }

        // Try local config
        let local_config = PathBuf::from("parachunk.toml");
        if local_config.exists() {
            return Self::load(&local_config);
        }

        Ok(Self::default())
    }

    /// Reject parameter combinations that cannot produce sensible chunks.
    pub fn validate(&self) -> Result<()> {
        if self.simple.min_length > self.simple.max_length {
            return Err(ChunkError::config(format!(
                "simple.min_length ({}) exceeds simple.max_length ({})",
                self.simple.min_length, self.simple.max_length
            )));
        }
        if self.overlap.target_size == 0 {
            return Err(ChunkError::config("overlap.target_size must be positive"));
        }
        if self.overlap.min_size > self.overlap.target_size {
            return Err(ChunkError::config(format!(
                "overlap.min_size ({}) exceeds overlap.target_size ({})",
                self.overlap.min_size, self.overlap.target_size
            )));
        }
        if self.semantic.max_tokens == 0 {
            return Err(ChunkError::config("semantic.max_tokens must be positive"));
        }
        Ok(())
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ChunkError::config(format!("Failed to render config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ChunkingConfig::default();
        assert_eq!(config.simple.min_length, 50);
        assert_eq!(config.overlap.target_size, 500);
        assert_eq!(config.semantic.max_tokens, 500);
        assert_eq!(config.selector.min_paragraphs, 10);
        assert_eq!(config.selector.long_paragraph_chars, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ChunkingConfig = toml::from_str(
            r#"
[overlap]
overlap = 10

[semantic]
preserve_sentences = false
"#,
        )
        .unwrap();

        assert_eq!(config.overlap.overlap, 10);
        assert_eq!(config.overlap.target_size, 500);
        assert!(!config.semantic.preserve_sentences);
        assert_eq!(config.semantic.max_tokens, 500);
        assert_eq!(config.simple, SimpleParams::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[simple]\nmin_length = 20\nmax_length = 400").unwrap();

        let config = ChunkingConfig::load(file.path()).unwrap();
        assert_eq!(config.simple.min_length, 20);
        assert_eq!(config.simple.max_length, 400);
    }

    #[test]
    fn test_load_rejects_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[overlap]\ntarget_size = 100\nmin_size = 200").unwrap();

        let err = ChunkingConfig::load(file.path()).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[simple\nmin_length = ").unwrap();

        assert!(ChunkingConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_validate_zero_budget() {
        let mut config = ChunkingConfig::default();
        config.semantic.max_tokens = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_render_parses_back() {
        let config = ChunkingConfig::default();
        let rendered = config.to_toml().unwrap();
        let parsed: ChunkingConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
