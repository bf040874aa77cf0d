//! Plain-text paragraph sources.

use std::path::{Path, PathBuf};

use crate::error::{ChunkError, Result};
use crate::traits::ParagraphSource;

/// How paragraph boundaries are recognised in plain text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParagraphMode {
    /// Every non-blank line is a paragraph, as word processors export them.
    #[default]
    Line,
    /// Paragraphs are runs of lines separated by one or more blank lines.
    /// Lines within a run are joined with a single space.
    BlankLine,
}

/// Paragraph source backed by a UTF-8 text file.
#[derive(Debug, Clone)]
pub struct PlainTextSource {
    path: PathBuf,
    name: String,
    mode: ParagraphMode,
}

impl PlainTextSource {
    /// Create a source reading `path` with the given paragraph mode.
    pub fn new(path: impl Into<PathBuf>, mode: ParagraphMode) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name, mode }
    }

    /// Path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ParagraphSource for PlainTextSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn paragraphs(&self) -> Result<Vec<String>> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::InvalidData => {
                ChunkError::source_failed(&self.name, "file is not valid UTF-8")
            }
            _ => ChunkError::Io(e),
        })?;

        let paragraphs = split_paragraphs(&text, self.mode);
        tracing::debug!(
            source = %self.name,
            paragraphs = paragraphs.len(),
            "read paragraphs"
        );
        Ok(paragraphs)
    }
}

/// Split raw text into trimmed, non-empty paragraphs.
pub fn split_paragraphs(text: &str, mode: ParagraphMode) -> Vec<String> {
    match mode {
        ParagraphMode::Line => text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        ParagraphMode::BlankLine => {
            let mut paragraphs = Vec::new();
            let mut current: Vec<&str> = Vec::new();

            for line in text.lines().map(str::trim) {
                if line.is_empty() {
                    if !current.is_empty() {
                        paragraphs.push(current.join(" "));
                        current.clear();
                    }
                } else {
                    current.push(line);
                }
            }
            if !current.is_empty() {
                paragraphs.push(current.join(" "));
            }

            paragraphs
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_line_mode() {
        let text = "  First paragraph.  \n\n\t\nSecond paragraph.\r\nThird.";
        let paragraphs = split_paragraphs(text, ParagraphMode::Line);
        assert_eq!(
            paragraphs,
            vec!["First paragraph.", "Second paragraph.", "Third."]
        );
    }

    #[test]
    fn test_blank_line_mode() {
        let text = "Wrapped first\nparagraph here.\n\n\nSecond one.\n";
        let paragraphs = split_paragraphs(text, ParagraphMode::BlankLine);
        assert_eq!(
            paragraphs,
            vec!["Wrapped first paragraph here.", "Second one."]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(split_paragraphs("", ParagraphMode::Line).is_empty());
        assert!(split_paragraphs("\n  \n", ParagraphMode::BlankLine).is_empty());
    }

    #[test]
    fn test_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Alpha.\n\nBeta.").unwrap();

        let source = PlainTextSource::new(file.path(), ParagraphMode::Line);
        assert_eq!(source.paragraphs().unwrap(), vec!["Alpha.", "Beta."]);
        assert_eq!(source.path(), file.path());
    }

    #[test]
    fn test_file_source_rejects_binary() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x80]).unwrap();

        let source = PlainTextSource::new(file.path(), ParagraphMode::Line);
        let err = source.paragraphs().unwrap_err();
        assert_eq!(err.error_code(), "SOURCE_FAILED");
    }

    #[test]
    fn test_missing_file() {
        let source = PlainTextSource::new("/nonexistent/parachunk/input.txt", ParagraphMode::Line);
        let err = source.paragraphs().unwrap_err();
        assert_eq!(err.error_code(), "IO_ERROR");
    }
}
