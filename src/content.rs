// SPDX-License-Identifier: MPL-2.0
//! Letter content loading and paragraph splitting.
//!
//! The letter body is a plain newline-delimited text blob. It is resolved at
//! startup from the first available source: a CLI path, the config file's
//! `letter_path`, or the default content embedded at compile time. The body
//! is substituted verbatim; only the split into paragraphs and spacers
//! interprets it.

use crate::config::Config;
use std::fs;
use std::path::Path;

/// Default letter body, embedded so packaging does not need to locate
/// assets on disk.
const DEFAULT_CONTENT: &str = include_str!("../assets/letter.txt");

/// Closing line rendered under the letter body.
const DEFAULT_SIGNATURE: &str = "Yours truly";

/// One visual block of the letter body.
///
/// Each non-blank line of the source text becomes a [`Block::Paragraph`];
/// each blank line becomes a [`Block::Spacer`]. Authored order is preserved
/// exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(String),
    Spacer,
}

/// The static text shown inside the opened letter.
#[derive(Debug, Clone)]
pub struct LetterContent {
    text: String,
    signature: String,
}

impl LetterContent {
    pub fn new(text: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            signature: signature.into(),
        }
    }

    /// Resolves the letter content from the launch flag, the config, or the
    /// embedded default, in that order. An unreadable file logs a warning
    /// and falls through to the next source.
    pub fn resolve(flag_path: Option<&Path>, config: &Config) -> Self {
        let signature = config
            .signature
            .clone()
            .unwrap_or_else(|| DEFAULT_SIGNATURE.to_string());

        let text = flag_path
            .or(config.letter_path.as_deref())
            .and_then(|path| match fs::read_to_string(path) {
                Ok(text) => Some(text),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "letter file unreadable, using embedded default");
                    None
                }
            })
            .unwrap_or_else(|| DEFAULT_CONTENT.to_string());

        Self { text, signature }
    }

    /// Splits the body into paragraphs and spacers, in authored order.
    pub fn blocks(&self) -> Vec<Block> {
        split_blocks(&self.text)
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }
}

impl Default for LetterContent {
    fn default() -> Self {
        Self::new(DEFAULT_CONTENT, DEFAULT_SIGNATURE)
    }
}

/// Splits newline-delimited text into letter blocks. Blank lines (empty or
/// whitespace-only) become spacers; everything else becomes a paragraph.
pub fn split_blocks(text: &str) -> Vec<Block> {
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                Block::Spacer
            } else {
                Block::Paragraph(line.to_string())
            }
        })
        .collect()
}
