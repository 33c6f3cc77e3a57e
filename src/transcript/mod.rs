//! Transcript model: chunk markers, the `Chunk` record, parsing and validation.
//!
//! A transcript is a markdown document made of repeated blocks:
//!
//! ```text
//! ## [Chunk 1]
//! **Timestamp**: 00:00:00 - 00:01:30
//! > Speaker 1: interviewer question
//! > Speaker 2: subject answer
//! ```
//!
//! Only the subject speaker's lines are kept.
pub mod parser;
pub mod validate;

pub use parser::{clean_transcript, extract_chunks};
pub use validate::{InputError, validate};

use serde::{Deserialize, Serialize};

fn default_chunk_header() -> String {
    "## [Chunk".to_string()
}

fn default_timestamp_marker() -> String {
    "**Timestamp**:".to_string()
}

fn default_speaker_marker() -> String {
    "> Speaker 2:".to_string()
}

/// Line prefixes that delimit chunks, timestamps and subject-speaker turns.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TranscriptFormat {
    #[serde(default = "default_chunk_header")]
    pub chunk_header: String,

    #[serde(default = "default_timestamp_marker")]
    pub timestamp_marker: String,

    #[serde(default = "default_speaker_marker")]
    pub speaker_marker: String,
}

impl Default for TranscriptFormat {
    fn default() -> Self {
        Self {
            chunk_header: default_chunk_header(),
            timestamp_marker: default_timestamp_marker(),
            speaker_marker: default_speaker_marker(),
        }
    }
}

impl TranscriptFormat {
    /// Returns the subject speaker's words if `line` is one of their turns.
    #[must_use]
    pub fn speaker_text<'a>(&self, line: &'a str) -> Option<&'a str> {
        line.strip_prefix(self.speaker_marker.as_str())
            .map(str::trim)
    }
}

/// A labelled span of subject-speaker dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub id: String,
    pub timestamp: String,
    pub text: String,
}
