//! Analyzer agents: one per profile section.
//!
//! Every agent reads the same immutable transcript and returns an ordered
//! list of formatted findings. Agents hold their indicator tables as
//! construction-time configuration and keep no state between calls.
pub mod emotional;
pub mod relatability;
pub mod theme;
pub mod values;
pub mod voice;

pub use emotional::EmotionalToneAnalyzer;
pub use relatability::RelatabilityAssessor;
pub use theme::ThemeExtractor;
pub use values::ValuesIdentifier;
pub use voice::VoiceAnalyzer;

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::sentiment::SentimentScorer;
use crate::transcript::{self, Chunk, TranscriptFormat};

/// Profile sections, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Voice,
    Themes,
    Values,
    EmotionalTone,
    Relatability,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Voice,
        Section::Themes,
        Section::Values,
        Section::EmotionalTone,
        Section::Relatability,
    ];

    /// Key used in the rendered profile and in JSON.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Section::Voice => "voice",
            Section::Themes => "themes",
            Section::Values => "values",
            Section::EmotionalTone => "emotional_tone",
            Section::Relatability => "relatability",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// An analysis that turns a transcript into findings for one section.
pub trait Agent: Send + Sync {
    fn section(&self) -> Section;

    fn analyze(&self, transcript: &str) -> Vec<String>;
}

/// Shared, read-only inputs every agent is built with.
#[derive(Clone)]
pub struct AnalysisContext {
    pub format: TranscriptFormat,
    pub sentiment: Arc<dyn SentimentScorer>,
    /// Deduplicate findings in every section, not only themes and values.
    pub dedupe_all: bool,
}

impl AnalysisContext {
    pub fn new(format: TranscriptFormat, sentiment: Arc<dyn SentimentScorer>) -> Self {
        Self {
            format,
            sentiment,
            dedupe_all: false,
        }
    }

    #[must_use]
    pub fn with_dedupe_all(mut self, dedupe_all: bool) -> Self {
        self.dedupe_all = dedupe_all;
        self
    }

    pub fn chunks(&self, transcript: &str) -> Vec<Chunk> {
        transcript::extract_chunks(transcript, &self.format)
    }

    pub fn clean(&self, transcript: &str) -> String {
        transcript::clean_transcript(transcript, &self.format)
    }
}

/// Strips leading bullet characters and capitalises the first letter.
pub fn format_finding(raw: &str) -> String {
    let trimmed = raw
        .trim_start_matches(['*', '-', '\u{2022}', ' '])
        .trim();

    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() => first.to_uppercase().chain(chars).collect(),
        _ => trimmed.to_string(),
    }
}

/// Formats every finding and, if asked, drops repeats keeping the first.
pub fn finalize(findings: Vec<String>, dedupe: bool) -> Vec<String> {
    let formatted = findings.iter().map(|f| format_finding(f));
    if !dedupe {
        return formatted.collect();
    }

    let mut seen = HashSet::new();
    formatted.filter(|f| seen.insert(f.clone())).collect()
}

/// Fraction threshold over a chunk count: `count > chunks * ratio`.
pub(crate) fn exceeds_share(count: usize, chunks: usize, ratio: f64) -> bool {
    count as f64 > chunks as f64 * ratio
}
