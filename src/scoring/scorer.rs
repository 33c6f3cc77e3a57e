use std::sync::Arc;

use tracing::{debug, info};

use super::{ChunkScore, ChunkScores};
use crate::indicators::{IndicatorTable, WordSet};
use crate::sentiment::{Polarity, SentimentScorer};
use crate::transcript::{TranscriptFormat, extract_chunks};

const THEME_ROWS: &[(&str, &[&str], &str)] = &[
    ("inspiration", &["inspire", "motivate", "encourage", "possible", "dream"], "inspiration"),
    ("insight", &["realize", "understand", "learn", "discover", "clarity"], "insight"),
    ("expertise", &["know", "expert", "experience", "professional", "skill"], "expertise"),
    ("story", &["happened", "time", "when", "story", "example"], "story"),
    ("advice", &["should", "recommend", "suggest", "advice", "tip"], "advice"),
    ("reflection", &["think", "feel", "believe", "sense", "perspective"], "reflection"),
    ("action", &["do", "take", "start", "begin", "act"], "action"),
    ("challenge", &["difficult", "challenge", "hard", "obstacle", "tough"], "challenge"),
    ("success", &["achieve", "accomplish", "succeed", "win", "goal"], "success"),
    ("growth", &["grow", "develop", "improve", "progress", "better"], "growth"),
];

/// Each group present adds one increment to the relatability score.
const RELATABILITY_ROWS: &[(&str, &[&str], &str)] = &[
    ("personal", &["i", "me", "my", "mine", "myself"], ""),
    ("universal", &["everyone", "all", "we", "you"], ""),
    ("emotion", &["feel", "felt", "emotion", "experience"], ""),
    ("story", &["when", "happened", "time", "example"], ""),
    ("resolution", &["learned", "realized", "understood", "discovered"], ""),
];

const RELATABILITY_INCREMENT: f64 = 0.2;
const TONE_WEIGHT: f64 = 0.7;
const INTENSITY_WEIGHT: f64 = 0.3;

/// Scores chunks on emotional tone and relatability and tags their themes.
pub struct ChunkScorer {
    format: TranscriptFormat,
    sentiment: Arc<dyn SentimentScorer>,
    themes: IndicatorTable,
    relatability: IndicatorTable,
}

impl ChunkScorer {
    pub fn new(format: TranscriptFormat, sentiment: Arc<dyn SentimentScorer>) -> Self {
        Self {
            format,
            sentiment,
            themes: IndicatorTable::from_rows(THEME_ROWS),
            relatability: IndicatorTable::from_rows(RELATABILITY_ROWS),
        }
    }

    pub fn score_chunks(&self, transcript: &str) -> ChunkScores {
        info!("Starting chunk scoring");

        let mut scores = ChunkScores::new();
        for chunk in extract_chunks(transcript, &self.format) {
            let score = self.score_chunk(&chunk.text);
            if scores.insert(chunk.id.clone(), score).is_some() {
                debug!("Duplicate chunk id {:?}, keeping the later record", chunk.id);
            }
        }

        info!("Completed chunk scoring ({} chunks)", scores.len());
        scores
    }

    pub fn score_chunk(&self, text: &str) -> ChunkScore {
        let words = WordSet::from_text(text);
        let sentiment = self.sentiment.polarity(text);

        ChunkScore {
            emotional_tone_score: round2(emotional_score(&sentiment)),
            relatability_score: round2(self.relatability_score(&words)),
            theme_tags: self
                .themes
                .matching(&words)
                .map(|c| c.emits.clone())
                .collect(),
        }
    }

    fn relatability_score(&self, words: &WordSet) -> f64 {
        let groups = self.relatability.matching(words).count();
        (groups as f64 * RELATABILITY_INCREMENT).clamp(0.0, 1.0)
    }
}

/// Rewards positive skew and any strong affect.
fn emotional_score(sentiment: &Polarity) -> f64 {
    let base = (sentiment.compound + 1.0) / 2.0;
    (base * TONE_WEIGHT + sentiment.intensity() * INTENSITY_WEIGHT).clamp(0.0, 1.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
