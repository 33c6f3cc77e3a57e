//! Overall tone, recurring emotions and how sentiment moves between chunks.
use tracing::{debug, info};

use super::{Agent, AnalysisContext, Section, exceeds_share, finalize};
use crate::indicators::{IndicatorTable, WordSet};
use crate::sentiment::Polarity;
use crate::transcript::Chunk;

const EMOTION_ROWS: &[(&str, &[&str], &str)] = &[
    ("joy", &["happy", "excited", "love", "wonderful", "amazing"], ""),
    (
        "optimism",
        &["hope", "believe", "positive", "better", "future"],
        "Consistently optimistic undertone",
    ),
    (
        "determination",
        &["will", "must", "determined", "committed", "decided"],
        "Strong sense of determination",
    ),
    (
        "reflection",
        &["think", "realize", "understand", "learned", "know"],
        "Deeply reflective and self-aware",
    ),
    ("concern", &["worried", "concerned", "afraid", "fear", "anxious"], ""),
    (
        "gratitude",
        &["thankful", "grateful", "appreciate", "blessed", "luck"],
        "Expresses genuine gratitude",
    ),
];

/// Share of chunks an emotion must appear in, checked in this order.
const EMOTION_SHARES: &[(&str, f64)] = &[
    ("optimism", 0.3),
    ("reflection", 0.3),
    ("determination", 0.2),
    ("gratitude", 0.1),
];

/// Compound cut-points, highest first. The first one exceeded wins.
const TONE_BANDS: &[(f64, &str)] = &[
    (0.5, "Predominantly optimistic and positive outlook"),
    (0.2, "Generally hopeful with balanced perspective"),
    (-0.2, "Measured and pragmatic emotional tone"),
];
const TONE_FLOOR: &str = "Reflective and growth-focused perspective";

const COMPOSED_NEUTRAL: f64 = 0.7;
const RANGE_POSITIVE: f64 = 0.3;
const RANGE_NEGATIVE: f64 = 0.1;

const TRANSITION_MIN_CHUNKS: usize = 3;
const DYNAMIC_CHANGE: f64 = 0.5;
const GENTLE_CHANGE: f64 = 0.3;

pub struct EmotionalToneAnalyzer {
    ctx: AnalysisContext,
    emotions: IndicatorTable,
}

impl EmotionalToneAnalyzer {
    pub fn new(ctx: AnalysisContext) -> Self {
        Self {
            ctx,
            emotions: IndicatorTable::from_rows(EMOTION_ROWS),
        }
    }

    fn overall_tone(&self, clean: &str) -> Vec<String> {
        if clean.trim().is_empty() {
            return Vec::new();
        }

        let sentiment = self.ctx.sentiment.polarity(clean);
        debug!("Overall sentiment: {:?}", sentiment);

        let mut findings = vec![tone_band(&sentiment).to_string()];
        if sentiment.neu > COMPOSED_NEUTRAL {
            findings.push("Maintains composed, even-keeled emotional state".to_string());
        }
        if sentiment.pos > RANGE_POSITIVE && sentiment.neg > RANGE_NEGATIVE {
            findings.push("Comfortable expressing full range of emotions".to_string());
        }
        findings
    }

    fn emotional_patterns(&self, chunks: &[Chunk]) -> Vec<String> {
        let per_chunk: Vec<WordSet> = chunks.iter().map(|c| WordSet::from_text(&c.text)).collect();

        let mut findings = Vec::new();
        for (name, share) in EMOTION_SHARES {
            let Some(category) = self.emotions.get(name) else {
                continue;
            };
            let count = per_chunk.iter().filter(|words| category.matches(words)).count();
            if exceeds_share(count, chunks.len(), *share) {
                findings.push(category.emits.clone());
            }
        }
        findings
    }

    fn transitions(&self, chunks: &[Chunk]) -> Vec<String> {
        if chunks.len() < TRANSITION_MIN_CHUNKS {
            return Vec::new();
        }

        let compounds: Vec<f64> = chunks
            .iter()
            .map(|c| self.ctx.sentiment.polarity(&c.text).compound)
            .collect();
        let changes: Vec<f64> = compounds.windows(2).map(|w| (w[1] - w[0]).abs()).collect();
        let mean_change = changes.iter().sum::<f64>() / changes.len() as f64;
        debug!("Mean sentiment change between chunks: {mean_change:.3}");

        let mut findings = Vec::new();
        if mean_change > DYNAMIC_CHANGE {
            findings.push("Dynamic emotional range with clear transitions".to_string());
        } else if mean_change > GENTLE_CHANGE {
            findings.push("Natural emotional flow with gentle transitions".to_string());
        } else {
            findings.push("Consistent emotional stability throughout".to_string());
        }

        let lowest = compounds.iter().copied().fold(f64::MAX, f64::min);
        if compounds.last().is_some_and(|last| *last > 0.0) && lowest < 0.0 {
            findings.push("Demonstrates emotional resilience and growth".to_string());
        }
        findings
    }
}

fn tone_band(sentiment: &Polarity) -> &'static str {
    TONE_BANDS
        .iter()
        .find(|(cut, _)| sentiment.compound > *cut)
        .map_or(TONE_FLOOR, |(_, finding)| *finding)
}

impl Agent for EmotionalToneAnalyzer {
    fn section(&self) -> Section {
        Section::EmotionalTone
    }

    fn analyze(&self, transcript: &str) -> Vec<String> {
        info!("Starting emotional tone analysis");

        let clean = self.ctx.clean(transcript);
        let chunks = self.ctx.chunks(transcript);

        let mut findings = self.overall_tone(&clean);
        findings.extend(self.emotional_patterns(&chunks));
        findings.extend(self.transitions(&chunks));

        let findings = finalize(findings, self.ctx.dedupe_all);
        info!("Completed emotional tone analysis ({} findings)", findings.len());
        findings
    }
}
