//! VADER lexicon-and-rule sentiment, via the `vader_sentiment` crate.
use std::panic::{AssertUnwindSafe, catch_unwind};

use vader_sentiment::SentimentIntensityAnalyzer;

use super::{Polarity, SentimentError, SentimentScorer};

/// Scorer backed by the bundled VADER lexicon.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderScorer {
    fn try_polarity(&self, text: &str) -> Result<Polarity, SentimentError> {
        if text.trim().is_empty() {
            return Ok(Polarity::NEUTRAL);
        }

        let scores = catch_unwind(AssertUnwindSafe(|| self.analyzer.polarity_scores(text)))
            .map_err(|_| SentimentError::ModelFailed("analyzer panicked".to_string()))?;

        let get = |key: &'static str| {
            scores
                .get(key)
                .copied()
                .ok_or(SentimentError::MissingComponent(key))
        };
        let (neg, neu, pos, compound) = (get("neg")?, get("neu")?, get("pos")?, get("compound")?);

        // Texts with no scorable words come back as all zeros.
        if neg + neu + pos == 0.0 {
            return Ok(Polarity::NEUTRAL);
        }

        Ok(Polarity {
            neg,
            neu,
            pos,
            compound,
        })
    }
}
