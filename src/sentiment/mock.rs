//! Scripted scorer for tests.
//!
//! Returns preset polarities for exact input texts, so analyses that depend on
//! sentiment trends can be exercised without tuning real sentences.
use std::collections::HashMap;

use super::{Polarity, SentimentError, SentimentScorer};

/// Looks each text up in a table, falling back to a default polarity.
#[derive(Debug, Clone)]
pub struct ScriptedScorer {
    scripted: HashMap<String, Polarity>,
    fallback: Polarity,
}

impl ScriptedScorer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            scripted: HashMap::new(),
            fallback: Polarity::NEUTRAL,
        }
    }

    /// Scripts the full polarity of `text`.
    #[must_use]
    pub fn with(mut self, text: impl Into<String>, polarity: Polarity) -> Self {
        self.scripted.insert(text.into(), polarity);
        self
    }

    /// Scripts only the compound score of `text`; proportions stay neutral.
    #[must_use]
    pub fn with_compound(self, text: impl Into<String>, compound: f64) -> Self {
        self.with(text, Polarity::new(0.0, 0.0, compound))
    }

    /// Polarity returned for texts that were not scripted.
    #[must_use]
    pub fn with_fallback(mut self, polarity: Polarity) -> Self {
        self.fallback = polarity;
        self
    }
}

impl Default for ScriptedScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for ScriptedScorer {
    fn try_polarity(&self, text: &str) -> Result<Polarity, SentimentError> {
        Ok(self.scripted.get(text).copied().unwrap_or(self.fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_lookup() {
        let scorer = ScriptedScorer::new().with_compound("dark days", -0.6);
        assert_eq!(scorer.polarity("dark days").compound, -0.6);
        assert_eq!(scorer.polarity("something else"), Polarity::NEUTRAL);
    }

    #[test]
    fn test_fallback() {
        let warm = Polarity::new(0.0, 0.4, 0.7);
        let scorer = ScriptedScorer::new().with_fallback(warm);
        assert_eq!(scorer.polarity("anything"), warm);
    }
}
