//! Sentiment polarity scoring.
//!
//! Any scorer works as long as it is deterministic for a given input and
//! honours the [`Polarity`] contract.
pub mod mock;
pub mod vader;

pub use mock::ScriptedScorer;
pub use vader::VaderScorer;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while scoring a text.
#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("sentiment model failed: {0}")]
    ModelFailed(String),

    #[error("missing score component: {0}")]
    MissingComponent(&'static str),
}

/// Four-component sentiment of a text.
///
/// `neg`, `neu` and `pos` are proportions in `[0, 1]` summing to 1;
/// `compound` is the normalised overall polarity in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Polarity {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl Polarity {
    /// Score of a text with no sentiment-bearing content.
    pub const NEUTRAL: Polarity = Polarity {
        neg: 0.0,
        neu: 1.0,
        pos: 0.0,
        compound: 0.0,
    };

    /// Builds a polarity with `neu` filling what `pos` and `neg` leave over.
    #[must_use]
    pub fn new(neg: f64, pos: f64, compound: f64) -> Self {
        let neg = neg.clamp(0.0, 1.0);
        let pos = pos.clamp(0.0, 1.0 - neg);
        Self {
            neg,
            neu: 1.0 - neg - pos,
            pos,
            compound: compound.clamp(-1.0, 1.0),
        }
    }

    /// Combined strength of positive and negative affect.
    #[must_use]
    pub fn intensity(&self) -> f64 {
        self.pos + self.neg
    }
}

/// Trait for polarity scorers.
///
/// Implementations must be `Send + Sync` so one instance can be shared by
/// agents running in parallel.
pub trait SentimentScorer: Send + Sync {
    /// Scores a text, reporting model failures.
    fn try_polarity(&self, text: &str) -> Result<Polarity, SentimentError>;

    /// Scores a text, degrading to [`Polarity::NEUTRAL`] on failure.
    fn polarity(&self, text: &str) -> Polarity {
        match self.try_polarity(text) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!("Sentiment scoring failed, using neutral: {e}");
                Polarity::NEUTRAL
            }
        }
    }
}
