//! Per-chunk scores used to pick clips downstream.
pub mod scorer;

pub use scorer::ChunkScorer;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Scores and tags for a single chunk. Both scores lie in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkScore {
    pub emotional_tone_score: f64,
    pub relatability_score: f64,
    /// Theme category names, in category table order.
    pub theme_tags: Vec<String>,
}

/// Chunk scores keyed by chunk id, in the order ids were first seen.
///
/// Inserting an id that is already present replaces its record in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChunkScores {
    entries: IndexMap<String, ChunkScore>,
}

impl ChunkScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `score` under `id`, returning the record it replaced.
    pub fn insert(&mut self, id: impl Into<String>, score: ChunkScore) -> Option<ChunkScore> {
        self.entries.insert(id.into(), score)
    }

    pub fn get(&self, id: &str) -> Option<&ChunkScore> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ChunkScore)> {
        self.entries.iter().map(|(id, score)| (id.as_str(), score))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
