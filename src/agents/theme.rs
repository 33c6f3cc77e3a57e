//! Central themes, narrative arcs and recurring concepts.
use std::collections::HashMap;

use tracing::{debug, info};

use super::{Agent, AnalysisContext, Section, finalize};
use crate::indicators::{IndicatorTable, WordSet};
use crate::text::key_phrases;
use crate::transcript::Chunk;

const THEME_ROWS: &[(&str, &[&str], &str)] = &[
    (
        "growth",
        &["learn", "grow", "develop", "improve", "progress", "journey"],
        "Personal growth and continuous learning",
    ),
    (
        "challenge",
        &["difficult", "challenge", "obstacle", "struggle", "overcome"],
        "Navigating challenges and obstacles",
    ),
    (
        "change",
        &["change", "transition", "shift", "transform", "adapt"],
        "Embracing change and transformation",
    ),
    (
        "purpose",
        &["purpose", "meaning", "mission", "calling", "passion"],
        "Finding purpose and meaning",
    ),
    (
        "relationships",
        &["team", "people", "connection", "community", "support"],
        "Building meaningful connections",
    ),
    (
        "achievement",
        &["accomplish", "achieve", "success", "goal", "milestone"],
        "Setting and achieving goals",
    ),
    (
        "resilience",
        &["persist", "endure", "resilient", "bounce", "recover"],
        "Demonstrating resilience and persistence",
    ),
    (
        "authenticity",
        &["authentic", "genuine", "true", "real", "honest"],
        "Maintaining authenticity and genuineness",
    ),
];

/// Keyword hits a theme needs across the whole transcript.
const THEME_MIN_HITS: usize = 2;
/// An arc needs a beginning, a middle and an end.
const ARC_MIN_CHUNKS: usize = 3;
const ARC_RANGE: f64 = 1.0;
const PHRASES_PER_CHUNK: usize = 5;
const RECURRING_TOP: usize = 3;
const RECURRING_MIN_CHUNKS: usize = 2;

pub struct ThemeExtractor {
    ctx: AnalysisContext,
    themes: IndicatorTable,
}

impl ThemeExtractor {
    pub fn new(ctx: AnalysisContext) -> Self {
        Self {
            ctx,
            themes: IndicatorTable::from_rows(THEME_ROWS),
        }
    }

    fn key_themes(&self, clean: &str) -> Vec<String> {
        let words = WordSet::from_text(clean);
        self.themes
            .hit_counts(&words)
            .into_iter()
            .filter(|(_, hits)| *hits >= THEME_MIN_HITS)
            .map(|(category, _)| category.emits.clone())
            .collect()
    }

    fn narrative_arcs(&self, chunks: &[Chunk]) -> Vec<String> {
        if chunks.len() < ARC_MIN_CHUNKS {
            return Vec::new();
        }

        let compounds: Vec<f64> = chunks
            .iter()
            .map(|c| self.ctx.sentiment.polarity(&c.text).compound)
            .collect();
        debug!("Arc compounds: {:?}", compounds);

        let mut findings = Vec::new();
        if let (Some(first), Some(last)) = (compounds.first(), compounds.last()) {
            if *first < 0.0 && *last > 0.0 {
                findings.push("Journey from challenge to triumph".to_string());
            }
        }

        let max = compounds.iter().copied().fold(f64::MIN, f64::max);
        let min = compounds.iter().copied().fold(f64::MAX, f64::min);
        if max - min > ARC_RANGE {
            findings.push("Reflective exploration of highs and lows".to_string());
        }
        findings
    }

    fn recurring_concepts(&self, chunks: &[Chunk]) -> Vec<String> {
        let phrases = chunks
            .iter()
            .flat_map(|c| key_phrases(&c.text, PHRASES_PER_CHUNK));

        most_common(phrases, RECURRING_TOP)
            .into_iter()
            .filter(|(_, count)| *count >= RECURRING_MIN_CHUNKS)
            .map(|(phrase, _)| format!("Recurring focus on {phrase}"))
            .collect()
    }
}

/// The `n` most frequent items, ties broken by first appearance.
fn most_common(items: impl IntoIterator<Item = String>, n: usize) -> Vec<(String, usize)> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for item in items {
        let count = counts.entry(item.clone()).or_insert(0);
        if *count == 0 {
            order.push(item);
        }
        *count += 1;
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|item| {
            let count = counts[&item];
            (item, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

impl Agent for ThemeExtractor {
    fn section(&self) -> Section {
        Section::Themes
    }

    fn analyze(&self, transcript: &str) -> Vec<String> {
        info!("Starting theme extraction");

        let clean = self.ctx.clean(transcript);
        let chunks = self.ctx.chunks(transcript);

        let mut themes = self.key_themes(&clean);
        themes.extend(self.narrative_arcs(&chunks));
        themes.extend(self.recurring_concepts(&chunks));

        let themes = finalize(themes, true);
        info!("Completed theme extraction ({} themes)", themes.len());
        themes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::test_support::{scripted_context, transcript, vader_context};
    use crate::sentiment::ScriptedScorer;

    #[test]
    fn test_key_themes_need_two_hits() {
        let text = transcript(&[
            &["I learn so much and I grow every year."],
            &["It was difficult once. Purpose matters to me."],
        ]);
        let themes = ThemeExtractor::new(vader_context()).analyze(&text);
        assert!(themes.contains(&"Personal growth and continuous learning".to_string()));
        assert!(!themes.contains(&"Navigating challenges and obstacles".to_string()));
        assert!(!themes.contains(&"Finding purpose and meaning".to_string()));
    }

    #[test]
    fn test_key_themes_count_exact_words() {
        let text = transcript(&[&["I learned a lot, grew up fast and kept learning."]]);
        let themes = ThemeExtractor::new(vader_context()).analyze(&text);
        assert!(!themes.contains(&"Personal growth and continuous learning".to_string()));
    }

    #[test]
    fn test_negative_to_positive_arc() {
        let scorer = ScriptedScorer::new()
            .with_compound("It was a dark time.", -0.6)
            .with_compound("Things slowly settled.", 0.1)
            .with_compound("Now I am thriving.", 0.7);
        let text = transcript(&[
            &["It was a dark time."],
            &["Things slowly settled."],
            &["Now I am thriving."],
        ]);
        let themes = ThemeExtractor::new(scripted_context(scorer)).analyze(&text);
        assert!(themes.contains(&"Journey from challenge to triumph".to_string()));
        assert!(themes.contains(&"Reflective exploration of highs and lows".to_string()));
    }

    #[test]
    fn test_arc_needs_three_chunks() {
        let scorer = ScriptedScorer::new()
            .with_compound("Awful start.", -0.9)
            .with_compound("Great finish.", 0.9);
        let text = transcript(&[&["Awful start."], &["Great finish."]]);
        let themes = ThemeExtractor::new(scripted_context(scorer)).analyze(&text);
        assert!(themes.iter().all(|t| !t.starts_with("Journey")));
        assert!(themes.iter().all(|t| !t.starts_with("Reflective")));
    }

    #[test]
    fn test_recurring_concepts() {
        let text = transcript(&[
            &["Team culture is everything here."],
            &["We spent years on team culture."],
            &["Honestly, team culture is the key."],
        ]);
        let themes = ThemeExtractor::new(vader_context()).analyze(&text);
        assert!(themes.contains(&"Recurring focus on team culture".to_string()));
    }

    #[test]
    fn test_no_duplicates() {
        let text = transcript(&[
            &["We learn and grow, we learn and grow."],
            &["Team culture. Team culture."],
            &["Team culture again."],
        ]);
        let themes = ThemeExtractor::new(vader_context()).analyze(&text);
        let mut seen = std::collections::HashSet::new();
        assert!(themes.iter().all(|t| seen.insert(t.clone())));
    }

    #[test]
    fn test_empty_transcript() {
        assert!(ThemeExtractor::new(vader_context()).analyze("").is_empty());
    }

    #[test]
    fn test_most_common_ties_keep_first_seen() {
        let items = ["b", "a", "c", "a", "b", "d"].map(String::from);
        let ranked = most_common(items, 3);
        assert_eq!(
            ranked,
            vec![
                ("b".to_string(), 2),
                ("a".to_string(), 2),
                ("c".to_string(), 1)
            ]
        );
    }
}
