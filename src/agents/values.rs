//! Core principles: stated outright, implied by choices, or ranked with "over".
use tracing::{debug, info};

use super::{Agent, AnalysisContext, Section, finalize};
use crate::indicators::{IndicatorCategory, IndicatorTable, WordSet};
use crate::text::split_sentences;
use crate::transcript::Chunk;

const VALUE_ROWS: &[(&str, &[&str], &str)] = &[
    (
        "integrity",
        &["honest", "truth", "integrity", "authentic", "genuine"],
        "Values authenticity and truth",
    ),
    (
        "growth",
        &["learn", "grow", "improve", "develop", "progress"],
        "Commitment to continuous growth",
    ),
    (
        "courage",
        &["brave", "courage", "bold", "risk", "fear"],
        "Embraces courage over comfort",
    ),
    (
        "creativity",
        &["create", "innovate", "imagine", "original", "unique"],
        "Prioritizes creative expression",
    ),
    (
        "connection",
        &["connect", "relationship", "community", "together", "share"],
        "Values meaningful connections",
    ),
    (
        "autonomy",
        &["freedom", "independent", "choice", "decide", "control"],
        "Prizes personal autonomy",
    ),
    (
        "impact",
        &["impact", "difference", "change", "help", "serve"],
        "Driven by meaningful impact",
    ),
    (
        "excellence",
        &["quality", "excellence", "best", "standard", "perfect"],
        "Strives for excellence",
    ),
];

const DECISION_WORDS: &[&str] = &["chose", "decided", "picked", "selected", "opted"];
const PRIORITY_WORDS: &[&str] = &["important", "matters", "priority", "believe", "must"];

/// Context words that, next to a decision or priority, imply a value.
const DECISION_CONTEXTS: &[(&str, &[&str], &str)] = &[
    ("integrity", &["right", "truth"], "Chooses integrity over convenience"),
    ("growth", &["hard", "difficult"], "Values growth over comfort"),
];
const PRIORITY_CONTEXTS: &[(&str, &[&str], &str)] = &[
    ("connection", &["people", "others"], "Prioritizes human connection"),
    ("excellence", &["quality", "excellence"], "Values excellence in craft"),
];

/// Substrings looked for in sentences that rank one thing over another.
const OVER_ROWS: &[(&str, &[&str], &str)] = &[
    ("truth", &["truth", "honest"], "Truth over comfort"),
    ("quality", &["quality", "excellence"], "Quality over quantity"),
    ("purpose", &["purpose", "meaning"], "Purpose over profit"),
    ("growth", &["learn", "grow"], "Growth over stability"),
];

const OVER: &str = " over ";

/// A trigger word group and the context tables consulted when it fires.
struct ImplicitRule {
    trigger: IndicatorCategory,
    contexts: IndicatorTable,
}

pub struct ValuesIdentifier {
    ctx: AnalysisContext,
    explicit: IndicatorTable,
    implicit: Vec<ImplicitRule>,
    priorities: IndicatorTable,
}

impl ValuesIdentifier {
    pub fn new(ctx: AnalysisContext) -> Self {
        Self {
            ctx,
            explicit: IndicatorTable::from_rows(VALUE_ROWS),
            implicit: vec![
                ImplicitRule {
                    trigger: IndicatorCategory::new("decision", DECISION_WORDS, ""),
                    contexts: IndicatorTable::from_rows(DECISION_CONTEXTS),
                },
                ImplicitRule {
                    trigger: IndicatorCategory::new("priority", PRIORITY_WORDS, ""),
                    contexts: IndicatorTable::from_rows(PRIORITY_CONTEXTS),
                },
            ],
            priorities: IndicatorTable::from_rows(OVER_ROWS),
        }
    }

    fn explicit_values(&self, clean: &str) -> Vec<String> {
        let words = WordSet::from_text(clean);
        self.explicit
            .matching(&words)
            .map(|c| c.emits.clone())
            .collect()
    }

    fn implicit_values(&self, chunks: &[Chunk]) -> Vec<String> {
        let mut values = Vec::new();
        for chunk in chunks {
            let words = WordSet::from_text(&chunk.text);
            for rule in &self.implicit {
                if rule.trigger.matches(&words) {
                    values.extend(rule.contexts.matching(&words).map(|c| c.emits.clone()));
                }
            }
        }
        values
    }

    fn priority_values(&self, chunks: &[Chunk]) -> Vec<String> {
        let mut values = Vec::new();
        for chunk in chunks {
            for sentence in split_sentences(&chunk.text.to_lowercase()) {
                if !sentence.contains(OVER) {
                    continue;
                }
                debug!("Priority sentence: {sentence}");
                values.extend(self.priorities.containing(&sentence).map(|c| c.emits.clone()));
            }
        }
        values
    }
}

impl Agent for ValuesIdentifier {
    fn section(&self) -> Section {
        Section::Values
    }

    fn analyze(&self, transcript: &str) -> Vec<String> {
        info!("Starting values identification");

        let clean = self.ctx.clean(transcript);
        let chunks = self.ctx.chunks(transcript);

        let mut values = self.explicit_values(&clean);
        values.extend(self.implicit_values(&chunks));
        values.extend(self.priority_values(&chunks));

        let values = finalize(values, true);
        info!("Completed values identification ({} values)", values.len());
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::test_support::{transcript, vader_context};

    fn analyze(chunks: &[&[&str]]) -> Vec<String> {
        ValuesIdentifier::new(vader_context()).analyze(&transcript(chunks))
    }

    #[test]
    fn test_explicit_values_in_table_order() {
        let values = analyze(&[&["I want to help and to be honest."]]);
        assert_eq!(
            values,
            vec!["Values authenticity and truth", "Driven by meaningful impact"]
        );
    }

    #[test]
    fn test_decision_context() {
        let values = analyze(&[&["I chose the hard road because it was right."]]);
        assert!(values.contains(&"Chooses integrity over convenience".to_string()));
        assert!(values.contains(&"Values growth over comfort".to_string()));
    }

    #[test]
    fn test_context_without_trigger() {
        let values = analyze(&[&["It was hard and it felt right."]]);
        assert!(!values.contains(&"Chooses integrity over convenience".to_string()));
        assert!(!values.contains(&"Values growth over comfort".to_string()));
    }

    #[test]
    fn test_priority_context() {
        let values = analyze(&[&["What matters most is people."]]);
        assert!(values.contains(&"Prioritizes human connection".to_string()));
    }

    #[test]
    fn test_over_statements() {
        let values = analyze(&[&[
            "I pick truth over comfort. I value purpose over money.",
            "Nothing else.",
        ]]);
        assert!(values.contains(&"Truth over comfort".to_string()));
        assert!(values.contains(&"Purpose over profit".to_string()));
        assert!(!values.contains(&"Quality over quantity".to_string()));
    }

    #[test]
    fn test_deduplicated_across_chunks() {
        let line = "I decided it was right.";
        let values = analyze(&[&[line], &[line], &[line]]);
        let hits = values
            .iter()
            .filter(|v| *v == "Chooses integrity over convenience")
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_empty_transcript() {
        assert!(ValuesIdentifier::new(vader_context()).analyze("").is_empty());
    }
}
