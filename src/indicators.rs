//! Lexical indicator model shared by every analysis.
//!
//! A table of named keyword categories is matched against the words of a
//! text. Matching is set membership over tokens (order and frequency do not
//! matter) unless a caller explicitly asks for hit counts or for substring
//! containment over the raw lower-cased text.
use std::collections::HashSet;

use crate::text::lowercase_words;

// ── Word sets ────────────────────────────────────────────────────────

/// Lower-cased tokens of a text, in order and as a lookup set.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    tokens: Vec<String>,
    unique: HashSet<String>,
}

impl WordSet {
    pub fn from_text(text: &str) -> Self {
        let tokens = lowercase_words(text);
        let unique = tokens.iter().cloned().collect();
        Self { tokens, unique }
    }

    /// Tokens in text order, duplicates included.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Exact token membership. `"grew"` does not contain `"grow"`.
    pub fn contains(&self, word: &str) -> bool {
        self.unique.contains(word)
    }
}

// ── Categories ───────────────────────────────────────────────────────

/// A named keyword group and the text it emits when matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorCategory {
    pub name: String,
    pub keywords: HashSet<String>,
    /// Finding sentence or tag emitted on a match.
    pub emits: String,
}

impl IndicatorCategory {
    pub fn new(name: &str, keywords: &[&str], emits: &str) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            emits: emits.to_string(),
        }
    }

    /// At least one keyword is among the words.
    pub fn matches(&self, words: &WordSet) -> bool {
        self.keywords.iter().any(|k| words.contains(k))
    }

    /// Number of tokens that are one of the keywords.
    pub fn hits(&self, words: &WordSet) -> usize {
        words
            .tokens()
            .iter()
            .filter(|token| self.keywords.contains(token.as_str()))
            .count()
    }

    /// At least one keyword occurs as a substring of already lower-cased text.
    pub fn found_in(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// An ordered set of categories. Order decides the order of emitted findings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndicatorTable {
    categories: Vec<IndicatorCategory>,
}

impl IndicatorTable {
    pub fn new(categories: Vec<IndicatorCategory>) -> Self {
        Self { categories }
    }

    /// Builds a table from `(name, keywords, emits)` rows.
    pub fn from_rows(rows: &[(&str, &[&str], &str)]) -> Self {
        Self::new(
            rows.iter()
                .map(|(name, keywords, emits)| IndicatorCategory::new(name, keywords, emits))
                .collect(),
        )
    }

    /// Builds a table where each row's finding is its own keyword, for
    /// phrase tables like `"we all" → "Shared human challenges"`.
    pub fn from_phrases(rows: &[(&str, &str)]) -> Self {
        Self::new(
            rows.iter()
                .map(|(phrase, emits)| IndicatorCategory::new(phrase, &[*phrase], emits))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&IndicatorCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Categories with at least one keyword among the words, in table order.
    pub fn matching<'a>(
        &'a self,
        words: &'a WordSet,
    ) -> impl Iterator<Item = &'a IndicatorCategory> + 'a {
        self.categories.iter().filter(move |c| c.matches(words))
    }

    /// Token hit count per category, in table order.
    pub fn hit_counts<'a>(&'a self, words: &WordSet) -> Vec<(&'a IndicatorCategory, usize)> {
        self.categories.iter().map(|c| (c, c.hits(words))).collect()
    }

    /// Categories with a keyword contained in already lower-cased text.
    pub fn containing<'a>(
        &'a self,
        lowered: &'a str,
    ) -> impl Iterator<Item = &'a IndicatorCategory> + 'a {
        self.categories.iter().filter(move |c| c.found_in(lowered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> IndicatorTable {
        IndicatorTable::from_rows(&[
            ("growth", &["grow", "learn", "improve"], "Growth"),
            ("challenge", &["difficult", "struggle"], "Challenge"),
            ("purpose", &["purpose", "meaning"], "Purpose"),
        ])
    }

    #[test]
    fn test_word_set_membership() {
        let words = WordSet::from_text("I grew, and I LEARNED a lot.");
        assert!(words.contains("i"));
        assert!(words.contains("grew"));
        assert!(words.contains("learned"));
        assert!(!words.contains(","));
        assert_eq!(words.tokens().len(), 7);
    }

    #[test]
    fn test_matching_in_table_order() {
        let words = WordSet::from_text("It gave my life meaning. It was difficult.");
        let t = table();
        let names: Vec<&str> = t.matching(&words).map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["challenge", "purpose"]);
    }

    #[test]
    fn test_matching_is_whole_word() {
        let words = WordSet::from_text("The growler was loud.");
        let t = table();
        assert_eq!(t.matching(&words).count(), 0);
    }

    #[test]
    fn test_hit_counts() {
        let words = WordSet::from_text("We learn, we grow, we keep learning. Purpose.");
        let t = table();
        let counts = t.hit_counts(&words);
        assert_eq!(counts[0].0.name, "growth");
        assert_eq!(counts[0].1, 2);
        assert_eq!(counts[1].1, 0);
        assert_eq!(counts[2].1, 1);
    }

    #[test]
    fn test_phrase_containment() {
        let phrases = IndicatorTable::from_phrases(&[
            ("we all", "Shared human challenges"),
            ("like you", "Direct audience connection"),
        ]);
        let lowered = "honestly, we all fall down sometimes.";
        let found: Vec<&str> = phrases.containing(lowered).map(|c| c.emits.as_str()).collect();
        assert_eq!(found, vec!["Shared human challenges"]);
    }

    #[test]
    fn test_empty_text_matches_nothing() {
        let words = WordSet::from_text("");
        assert!(words.tokens().is_empty());
        let t = table();
        assert_eq!(t.matching(&words).count(), 0);
        assert!(t.hit_counts(&words).iter().all(|(_, n)| *n == 0));
    }

    #[test]
    fn test_category_lookup() {
        let t = table();
        assert!(t.get("purpose").is_some());
        assert!(t.get("missing").is_none());
    }

    #[test]
    fn test_inflections_do_not_match() {
        let words = WordSet::from_text("I grew, improving while I learned.");
        let t = table();
        assert_eq!(t.matching(&words).count(), 0);
        assert!(t.hit_counts(&words).iter().all(|(_, n)| *n == 0));
    }
}
