use std::collections::HashMap;

use super::pos::{Tag, tag_tokens};
use super::stopwords::is_stop_word;
use super::tokenizer::{split_sentences, tokenize_words};

const FIRST_PERSON: [&str; 5] = ["i", "me", "my", "mine", "myself"];

/// Counts of word classes in a text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordTypes {
    pub adjectives: usize,
    pub first_person: usize,
}

/// Sentence-level metrics of how a text is spoken.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeakingStyle {
    /// Tokens (punctuation included) per sentence.
    pub avg_sentence_length: f64,
    pub word_types: WordTypes,
}

/// Measures sentence length and word-class counts.
///
/// Returns `None` for text with no sentences.
pub fn speaking_style(text: &str) -> Option<SpeakingStyle> {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return None;
    }

    let words = tokenize_words(&text.to_lowercase());
    let tags = tag_tokens(&words);

    let word_types = WordTypes {
        adjectives: tags.iter().filter(|t| **t == Tag::Adjective).count(),
        first_person: words
            .iter()
            .filter(|w| FIRST_PERSON.contains(&w.as_str()))
            .count(),
    };

    Some(SpeakingStyle {
        avg_sentence_length: words.len() as f64 / sentences.len() as f64,
        word_types,
    })
}

/// Extracts multi-word adjective/noun phrases, most frequent first.
///
/// A phrase is a maximal run of adjectives and nouns; stop words inside a run
/// are skipped without breaking it. Ties keep first-seen order.
pub fn key_phrases(text: &str, top_n: usize) -> Vec<String> {
    let tokens = tokenize_words(&text.to_lowercase());
    let tags = tag_tokens(&tokens);

    let mut phrases: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for (word, tag) in tokens.iter().zip(tags) {
        if tag.is_nominal() {
            if !is_stop_word(word) {
                current.push(word);
            }
        } else if !current.is_empty() {
            phrases.push(current.join(" "));
            current.clear();
        }
    }
    if !current.is_empty() {
        phrases.push(current.join(" "));
    }

    let mut order: Vec<String> = Vec::new();
    let mut freq: HashMap<String, usize> = HashMap::new();
    for phrase in phrases {
        if phrase.split(' ').count() < 2 {
            continue;
        }
        let count = freq.entry(phrase.clone()).or_insert(0);
        if *count == 0 {
            order.push(phrase);
        }
        *count += 1;
    }

    // Stable sort keeps first-seen order among equal counts.
    order.sort_by(|a, b| freq[b].cmp(&freq[a]));
    order.truncate(top_n);
    order
}
