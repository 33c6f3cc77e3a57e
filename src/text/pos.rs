//! Rule-based coarse part-of-speech tagging.
//!
//! Closed-class words come from fixed lists, open-class words from a short
//! list of frequent verbs and adjectives plus suffix rules. Anything not
//! recognised is tagged as a noun.
use once_cell::sync::Lazy;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Noun,
    Adjective,
    Adverb,
    Verb,
    Modal,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Number,
    Punctuation,
}

impl Tag {
    /// Nouns and adjectives, the parts of a simple noun phrase.
    #[must_use]
    pub fn is_nominal(self) -> bool {
        matches!(self, Tag::Noun | Tag::Adjective)
    }
}

fn set(words: &'static [&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

static PRONOUNS: Lazy<HashSet<&str>> = Lazy::new(|| {
    set(&[
        "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "you", "your",
        "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
        "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "who",
        "whom", "whose", "what", "which", "someone", "everyone", "anyone", "nobody", "somebody",
        "everybody",
    ])
});

static DETERMINERS: Lazy<HashSet<&str>> = Lazy::new(|| {
    set(&[
        "a", "an", "the", "this", "that", "these", "those", "some", "any", "each", "every", "no",
        "all", "both", "either", "neither", "another", "such",
    ])
});

static PREPOSITIONS: Lazy<HashSet<&str>> = Lazy::new(|| {
    set(&[
        "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
        "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
        "out", "off", "over", "under", "around", "among", "along", "across", "behind", "beyond",
        "like", "near", "since", "toward", "towards", "upon", "within", "without", "via", "per",
    ])
});

static CONJUNCTIONS: Lazy<HashSet<&str>> = Lazy::new(|| {
    set(&[
        "and", "but", "or", "nor", "yet", "because", "although", "though", "while", "if",
        "unless", "until", "whereas", "whether", "than", "as",
    ])
});

static MODALS: Lazy<HashSet<&str>> = Lazy::new(|| {
    set(&[
        "will", "would", "shall", "should", "can", "could", "may", "might", "must", "'ll", "'d",
        "ca", "wo",
    ])
});

static VERBS: Lazy<HashSet<&str>> = Lazy::new(|| {
    set(&[
        "is", "am", "are", "was", "were", "be", "been", "being", "'s", "'re", "'m", "'ve", "have",
        "has", "had", "having", "do", "does", "did", "done", "get", "got", "gotten", "make",
        "made", "go", "went", "gone", "come", "came", "say", "said", "know", "knew", "known",
        "think", "thought", "see", "saw", "seen", "want", "feel", "felt", "take", "took", "taken",
        "give", "gave", "given", "find", "found", "tell", "told", "become", "became", "leave",
        "left", "keep", "kept", "let", "begin", "began", "begun", "seem", "help", "talk", "turn",
        "start", "show", "hear", "heard", "play", "run", "ran", "move", "live", "believe", "bring",
        "brought", "happen", "write", "wrote", "sit", "sat", "stand", "stood", "lose", "lost",
        "pay", "paid", "meet", "met", "include", "continue", "set", "learn", "learnt", "change",
        "lead", "led", "understand", "understood", "watch", "follow", "stop", "create", "speak",
        "spoke", "read", "allow", "add", "spend", "spent", "grow", "grew", "grown", "open",
        "walk", "win", "won", "offer", "remember", "love", "consider", "appear", "buy", "bought",
        "wait", "serve", "die", "send", "sent", "expect", "build", "built", "stay", "fall", "fell",
        "cut", "reach", "remain", "realize", "realise", "try", "ask", "work", "need", "mean",
        "meant", "use", "call", "put", "chose", "choose", "decide", "overcome", "achieve",
        "succeed", "accomplish", "struggle", "hope", "matter", "matters",
    ])
});

static ADVERBS: Lazy<HashSet<&str>> = Lazy::new(|| {
    set(&[
        "not", "n't", "very", "really", "just", "also", "only", "even", "still", "already",
        "always", "never", "often", "sometimes", "usually", "here", "there", "now", "then",
        "again", "too", "quite", "rather", "almost", "so", "maybe", "perhaps", "actually",
        "probably", "definitely", "literally", "basically", "ever", "soon", "later", "today",
        "yesterday", "tomorrow", "together", "away", "back", "well", "much", "more", "most",
        "less", "least", "how", "when", "where", "why", "once", "twice", "further",
    ])
});

static ADJECTIVES: Lazy<HashSet<&str>> = Lazy::new(|| {
    set(&[
        "good", "bad", "great", "new", "old", "big", "small", "little", "long", "short", "high",
        "low", "young", "right", "wrong", "same", "different", "important", "hard", "easy",
        "real", "true", "false", "best", "better", "worse", "worst", "last", "next", "first",
        "able", "sure", "happy", "sad", "strong", "weak", "full", "free", "whole", "clear",
        "certain", "huge", "tiny", "amazing", "wonderful", "beautiful", "difficult", "possible",
        "impossible", "simple", "honest", "genuine", "authentic", "scary", "proud", "tough",
        "deep", "own", "other", "many", "few", "several", "major", "minor", "early", "late",
        "main", "public", "private", "personal", "social", "human", "local", "single", "common",
        "special", "bold", "brave", "unique", "original", "perfect", "excited",
        "worried", "concerned", "afraid", "anxious", "grateful", "thankful", "blessed",
        "determined", "committed", "positive", "negative", "resilient", "independent",
        "creative", "corporate", "meaningful", "million", "dark", "bright", "quiet", "loud",
    ])
});

static NOUN_EXCEPTIONS: Lazy<HashSet<&str>> = Lazy::new(|| {
    set(&[
        "thing", "something", "nothing", "everything", "anything", "morning", "evening",
        "ceiling", "king", "ring", "spring", "string", "wedding", "building", "meeting",
        "feeling", "beginning", "family", "supply", "reply", "ally", "belly", "bully", "rally",
        "seed", "speed", "creed", "bed", "red", "hundred", "animal", "signal", "journal",
        "proposal", "approval", "capital", "hospital", "individual", "material", "potential",
        "arrival", "festival", "interval", "principal",
    ])
});

/// Tags lower-cased tokens, one tag per token.
pub fn tag_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<Tag> {
    let mut tags = Vec::with_capacity(tokens.len());
    let mut previous: Option<Tag> = None;

    for token in tokens {
        let tag = tag_word(token.as_ref(), previous);
        tags.push(tag);
        previous = Some(tag);
    }

    tags
}

fn tag_word(word: &str, previous: Option<Tag>) -> Tag {
    if !word.chars().any(char::is_alphanumeric) {
        return Tag::Punctuation;
    }
    if word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
        return Tag::Number;
    }
    if MODALS.contains(word) {
        return Tag::Modal;
    }
    if PRONOUNS.contains(word) {
        return Tag::Pronoun;
    }
    if DETERMINERS.contains(word) {
        return Tag::Determiner;
    }
    if CONJUNCTIONS.contains(word) {
        return Tag::Conjunction;
    }
    if PREPOSITIONS.contains(word) {
        return Tag::Preposition;
    }
    if ADVERBS.contains(word) {
        return Tag::Adverb;
    }
    if ADJECTIVES.contains(word) {
        return Tag::Adjective;
    }
    if NOUN_EXCEPTIONS.contains(word) {
        return Tag::Noun;
    }
    // Verb forms after a determiner or adjective are nouns: "the change".
    if VERBS.contains(word) {
        return match previous {
            Some(Tag::Determiner) | Some(Tag::Adjective) => Tag::Noun,
            _ => Tag::Verb,
        };
    }
    if matches!(previous, Some(Tag::Modal)) {
        return Tag::Verb;
    }
    tag_by_suffix(word).unwrap_or(Tag::Noun)
}

fn tag_by_suffix(word: &str) -> Option<Tag> {
    let len = word.chars().count();
    if len > 4 && word.ends_with("ly") {
        return Some(Tag::Adverb);
    }
    const ADJECTIVE_SUFFIXES: [&str; 10] = [
        "ful", "ous", "ive", "able", "ible", "less", "ish", "ical", "ic", "al",
    ];
    if len > 5 && ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return Some(Tag::Adjective);
    }
    if len > 4 && (word.ends_with("ing") || word.ends_with("ed")) {
        return Some(Tag::Verb);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<Tag> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        tag_tokens(&tokens)
    }

    #[test]
    fn test_closed_classes() {
        assert_eq!(
            tags("i and the of"),
            vec![Tag::Pronoun, Tag::Conjunction, Tag::Determiner, Tag::Preposition]
        );
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(tags("quickly"), vec![Tag::Adverb]);
        assert_eq!(tags("powerful"), vec![Tag::Adjective]);
        assert_eq!(tags("emotional"), vec![Tag::Adjective]);
        assert_eq!(tags("walking"), vec![Tag::Verb]);
        assert_eq!(tags("jumped"), vec![Tag::Verb]);
    }

    #[test]
    fn test_noun_default_and_exceptions() {
        assert_eq!(tags("infrastructure"), vec![Tag::Noun]);
        assert_eq!(tags("something"), vec![Tag::Noun]);
        assert_eq!(tags("family"), vec![Tag::Noun]);
    }

    #[test]
    fn test_context_rules() {
        assert_eq!(tags("the change"), vec![Tag::Determiner, Tag::Noun]);
        assert_eq!(tags("we change"), vec![Tag::Pronoun, Tag::Verb]);
        assert_eq!(tags("will flourish"), vec![Tag::Modal, Tag::Verb]);
    }

    #[test]
    fn test_punctuation_and_numbers() {
        assert_eq!(tags(", 42 3.5"), vec![Tag::Punctuation, Tag::Number, Tag::Number]);
    }

    #[test]
    fn test_nominal() {
        assert!(Tag::Noun.is_nominal());
        assert!(Tag::Adjective.is_nominal());
        assert!(!Tag::Verb.is_nominal());
    }
}
