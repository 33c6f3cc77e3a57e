use once_cell::sync::Lazy;
use regex::Regex;

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:'[\p{L}]+)*|\.\.\.|[^\s\p{L}\p{N}]")
        .expect("word pattern is valid")
});

/// Clitics split off the end of a word, longest first.
const CLITICS: [&str; 7] = ["n't", "'re", "'ve", "'ll", "'s", "'d", "'m"];

/// Words that end a sentence-final period without ending the sentence.
const ABBREVIATIONS: [&str; 16] = [
    "mr", "mrs", "ms", "dr", "prof", "st", "vs", "etc", "e.g", "i.e", "jr", "sr", "inc", "ltd",
    "co", "mt",
];

/// Splits text into word and punctuation tokens.
///
/// Contractions are split the way treebank tokenizers do: `don't` becomes
/// `do` + `n't`, `I'm` becomes `I` + `'m`. Case is preserved.
pub fn tokenize_words(text: &str) -> Vec<String> {
    let normalized = text.replace('\u{2019}', "'");
    let mut tokens = Vec::new();

    for m in WORD_PATTERN.find_iter(&normalized) {
        let word = m.as_str();
        match split_clitic(word) {
            Some((head, clitic)) => {
                tokens.push(head.to_string());
                tokens.push(clitic.to_string());
            }
            None => tokens.push(word.to_string()),
        }
    }

    tokens
}

fn split_clitic(word: &str) -> Option<(&str, &str)> {
    let lower = word.to_lowercase();
    for clitic in CLITICS {
        if lower.len() > clitic.len() && lower.ends_with(clitic) {
            let cut = word.len() - clitic.len();
            if word.is_char_boundary(cut) {
                return Some((&word[..cut], &word[cut..]));
            }
        }
    }
    None
}

/// Lower-cased tokens that contain at least one letter or digit.
pub fn lowercase_words(text: &str) -> Vec<String> {
    tokenize_words(&text.to_lowercase())
        .into_iter()
        .filter(|t| t.chars().any(char::is_alphanumeric))
        .collect()
}

/// Splits text into sentences at `.`, `!` and `?` followed by whitespace or
/// end of text.
///
/// Trailing quotes and brackets stay with their sentence. Periods after
/// common abbreviations and single-letter initials do not split.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];
        if !is_terminal(c) {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < chars.len() && (is_terminal(chars[j].1) || is_closer(chars[j].1)) {
            j += 1;
        }

        let at_boundary = j == chars.len() || chars[j].1.is_whitespace();
        let abbreviated = c == '.' && j == i + 1 && ends_with_abbreviation(&text[start..pos]);
        if at_boundary && !abbreviated {
            let end = if j == chars.len() { text.len() } else { chars[j].0 };
            push_sentence(&mut sentences, &text[start..end]);
            start = end;
        }
        i = j;
    }

    push_sentence(&mut sentences, &text[start..]);
    sentences
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}')
}

fn ends_with_abbreviation(prefix: &str) -> bool {
    let Some(last) = prefix.split_whitespace().last() else {
        return false;
    };
    let word = last
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    if word.chars().count() == 1 && word.chars().all(char::is_alphabetic) {
        return true;
    }
    ABBREVIATIONS.contains(&word.as_str())
}

fn push_sentence(sentences: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_punctuation() {
        let tokens = tokenize_words("Hello, world! Is it real?");
        assert_eq!(tokens, vec!["Hello", ",", "world", "!", "Is", "it", "real", "?"]);
    }

    #[test]
    fn test_tokenize_contractions() {
        assert_eq!(tokenize_words("don't"), vec!["do", "n't"]);
        assert_eq!(tokenize_words("I'm here"), vec!["I", "'m", "here"]);
        assert_eq!(tokenize_words("we\u{2019}ll"), vec!["we", "'ll"]);
    }

    #[test]
    fn test_tokenize_ellipsis() {
        assert_eq!(tokenize_words("so... yes"), vec!["so", "...", "yes"]);
    }

    #[test]
    fn test_lowercase_words_drops_punctuation() {
        assert_eq!(lowercase_words("We ALL grew, right?"), vec!["we", "all", "grew", "right"]);
    }

    #[test]
    fn test_split_sentences() {
        let sentences = split_sentences("First one. Second one! Third? Yes");
        assert_eq!(sentences, vec!["First one.", "Second one!", "Third?", "Yes"]);
    }

    #[test]
    fn test_split_sentences_abbreviations() {
        let sentences = split_sentences("I met Dr. Smith and J. Doe. It was e.g. fine.");
        assert_eq!(sentences, vec!["I met Dr. Smith and J. Doe.", "It was e.g. fine."]);
    }

    #[test]
    fn test_split_sentences_quotes_and_runs() {
        let sentences = split_sentences("He said \"stop!\" Then what?! Nothing.");
        assert_eq!(sentences, vec!["He said \"stop!\"", "Then what?!", "Nothing."]);
    }

    #[test]
    fn test_split_sentences_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n ").is_empty());
    }

    #[test]
    fn test_decimal_not_split() {
        assert_eq!(split_sentences("It grew 2.5 times."), vec!["It grew 2.5 times."]);
    }
}
