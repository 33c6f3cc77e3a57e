//! Tokenizing, tagging and simple stylometrics over English text.
pub mod pos;
pub mod stopwords;
pub mod style;
pub mod tokenizer;

pub use pos::{Tag, tag_tokens};
pub use stopwords::is_stop_word;
pub use style::{SpeakingStyle, WordTypes, key_phrases, speaking_style};
pub use tokenizer::{lowercase_words, split_sentences, tokenize_words};
