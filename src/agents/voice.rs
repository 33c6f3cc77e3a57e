//! Speaking style, pacing, word choice and delivery.
use tracing::{debug, info};

use super::{Agent, AnalysisContext, Section, exceeds_share, finalize};
use crate::indicators::{IndicatorCategory, WordSet};
use crate::text::{Tag, split_sentences, speaking_style, tag_tokens, tokenize_words};
use crate::transcript::Chunk;

// ── Thresholds ───────────────────────────────────────────────────────

const EXPANSIVE_SENTENCE_TOKENS: f64 = 20.0;
const PERSONAL_FIRST_PERSON: usize = 10;
const DESCRIPTIVE_ADJECTIVES: usize = 30;
const ELABORATE_SENTENCES_PER_CHUNK: f64 = 3.0;
const TECHNICAL_NOUN_CHARS: usize = 8;
const TECHNICAL_NOUNS: usize = 5;
const QUESTION_CHUNK_SHARE: f64 = 0.2;
const EMPHASIS_CHUNK_SHARE: f64 = 0.1;

const METAPHOR_WORDS: &[&str] = &["like", "as", "imagine", "picture"];

pub struct VoiceAnalyzer {
    ctx: AnalysisContext,
    metaphors: IndicatorCategory,
}

impl VoiceAnalyzer {
    pub fn new(ctx: AnalysisContext) -> Self {
        Self {
            ctx,
            metaphors: IndicatorCategory::new(
                "metaphor",
                METAPHOR_WORDS,
                "Uses metaphors and imagery to illustrate points",
            ),
        }
    }

    fn style(&self, clean: &str) -> Vec<String> {
        let Some(style) = speaking_style(clean) else {
            return Vec::new();
        };
        debug!(
            "Style: {:.1} tokens/sentence, {} first-person, {} adjectives",
            style.avg_sentence_length, style.word_types.first_person, style.word_types.adjectives
        );

        let mut findings = Vec::new();
        if style.avg_sentence_length > EXPANSIVE_SENTENCE_TOKENS {
            findings.push("Uses detailed, expansive sentences".to_string());
        } else {
            findings.push("Favors concise, direct communication".to_string());
        }
        if style.word_types.first_person > PERSONAL_FIRST_PERSON {
            findings.push("Speaks from personal experience".to_string());
        }
        if style.word_types.adjectives > DESCRIPTIVE_ADJECTIVES {
            findings.push("Highly descriptive speaking style".to_string());
        }
        findings
    }

    fn pacing(&self, chunks: &[Chunk]) -> Vec<String> {
        let counts: Vec<usize> = chunks
            .iter()
            .map(|c| split_sentences(&c.text).len())
            .filter(|n| *n > 0)
            .collect();
        if counts.is_empty() {
            return Vec::new();
        }

        let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
        if mean > ELABORATE_SENTENCES_PER_CHUNK {
            vec!["Tends to elaborate with multiple connected thoughts".to_string()]
        } else {
            vec!["Delivers ideas in focused, discrete segments".to_string()]
        }
    }

    fn word_choices(&self, clean: &str) -> Vec<String> {
        let mut findings = Vec::new();

        if self.metaphors.matches(&WordSet::from_text(clean)) {
            findings.push(self.metaphors.emits.clone());
        }

        let tokens = tokenize_words(&clean.to_lowercase());
        let technical = tokens
            .iter()
            .zip(tag_tokens(&tokens))
            .filter(|(word, tag)| *tag == Tag::Noun && word.chars().count() > TECHNICAL_NOUN_CHARS)
            .count();
        if technical > TECHNICAL_NOUNS {
            findings.push("Comfortable with technical/specialized vocabulary".to_string());
        }

        findings
    }

    fn delivery(&self, chunks: &[Chunk]) -> Vec<String> {
        if chunks.is_empty() {
            return Vec::new();
        }

        let mut findings = Vec::new();
        let questions = chunks.iter().filter(|c| c.text.contains('?')).count();
        if exceeds_share(questions, chunks.len(), QUESTION_CHUNK_SHARE) {
            findings.push("Engages through rhetorical questions".to_string());
        }

        let emphatic = chunks.iter().filter(|c| c.text.contains('!')).count();
        if exceeds_share(emphatic, chunks.len(), EMPHASIS_CHUNK_SHARE) {
            findings.push("Uses dynamic emphasis for key points".to_string());
        } else {
            findings.push("Maintains measured, even-keeled delivery".to_string());
        }
        findings
    }
}

impl Agent for VoiceAnalyzer {
    fn section(&self) -> Section {
        Section::Voice
    }

    fn analyze(&self, transcript: &str) -> Vec<String> {
        info!("Starting voice analysis");

        let clean = self.ctx.clean(transcript);
        let chunks = self.ctx.chunks(transcript);

        let mut findings = self.style(&clean);
        findings.extend(self.pacing(&chunks));
        findings.extend(self.word_choices(&clean));
        findings.extend(self.delivery(&chunks));

        let findings = finalize(findings, self.ctx.dedupe_all);
        info!("Completed voice analysis ({} findings)", findings.len());
        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::test_support::{transcript, vader_context};

    fn analyze(chunks: &[&[&str]]) -> Vec<String> {
        VoiceAnalyzer::new(vader_context()).analyze(&transcript(chunks))
    }

    #[test]
    fn test_concise_and_measured() {
        let findings = analyze(&[&["I wake up early."], &["Then I work."]]);
        assert_eq!(
            findings,
            vec![
                "Favors concise, direct communication",
                "Delivers ideas in focused, discrete segments",
                "Maintains measured, even-keeled delivery",
            ]
        );
    }

    #[test]
    fn test_questions_emphasis_and_metaphor() {
        let findings = analyze(&[
            &["Why do we even try?"],
            &["It felt like a storm!"],
            &["We kept going."],
        ]);
        assert!(findings.contains(&"Engages through rhetorical questions".to_string()));
        assert!(findings.contains(&"Uses dynamic emphasis for key points".to_string()));
        assert!(findings.contains(&"Uses metaphors and imagery to illustrate points".to_string()));
        assert!(!findings.contains(&"Maintains measured, even-keeled delivery".to_string()));
    }

    #[test]
    fn test_inflected_metaphor_words_ignored() {
        let findings = analyze(&[&["I liked the pictures."]]);
        assert!(!findings.contains(&"Uses metaphors and imagery to illustrate points".to_string()));
    }

    #[test]
    fn test_elaborate_pacing() {
        let findings = analyze(&[&["One. Two. Three. Four. Five."], &["Six. Seven. Eight. Nine."]]);
        assert!(findings.contains(&"Tends to elaborate with multiple connected thoughts".to_string()));
    }

    #[test]
    fn test_personal_experience() {
        let line = "I said I would, and I did it my way because I could.";
        let findings = analyze(&[&[line, line, line]]);
        assert!(findings.contains(&"Speaks from personal experience".to_string()));
    }

    #[test]
    fn test_technical_vocabulary() {
        let findings = analyze(&[&[
            "Our infrastructure needed orchestration, virtualization and containerization.",
            "The architecture relied on replication and observability.",
        ]]);
        assert!(findings.contains(&"Comfortable with technical/specialized vocabulary".to_string()));
    }

    #[test]
    fn test_empty_transcript_has_no_findings() {
        assert!(VoiceAnalyzer::new(vader_context()).analyze("").is_empty());
        assert!(
            VoiceAnalyzer::new(vader_context())
                .analyze("No markers at all, just prose.")
                .is_empty()
        );
    }

    #[test]
    fn test_section_and_default_dedupe() {
        let agent = VoiceAnalyzer::new(vader_context());
        assert_eq!(agent.section(), Section::Voice);
        assert!(!agent.ctx.dedupe_all);
    }
}
