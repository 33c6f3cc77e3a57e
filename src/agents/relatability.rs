//! Who the speaker connects with, and through which shared experiences.
use tracing::info;

use super::{Agent, AnalysisContext, Section, finalize};
use crate::indicators::{IndicatorCategory, IndicatorTable, WordSet};
use crate::transcript::Chunk;

const EXPERIENCE_ROWS: &[(&str, &[&str], &str)] = &[
    (
        "career_change",
        &["career", "job", "switch", "transition", "industry"],
        "Career changers navigating transitions",
    ),
    (
        "entrepreneurship",
        &["business", "startup", "founder", "entrepreneur", "launch"],
        "Entrepreneurs building their vision",
    ),
    (
        "personal_growth",
        &["growth", "journey", "learn", "develop", "improve"],
        "Personal growth seekers",
    ),
    (
        "leadership",
        &["lead", "team", "manage", "responsibility", "guide"],
        "Emerging and established leaders",
    ),
    (
        "creativity",
        &["create", "art", "design", "express", "creative"],
        "Creative professionals and artists",
    ),
    (
        "burnout",
        &["stress", "overwhelm", "burnout", "balance", "pressure"],
        "Professionals managing work-life balance",
    ),
];

const UNIVERSAL_PHRASES: &[(&str, &str)] = &[
    ("everyone", "Universal human experiences"),
    ("we all", "Shared human challenges"),
    ("like you", "Direct audience connection"),
    ("understand", "Empathetic understanding"),
];

const STRUGGLE_WORDS: &[&str] = &["difficult", "struggle", "challenge", "hard"];
const SUCCESS_WORDS: &[&str] = &["overcome", "succeed", "achieve", "accomplish"];

const PROFESSIONAL_PHRASES: &[(&str, &str)] = &[
    ("corporate", "Corporate professionals seeking change"),
    ("startup", "Startup founders and entrepreneurs"),
    ("creative", "Creative professionals and artists"),
    ("leader", "Leaders and managers"),
    ("expert", "Subject matter experts"),
];

const LIFE_STAGE_PHRASES: &[(&str, &str)] = &[
    ("career", "Career transition phase"),
    ("growth", "Personal development journey"),
    ("change", "Major life changes"),
    ("build", "Building something new"),
];

pub struct RelatabilityAssessor {
    ctx: AnalysisContext,
    experiences: IndicatorTable,
    universal: IndicatorTable,
    struggle: IndicatorCategory,
    success: IndicatorCategory,
    professional: IndicatorTable,
    life_stage: IndicatorTable,
}

impl RelatabilityAssessor {
    pub fn new(ctx: AnalysisContext) -> Self {
        Self {
            ctx,
            experiences: IndicatorTable::from_rows(EXPERIENCE_ROWS),
            universal: IndicatorTable::from_phrases(UNIVERSAL_PHRASES),
            struggle: IndicatorCategory::new("struggle", STRUGGLE_WORDS, ""),
            success: IndicatorCategory::new(
                "success",
                SUCCESS_WORDS,
                "Relatable journey from struggle to success",
            ),
            professional: IndicatorTable::from_phrases(PROFESSIONAL_PHRASES),
            life_stage: IndicatorTable::from_phrases(LIFE_STAGE_PHRASES),
        }
    }

    fn shared_experiences(&self, clean: &str) -> Vec<String> {
        let words = WordSet::from_text(clean);
        self.experiences
            .matching(&words)
            .map(|c| c.emits.clone())
            .collect()
    }

    fn connection_points(&self, chunks: &[Chunk]) -> Vec<String> {
        let mut findings = Vec::new();
        for chunk in chunks {
            let lowered = chunk.text.to_lowercase();
            findings.extend(self.universal.containing(&lowered).map(|c| c.emits.clone()));

            let words = WordSet::from_text(&chunk.text);
            if self.struggle.matches(&words) && self.success.matches(&words) {
                findings.push(self.success.emits.clone());
            }
        }
        findings
    }

    fn audience_alignment(&self, chunks: &[Chunk]) -> Vec<String> {
        let mut findings = Vec::new();
        for chunk in chunks {
            let lowered = chunk.text.to_lowercase();
            findings.extend(self.professional.containing(&lowered).map(|c| c.emits.clone()));
            findings.extend(self.life_stage.containing(&lowered).map(|c| c.emits.clone()));
        }
        findings
    }
}

impl Agent for RelatabilityAssessor {
    fn section(&self) -> Section {
        Section::Relatability
    }

    fn analyze(&self, transcript: &str) -> Vec<String> {
        info!("Starting relatability assessment");

        let clean = self.ctx.clean(transcript);
        let chunks = self.ctx.chunks(transcript);

        let mut findings = self.shared_experiences(&clean);
        findings.extend(self.connection_points(&chunks));
        findings.extend(self.audience_alignment(&chunks));

        let findings = finalize(findings, self.ctx.dedupe_all);
        info!("Completed relatability assessment ({} findings)", findings.len());
        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::test_support::{transcript, vader_context};

    fn analyze(chunks: &[&[&str]]) -> Vec<String> {
        RelatabilityAssessor::new(vader_context()).analyze(&transcript(chunks))
    }

    #[test]
    fn test_shared_experiences() {
        let findings = analyze(&[&["I left my job to launch a company."]]);
        assert_eq!(
            findings,
            vec![
                "Career changers navigating transitions",
                "Entrepreneurs building their vision",
            ]
        );
    }

    #[test]
    fn test_connection_phrases_are_substrings() {
        let findings = analyze(&[&["We all misunderstand things, like you do."]]);
        assert_eq!(
            findings,
            vec![
                "Shared human challenges",
                "Direct audience connection",
                "Empathetic understanding",
            ]
        );
    }

    #[test]
    fn test_struggle_to_success() {
        let findings = analyze(&[&["It was hard, but we did overcome it."]]);
        assert!(findings.contains(&"Relatable journey from struggle to success".to_string()));

        let findings = analyze(&[&["It was hard."], &["Later we did overcome it."]]);
        assert!(!findings.contains(&"Relatable journey from struggle to success".to_string()));
    }

    #[test]
    fn test_audience_alignment_repeats_per_chunk() {
        let findings = analyze(&[&["Builders build."], &["We rebuild."]]);
        assert_eq!(
            findings,
            vec!["Building something new", "Building something new"]
        );
    }

    #[test]
    fn test_dedupe_all_collapses_repeats() {
        let ctx = vader_context().with_dedupe_all(true);
        let text = transcript(&[&["Builders build."], &["We rebuild."]]);
        let findings = RelatabilityAssessor::new(ctx).analyze(&text);
        assert_eq!(findings, vec!["Building something new"]);
    }

    #[test]
    fn test_empty_transcript() {
        assert!(RelatabilityAssessor::new(vader_context()).analyze("").is_empty());
    }
}
