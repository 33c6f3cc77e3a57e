//! Profile assembly: run every agent and collect findings by section.
//!
//! Agents run either one after another or as parallel blocking tasks. In both
//! cases results are joined by section, never by completion order, and a
//! panicking agent leaves its section empty instead of failing the profile.
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::agents::{
    Agent, AnalysisContext, EmotionalToneAnalyzer, RelatabilityAssessor, Section, ThemeExtractor,
    ValuesIdentifier, VoiceAnalyzer,
};

/// Findings grouped into the five fixed sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile {
    sections: BTreeMap<Section, Vec<String>>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            sections: Section::ALL.iter().map(|s| (*s, Vec::new())).collect(),
        }
    }
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, section: Section, findings: Vec<String>) {
        self.sections.insert(section, findings);
    }

    pub fn findings(&self, section: Section) -> &[String] {
        self.sections.get(&section).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sections in presentation order, each with its findings.
    pub fn sections(&self) -> impl Iterator<Item = (Section, &[String])> {
        self.sections.iter().map(|(s, f)| (*s, f.as_slice()))
    }

    pub fn total_findings(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    /// Renders the profile as a markdown document.
    pub fn to_markdown(&self, generated_at: NaiveDateTime) -> String {
        let mut out = String::from("# Style Profile\n");
        let _ = writeln!(out, "Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S"));
        out.push('\n');

        for (i, (section, findings)) in self.sections().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "## {section}:");
            for finding in findings {
                let _ = writeln!(out, "- {finding}");
            }
        }
        out
    }
}

// ── Assembler ────────────────────────────────────────────────────────

/// Runs an ordered list of agents over one transcript.
#[derive(Clone)]
pub struct ProfileAssembler {
    agents: Vec<Arc<dyn Agent>>,
}

impl ProfileAssembler {
    /// The five standard agents, in section order.
    pub fn new(ctx: &AnalysisContext) -> Self {
        Self::with_agents(vec![
            Arc::new(VoiceAnalyzer::new(ctx.clone())),
            Arc::new(ThemeExtractor::new(ctx.clone())),
            Arc::new(ValuesIdentifier::new(ctx.clone())),
            Arc::new(EmotionalToneAnalyzer::new(ctx.clone())),
            Arc::new(RelatabilityAssessor::new(ctx.clone())),
        ])
    }

    pub fn with_agents(agents: Vec<Arc<dyn Agent>>) -> Self {
        Self { agents }
    }

    /// Runs each agent in turn on the current thread.
    pub fn assemble(&self, transcript: &str) -> Profile {
        info!("Assembling profile with {} agents", self.agents.len());

        let mut profile = Profile::new();
        for agent in &self.agents {
            let section = agent.section();
            match catch_unwind(AssertUnwindSafe(|| agent.analyze(transcript))) {
                Ok(findings) => {
                    debug!("{section}: {} findings", findings.len());
                    profile.set(section, findings);
                }
                Err(_) => error!("Agent for {section} panicked, leaving section empty"),
            }
        }
        profile
    }

    /// Runs every agent as its own blocking task and joins by section.
    pub async fn assemble_concurrent(&self, transcript: &str) -> Profile {
        info!(
            "Assembling profile with {} concurrent agents",
            self.agents.len()
        );

        let transcript: Arc<str> = Arc::from(transcript);
        let handles: Vec<_> = self
            .agents
            .iter()
            .map(|agent| {
                let agent = Arc::clone(agent);
                let transcript = Arc::clone(&transcript);
                let section = agent.section();
                let handle = tokio::task::spawn_blocking(move || agent.analyze(&transcript));
                (section, handle)
            })
            .collect();

        let mut profile = Profile::new();
        for (section, handle) in handles {
            match handle.await {
                Ok(findings) => {
                    debug!("{section}: {} findings", findings.len());
                    profile.set(section, findings);
                }
                Err(e) => error!("Agent for {section} failed, leaving section empty: {e}"),
            }
        }
        profile
    }
}
