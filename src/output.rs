//! Writes the profile document and the chunk score file.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use tracing::info;

use crate::config::Config;
use crate::profile::Profile;
use crate::scoring::ChunkScores;

/// Where [`write_outputs`] put each file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub profile: PathBuf,
    pub scores: PathBuf,
}

/// Creates `dir` if needed and writes both outputs into it.
pub fn write_outputs(
    dir: &Path,
    config: &Config,
    profile: &Profile,
    scores: &ChunkScores,
    generated_at: NaiveDateTime,
) -> Result<OutputPaths> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))?;

    let paths = OutputPaths {
        profile: dir.join(&config.profile_filename),
        scores: dir.join(&config.scores_filename),
    };

    fs::write(&paths.profile, profile.to_markdown(generated_at))
        .with_context(|| format!("failed to write profile: {}", paths.profile.display()))?;
    info!("Saved style profile to {}", paths.profile.display());

    let json = serde_json::to_string_pretty(scores).context("failed to serialize chunk scores")?;
    fs::write(&paths.scores, json)
        .with_context(|| format!("failed to write chunk scores: {}", paths.scores.display()))?;
    info!("Saved {} chunk scores to {}", scores.len(), paths.scores.display());

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::Section;
    use crate::scoring::ChunkScore;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .and_then(|d| d.and_hms_opt(3, 4, 5))
            .unwrap()
    }

    #[test]
    fn test_writes_both_files() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("out");

        let mut profile = Profile::new();
        profile.set(Section::Themes, vec!["Growth".to_string()]);
        let mut scores = ChunkScores::new();
        scores.insert(
            "## [Chunk 1",
            ChunkScore {
                emotional_tone_score: 0.7,
                relatability_score: 0.4,
                theme_tags: vec!["growth".to_string()],
            },
        );

        let paths = write_outputs(&out, &Config::default(), &profile, &scores, at()).unwrap();
        assert_eq!(paths.profile, out.join("style-profile.md"));
        assert_eq!(paths.scores, out.join("chunk_scores.json"));

        let markdown = fs::read_to_string(&paths.profile).unwrap();
        assert!(markdown.starts_with("# Style Profile\nGenerated: 2024-01-02 03:04:05\n"));
        assert!(markdown.contains("## themes:\n- Growth\n"));

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&paths.scores).unwrap()).unwrap();
        assert_eq!(json["## [Chunk 1"]["relatability_score"], 0.4);
        assert_eq!(json["## [Chunk 1"]["theme_tags"][0], "growth");
    }

    #[test]
    fn test_custom_filenames() {
        let dir = tempdir().unwrap();
        let config = Config {
            profile_filename: "profile.md".to_string(),
            scores_filename: "scores.json".to_string(),
            ..Config::default()
        };
        let paths = write_outputs(
            dir.path(),
            &config,
            &Profile::new(),
            &ChunkScores::new(),
            at(),
        )
        .unwrap();
        assert!(paths.profile.ends_with("profile.md"));
        assert_eq!(fs::read_to_string(&paths.scores).unwrap(), "{}");
    }

    #[test]
    fn test_unwritable_directory_errors() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();
        let result = write_outputs(
            &blocker.join("sub"),
            &Config::default(),
            &Profile::new(),
            &ChunkScores::new(),
            at(),
        );
        assert!(result.is_err());
    }
}
