use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use style_profiler::agents::AnalysisContext;
use style_profiler::config::Config;
use style_profiler::logging;
use style_profiler::output::write_outputs;
use style_profiler::profile::ProfileAssembler;
use style_profiler::scoring::ChunkScorer;
use style_profiler::sentiment::{SentimentScorer, VaderScorer};
use style_profiler::transcript::{self, TranscriptFormat};

#[derive(Parser)]
#[command(name = "style-profiler")]
#[command(version, about = "Builds a speaking style profile from a chunked transcript")]
struct Cli {
    /// Config file (JSON). Missing or invalid files fall back to defaults.
    #[arg(long, default_value = "")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse a transcript and write the profile and chunk scores
    Profile {
        /// Transcript markdown file
        #[arg(long)]
        transcript: PathBuf,
        /// Output directory (overrides config)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Run agents one after another
        #[arg(long)]
        sequential: bool,
    },
    /// Print chunk scores as JSON
    Score {
        #[arg(long)]
        transcript: PathBuf,
    },
    /// Print parsed chunks as JSON
    Chunks {
        #[arg(long)]
        transcript: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The log file lives in the output directory, which the config decides.
    let config = tracing::subscriber::with_default(logging::stderr_subscriber(), || {
        Config::load(&cli.config)
    })?;

    let output_dir = match &cli.command {
        Commands::Profile {
            output: Some(dir), ..
        } => dir.clone(),
        _ => PathBuf::from(&config.output_dir),
    };
    // _guard must live until main() returns to flush the file writer
    let _guard = logging::init(&output_dir)?;

    config.validate().context("invalid configuration")?;

    match cli.command {
        Commands::Profile {
            transcript: path,
            sequential,
            ..
        } => {
            let text = read_transcript(&path, &config.format)?;
            let sentiment: Arc<dyn SentimentScorer> = Arc::new(VaderScorer::new());

            let ctx = AnalysisContext::new(config.format.clone(), Arc::clone(&sentiment))
                .with_dedupe_all(config.dedupe_all_sections);
            let assembler = ProfileAssembler::new(&ctx);
            let profile = if config.concurrent && !sequential {
                assembler.assemble_concurrent(&text).await
            } else {
                assembler.assemble(&text)
            };
            for (section, findings) in profile.sections() {
                info!("{section}: {} findings", findings.len());
            }
            info!("Profile complete ({} findings)", profile.total_findings());

            let scores = ChunkScorer::new(config.format.clone(), sentiment).score_chunks(&text);
            if scores.is_empty() {
                warn!("No chunks with subject-speaker lines were found");
            }

            let generated_at = chrono::Local::now().naive_local();
            let paths = write_outputs(&output_dir, &config, &profile, &scores, generated_at)?;
            info!(
                "Analysis complete: {} and {}",
                paths.profile.display(),
                paths.scores.display()
            );
        }
        Commands::Score { transcript: path } => {
            let text = read_transcript(&path, &config.format)?;
            let scorer = ChunkScorer::new(config.format.clone(), Arc::new(VaderScorer::new()));
            let scores = scorer.score_chunks(&text);
            println!(
                "{}",
                serde_json::to_string_pretty(&scores).context("failed to serialize scores")?
            );
        }
        Commands::Chunks { transcript: path } => {
            let text = read_transcript(&path, &config.format)?;
            let chunks = transcript::extract_chunks(&text, &config.format);
            println!(
                "{}",
                serde_json::to_string_pretty(&chunks).context("failed to serialize chunks")?
            );
        }
    }

    Ok(())
}

/// Reads a transcript and rejects documents missing the chunk markers.
fn read_transcript(path: &Path, format: &TranscriptFormat) -> Result<String> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read transcript: {}", path.display()))?;
    transcript::validate(&text, format)
        .with_context(|| format!("invalid transcript: {}", path.display()))?;
    info!("Loaded transcript {} ({} bytes)", path.display(), text.len());
    Ok(text)
}
