//! Log output: `info` to stderr, crate `debug` to a daily file.
use std::path::Path;

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Log files are named `style_profiler.<date>.log`.
pub const LOG_FILE_PREFIX: &str = "style_profiler";
const FILE_DIRECTIVE: &str = "style_profiler=debug";

/// `RUST_LOG` if set, otherwise `info`.
fn stderr_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Stderr-only subscriber for the moments before the log directory is known.
pub fn stderr_subscriber() -> impl Subscriber + Send + Sync {
    fmt()
        .with_env_filter(stderr_filter())
        .with_writer(std::io::stderr)
        .finish()
}

/// Builds the stderr + rolling file subscriber, creating `log_dir` if needed.
///
/// Keep the returned guard alive until exit; dropping it flushes the file.
pub fn subscriber(log_dir: &Path) -> Result<(Box<dyn Subscriber + Send + Sync>, WorkerGuard)> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory: {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(log_dir)
        .context("failed to create log appender")?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(EnvFilter::new(FILE_DIRECTIVE)),
        )
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(stderr_filter()),
        );
    Ok((Box::new(subscriber), guard))
}

/// Installs [`subscriber`] as the global default.
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    let (subscriber, guard) = subscriber(log_dir)?;
    subscriber
        .try_init()
        .context("failed to install log subscriber")?;
    Ok(guard)
}
