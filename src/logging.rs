//! File logging setup.
//!
//! The terminal belongs to the renderer, so logs only go to
//! `<log_dir>/grid-drive.log`. `RUST_LOG` filters as usual; the default level is
//! `info`.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Config;

pub const LOG_FILE_NAME: &str = "grid-drive.log";

/// Install the global subscriber.
///
/// Returns the writer guard; keep it alive until exit so buffered lines are
/// flushed. `None` when logging is disabled.
pub fn init(config: &Config) -> Result<Option<WorkerGuard>> {
    if !config.log_enabled {
        return Ok(None);
    }

    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("creating log directory {}", config.log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&config.log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("installing tracing subscriber")?;

    tracing::info!(
        log_file = %config.log_dir.join(LOG_FILE_NAME).display(),
        "logging initialized"
    );

    Ok(Some(guard))
}
