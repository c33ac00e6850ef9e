//! File-based logging initialization
//!
//! The terminal belongs to the TUI, so logs go to a daily-rotated file in the
//! data directory instead of stderr.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE: &str = "walletscope.log";

/// Install the global subscriber. Keep the returned guard alive for the
/// lifetime of the program or buffered lines are lost.
pub fn init(log_dir: &Path, default_filter: &str) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("create log dir {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("walletscope=info,warn"));

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_thread_names(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("install tracing subscriber")?;

    tracing::info!(log_dir = %log_dir.display(), "logging initialized");
    Ok(guard)
}
