//! Log output for the `c2rs` binary.
//!
//! Library crates only emit through the `log` facade. This module bridges
//! those records into `tracing` and installs two layers: a console layer on
//! stderr and a file layer writing `latest.log` in the log directory.

use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_log::LogTracer;
use tracing_subscriber::filter::LevelFilter as SubLevel;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

pub const LOG_DIR: &str = "log";
pub const LATEST_LOG: &str = "latest.log";

/// Install the global subscriber.
///
/// The returned guard flushes the file log when dropped, so keep it alive
/// until the program ends. `None` means file logging is unavailable.
pub fn init_logging(debug: bool, log_dir: &Path) -> Option<WorkerGuard> {
    let _ = LogTracer::init();

    // Console: WARN and up unless --debug. File: INFO, or DEBUG with --debug.
    let (console_filter, file_filter) = if debug {
        (SubLevel::DEBUG, SubLevel::DEBUG)
    } else {
        (SubLevel::WARN, SubLevel::INFO)
    };

    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_timer(fmt::time::uptime())
        .with_writer(io::stderr)
        .with_filter(console_filter);

    let (file_layer, guard) = match prepare_log_dir(log_dir) {
        Ok(()) => {
            let file_appender = rolling::never(log_dir, LATEST_LOG);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_filter(file_filter);
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("Failed to prepare log directory {}: {}", log_dir.display(), e);
            (None, None)
        }
    };

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();

    guard
}

fn prepare_log_dir(log_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(log_dir)?;
    archive_previous_log(log_dir)?;
    Ok(())
}

/// Rename the previous run's `latest.log` after its modification time so
/// the current run always writes a fresh `latest.log`.
pub fn archive_previous_log(log_dir: &Path) -> io::Result<Option<PathBuf>> {
    let latest_path = log_dir.join(LATEST_LOG);
    if !latest_path.exists() {
        return Ok(None);
    }

    let modified: DateTime<Local> = fs::metadata(&latest_path)?.modified()?.into();
    let code = modified.format("%y%m%d%H%M%S").to_string();

    // append an increasing index when the name is taken
    let mut final_path = log_dir.join(format!("{}.log", code));
    let mut idx = 1;
    while final_path.exists() {
        final_path = log_dir.join(format!("{}-{}.log", code, idx));
        idx += 1;
    }

    fs::rename(&latest_path, &final_path)?;
    Ok(Some(final_path))
}
