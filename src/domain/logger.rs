//! Logging to stderr with optional daily-rotated files.

use anyhow::Result;
use std::fs;
use std::io::IsTerminal;
use std::path::Path;
use time::macros::format_description;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Prefix of rotated log files.
const LOG_FILE_PREFIX: &str = "wmr";

/// Initialize the logging system.
///
/// Logs always go to stderr. When `log_dir` is set, a daily rotated file
/// layer is added as well.
pub fn init(debug: bool, log_dir: Option<&Path>) -> Result<()> {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    // Use local timezone for timestamps
    let time_format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let local_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = OffsetTime::new(local_offset, time_format);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_timer(timer.clone());

    let file_layer = match log_dir {
        Some(dir) => {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
            cleanup_old_logs(dir)?;
            let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_timer(timer),
            )
        }
        None => None,
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}

/// Clean up log files older than 2 days.
pub fn cleanup_old_logs(log_dir: &Path) -> Result<()> {
    use std::time::{Duration, SystemTime};

    let two_days = Duration::from_secs(2 * 24 * 60 * 60);
    let cutoff = SystemTime::now() - two_days;

    if !log_dir.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(log_dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let is_ours = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(LOG_FILE_PREFIX));
        if !is_ours {
            continue;
        }

        if let Ok(modified) = entry.metadata().and_then(|m| m.modified()) {
            if modified < cutoff {
                let _ = fs::remove_file(&path);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_keeps_fresh_and_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        let ours = dir.path().join("wmr.2026-10-18");
        let foreign = dir.path().join("other.log");
        fs::write(&ours, "fresh").unwrap();
        fs::write(&foreign, "untouched").unwrap();

        cleanup_old_logs(dir.path()).unwrap();

        assert!(ours.exists());
        assert!(foreign.exists());
    }

    #[test]
    fn test_cleanup_missing_dir_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        assert!(cleanup_old_logs(&dir.path().join("missing")).is_ok());
    }
}
