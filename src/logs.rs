//! Per-session log file under `~/.grimreaper/logs`.
//!
//! Each run writes to `latest.log`; the previous run's file is renamed to
//! `session-<unix secs>.log` on startup and only the newest few are kept.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;

const LATEST: &str = "latest.log";

/// Managed state holding the current session logger (if any).
#[derive(Default)]
pub struct LoggerState {
    pub logger: Arc<Mutex<Option<SessionLogger>>>,
}

impl LoggerState {
    /// Log a line if a session logger is running.
    pub async fn log(&self, prefix: &str, line: &str) {
        if let Some(logger) = self.logger.lock().await.as_ref() {
            logger.log(prefix, line);
        }
    }

    /// Stop the running session, if any, and wait until its footer is on disk.
    pub async fn shutdown(&self) {
        let logger = self.logger.lock().await.take();
        if let Some(logger) = logger {
            logger.finish().await;
        }
    }
}

/// Writes timestamped lines to `latest.log` from a background task, so
/// logging from a command never waits on the disk.
pub struct SessionLogger {
    tx: mpsc::UnboundedSender<String>,
    writer: JoinHandle<()>,
}

impl SessionLogger {
    /// Rotate the previous session out of the way, prune old sessions down to
    /// `retention`, and open a fresh `latest.log` in `logs_dir`.
    pub async fn new(logs_dir: &Path, retention: usize) -> Option<Self> {
        tokio::fs::create_dir_all(logs_dir).await.ok()?;

        let latest = logs_dir.join(LATEST);
        if tokio::fs::try_exists(&latest).await.unwrap_or(false) {
            let rotated = logs_dir.join(format!("session-{}.log", unix_timestamp()));
            let _ = tokio::fs::rename(&latest, &rotated).await;
        }
        prune_sessions(logs_dir, retention).await;

        let file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&latest)
            .await
            .ok()?;

        let (tx, rx) = mpsc::unbounded_channel();
        let started = format_timestamp(unix_timestamp());
        let _ = tx.send(format!("=== Grim Reaper & Co Session — {started} ===\n\n"));

        Some(Self {
            tx,
            writer: tokio::spawn(write_lines(file, rx)),
        })
    }

    pub fn log(&self, prefix: &str, line: &str) {
        let ts = format_timestamp(unix_timestamp());
        let _ = self.tx.send(format!("[{ts}] [{prefix}] {line}\n"));
    }

    /// Close the channel and wait for the footer to be written.
    pub async fn finish(self) {
        let Self { tx, writer } = self;
        drop(tx);
        let _ = writer.await;
    }
}

async fn write_lines(file: tokio::fs::File, mut rx: mpsc::UnboundedReceiver<String>) {
    let mut out = tokio::io::BufWriter::new(file);
    while let Some(line) = rx.recv().await {
        let _ = out.write_all(line.as_bytes()).await;
        // Readable while the app is still running.
        let _ = out.flush().await;
    }

    let ended = format_timestamp(unix_timestamp());
    let _ = out
        .write_all(format!("\n=== Session ended — {ended} ===\n").as_bytes())
        .await;
    let _ = out.flush().await;
}

fn unix_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// ISO 8601 UTC, e.g. `2025-06-15T10:30:00Z`.
fn format_timestamp(secs: u64) -> String {
    let (days, rem) = (secs / 86_400, secs % 86_400);
    let (year, month, day) = civil_from_days(days as i64);
    format!(
        "{year:04}-{month:02}-{day:02}T{:02}:{:02}:{:02}Z",
        rem / 3600,
        rem / 60 % 60,
        rem % 60
    )
}

/// Days since 1970-01-01 to a proleptic Gregorian (year, month, day).
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    // Shift the epoch to 0000-03-01 so leap days fall at the end of each year.
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let day_of_era = z.rem_euclid(146_097);
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = year_of_era + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Delete all but the `retention` newest `session-*.log` files.
async fn prune_sessions(logs_dir: &Path, retention: usize) {
    let Ok(mut dir) = tokio::fs::read_dir(logs_dir).await else {
        return;
    };

    let mut sessions: Vec<PathBuf> = Vec::new();
    while let Ok(Some(entry)) = dir.next_entry().await {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with("session-") && name.ends_with(".log") {
            sessions.push(entry.path());
        }
    }

    // Same-width unix seconds in the name, so name order is age order.
    sessions.sort_unstable();
    let stale = sessions.len().saturating_sub(retention);
    for path in sessions.drain(..stale) {
        let _ = tokio::fs::remove_file(path).await;
    }
}
