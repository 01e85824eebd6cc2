//! Rolling Logger
//!
//! One log file per day under the app log directory, the oldest files pruned,
//! plus a circular buffer of recent lines for in-app display.
//! `log` records are forwarded into the same tracing subscriber.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use thiserror::Error;

/// Daily files kept on disk
pub const MAX_LOG_FILES: usize = 7;

/// Lines kept in memory
pub const RECENT_CAPACITY: usize = 500;

static RECENT: OnceLock<Mutex<RecentLines>> = OnceLock::new();

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Log directory unavailable: {0}")]
    Io(#[from] io::Error),

    #[error("Logger already installed: {0}")]
    AlreadyInstalled(String),
}

/// Fixed-capacity line buffer; the oldest line is dropped when full
#[derive(Debug)]
pub struct RecentLines {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RecentLines {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

fn recent_lines() -> &'static Mutex<RecentLines> {
    RECENT.get_or_init(|| Mutex::new(RecentLines::new(RECENT_CAPACITY)))
}

/// Writer handed to the subscriber: appends to the file and mirrors
/// complete lines into the recent buffer
struct RollingWriter {
    file: File,
    partial: String,
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write_all(buf)?;
        self.partial.push_str(&String::from_utf8_lossy(buf));
        while let Some(end) = self.partial.find('\n') {
            let line: String = self.partial.drain(..=end).collect();
            if let Ok(mut recent) = recent_lines().lock() {
                recent.push(line.trim_end().to_string());
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// File name for today's log
pub fn log_file_name(app_name: &str) -> String {
    format!("{}_{}.log", app_name, chrono::Local::now().format("%Y-%m-%d"))
}

/// Delete all but the newest `keep` log files of `app_name` in `dir`.
///
/// Returns the removed paths.
pub fn prune_old_logs(dir: &Path, app_name: &str, keep: usize) -> io::Result<Vec<PathBuf>> {
    let prefix = format!("{}_", app_name);
    let mut logs: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with(&prefix) && n.ends_with(".log"))
                .unwrap_or(false)
        })
        .collect();

    // Dated names sort chronologically
    logs.sort();
    let excess = logs.len().saturating_sub(keep);
    let removed: Vec<PathBuf> = logs.drain(..excess).collect();
    for path in &removed {
        fs::remove_file(path)?;
    }
    Ok(removed)
}

/// Install the global subscriber writing to `log_dir`.
///
/// Returns the path of the active log file.
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<PathBuf, LoggerError> {
    let log_dir = log_dir.as_ref();
    fs::create_dir_all(log_dir)?;

    let path = log_dir.join(log_file_name(app_name));
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let writer = RollingWriter {
        file,
        partial: String::new(),
    };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(writer))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .map_err(|e| LoggerError::AlreadyInstalled(e.to_string()))?;

    match prune_old_logs(log_dir, app_name, MAX_LOG_FILES) {
        Ok(removed) if !removed.is_empty() => {
            tracing::info!("pruned {} old log files", removed.len());
        }
        Ok(_) => {}
        Err(e) => tracing::warn!("could not prune old logs: {}", e),
    }

    Ok(path)
}

/// Most recent log lines, oldest first
pub fn recent() -> Vec<String> {
    recent_lines()
        .lock()
        .map(|recent| recent.snapshot())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_lines_drops_oldest() {
        let mut recent = RecentLines::new(2);
        recent.push("one".to_string());
        recent.push("two".to_string());
        recent.push("three".to_string());
        assert_eq!(recent.snapshot(), vec!["two", "three"]);
    }

    #[test]
    fn test_prune_keeps_newest() {
        let dir = tempfile::tempdir().unwrap();
        for day in ["2026-01-01", "2026-01-02", "2026-01-03"] {
            fs::write(dir.path().join(format!("App_{}.log", day)), "x").unwrap();
        }
        fs::write(dir.path().join("Other_2026-01-01.log"), "x").unwrap();

        let removed = prune_old_logs(dir.path(), "App", 2).unwrap();
        assert_eq!(removed.len(), 1);
        assert!(removed[0].ends_with("App_2026-01-01.log"));
        assert!(dir.path().join("Other_2026-01-01.log").exists());
    }

    #[test]
    fn test_init_writes_file_and_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let path = init_logger(dir.path(), "Test").unwrap();
        tracing::info!("hello from test");
        log::warn!("bridged from log");

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("hello from test"));
        assert!(contents.contains("bridged from log"));
        assert!(recent().iter().any(|line| line.contains("hello from test")));
    }
}
