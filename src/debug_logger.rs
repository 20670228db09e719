// Decision logging module for asynchronous JSONL audit trails
//
// Writes are fire-and-forget so the move endpoint never blocks on disk.
// Each decision is appended as one JSON line.

use log::error;
use serde::Serialize;
use std::sync::Arc;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::types::{Coord, Direction};

/// Represents a single decision log entry
#[derive(Debug, Serialize)]
struct DecisionLogEntry {
    timestamp: String,
    head: Option<Coord>,
    chosen_move: String,
    boost: bool,
}

/// Shared decision logger state
/// Uses Arc<Mutex<Option<File>>> to allow concurrent async writes from
/// multiple tasks
#[derive(Clone)]
pub struct DebugLogger {
    file: Arc<Mutex<Option<File>>>,
    enabled: bool,
}

impl DebugLogger {
    /// Creates a new decision logger
    /// If enabled is true, initializes the log file (truncating if it exists)
    pub fn new(enabled: bool, log_file_path: &str) -> Self {
        if !enabled {
            return Self::disabled();
        }

        match std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_file_path)
        {
            Ok(file) => {
                log::info!("Decision logging enabled: {}", log_file_path);
                DebugLogger {
                    file: Arc::new(Mutex::new(Some(File::from_std(file)))),
                    enabled: true,
                }
            }
            Err(e) => {
                error!(
                    "Failed to create decision log file '{}': {}",
                    log_file_path, e
                );
                Self::disabled()
            }
        }
    }

    /// Creates a disabled decision logger (no-op)
    pub fn disabled() -> Self {
        DebugLogger {
            file: Arc::new(Mutex::new(None)),
            enabled: false,
        }
    }

    /// Logs a move decision asynchronously (fire-and-forget)
    /// This spawns a tokio task that writes to the file without blocking
    pub fn log_decision(&self, head: Option<Coord>, direction: Direction, boost: bool) {
        if !self.enabled {
            return;
        }

        let file_handle = self.file.clone();
        let entry = DecisionLogEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            head,
            chosen_move: direction.as_str().to_string(),
            boost,
        };

        // Spawn fire-and-forget task
        tokio::spawn(async move {
            Self::write_entry(file_handle, entry).await;
        });
    }

    /// Internal async function that performs the actual file write
    async fn write_entry(file_handle: Arc<Mutex<Option<File>>>, entry: DecisionLogEntry) {
        let mut file_guard = file_handle.lock().await;

        if let Some(file) = file_guard.as_mut() {
            match serde_json::to_string(&entry) {
                Ok(json_line) => {
                    let line_with_newline = format!("{}\n", json_line);
                    if let Err(e) = file.write_all(line_with_newline.as_bytes()).await {
                        error!("Failed to write decision log entry: {}", e);
                    } else if let Err(e) = file.flush().await {
                        error!("Failed to flush decision log: {}", e);
                    }
                }
                Err(e) => {
                    error!("Failed to serialize decision log entry: {}", e);
                }
            }
        }
    }
}
