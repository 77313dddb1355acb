//! Structured service logging for long-lived processes
//!
//! This module provides persistent logging for servers with:
//! - JSONL disk storage, append-only, one entry per line
//! - Thread-safe async operations behind an internal lock
//! - Optional console mirroring (quiet mode for tests)
//! - Structured request context on entries that have one

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "schemars")]
use schemars::JsonSchema;

// Types and Data Structures
// =========================

/// Request context attached to HTTP-originated log entries
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct LogContext {
  /// Request ID for correlation
  #[serde(skip_serializing_if = "Option::is_none")]
  pub request_id: Option<String>,

  /// HTTP method
  #[serde(skip_serializing_if = "Option::is_none")]
  pub method: Option<String>,

  /// Request path
  #[serde(skip_serializing_if = "Option::is_none")]
  pub path: Option<String>,

  /// User agent
  #[serde(skip_serializing_if = "Option::is_none")]
  pub user_agent: Option<String>,

  /// Request duration in milliseconds
  #[serde(skip_serializing_if = "Option::is_none")]
  pub duration_ms: Option<f64>,

  /// HTTP status code
  #[serde(skip_serializing_if = "Option::is_none")]
  pub status_code: Option<u16>,
}

/// A structured log entry for service operations
#[derive(Debug, Serialize, Deserialize, Clone)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct LogEntry {
  pub timestamp: DateTime<Utc>,
  pub level: String,
  pub message: String,
  pub origin: String,

  /// Optional request context
  #[serde(skip_serializing_if = "Option::is_none")]
  pub context: Option<LogContext>,
}

/// Internal log storage implementation
struct ServiceLogsInner {
  log_file_path: std::path::PathBuf,
  quiet: bool,
}

/// Thread-safe disk-based log storage for services using JSONL format
#[derive(Clone)]
pub struct ServiceLogs {
  inner: std::sync::Arc<tokio::sync::Mutex<ServiceLogsInner>>,
}

// Storage Internals
// =================

impl ServiceLogsInner {
  /// Create storage backed by the given file path, creating parents as needed
  fn new<P: AsRef<std::path::Path>>(log_file_path: P, quiet: bool) -> std::io::Result<Self> {
    let log_file_path = log_file_path.as_ref().to_path_buf();

    if let Some(parent) = log_file_path.parent() {
      std::fs::create_dir_all(parent)?;
    }

    // Create the file if missing, without truncating an existing one
    if !log_file_path.exists() {
      std::fs::File::create(&log_file_path)?;
    }

    Ok(Self { log_file_path, quiet })
  }

  /// Append one entry to the JSONL file
  fn append(
    &mut self,
    level: &str,
    message: &str,
    origin: &str,
    context: Option<LogContext>,
  ) -> std::io::Result<()> {
    let entry = LogEntry {
      timestamp: Utc::now(),
      level: level.to_string(),
      message: message.to_string(),
      origin: origin.to_string(),
      context,
    };

    let json_line = serde_json::to_string(&entry)
      .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    use std::fs::OpenOptions;
    use std::io::Write;

    let mut file = OpenOptions::new().create(true).append(true).open(&self.log_file_path)?;

    writeln!(file, "{json_line}")?;
    file.flush()?;

    Ok(())
  }

  /// Read entries back, optionally filtered by level and limited to the most recent N
  fn read_entries(
    &self,
    limit: Option<usize>,
    level_filter: Option<&str>,
  ) -> std::io::Result<Vec<LogEntry>> {
    use std::fs::File;
    use std::io::{BufRead, BufReader};

    if !self.log_file_path.exists() {
      return Ok(Vec::new());
    }

    let file = File::open(&self.log_file_path)?;
    let reader = BufReader::new(file);

    let mut entries = Vec::new();

    for line_result in reader.lines() {
      let line = line_result?;
      if line.trim().is_empty() {
        continue;
      }

      // Malformed lines are skipped rather than failing the whole read
      let Ok(entry) = serde_json::from_str::<LogEntry>(&line) else {
        continue;
      };

      let matches_level =
        level_filter.is_none_or(|filter| filter == "all" || entry.level == filter);

      if matches_level {
        entries.push(entry);
      }
    }

    // Newest first so the limit keeps the most recent entries
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    if let Some(limit) = limit {
      entries.truncate(limit);
    }

    // Oldest first for terminal-friendly display
    entries.reverse();

    Ok(entries)
  }

  fn log_file_path(&self) -> &std::path::Path {
    &self.log_file_path
  }

  fn has_entries(&self) -> bool {
    self.log_file_path.exists()
      && std::fs::metadata(&self.log_file_path).map(|m| m.len() > 0).unwrap_or(false)
  }

  fn file_size(&self) -> std::io::Result<u64> {
    let metadata = std::fs::metadata(&self.log_file_path)?;
    Ok(metadata.len())
  }
}

// Core API
// ========

impl ServiceLogs {
  /// Create a new thread-safe service log store
  pub fn new<P: AsRef<std::path::Path>>(log_file_path: P) -> std::io::Result<Self> {
    Self::new_quiet(log_file_path, false)
  }

  /// Create a new store with console mirroring disabled
  pub fn new_quiet<P: AsRef<std::path::Path>>(
    log_file_path: P,
    quiet: bool,
  ) -> std::io::Result<Self> {
    let inner = ServiceLogsInner::new(log_file_path, quiet)?;
    Ok(Self { inner: std::sync::Arc::new(tokio::sync::Mutex::new(inner)) })
  }

  /// Append an entry (handles locking internally)
  pub async fn add_entry(
    &self,
    level: &str,
    message: &str,
    origin: &str,
  ) -> std::io::Result<()> {
    let mut guard = self.inner.lock().await;
    guard.append(level, message, origin, None)
  }

  /// Append an entry with request context (handles locking internally)
  pub async fn add_entry_with_context(
    &self,
    level: &str,
    message: &str,
    origin: &str,
    context: Option<LogContext>,
  ) -> std::io::Result<()> {
    let mut guard = self.inner.lock().await;
    guard.append(level, message, origin, context)
  }

  /// Append an entry, fire-and-forget
  pub async fn record(&self, level: &str, message: &str, origin: &str) {
    let _ = self.add_entry(level, message, origin).await;
  }

  /// Append an entry with context, fire-and-forget
  pub async fn record_with_context(
    &self,
    level: &str,
    message: &str,
    origin: &str,
    context: LogContext,
  ) {
    let _ = self.add_entry_with_context(level, message, origin, Some(context)).await;
  }

  /// Retrieve entries with optional level filter and limit
  pub async fn get_logs(
    &self,
    limit: Option<usize>,
    level_filter: Option<&str>,
  ) -> std::io::Result<Vec<LogEntry>> {
    let guard = self.inner.lock().await;
    guard.read_entries(limit, level_filter)
  }

  /// Path of the backing log file
  pub async fn log_file_path(&self) -> std::path::PathBuf {
    let guard = self.inner.lock().await;
    guard.log_file_path().to_path_buf()
  }

  /// Whether any entries have been written
  pub async fn has_entries(&self) -> bool {
    let guard = self.inner.lock().await;
    guard.has_entries()
  }

  /// Size of the backing log file in bytes
  pub async fn file_size(&self) -> std::io::Result<u64> {
    let guard = self.inner.lock().await;
    guard.file_size()
  }
}

// Leveled Wrappers
// ================

impl ServiceLogs {
  async fn write_level(&self, level: &str, message: &str, origin: &str) {
    self.record(level, message, origin).await;

    let guard = self.inner.lock().await;
    if !guard.quiet {
      match level {
        "warn" => {
          crate::warn!(message);
        }
        "error" => {
          crate::error!(message);
        }
        "debug" => {
          crate::debug!(message);
        }
        "success" => {
          crate::success!(message);
        }
        "verbose" => {
          crate::verbose!(message);
        }
        _ => {
          crate::info!(message);
        }
      }
    }
  }

  /// Log an info message (to disk + console unless quiet)
  pub async fn info(&self, message: &str, origin: &str) {
    self.write_level("info", message, origin).await;
  }

  /// Log a warning message (to disk + console unless quiet)
  pub async fn warn(&self, message: &str, origin: &str) {
    self.write_level("warn", message, origin).await;
  }

  /// Log an error message (to disk + console unless quiet)
  pub async fn error(&self, message: &str, origin: &str) {
    self.write_level("error", message, origin).await;
  }

  /// Log a debug message (to disk + console unless quiet)
  pub async fn debug(&self, message: &str, origin: &str) {
    self.write_level("debug", message, origin).await;
  }

  /// Log a success message (to disk + console unless quiet)
  pub async fn success(&self, message: &str, origin: &str) {
    self.write_level("success", message, origin).await;
  }

  /// Log a verbose message (to disk + console unless quiet)
  pub async fn verbose(&self, message: &str, origin: &str) {
    self.write_level("verbose", message, origin).await;
  }

  /// Log an info message with request context (to disk + console unless quiet)
  pub async fn info_with_context(&self, message: &str, origin: &str, context: LogContext) {
    self.record_with_context("info", message, origin, context).await;

    let guard = self.inner.lock().await;
    if !guard.quiet {
      crate::info!(message);
    }
  }

  /// Log an error message with request context (to disk + console unless quiet)
  pub async fn error_with_context(&self, message: &str, origin: &str, context: LogContext) {
    self.record_with_context("error", message, origin, context).await;

    let guard = self.inner.lock().await;
    if !guard.quiet {
      crate::error!(message);
    }
  }
}

// Tests
// =====
