//! ## Features
//!
//! - Standard logging levels (info, warn, error, debug, success, verbose)
//! - Multi-line message support with consistent formatting
//! - Timestamped event logging for long-running jobs
//! - Framed output for milestone messages (announce, flourish)
//! - All output to stderr, keeping stdout free for command results
//!
//! ## Usage
//!
//! Standard logging functions: `info()`, `warn()`, `error()`, `debug()`, `success()`
//!
//! Event logging: `event_info()`, `event_warn()`, `event_error()`, `event_success()`
//!
//! The `service-logs` feature adds [`service_logs::ServiceLogs`], a JSONL-backed
//! structured log store used by long-lived servers.

use chrono::Local;
use colored::*;

/// Service logging infrastructure - available with the "service-logs" feature
#[cfg(feature = "service-logs")]
pub mod service_logs;

/// Initialize Quill - sets up any necessary state
pub fn init() {
  // No state needed today; kept as a hook so callers have a stable entry point
}

/// Core output function, one stderr line per message line
pub fn emit(message: &str) {
  for line in message.lines() {
    eprintln!("{line}");
  }
}

/// Format the padded, colored level tag for log messages
fn level_tag(color: Color, tag: &str) -> String {
  format!("[{}]{:<width$}", tag.color(color).bold(), "", width = 7 - tag.len() - 2)
}

/// Build a horizontal rule of the given length and character
pub fn rule(length: usize, ch: char) -> String {
  ch.to_string().repeat(length)
}

/// Display a message framed by horizontal rules
pub fn framed<F>(emit_fn: F, message: &str, width: usize, ch: char)
where
  F: Fn(&str),
{
  let frame = rule(width, ch);

  emit_fn(&frame);
  emit_fn(message);
  emit_fn(&frame);
}

/// Verbose level logging - chatty diagnostics, usually filtered out
pub fn verbose(message: &str) {
  let tag = level_tag(Color::Cyan, "verb");
  for line in message.lines() {
    emit(&format!("{tag} {line}"));
  }
}

/// Info level logging - general information
pub fn info(message: &str) {
  let tag = level_tag(Color::Blue, "info");
  for line in message.lines() {
    emit(&format!("{tag} {line}"));
  }
}

/// Warning level logging - something needs attention
pub fn warn(message: &str) {
  let tag = level_tag(Color::Yellow, "warn");
  for line in message.lines() {
    emit(&format!("{tag} {line}"));
  }
}

/// Error level logging - something went wrong
pub fn error(message: &str) {
  let tag = level_tag(Color::Red, "error");
  for line in message.lines() {
    emit(&format!("{tag} {line}"));
  }
}

/// Debug level logging - detailed diagnostic information
pub fn debug(message: &str) {
  let tag = level_tag(Color::Magenta, "debug");
  for line in message.lines() {
    emit(&format!("{tag} {line}"));
  }
}

/// Success level logging - something completed successfully
pub fn success(message: &str) {
  let tag = level_tag(Color::Green, "done");
  for line in message.lines() {
    emit(&format!("{tag} {line}"));
  }
}

fn event(tag: ColoredString, message: &str) {
  let timestamp = Local::now().format("%H:%M:%S").to_string();
  let prefix = format!("[{}] [{}]", tag, timestamp.cyan());
  for line in message.lines() {
    emit(&format!("{prefix} {line}"));
  }
}

/// Timestamped info event
pub fn event_info(message: &str) {
  event("event".blue().bold(), message);
}

/// Timestamped warning event
pub fn event_warn(message: &str) {
  event("event".yellow().bold(), message);
}

/// Timestamped error event
pub fn event_error(message: &str) {
  event("event".red().bold(), message);
}

/// Timestamped success event
pub fn event_success(message: &str) {
  event("event".green().bold(), message);
}

/// Announcement - frame an important but non-critical message
pub fn announce(message: &str) {
  framed(|msg| emit(&msg.blue().bold().to_string()), message, 50, '-');
}

/// Flourish - celebrate successful completion
pub fn flourish(message: &str) {
  framed(|msg| emit(&msg.green().bold().to_string()), message, 45, '~');
}

#[macro_export]
macro_rules! verbose {
  ($msg:expr) => {
    $crate::verbose($msg);
  };
}

#[macro_export]
macro_rules! info {
  ($msg:expr) => {
    $crate::info($msg);
  };
}

#[macro_export]
macro_rules! warn {
  ($msg:expr) => {
    $crate::warn($msg);
  };
}

#[macro_export]
macro_rules! error {
  ($msg:expr) => {
    $crate::error($msg);
  };
}

#[macro_export]
macro_rules! debug {
  ($msg:expr) => {
    $crate::debug($msg);
  };
}

#[macro_export]
macro_rules! success {
  ($msg:expr) => {
    $crate::success($msg);
  };
}

#[macro_export]
macro_rules! event_info {
  ($msg:expr) => {
    $crate::event_info($msg);
  };
}

#[macro_export]
macro_rules! event_warn {
  ($msg:expr) => {
    $crate::event_warn($msg);
  };
}

#[macro_export]
macro_rules! event_error {
  ($msg:expr) => {
    $crate::event_error($msg);
  };
}

#[macro_export]
macro_rules! event_success {
  ($msg:expr) => {
    $crate::event_success($msg);
  };
}

#[macro_export]
macro_rules! announce {
  ($msg:expr) => {
    $crate::announce($msg);
  };
}

#[macro_export]
macro_rules! flourish {
  ($msg:expr) => {
    $crate::flourish($msg);
  };
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rule_repeats_character() {
    assert_eq!(rule(4, '='), "====");
    assert_eq!(rule(0, '*'), "");
  }

  #[test]
  fn framed_wraps_message_with_rules() {
    // Closure-captured output keeps the test off stderr
    let captured = std::cell::RefCell::new(Vec::new());
    framed(|line| captured.borrow_mut().push(line.to_string()), "hello", 5, '-');
    let lines = captured.into_inner();
    assert_eq!(lines, vec!["-----".to_string(), "hello".to_string(), "-----".to_string()]);
  }

  #[test]
  fn level_functions_do_not_panic_on_multiline_input() {
    info("first\nsecond");
    warn("first\nsecond");
    error("first\nsecond");
    debug("first\nsecond");
    success("first\nsecond");
    verbose("first\nsecond");
  }
}
