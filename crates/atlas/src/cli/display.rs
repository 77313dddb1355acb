//! Display formatting utilities for CLI output

use colored::*;

use crate::model::{AddressRecord, Poi, SearchHit, Venue};
use crate::server::types::LogEntry;

/// Format an integer with thousands separators
pub fn format_count(value: u64) -> String {
  let digits = value.to_string();
  let mut out = String::new();
  for (idx, ch) in digits.chars().enumerate() {
    if idx > 0 && (digits.len() - idx) % 3 == 0 {
      out.push(',');
    }
    out.push(ch);
  }
  out
}

/// Placeholder for absent values
pub fn dash() -> String {
  "-".to_string()
}

/// Print one labeled statistic line
pub fn stat_line(label: &str, value: &str) {
  println!("  {:<24} {}", format!("{label}:").bold(), value);
}

/// One-line POI summary
pub fn poi_line(poi: &Poi) -> String {
  let title = if poi.title.is_empty() { dash() } else { poi.title.clone() };
  let category = if poi.category.is_empty() { dash() } else { poi.category.clone() };
  format!(
    "{} {} {} ({} reviews)",
    "•".cyan(),
    title.bold(),
    format!("[{category}]").blue(),
    format_count(poi.reviews).yellow()
  )
}

/// One-line venue summary
pub fn venue_line(venue: &Venue) -> String {
  let address = if venue.address.is_empty() { dash() } else { venue.address.clone() };
  format!("{} {} {}", "•".cyan(), venue.title.bold(), address.dimmed())
}

/// One-line search hit summary
pub fn search_hit_line(hit: &SearchHit) -> String {
  format!("{} {} {}", format!("[{}]", hit.kind).magenta(), hit.venue.title.bold(), hit.venue.address.dimmed())
}

/// One-line address record summary
pub fn address_line(record: &AddressRecord) -> String {
  let address = if record.address.is_empty() { dash() } else { record.address.clone() };
  format!("{} {} {}", "•".cyan(), record.title.bold(), address.dimmed())
}

/// Render one log entry, with its context parts indented beneath it
pub fn print_log_entry(entry: &LogEntry) {
  let level_colored = match entry.level.as_str() {
    "error" => entry.level.red().bold(),
    "warn" => entry.level.yellow().bold(),
    "info" => entry.level.blue().bold(),
    "debug" => entry.level.green(),
    "success" => entry.level.bright_green().bold(),
    _ => entry.level.normal(),
  };

  println!("{} [{}] {}", entry.timestamp.to_string().cyan(), level_colored, entry.message);

  let Some(context) = &entry.context else {
    return;
  };

  let mut context_parts = Vec::new();

  if let Some(request_id) = &context.request_id {
    context_parts.push(format!("request_id: {}", request_id.bright_blue()));
  }

  if let Some(method) = &context.method {
    context_parts.push(format!("method: {}", method.magenta().bold()));
  }

  if let Some(path) = &context.path {
    context_parts.push(format!("path: {}", path.cyan()));
  }

  if let Some(user_agent) = &context.user_agent {
    context_parts.push(format!("user_agent: {}", user_agent.white().dimmed()));
  }

  if let Some(status_code) = context.status_code {
    let status_color = match status_code {
      200..=299 => status_code.to_string().green(),
      300..=399 => status_code.to_string().yellow(),
      400..=499 => status_code.to_string().red(),
      500..=599 => status_code.to_string().bright_red().bold(),
      _ => status_code.to_string().white(),
    };
    context_parts.push(format!("status: {status_color}"));
  }

  if let Some(duration) = context.duration_ms {
    let duration_color = if duration < 1.0 {
      format!("{duration:.2}ms").bright_green()
    } else if duration < 10.0 {
      format!("{duration:.2}ms").green()
    } else if duration < 100.0 {
      format!("{duration:.2}ms").yellow()
    } else {
      format!("{duration:.2}ms").red()
    };
    context_parts.push(format!("duration: {duration_color}"));
  }

  if !context_parts.is_empty() {
    for part in context_parts {
      println!("  {} {}", "└─".white().dimmed(), part);
    }
    println!();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn format_count_groups_thousands() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
    assert_eq!(format_count(1000), "1,000");
    assert_eq!(format_count(1234567), "1,234,567");
  }

  #[test]
  fn poi_line_substitutes_dashes_for_empty_fields() {
    let poi = Poi {
      latitude: 0.0,
      longitude: 0.0,
      title: String::new(),
      category: String::new(),
      reviews: 3,
      address: String::new(),
      postal_code: String::new(),
      source: String::new(),
      total_score: 0.0,
      ratings: Default::default(),
    };
    let line = poi_line(&poi);
    assert!(line.contains('-'));
  }
}
