//! Command implementations for the Atlas CLI
//!
//! The CLI is a pure thin client: every command talks to the REST
//! server, which owns the store client and the pipeline.

use anyhow::Result;
use colored::*;

use crate::cli::client::get_client;
use crate::cli::display;
use crate::cli::server_manager::ensure_server_running;
use crate::predict::PredictionRequest;

/// Render the insights dashboard statistics
pub async fn stats(category: Option<&str>, min_reviews: u64) -> Result<()> {
  ensure_server_running().await?;

  let client = get_client();
  let response = client.stats(category, min_reviews).await?;
  let stats = &response.stats;

  println!("{}", "Insights & Analytics".bold());
  println!();

  display::stat_line("Total POIs", &display::format_count(stats.total_pois as u64));
  display::stat_line("Categories", &display::format_count(stats.total_categories as u64));
  display::stat_line("Total reviews", &display::format_count(stats.total_reviews));
  display::stat_line("Average reviews", &display::format_count(stats.average_reviews));
  display::stat_line(
    "Most reviewed",
    &stats
      .most_reviewed
      .as_ref()
      .map(|poi| format!("{} ({} reviews)", poi.title, display::format_count(poi.reviews)))
      .unwrap_or_else(display::dash),
  );
  display::stat_line(
    "Least reviewed",
    &stats
      .least_reviewed
      .as_ref()
      .map(|poi| format!("{} ({} reviews)", poi.title, display::format_count(poi.reviews)))
      .unwrap_or_else(display::dash),
  );
  display::stat_line(
    "Top category",
    stats.most_common_category.as_deref().unwrap_or("-"),
  );
  display::stat_line("Postal codes", &display::format_count(stats.unique_postal_codes as u64));
  display::stat_line("Data sources", &display::format_count(stats.unique_sources as u64));

  println!();
  display::stat_line("Matching filter", &display::format_count(response.filtered_count as u64));

  if !response.complete {
    println!();
    quill::warn!(&format!(
      "partial data: the store stopped responding after {} page(s)",
      response.pages_fetched
    ));
  }

  Ok(())
}

/// List POIs passing the filter
pub async fn pois(category: Option<&str>, min_reviews: u64, limit: Option<usize>) -> Result<()> {
  ensure_server_running().await?;

  let client = get_client();
  let response = client.pois(category, min_reviews, limit).await?;

  if response.pois.is_empty() {
    println!("No POIs match the filter.");
    return Ok(());
  }

  for poi in &response.pois {
    println!("{}", display::poi_line(poi));
  }

  println!();
  println!("{} matching POIs", display::format_count(response.count as u64).bold());

  if !response.complete {
    quill::warn!("partial data: some pages could not be fetched");
  }

  Ok(())
}

/// List the distinct categories
pub async fn categories() -> Result<()> {
  ensure_server_running().await?;

  let client = get_client();
  let response = client.categories().await?;

  if response.categories.is_empty() {
    println!("No categories found.");
    return Ok(());
  }

  println!("{} Available categories:", "▸".cyan());
  for category in response.categories {
    println!("  {}", category.blue());
  }

  Ok(())
}

/// Show the map layer catalog
pub async fn layers() -> Result<()> {
  ensure_server_running().await?;

  let client = get_client();
  let response = client.layers().await?;

  for layer in response.layers {
    println!("{} {}", layer.label.bold(), format!("({})", layer.key).dimmed());
    println!("  {}", layer.explanation);
    println!();
  }

  Ok(())
}

/// Show the business-type taxonomy and map extent
pub async fn catalog() -> Result<()> {
  ensure_server_running().await?;

  let client = get_client();
  let response = client.catalog().await?;

  println!("{} Business types:", "▸".cyan());
  for entry in response.types {
    println!("  {:<16} {} {}", entry.label.bold(), entry.key.dimmed(), entry.color);
  }

  println!();
  println!(
    "Map center: {:.4}, {:.4}",
    response.center.latitude, response.center.longitude
  );

  Ok(())
}

/// List malls from the directory
pub async fn malls() -> Result<()> {
  ensure_server_running().await?;

  let client = get_client();
  let response = client.malls().await?;

  for venue in &response.venues {
    println!("{}", display::venue_line(venue));
  }
  println!();
  println!("{} malls", display::format_count(response.count as u64).bold());

  Ok(())
}

/// List banks from the directory
pub async fn banks() -> Result<()> {
  ensure_server_running().await?;

  let client = get_client();
  let response = client.banks().await?;

  for venue in &response.venues {
    println!("{}", display::venue_line(venue));
  }
  println!();
  println!("{} banks", display::format_count(response.count as u64).bold());

  Ok(())
}

/// Look up addresses for a business name
pub async fn locations(business_name: &str) -> Result<()> {
  ensure_server_running().await?;

  let client = get_client();
  let response = client.locations(business_name).await?;

  if response.locations.is_empty() {
    println!("No locations found for: {}", business_name.yellow());
    return Ok(());
  }

  for record in &response.locations {
    println!("{}", display::address_line(record));
  }

  Ok(())
}

/// Search the directory tables
pub async fn search(terms: &[String]) -> Result<()> {
  ensure_server_running().await?;

  let query = terms.join(" ");
  let client = get_client();
  let response = client.search(&query).await?;

  if response.results.is_empty() {
    println!("No matches found for: {}", query.yellow());
    return Ok(());
  }

  for hit in &response.results {
    println!("{}", display::search_hit_line(hit));
  }

  println!();
  println!("{} matches", display::format_count(response.total as u64).bold());

  Ok(())
}

/// Score a location for a business category
pub async fn predict(latitude: f64, longitude: f64, category: &str) -> Result<()> {
  ensure_server_running().await?;

  let client = get_client();
  let request =
    PredictionRequest { latitude, longitude, category: category.to_string() };
  let prediction = client.predict(&request).await?;

  println!(
    "{} Suitability score for {} at ({:.4}, {:.4}):",
    "▸".cyan(),
    category.bold(),
    latitude,
    longitude
  );
  println!();
  println!("  {}", format!("{:.2} / 5.0", prediction.prediction).green().bold());
  println!();

  println!("{}", "Contributing features:".bold());
  for (name, value) in &prediction.features {
    println!("  {:<28} {value:>12.3}", name);
  }
  println!();
  println!("{}", prediction.message.dimmed());

  Ok(())
}

/// Query server logs for debugging and monitoring
pub async fn logs(_limit: usize, _level: &str) -> Result<()> {
  ensure_server_running().await?;

  let client = get_client();

  // TODO: Plumb limit and level through the REST API query string
  let response = client.logs().await?;

  if response.logs.is_empty() {
    println!("No logs found.");
    return Ok(());
  }

  for entry in &response.logs {
    display::print_log_entry(entry);
  }

  Ok(())
}
