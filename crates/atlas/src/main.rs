use anyhow::Result;
use atlas::cli::commands;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "atlas")]
#[command(
  about = "Atlas - Business Location Intelligence\nDashboard statistics and directory lookups over the Atlas dataset"
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

/// Common dashboard filter arguments
#[derive(Args)]
struct FilterArgs {
  /// Restrict to one category (exact match)
  #[arg(short, long)]
  category: Option<String>,
  /// Minimum review count, inclusive
  #[arg(short, long, default_value_t = 0)]
  min_reviews: u64,
}

#[derive(Subcommand)]
enum Command {
  /// Show the insights dashboard statistics
  Stats {
    #[command(flatten)]
    filter: FilterArgs,
  },
  /// List POIs passing the filter
  Pois {
    #[command(flatten)]
    filter: FilterArgs,
    /// Maximum number of POIs to list
    #[arg(short, long)]
    limit: Option<usize>,
  },
  /// List the distinct POI categories
  Categories,
  /// Show the map layer catalog
  Layers,
  /// Show the business-type taxonomy and map extent
  Catalog,
  /// List malls from the directory
  Malls,
  /// List banks from the directory
  Banks,
  /// Look up addresses for a business name
  Locations {
    /// Business name to look up
    business_name: String,
  },
  /// Search salons, hospitals, and banks by title
  Search {
    /// Search terms (space-separated)
    #[arg(required = true)]
    terms: Vec<String>,
  },
  /// Score a location for a business category
  Predict {
    /// Latitude of the candidate location
    #[arg(long)]
    latitude: f64,
    /// Longitude of the candidate location
    #[arg(long)]
    longitude: f64,
    /// Business category to score
    #[arg(long)]
    category: String,
  },
  /// Query server logs for debugging and monitoring
  Logs {
    /// Maximum number of log entries to return
    #[arg(short, long, default_value = "50")]
    limit: usize,
    /// Filter by log level (info, warn, error, all)
    #[arg(long, default_value = "all")]
    level: String,
  },
}

async fn handle(command: Command) -> Result<()> {
  match command {
    Command::Stats { filter } => {
      commands::stats(filter.category.as_deref(), filter.min_reviews).await
    }
    Command::Pois { filter, limit } => {
      commands::pois(filter.category.as_deref(), filter.min_reviews, limit).await
    }
    Command::Categories => commands::categories().await,
    Command::Layers => commands::layers().await,
    Command::Catalog => commands::catalog().await,
    Command::Malls => commands::malls().await,
    Command::Banks => commands::banks().await,
    Command::Locations { business_name } => commands::locations(&business_name).await,
    Command::Search { terms } => commands::search(&terms).await,
    Command::Predict { latitude, longitude, category } => {
      commands::predict(latitude, longitude, &category).await
    }
    Command::Logs { limit, level } => commands::logs(limit, &level).await,
  }
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  handle(cli.command).await?;
  Ok(())
}
