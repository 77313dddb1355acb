//! Atlas REST Server
//!
//! HTTP REST API server for the Atlas location-intelligence product.
//! Serves the dashboard statistics, directory lookups, and the
//! prediction stub over the remote table store.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use atlas::server::startup::start_server;
use atlas::store::StoreClient;

#[derive(Parser)]
#[command(name = "atlas_server")]
#[command(about = "Atlas REST API Server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
  /// Server bind address
  #[arg(long, default_value = "127.0.0.1:4600")]
  bind: SocketAddr,

  /// Enable verbose logging
  #[arg(short, long)]
  verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  // Keep hyper and tower noise down unless verbose was requested
  let filter = if args.verbose {
    EnvFilter::new("info,hyper=warn")
  } else {
    EnvFilter::new("atlas=info,tower_http=warn,warn")
  };

  tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

  quill::info!(&format!("Starting Atlas REST Server v{}", env!("CARGO_PKG_VERSION")));
  quill::info!(&format!("Binding to address: {}", args.bind));

  let store = StoreClient::from_env()?;
  quill::info!(&format!("Table store: {}", store.config().base_url));

  start_server(args.bind, store).await?;

  Ok(())
}
