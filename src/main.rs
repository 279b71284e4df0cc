//! In-memory food plate backend (`food-api`).
//!
//! ```text
//!  food-dashboard ──HTTP──▶ ┌──────────────────────────────┐
//!                           │  food-api                    │
//!                           │  axum router  ──▶  FoodStore │
//!                           │  (/foods, /foods/{id})       │
//!                           └──────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;
use tokio::net::TcpListener;

use food_dashboard::config::{apply_overrides, load_or_default, ConfigOverrides};
use food_dashboard::lifecycle::{wait_for_signal, Shutdown};
use food_dashboard::observability::logging::init_logging;
use food_dashboard::store::FoodStore;
use food_dashboard::HttpServer;

#[derive(Parser)]
#[command(name = "food-api")]
#[command(about = "In-memory REST backend for food plates", long_about = None)]
struct Args {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `server.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override `server.seed_path`.
    #[arg(short, long)]
    seed: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = apply_overrides(
        load_or_default(args.config.as_deref())?,
        ConfigOverrides {
            bind_address: args.bind,
            seed_path: args.seed,
            ..ConfigOverrides::default()
        },
    )?;

    init_logging(&config.observability);
    tracing::info!("food-api v{} starting", env!("CARGO_PKG_VERSION"));

    let store = match &config.server.seed_path {
        Some(path) => FoodStore::load_from_file(Path::new(path))?,
        None => FoodStore::new(),
    };

    let listener = TcpListener::bind(&config.server.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(wait_for_signal(shutdown));

    let server = HttpServer::new(&config.server, store);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
