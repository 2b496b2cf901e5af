use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pocketguide_http::{AppState, ServerConfig, create_router};
use pocketguide_service::{AdminService, RegionService};
use pocketguide_storage::Storage;

#[derive(Parser)]
#[command(name = "pocketguide")]
#[command(about = "Reference catalog API for regional bird pocket guides", long_about = None)]
struct Cli {
    /// Path to the SQLite catalog database
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        #[arg(short, long, default_value = "5000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Seed sample catalog data (no-op on a populated store)
    Seed,
    /// Print store statistics as JSON
    Stats,
    /// List species names, or print one species in full
    Species { name: Option<String> },
    /// Print available states and districts
    Locations,
}

fn default_db_path() -> PathBuf {
    if let Ok(path) = std::env::var("POCKETGUIDE_DB") {
        return PathBuf::from(path);
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pocketguide")
        .join("pocketguide.db")
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let db_path = cli.db.unwrap_or_else(default_db_path);

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let storage = Arc::new(Storage::new(&db_path)?);

    match cli.command {
        Commands::Serve { port, host } => {
            let state = Arc::new(AppState {
                region_service: Arc::new(RegionService::new(Arc::clone(&storage))),
                admin_service: Arc::new(AdminService::new(storage)),
                config: ServerConfig::from_env(),
            });
            let router = create_router(state);
            let addr = format!("{host}:{port}");
            tracing::info!("Starting HTTP server on {}", addr);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, router).await?;
        },
        Commands::Seed => {
            let report = storage.seed_sample_data()?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        },
        Commands::Stats => {
            let service = AdminService::new(storage);
            let stats = service.statistics()?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        },
        Commands::Species { name } => {
            let service = AdminService::new(storage);
            match name {
                Some(name) => {
                    let detail = service.species_detail(&name)?;
                    println!("{}", serde_json::to_string_pretty(&detail)?);
                },
                None => {
                    let records = service.list_species()?;
                    for record in records {
                        println!("{}", record.english_name);
                    }
                },
            }
        },
        Commands::Locations => {
            let service = RegionService::new(storage);
            let locations = service.locations()?;
            println!("{}", serde_json::to_string_pretty(&locations)?);
        },
    }

    Ok(())
}
