use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
use config::{AppConfig, CliConfig, FileConfig};

mod itunes;
use itunes::ItunesClient;

mod library_store;
use library_store::{LibraryStore, SqliteLibraryStore};

mod query;
use query::QueryService;

mod server;
use server::{run_server, RequestsLoggingLevel};

mod sqlite_persistence;

#[derive(Parser, Debug)]
struct CliArgs {
    /// Search URL template; %s is replaced with the search term.
    #[clap(long, default_value = config::DEFAULT_SEARCH_URL)]
    pub search_url: String,

    /// Album lookup URL template; %s is replaced with the artist id.
    #[clap(long, default_value = config::DEFAULT_LOOKUP_URL)]
    pub lookup_url: String,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Timeout in seconds for upstream catalog requests.
    #[clap(long, default_value_t = config::DEFAULT_UPSTREAM_TIMEOUT_SEC)]
    pub upstream_timeout_sec: u64,

    /// Path to the SQLite library database file. Fetched artists and albums
    /// are persisted there when set.
    #[clap(long)]
    pub library_db: Option<PathBuf>,

    /// Path to an optional TOML config file; its values override CLI arguments.
    #[clap(long)]
    pub config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };

    let cli_config = CliConfig {
        search_url: cli_args.search_url,
        lookup_url: cli_args.lookup_url,
        port: cli_args.port,
        logging_level: cli_args.logging_level,
        upstream_timeout_sec: cli_args.upstream_timeout_sec,
        library_db_path: cli_args.library_db,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    let library_store: Option<Arc<dyn LibraryStore>> = match &config.library_db_path {
        Some(path) => {
            info!("Opening SQLite library database at {:?}...", path);
            Some(Arc::new(SqliteLibraryStore::new(path)?))
        }
        None => {
            info!("No library database configured, fetched results will not be persisted");
            None
        }
    };

    let client = Arc::new(
        ItunesClient::new(
            config.search_url.clone(),
            config.lookup_url.clone(),
            config.upstream_timeout_sec,
        )
        .context("Failed to create upstream catalog client")?,
    );

    let query_service = Arc::new(QueryService::new(client, library_store.clone()));

    info!("Ready to serve at port {}!", config.port);
    run_server(
        query_service,
        library_store,
        config.logging_level,
        config.port,
    )
    .await
}
