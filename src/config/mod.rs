mod file_config;

pub use file_config::FileConfig;

use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// Search URL, substituting the percent-encoded term for `%s`.
pub const DEFAULT_SEARCH_URL: &str =
    "https://itunes.apple.com/search?entity=musicArtist&limit=5&term=%s";

/// Lookup URL, substituting the artist id for `%s`.
pub const DEFAULT_LOOKUP_URL: &str = "https://itunes.apple.com/lookup?id=%s&entity=album";

/// Default timeout for each upstream request.
pub const DEFAULT_UPSTREAM_TIMEOUT_SEC: u64 = 10;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub search_url: String,
    pub lookup_url: String,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub upstream_timeout_sec: u64,
    pub library_db_path: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            lookup_url: DEFAULT_LOOKUP_URL.to_string(),
            port: 3001,
            logging_level: RequestsLoggingLevel::default(),
            upstream_timeout_sec: DEFAULT_UPSTREAM_TIMEOUT_SEC,
            library_db_path: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub search_url: String,
    pub lookup_url: String,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub upstream_timeout_sec: u64,
    pub library_db_path: Option<PathBuf>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let search_url = file.search_url.unwrap_or_else(|| cli.search_url.clone());
        let lookup_url = file.lookup_url.unwrap_or_else(|| cli.lookup_url.clone());

        // Both URLs are templates; a missing placeholder would proxy every
        // request to the same upstream resource.
        if !search_url.contains("%s") {
            bail!("search_url must contain a %s placeholder: {}", search_url);
        }
        if !lookup_url.contains("%s") {
            bail!("lookup_url must contain a %s placeholder: {}", lookup_url);
        }

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let upstream_timeout_sec = file
            .upstream_timeout_sec
            .unwrap_or(cli.upstream_timeout_sec);
        if upstream_timeout_sec == 0 {
            bail!("upstream_timeout_sec must be greater than zero");
        }

        let library_db_path = file
            .library_db_path
            .map(PathBuf::from)
            .or_else(|| cli.library_db_path.clone());

        if let Some(path) = &library_db_path {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.is_dir() {
                    bail!("Library database directory does not exist: {:?}", parent);
                }
            }
        }

        Ok(Self {
            search_url,
            lookup_url,
            port,
            logging_level,
            upstream_timeout_sec,
            library_db_path,
        })
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
