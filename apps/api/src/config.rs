use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::search::GroupMode;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Backend REST API base URL. When unset, jobs come from the seed file or the fallback catalogue.
    pub jobs_api_url: Option<String>,
    pub jobs_seed_path: Option<PathBuf>,
    pub jobs_fetch_timeout: Duration,
    pub filter_group_mode: GroupMode,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            port: non_empty("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: non_empty("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            jobs_api_url: non_empty("JOBS_API_URL"),
            jobs_seed_path: non_empty("JOBS_SEED_PATH").map(PathBuf::from),
            jobs_fetch_timeout: Duration::from_millis(
                non_empty("JOBS_FETCH_TIMEOUT_MS")
                    .unwrap_or_else(|| "3000".to_string())
                    .parse::<u64>()
                    .context("JOBS_FETCH_TIMEOUT_MS must be a whole number of milliseconds")?,
            ),
            filter_group_mode: match non_empty("FILTER_GROUP_MODE") {
                Some(raw) => raw
                    .parse::<GroupMode>()
                    .map_err(|e| anyhow!("FILTER_GROUP_MODE: {e}"))?,
                None => GroupMode::default(),
            },
        })
    }
}
