use std::sync::Arc;

use crate::config::Config;
use crate::models::job::Job;
use crate::store::JobSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable job source. Remote backend, seed file, or the fallback catalogue.
    pub jobs: Arc<dyn JobSource>,
    /// Served when `jobs` misses the fetch deadline or errors.
    pub fallback_jobs: Arc<Vec<Job>>,
}
