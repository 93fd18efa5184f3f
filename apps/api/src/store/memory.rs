use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::models::job::Job;
use crate::store::JobSource;

/// Fixed job list held in memory. Used for seeded local runs and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJobSource {
    jobs: Vec<Job>,
}

impl InMemoryJobSource {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    /// Loads a JSON array of jobs from disk.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job seed file: {}", path.display()))?;
        let jobs: Vec<Job> = serde_json::from_str(&raw)
            .with_context(|| format!("Job seed file is not a JSON array of jobs: {}", path.display()))?;
        info!("Loaded {} jobs from {}", jobs.len(), path.display());
        Ok(Self::new(jobs))
    }
}

#[async_trait]
impl JobSource for InMemoryJobSource {
    async fn fetch_jobs(&self) -> Result<Vec<Job>, AppError> {
        Ok(self.jobs.clone())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
