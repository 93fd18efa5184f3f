use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::errors::AppError;
use crate::models::job::Job;
use crate::store::JobSource;

const JOBS_ENDPOINT: &str = "/jobs";

/// Backend REST API serving `GET /jobs` as a JSON array.
#[derive(Clone)]
pub struct RemoteJobSource {
    client: Client,
    base_url: String,
}

impl RemoteJobSource {
    pub fn new(base_url: impl Into<String>, request_timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn jobs_url(&self) -> String {
        format!("{}{}", self.base_url, JOBS_ENDPOINT)
    }
}

#[async_trait]
impl JobSource for RemoteJobSource {
    async fn fetch_jobs(&self) -> Result<Vec<Job>, AppError> {
        let url = self.jobs_url();
        debug!("Fetching jobs from {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!(
                "GET {url} returned status {status}"
            )));
        }

        let jobs = response.json::<Vec<Job>>().await?;
        debug!("Fetched {} jobs from {url}", jobs.len());
        Ok(jobs)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Json, Router};
    use std::net::SocketAddr;

    async fn serve(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    #[test]
    fn test_jobs_url_strips_trailing_slash() {
        let source =
            RemoteJobSource::new("http://localhost:3001/api/", Duration::from_secs(1)).unwrap();
        assert_eq!(source.jobs_url(), "http://localhost:3001/api/jobs");
    }

    #[tokio::test]
    async fn test_fetches_jobs_from_backend() {
        let router = Router::new().route(
            "/jobs",
            get(|| async { Json(crate::store::fallback_jobs()) }),
        );
        let addr = serve(router).await;

        let source = RemoteJobSource::new(format!("http://{addr}"), Duration::from_secs(5)).unwrap();
        let jobs = source.fetch_jobs().await.unwrap();
        assert_eq!(jobs, crate::store::fallback_jobs());
    }

    #[tokio::test]
    async fn test_error_status_is_upstream_error() {
        let router = Router::new().route(
            "/jobs",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
        );
        let addr = serve(router).await;

        let source = RemoteJobSource::new(format!("http://{addr}"), Duration::from_secs(5)).unwrap();
        let err = source.fetch_jobs().await.unwrap_err();
        match err {
            AppError::Upstream(msg) => assert!(msg.contains("503"), "{msg}"),
            other => panic!("expected upstream error, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_refused_connection_is_upstream_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = RemoteJobSource::new(format!("http://{addr}"), Duration::from_secs(2)).unwrap();
        let err = source.fetch_jobs().await.unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)), "{err}");
    }
}
