use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobs_api::config::Config;
use jobs_api::routes::build_router;
use jobs_api::state::AppState;
use jobs_api::store::{fallback_jobs, InMemoryJobSource, JobSource, RemoteJobSource};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jobs API v{}", env!("CARGO_PKG_VERSION"));

    let jobs = build_job_source(&config)?;
    info!(
        "Job source: {} (fetch deadline {} ms, filter group mode {})",
        jobs.name(),
        config.jobs_fetch_timeout.as_millis(),
        config.filter_group_mode
    );

    let state = AppState {
        config: config.clone(),
        jobs,
        fallback_jobs: Arc::new(fallback_jobs()),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Remote backend when `JOBS_API_URL` is set, else the seed file, else the fallback catalogue.
fn build_job_source(config: &Config) -> Result<Arc<dyn JobSource>> {
    if let Some(url) = &config.jobs_api_url {
        return Ok(Arc::new(RemoteJobSource::new(
            url.clone(),
            config.jobs_fetch_timeout,
        )?));
    }
    if let Some(path) = &config.jobs_seed_path {
        return Ok(Arc::new(InMemoryJobSource::from_json_file(path)?));
    }
    Ok(Arc::new(InMemoryJobSource::new(fallback_jobs())))
}
