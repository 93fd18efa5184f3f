pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::profile::handlers as profile_handlers;
use crate::search::handlers as search_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job search API
        .route("/api/v1/jobs", get(search_handlers::handle_list_jobs))
        .route("/api/v1/jobs/:id", get(search_handlers::handle_get_job))
        .route(
            "/api/v1/jobs/search",
            post(search_handlers::handle_search_jobs),
        )
        .route(
            "/api/v1/jobs/filters/count",
            post(search_handlers::handle_count_filters),
        )
        // Profile API
        .route(
            "/api/v1/profiles/completion",
            post(profile_handlers::handle_profile_completion),
        )
        .with_state(state)
}
