//! Job search filtering and profile completion scoring, with a thin axum host.
//!
//! `search` and `profile` are pure and synchronous; they take plain slices and maps and
//! never fail. `store` supplies the job listings, `routes` exposes everything over HTTP.

pub mod config;
pub mod errors;
pub mod models;
pub mod profile;
pub mod routes;
pub mod search;
pub mod state;
pub mod store;
