//! Job sources: where the search page gets its listings from.
//!
//! The filter engine never reaches into a store; handlers fetch through a
//! `JobSource`, then pass plain slices into `search`. `AppState` carries an
//! `Arc<dyn JobSource>` chosen at startup from config.

pub mod fallback;
pub mod memory;
pub mod remote;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::job::Job;

pub use fallback::{fallback_jobs, fetch_with_fallback, Fetched, FetchOrigin};
pub use memory::InMemoryJobSource;
pub use remote::RemoteJobSource;

#[async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch_jobs(&self) -> Result<Vec<Job>, AppError>;

    /// Short label for logs and responses.
    fn name(&self) -> &'static str;
}
