// Job search: filter criteria, the filter engine, and result ordering.
// Everything except `handlers` is pure and synchronous; handlers only fetch and delegate.

pub mod criteria;
pub mod filter;
pub mod handlers;
pub mod ranking;
pub mod salary;

pub use criteria::{count_active_filters, FilterCriteria};
pub use filter::{filter_jobs, filter_jobs_with, GroupMode};
pub use ranking::{rank_jobs, SortOrder};
