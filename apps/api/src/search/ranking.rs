use serde::{Deserialize, Serialize};

use crate::models::job::Job;

/// Result ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Keep the order the source listed the jobs in.
    #[default]
    Listed,
    /// Highest match score first; ties keep listed order.
    MatchScore,
}

pub fn rank_jobs(mut jobs: Vec<Job>, order: SortOrder) -> Vec<Job> {
    match order {
        SortOrder::Listed => {}
        // sort_by is stable
        SortOrder::MatchScore => jobs.sort_by(|a, b| b.match_score.cmp(&a.match_score)),
    }
    jobs
}
