//! Filter engine: narrows a job list to the listings that satisfy every active criterion.
//!
//! Pure and total. Malformed salary text degrades to 0, a missing experience level fails
//! any active experience flag, and an empty input yields an empty output. The result is a
//! stable sub-sequence of the input.
//!
//! Flag groups combine per [`GroupMode`]. The default, `AllOf`, treats every active flag
//! as its own AND condition, so `remote + hybrid` only admits a location mentioning both.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::job::Job;
use crate::search::criteria::{FilterCriteria, JobTypeFlags, HIGH_MATCH_THRESHOLD};
use crate::search::salary::SalaryBounds;

/// How active flags inside one checkbox group combine. Groups always AND with each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupMode {
    /// Every active flag must hold.
    #[default]
    AllOf,
    /// At least one active flag must hold.
    AnyOf,
}

impl FromStr for GroupMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all_of" | "all" => Ok(GroupMode::AllOf),
            "any_of" | "any" => Ok(GroupMode::AnyOf),
            other => Err(format!("unknown filter group mode '{other}'")),
        }
    }
}

impl fmt::Display for GroupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupMode::AllOf => f.write_str("all_of"),
            GroupMode::AnyOf => f.write_str("any_of"),
        }
    }
}

/// Filters with the default per-flag AND semantics.
pub fn filter_jobs(jobs: &[Job], criteria: &FilterCriteria) -> Vec<Job> {
    filter_jobs_with(jobs, criteria, GroupMode::AllOf)
}

pub fn filter_jobs_with(jobs: &[Job], criteria: &FilterCriteria, mode: GroupMode) -> Vec<Job> {
    let matcher = JobMatcher::new(criteria, mode);
    jobs.iter().filter(|job| matcher.matches(job)).cloned().collect()
}

/// Criteria with the search term and skill names lower-cased once per query.
struct JobMatcher<'a> {
    criteria: &'a FilterCriteria,
    mode: GroupMode,
    term: Option<String>,
    skills: Vec<String>,
}

impl<'a> JobMatcher<'a> {
    fn new(criteria: &'a FilterCriteria, mode: GroupMode) -> Self {
        Self {
            criteria,
            mode,
            term: criteria.normalized_search_term(),
            skills: criteria.selected_skills().map(str::to_lowercase).collect(),
        }
    }

    fn matches(&self, job: &Job) -> bool {
        let location = job.location.to_lowercase();
        let job_type = job.job_type.to_lowercase();

        self.matches_search(job)
            && self.matches_location(&location)
            && self.matches_job_type(&self.criteria.quick_job_type, &job_type)
            && self.matches_work_style(&location)
            && self.matches_job_type(&self.criteria.job_type, &job_type)
            && self.matches_experience(job)
            && self.matches_high_match(job)
            && self.matches_salary(job)
            && self.matches_skills(job)
    }

    fn matches_search(&self, job: &Job) -> bool {
        let Some(term) = &self.term else {
            return true;
        };
        job.title.to_lowercase().contains(term)
            || job.company.to_lowercase().contains(term)
            || job.skills.iter().any(|s| s.to_lowercase().contains(term))
    }

    fn matches_location(&self, location: &str) -> bool {
        let flags = &self.criteria.location;
        let mut checks = vec![
            (flags.remote, is_remote(location)),
            (flags.onsite, is_in_person(location)),
            (flags.hybrid, is_hybrid(location)),
        ];
        checks.extend(
            flags
                .city_checks()
                .into_iter()
                .map(|(on, city)| (on, location.contains(city))),
        );
        group_passes(self.mode, checks)
    }

    fn matches_work_style(&self, location: &str) -> bool {
        let flags = &self.criteria.work_style;
        group_passes(
            self.mode,
            [
                (flags.remote, is_remote(location)),
                (flags.hybrid, is_hybrid(location)),
                (flags.in_person, is_in_person(location)),
            ],
        )
    }

    fn matches_job_type(&self, flags: &JobTypeFlags, job_type: &str) -> bool {
        group_passes(
            self.mode,
            flags
                .checks()
                .into_iter()
                .map(|(on, needle)| (on, job_type.contains(needle))),
        )
    }

    fn matches_experience(&self, job: &Job) -> bool {
        let level = job.experience_level.as_deref();
        group_passes(
            self.mode,
            self.criteria
                .experience_level
                .checks()
                .into_iter()
                .map(|(on, label)| (on, level == Some(label))),
        )
    }

    fn matches_high_match(&self, job: &Job) -> bool {
        !self.criteria.high_match_only || job.match_score >= HIGH_MATCH_THRESHOLD
    }

    fn matches_salary(&self, job: &Job) -> bool {
        let range = self.criteria.salary_range;
        range.is_all() || range.admits(SalaryBounds::parse(&job.salary))
    }

    fn matches_skills(&self, job: &Job) -> bool {
        group_passes(
            self.mode,
            self.skills.iter().map(|wanted| {
                let present = job.skills.iter().any(|s| s.to_lowercase() == *wanted);
                (true, present)
            }),
        )
    }
}

fn is_remote(location: &str) -> bool {
    location.contains("remote")
}

fn is_hybrid(location: &str) -> bool {
    location.contains("hybrid")
}

fn is_in_person(location: &str) -> bool {
    !is_remote(location) && !is_hybrid(location)
}

/// Combines (active, satisfied) pairs for one group. A group with no active flag passes.
fn group_passes(mode: GroupMode, checks: impl IntoIterator<Item = (bool, bool)>) -> bool {
    let mut any_active = false;
    for (active, satisfied) in checks {
        if !active {
            continue;
        }
        any_active = true;
        match mode {
            GroupMode::AllOf if !satisfied => return false,
            GroupMode::AnyOf if satisfied => return true,
            _ => {}
        }
    }
    match mode {
        GroupMode::AllOf => true,
        GroupMode::AnyOf => !any_active,
    }
}
