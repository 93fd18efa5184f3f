//! Deadline race between a job source and a caller-supplied fallback list.

use std::time::Duration;

use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;
use crate::models::job::Job;
use crate::store::JobSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchOrigin {
    Source,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct Fetched {
    pub jobs: Vec<Job>,
    pub origin: FetchOrigin,
}

/// Returns the source's jobs if they arrive before `deadline`, otherwise `fallback`.
/// Source errors also resolve to the fallback; the cause is logged, never surfaced.
pub async fn fetch_with_fallback(
    source: &dyn JobSource,
    deadline: Duration,
    fallback: Vec<Job>,
) -> Fetched {
    let outcome = match tokio::time::timeout(deadline, source.fetch_jobs()).await {
        Ok(result) => result,
        Err(_) => Err(AppError::Timeout(deadline.as_millis() as u64)),
    };

    match outcome {
        Ok(jobs) => Fetched {
            jobs,
            origin: FetchOrigin::Source,
        },
        Err(e) => {
            warn!(
                source = source.name(),
                fallback_jobs = fallback.len(),
                "Serving fallback jobs: {e}"
            );
            Fetched {
                jobs: fallback,
                origin: FetchOrigin::Fallback,
            }
        }
    }
}

/// Built-in catalogue served when no job source answers in time.
pub fn fallback_jobs() -> Vec<Job> {
    vec![
        fallback_job(
            "fallback-1",
            "Senior Software Engineer",
            "Tech Solutions Ltd",
            "Nairobi, Kenya",
            "Full-time",
            "150K-200K KES/month",
            88,
            &["JavaScript", "React", "Node.js", "Python", "AWS"],
            "Senior",
        ),
        fallback_job(
            "fallback-2",
            "Frontend Developer",
            "Digital Innovators",
            "Mombasa, Kenya",
            "Full-time",
            "100K-140K KES/month",
            92,
            &["React", "TypeScript", "CSS", "HTML", "Git"],
            "Mid Level",
        ),
        fallback_job(
            "fallback-3",
            "Data Analyst",
            "Analytics Pro",
            "Remote",
            "Contract",
            "80K-120K KES/month",
            75,
            &["SQL", "Python", "Excel", "Tableau", "Statistics"],
            "Mid Level",
        ),
        fallback_job(
            "fallback-4",
            "Full Stack Developer",
            "StartupXYZ",
            "Kisumu, Kenya",
            "Full-time",
            "70K-100K KES/month",
            81,
            &["JavaScript", "React", "Node.js", "MongoDB", "Express"],
            "Entry Level",
        ),
        fallback_job(
            "fallback-5",
            "UX Design Intern",
            "Creative Hub",
            "Hybrid - Nairobi",
            "Internship",
            "Stipend provided",
            64,
            &["Figma", "User Research"],
            "Entry Level",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn fallback_job(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    job_type: &str,
    salary: &str,
    match_score: u8,
    skills: &[&str],
    experience_level: &str,
) -> Job {
    Job {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        job_type: job_type.to_string(),
        salary: salary.to_string(),
        match_score,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        experience_level: Some(experience_level.to_string()),
        posted: None,
        description: None,
    }
}
