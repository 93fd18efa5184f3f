use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::profile::{AccountType, ProfileRecord};

const COMMON_FIELDS: &[&str] = &[
    "name",
    "email",
    "phone",
    "location",
    "bio",
    "profile_image_url",
];

const JOB_SEEKER_FIELDS: &[&str] = &[
    "skills",
    "experience_years",
    "education",
    "resume_link",
    "linkedin_url",
    "github_url",
    "portfolio_url",
    "availability",
    "preferred_job_type",
    "salary_expectation",
    "languages",
    "certifications",
    "work_experience",
    "projects",
];

const EMPLOYER_FIELDS: &[&str] = &["company_name", "company_website", "industry", "company_size"];

const FREELANCER_FIELDS: &[&str] = &[
    "skills",
    "experience_years",
    "education",
    "resume_link",
    "linkedin_url",
    "github_url",
    "portfolio_url",
    "hourly_rate",
    "availability_hours",
    "service_categories",
    "work_experience",
    "projects",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionReport {
    pub account_type: AccountType,
    /// 0 – 100
    pub score: u8,
    pub total_fields: usize,
    pub filled_fields: Vec<String>,
    pub missing_fields: Vec<String>,
}

fn role_fields(account_type: AccountType) -> &'static [&'static str] {
    match account_type {
        AccountType::JobSeeker => JOB_SEEKER_FIELDS,
        AccountType::Employer => EMPLOYER_FIELDS,
        AccountType::Freelancer => FREELANCER_FIELDS,
    }
}

/// Common fields followed by the role-specific ones. Never empty.
pub fn checklist(account_type: AccountType) -> impl Iterator<Item = &'static str> {
    COMMON_FIELDS
        .iter()
        .chain(role_fields(account_type))
        .copied()
}

/// Null, "" and [] are unfilled. Everything else, including 0 and false, counts.
fn is_filled(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(_) => true,
    }
}

pub fn score_completion(profile: &ProfileRecord, account_type: AccountType) -> u8 {
    completion_report(profile, account_type).score
}

pub fn completion_report(profile: &ProfileRecord, account_type: AccountType) -> CompletionReport {
    let (filled_fields, missing_fields): (Vec<_>, Vec<_>) =
        checklist(account_type).partition(|field| is_filled(profile.get(*field)));

    let total_fields = filled_fields.len() + missing_fields.len();
    let score = percentage(filled_fields.len(), total_fields);

    CompletionReport {
        account_type,
        score,
        total_fields,
        filled_fields: filled_fields.into_iter().map(String::from).collect(),
        missing_fields: missing_fields.into_iter().map(String::from).collect(),
    }
}

fn percentage(filled: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    // f64::round rounds half away from zero; 12.5 -> 13
    ((filled as f64 / total as f64) * 100.0).round().clamp(0.0, 100.0) as u8
}
