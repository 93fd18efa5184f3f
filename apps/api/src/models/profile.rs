use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sparse profile as stored by the backend: field name to arbitrary JSON value.
pub type ProfileRecord = Map<String, Value>;

/// Role tag that selects the role-specific completion checklist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    #[default]
    JobSeeker,
    Employer,
    Freelancer,
}

impl AccountType {
    /// Parses a role tag. Unknown tags resolve to `JobSeeker`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "employer" => AccountType::Employer,
            "freelancer" => AccountType::Freelancer,
            _ => AccountType::JobSeeker,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::JobSeeker => "job_seeker",
            AccountType::Employer => "employer",
            AccountType::Freelancer => "freelancer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_serde_snake_case() {
        let parsed: AccountType = serde_json::from_str(r#""job_seeker""#).unwrap();
        assert_eq!(parsed, AccountType::JobSeeker);
        assert_eq!(
            serde_json::to_string(&AccountType::Freelancer).unwrap(),
            r#""freelancer""#
        );
    }

    #[test]
    fn test_unknown_tag_falls_back_to_job_seeker() {
        assert_eq!(AccountType::from_tag("admin"), AccountType::JobSeeker);
        assert_eq!(AccountType::from_tag(""), AccountType::JobSeeker);
        assert_eq!(AccountType::from_tag("employer"), AccountType::Employer);
    }

    #[test]
    fn test_as_str_round_trips_through_from_tag() {
        for account in [
            AccountType::JobSeeker,
            AccountType::Employer,
            AccountType::Freelancer,
        ] {
            assert_eq!(AccountType::from_tag(account.as_str()), account);
        }
    }
}
