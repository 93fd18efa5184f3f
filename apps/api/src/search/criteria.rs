//! Filter criteria: the complete state of the job search panel.
//!
//! Every field defaults, so callers can send only the groups they touch.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::search::salary::SalaryRange;

/// Matches at or above this score pass the "high match only" toggle.
pub const HIGH_MATCH_THRESHOLD: u8 = 80;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkStyleFlags {
    pub remote: bool,
    pub hybrid: bool,
    pub in_person: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobTypeFlags {
    pub full_time: bool,
    pub contract: bool,
    pub part_time: bool,
    pub internship: bool,
    pub freelance: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceFlags {
    pub entry_level: bool,
    pub mid_level: bool,
    pub senior: bool,
    pub executive: bool,
}

/// Location chips from the search bar. `onsite` is the same test as `in_person`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationFlags {
    pub remote: bool,
    pub onsite: bool,
    pub hybrid: bool,
    pub nairobi: bool,
    pub mombasa: bool,
    pub kisumu: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub search_term: String,
    pub work_style: WorkStyleFlags,
    pub job_type: JobTypeFlags,
    pub experience_level: ExperienceFlags,
    pub high_match_only: bool,
    pub salary_range: SalaryRange,
    /// Skill name to selected. Names compare case-insensitively against job skills.
    pub skills: BTreeMap<String, bool>,
    pub location: LocationFlags,
    /// Job type chips from the search bar, ANDed with `job_type`.
    pub quick_job_type: JobTypeFlags,
}

impl WorkStyleFlags {
    fn active_count(&self) -> usize {
        count_true(&[self.remote, self.hybrid, self.in_person])
    }
}

impl JobTypeFlags {
    /// (selected, substring of the lower-cased job type) pairs.
    pub fn checks(&self) -> [(bool, &'static str); 5] {
        [
            (self.full_time, "full-time"),
            (self.contract, "contract"),
            (self.part_time, "part-time"),
            (self.internship, "internship"),
            (self.freelance, "freelance"),
        ]
    }

    fn active_count(&self) -> usize {
        self.checks().iter().filter(|(on, _)| *on).count()
    }
}

impl ExperienceFlags {
    /// (selected, exact experience level label) pairs.
    pub fn checks(&self) -> [(bool, &'static str); 4] {
        [
            (self.entry_level, "Entry Level"),
            (self.mid_level, "Mid Level"),
            (self.senior, "Senior"),
            (self.executive, "Executive"),
        ]
    }

    fn active_count(&self) -> usize {
        self.checks().iter().filter(|(on, _)| *on).count()
    }
}

impl LocationFlags {
    /// City chips as (selected, lower-cased city) pairs.
    pub fn city_checks(&self) -> [(bool, &'static str); 3] {
        [
            (self.nairobi, "nairobi"),
            (self.mombasa, "mombasa"),
            (self.kisumu, "kisumu"),
        ]
    }

    fn active_count(&self) -> usize {
        count_true(&[self.remote, self.onsite, self.hybrid])
            + self.city_checks().iter().filter(|(on, _)| *on).count()
    }
}

impl FilterCriteria {
    /// Clears every group back to "show everything".
    pub fn reset(&mut self) {
        *self = FilterCriteria::default();
    }

    /// Selected skill names, in key order.
    pub fn selected_skills(&self) -> impl Iterator<Item = &str> {
        self.skills
            .iter()
            .filter(|(_, on)| **on)
            .map(|(name, _)| name.as_str())
    }

    /// Lower-cased search term, or `None` when the box is empty. Whitespace is kept.
    pub fn normalized_search_term(&self) -> Option<String> {
        if self.search_term.is_empty() {
            None
        } else {
            Some(self.search_term.to_lowercase())
        }
    }
}

/// Badge count for the filter panel. Each group is counted once; the search term is not a filter.
pub fn count_active_filters(criteria: &FilterCriteria) -> usize {
    criteria.work_style.active_count()
        + criteria.job_type.active_count()
        + criteria.experience_level.active_count()
        + usize::from(criteria.high_match_only)
        + usize::from(!criteria.salary_range.is_all())
        + criteria.selected_skills().count()
        + criteria.location.active_count()
        + criteria.quick_job_type.active_count()
}

fn count_true(flags: &[bool]) -> usize {
    flags.iter().filter(|on| **on).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_criteria_has_no_active_filters() {
        assert_eq!(count_active_filters(&FilterCriteria::default()), 0);
    }

    #[test]
    fn test_search_term_is_not_counted() {
        let criteria = FilterCriteria {
            search_term: "react".to_string(),
            ..Default::default()
        };
        assert_eq!(count_active_filters(&criteria), 0);
    }

    #[test]
    fn test_count_sums_every_group() {
        let mut criteria = FilterCriteria::default();
        criteria.work_style.remote = true;
        criteria.work_style.hybrid = true;
        criteria.job_type.full_time = true;
        criteria.experience_level.senior = true;
        criteria.high_match_only = true;
        criteria.salary_range = SalaryRange::From100To150;
        criteria.skills.insert("React".to_string(), true);
        criteria.skills.insert("JavaScript".to_string(), false);
        criteria.location.nairobi = true;
        criteria.quick_job_type.contract = true;

        // 2 work style + 1 job type + 1 experience + high match + salary + 1 skill + 1 city + 1 quick type
        assert_eq!(count_active_filters(&criteria), 9);
    }

    #[test]
    fn test_same_label_in_two_groups_counts_twice() {
        // The search-bar group and the advanced panel are separate controls.
        let mut criteria = FilterCriteria::default();
        criteria.job_type.full_time = true;
        criteria.quick_job_type.full_time = true;
        criteria.work_style.remote = true;
        criteria.location.remote = true;
        assert_eq!(count_active_filters(&criteria), 4);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut criteria = FilterCriteria {
            search_term: "rust".to_string(),
            high_match_only: true,
            salary_range: SalaryRange::Above150,
            ..Default::default()
        };
        criteria.skills.insert("Rust".to_string(), true);
        criteria.reset();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"job_type": {"full_time": true}, "salary_range": "0-50"}"#)
                .unwrap();
        assert!(criteria.job_type.full_time);
        assert!(!criteria.job_type.contract);
        assert_eq!(criteria.salary_range, SalaryRange::UpTo50);
        assert!(criteria.search_term.is_empty());
        assert_eq!(count_active_filters(&criteria), 2);
    }

    #[test]
    fn test_normalized_search_term() {
        let mut criteria = FilterCriteria::default();
        assert_eq!(criteria.normalized_search_term(), None);
        criteria.search_term = " ".to_string();
        assert_eq!(criteria.normalized_search_term().as_deref(), Some(" "));
        criteria.search_term = "React".to_string();
        assert_eq!(criteria.normalized_search_term().as_deref(), Some("react"));
    }
}
