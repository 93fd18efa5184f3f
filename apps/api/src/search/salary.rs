//! Salary text parsing and range admission.
//!
//! Listings carry salary as free text ("50K-80K KES/month", "KES 150,000 - 200,000",
//! "No salary listed"). Only the first two digit runs matter: the first is the lower
//! bound, the second the upper bound. A missing run reads as 0.

use serde::{Deserialize, Serialize};

/// Lower/upper bounds extracted from a salary string, in the listing's own units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SalaryBounds {
    pub lower: u64,
    pub upper: u64,
}

impl SalaryBounds {
    /// Never fails. Digit runs too long for `u64` saturate at `u64::MAX`.
    pub fn parse(text: &str) -> Self {
        let mut runs = digit_runs(text);
        let lower = runs.next().unwrap_or(0);
        let upper = runs.next().unwrap_or(0);
        SalaryBounds { lower, upper }
    }
}

fn digit_runs(text: &str) -> impl Iterator<Item = u64> + '_ {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .map(|run| {
            run.bytes().fold(0u64, |acc, b| {
                acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
            })
        })
}

/// Salary bucket selected in the filter panel. Values are in thousands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryRange {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "0-50")]
    UpTo50,
    #[serde(rename = "50-100")]
    From50To100,
    #[serde(rename = "100-150")]
    From100To150,
    #[serde(rename = "150+")]
    Above150,
}

impl SalaryRange {
    /// Range-overlap test between the bucket and a listing's bounds.
    pub fn admits(&self, bounds: SalaryBounds) -> bool {
        let SalaryBounds { lower, upper } = bounds;
        match self {
            SalaryRange::All => true,
            SalaryRange::UpTo50 => lower <= 50,
            SalaryRange::From50To100 => lower <= 100 && upper >= 50,
            SalaryRange::From100To150 => lower <= 150 && upper >= 100,
            SalaryRange::Above150 => upper >= 150,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SalaryRange::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_k_range() {
        let bounds = SalaryBounds::parse("50K-80K KES/month");
        assert_eq!(bounds, SalaryBounds { lower: 50, upper: 80 });
    }

    #[test]
    fn test_parse_no_digits_is_zero() {
        assert_eq!(SalaryBounds::parse("No salary listed"), SalaryBounds::default());
        assert_eq!(SalaryBounds::parse(""), SalaryBounds::default());
    }

    #[test]
    fn test_parse_single_run_leaves_upper_zero() {
        let bounds = SalaryBounds::parse("From 120K");
        assert_eq!(bounds, SalaryBounds { lower: 120, upper: 0 });
    }

    #[test]
    fn test_parse_thousands_separator_splits_runs() {
        // "150,000" is two runs: 150 and 000
        let bounds = SalaryBounds::parse("KES 150,000 - 200,000");
        assert_eq!(bounds, SalaryBounds { lower: 150, upper: 0 });
    }

    #[test]
    fn test_parse_overflow_saturates() {
        let bounds = SalaryBounds::parse("99999999999999999999999 - 5");
        assert_eq!(bounds.lower, u64::MAX);
        assert_eq!(bounds.upper, 5);
    }

    #[test]
    fn test_no_salary_admitted_by_low_bucket_only() {
        let bounds = SalaryBounds::parse("No salary listed");
        assert!(SalaryRange::UpTo50.admits(bounds));
        assert!(!SalaryRange::Above150.admits(bounds));
        assert!(!SalaryRange::From50To100.admits(bounds));
    }

    #[test]
    fn test_overlap_rules() {
        let mid = SalaryBounds { lower: 50, upper: 80 };
        assert!(SalaryRange::All.admits(mid));
        assert!(SalaryRange::UpTo50.admits(mid));
        assert!(SalaryRange::From50To100.admits(mid));
        assert!(!SalaryRange::From100To150.admits(mid));
        assert!(!SalaryRange::Above150.admits(mid));

        let high = SalaryBounds { lower: 140, upper: 200 };
        assert!(!SalaryRange::UpTo50.admits(high));
        assert!(!SalaryRange::From50To100.admits(high));
        assert!(SalaryRange::From100To150.admits(high));
        assert!(SalaryRange::Above150.admits(high));
    }

    #[test]
    fn test_salary_range_serde_uses_bucket_labels() {
        let range: SalaryRange = serde_json::from_str(r#""150+""#).unwrap();
        assert_eq!(range, SalaryRange::Above150);
        assert_eq!(
            serde_json::to_string(&SalaryRange::From50To100).unwrap(),
            r#""50-100""#
        );
        assert!(SalaryRange::default().is_all());
    }
}
