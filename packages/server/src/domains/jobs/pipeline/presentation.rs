use chrono::NaiveDate;
use indexmap::IndexSet;
use serde::Serialize;

use crate::domains::jobs::data::JobData;

/// Maximum number of search suggestions offered while typing.
pub const SUGGESTION_LIMIT: usize = 5;

/// Coarse salary band used to colour job cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryTier {
    Low,
    Medium,
    High,
}

impl SalaryTier {
    pub fn for_rate(rate: f64) -> Self {
        if rate >= 20.0 {
            SalaryTier::High
        } else if rate >= 15.0 {
            SalaryTier::Medium
        } else {
            SalaryTier::Low
        }
    }
}

/// A job decorated for display in a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    #[serde(flatten)]
    pub job: JobData,
    pub posted_ago: String,
    pub salary_tier: Option<SalaryTier>,
}

impl JobListing {
    pub fn new(job: JobData, today: NaiveDate) -> Self {
        Self {
            posted_ago: describe_age(job.posted_date, today),
            salary_tier: job.hourly_rate().map(SalaryTier::for_rate),
            job,
        }
    }
}

/// Human-friendly age of a posting relative to `today`.
pub fn describe_age(posted: NaiveDate, today: NaiveDate) -> String {
    let days = (today - posted).num_days().unsigned_abs();
    match days {
        0 => "Today".to_string(),
        1 => "1 day ago".to_string(),
        2..=6 => format!("{days} days ago"),
        7..=29 => match days.div_ceil(7) {
            1 => "1 week ago".to_string(),
            weeks => format!("{weeks} weeks ago"),
        },
        _ => posted.format("%-m/%-d/%Y").to_string(),
    }
}

/// Unique, non-empty locations in first-seen order.
pub fn distinct_locations(jobs: &[JobData]) -> Vec<String> {
    jobs.iter()
        .map(|job| job.location.as_str())
        .filter(|location| !location.is_empty())
        .collect::<IndexSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Jobs whose title or employer contains `term`, ignoring case.
///
/// Keeps input order and stops after `limit` matches. A blank term yields
/// nothing.
pub fn search_suggestions(jobs: &[JobData], term: &str, limit: usize) -> Vec<JobData> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }
    jobs.iter()
        .filter(|job| {
            job.title.to_lowercase().contains(&term) || job.employer.to_lowercase().contains(&term)
        })
        .take(limit)
        .cloned()
        .collect()
}
