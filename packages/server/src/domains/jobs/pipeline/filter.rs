use std::cmp::{Ordering, Reverse};

use icu_collator::{Collator, CollatorOptions, Strength};

use super::criteria::{JobCriteria, SortKey};
use crate::domains::jobs::data::JobData;

/// Return the jobs matching `criteria`, ordered by `criteria.sort_by`.
///
/// All supplied criteria must match. The input is never modified; matching
/// records are cloned into the result. Sorting is stable, so jobs with equal
/// sort keys keep their input order.
pub fn filter_and_sort(jobs: &[JobData], criteria: &JobCriteria) -> Vec<JobData> {
    let matcher = Matcher::new(criteria);
    let mut matched: Vec<JobData> = jobs
        .iter()
        .filter(|job| matcher.matches(job))
        .cloned()
        .collect();
    sort_jobs(&mut matched, criteria.sort_by);
    matched
}

/// Stable in-place sort by `key`.
///
/// Jobs without a numeric salary go last in both salary orders.
pub fn sort_jobs(jobs: &mut [JobData], key: SortKey) {
    match key {
        SortKey::Date => jobs.sort_by(|a, b| b.posted_date.cmp(&a.posted_date)),
        SortKey::SalaryHigh => {
            jobs.sort_by(|a, b| compare_salary(a, b, |x, y| y.partial_cmp(&x)))
        }
        SortKey::SalaryLow => {
            jobs.sort_by(|a, b| compare_salary(a, b, |x, y| x.partial_cmp(&y)))
        }
        SortKey::Title => match title_collator() {
            Some(collator) => jobs.sort_by(|a, b| collator.compare(&a.title, &b.title)),
            None => {
                tracing::warn!("Collation data unavailable, sorting titles by lowercase text");
                jobs.sort_by_cached_key(|job| {
                    (job.title.to_lowercase(), Reverse(job.title.clone()))
                })
            }
        },
    }
}

/// Root-locale collator at tertiary strength: accents and case only break
/// ties, and lowercase sorts ahead of uppercase.
fn title_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    Collator::try_new(&Default::default(), options).ok()
}

fn compare_salary<F>(a: &JobData, b: &JobData, order: F) -> Ordering
where
    F: Fn(f64, f64) -> Option<Ordering>,
{
    match (a.salary_amount(), b.salary_amount()) {
        (Some(x), Some(y)) => order(x, y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Criteria resolved once per call.
struct Matcher<'a> {
    search: Option<String>,
    location: Option<&'a str>,
    min_salary: Option<f64>,
    max_salary: Option<f64>,
}

impl<'a> Matcher<'a> {
    fn new(criteria: &'a JobCriteria) -> Self {
        Self {
            search: criteria.search_term(),
            location: criteria.location_filter(),
            min_salary: criteria.min_salary(),
            max_salary: criteria.max_salary(),
        }
    }

    fn matches(&self, job: &JobData) -> bool {
        self.matches_search(job) && self.matches_location(job) && self.matches_salary(job)
    }

    fn matches_search(&self, job: &JobData) -> bool {
        let Some(term) = &self.search else {
            return true;
        };
        contains_ignore_case(&job.title, term)
            || contains_ignore_case(&job.employer, term)
            || job
                .description
                .as_deref()
                .is_some_and(|d| contains_ignore_case(d, term))
    }

    fn matches_location(&self, job: &JobData) -> bool {
        self.location.map_or(true, |location| job.location == location)
    }

    fn matches_salary(&self, job: &JobData) -> bool {
        if self.min_salary.is_none() && self.max_salary.is_none() {
            return true;
        }
        let Some(salary) = job.salary_amount() else {
            return false;
        };
        self.min_salary.map_or(true, |min| salary >= min)
            && self.max_salary.map_or(true, |max| salary <= max)
    }
}

/// `needle` must already be lowercase.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
