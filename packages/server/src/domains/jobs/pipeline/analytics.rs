use chrono::{Days, NaiveDate};
use indexmap::IndexMap;
use serde::Serialize;

use crate::domains::jobs::data::JobData;

/// Length of the posting trend, in calendar days ending today.
pub const TREND_WINDOW_DAYS: u64 = 30;

/// A posting counts as "this week" if it is at most this many days old.
pub const RECENT_WINDOW_DAYS: u64 = 7;

/// Aggregate view over a job snapshot, as shown on the analytics dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAnalytics {
    /// Every job, whatever its salary.
    pub total_jobs: usize,
    /// Jobs whose salary is a finite, non-negative number.
    pub valid_salary_jobs: usize,
    /// Mean valid salary, to the cent. Zero when there are no valid salaries.
    pub average_salary: f64,
    pub salary_distribution: SalaryDistribution,
    /// All jobs per location, in first-seen order.
    pub job_count_by_location: Vec<LocationCount>,
    /// Mean valid salary per location, highest first.
    pub average_salary_by_location: Vec<LocationAverage>,
    /// One entry per day of the trend window, oldest first.
    pub postings_by_day: Vec<DailyPostings>,
    pub distinct_locations: usize,
    pub posted_this_week: usize,
}

/// Valid salaries bucketed into fixed hourly ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryDistribution {
    /// `< 15`
    pub under_15: usize,
    /// `[15, 18)`
    pub from_15_to_18: usize,
    /// `[18, 20)`
    pub from_18_to_20: usize,
    /// `>= 20`
    pub from_20: usize,
}

impl SalaryDistribution {
    fn record(&mut self, rate: f64) {
        if rate < 15.0 {
            self.under_15 += 1;
        } else if rate < 18.0 {
            self.from_15_to_18 += 1;
        } else if rate < 20.0 {
            self.from_18_to_20 += 1;
        } else {
            self.from_20 += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.under_15 + self.from_15_to_18 + self.from_18_to_20 + self.from_20
    }

    /// Chart-ready (label, count) pairs, lowest range first.
    pub fn buckets(&self) -> [(&'static str, usize); 4] {
        [
            ("Under $15", self.under_15),
            ("$15-$18", self.from_15_to_18),
            ("$18-$20", self.from_18_to_20),
            ("$20+", self.from_20),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationCount {
    pub location: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationAverage {
    pub location: String,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyPostings {
    pub date: NaiveDate,
    pub count: usize,
}

#[derive(Default)]
struct LocationTally {
    jobs: usize,
    valid_salaries: usize,
    salary_total: f64,
}

impl JobAnalytics {
    /// Aggregate `jobs` as of `today`.
    ///
    /// Jobs with a missing or unparsable salary still count towards the job
    /// totals and location counts; they are left out of every salary figure.
    pub fn compute(jobs: &[JobData], today: NaiveDate) -> Self {
        let window_start = days_before(today, TREND_WINDOW_DAYS - 1);
        let week_start = days_before(today, RECENT_WINDOW_DAYS);

        let mut locations: IndexMap<&str, LocationTally> = IndexMap::new();
        let mut distribution = SalaryDistribution::default();
        let mut postings = vec![0usize; TREND_WINDOW_DAYS as usize];
        let mut salary_total = 0.0;
        let mut valid_salary_jobs = 0;
        let mut posted_this_week = 0;

        for job in jobs {
            let tally = locations.entry(job.location.as_str()).or_default();
            tally.jobs += 1;

            if let Some(rate) = job.hourly_rate() {
                valid_salary_jobs += 1;
                salary_total += rate;
                distribution.record(rate);
                tally.valid_salaries += 1;
                tally.salary_total += rate;
            }

            let offset = (job.posted_date - window_start).num_days();
            if let Some(slot) = usize::try_from(offset).ok().and_then(|i| postings.get_mut(i)) {
                *slot += 1;
            }

            if job.posted_date >= week_start {
                posted_this_week += 1;
            }
        }

        let average_salary = if valid_salary_jobs > 0 {
            round_to_cents(salary_total / valid_salary_jobs as f64)
        } else {
            0.0
        };

        let job_count_by_location = locations
            .iter()
            .map(|(location, tally)| LocationCount {
                location: location.to_string(),
                count: tally.jobs,
            })
            .collect();

        let mut average_salary_by_location: Vec<LocationAverage> = locations
            .iter()
            .filter(|(_, tally)| tally.valid_salaries > 0)
            .map(|(location, tally)| LocationAverage {
                location: location.to_string(),
                average: round_to_cents(tally.salary_total / tally.valid_salaries as f64),
            })
            .collect();
        average_salary_by_location.sort_by(|a, b| {
            b.average
                .partial_cmp(&a.average)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let postings_by_day = postings
            .into_iter()
            .enumerate()
            .map(|(i, count)| DailyPostings {
                date: days_before(today, TREND_WINDOW_DAYS - 1 - i as u64),
                count,
            })
            .collect();

        Self {
            total_jobs: jobs.len(),
            valid_salary_jobs,
            average_salary,
            salary_distribution: distribution,
            job_count_by_location,
            average_salary_by_location,
            postings_by_day,
            distinct_locations: locations.len(),
            posted_this_week,
        }
    }
}

fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days))
        .unwrap_or(NaiveDate::MIN)
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
