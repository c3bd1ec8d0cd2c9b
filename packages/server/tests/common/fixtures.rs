//! Test fixtures for creating test data.

use anyhow::Result;
use chrono::{Days, NaiveDate};
use job_board_core::common::JobId;
use job_board_core::domains::jobs::{Job, JobData, NewJob, SalaryValue};
use job_board_core::kernel::InMemoryJobStore;
use rust_decimal::Decimal;
use sqlx::PgPool;

/// Reference date used throughout the tests.
pub fn today() -> NaiveDate {
    date("2024-01-15")
}

pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").expect("valid test date")
}

pub fn days_ago(days: u64) -> NaiveDate {
    today() - Days::new(days)
}

/// A new job at `cents / 100` per hour.
pub fn new_job(title: &str, employer: &str, location: &str, cents: i64) -> NewJob {
    NewJob {
        title: title.to_string(),
        employer: employer.to_string(),
        location: location.to_string(),
        salary: Decimal::new(cents, 2),
        description: Some(format!("{} position", title)),
    }
}

/// Transport record for pipeline tests.
pub fn job_data(
    id: i64,
    title: &str,
    location: &str,
    salary: Option<SalaryValue>,
    posted_date: NaiveDate,
) -> JobData {
    JobData {
        id: JobId::from_i64(id),
        title: title.to_string(),
        employer: format!("{} Employer", title),
        location: location.to_string(),
        salary,
        description: None,
        posted_date,
    }
}

/// The four demo jobs, one posted each day from today backwards.
pub fn demo_store() -> InMemoryJobStore {
    InMemoryJobStore::new()
        .with_job(
            new_job("Cashier", "Local Grocery Store", "Downtown", 1500),
            days_ago(0),
        )
        .with_job(
            new_job("Cook", "Fast Food Restaurant", "Mall Area", 1650),
            days_ago(1),
        )
        .with_job(
            new_job("Barista", "Coffee Shop Chain", "Business District", 1725),
            days_ago(2),
        )
        .with_job(
            new_job("Sales Associate", "Retail Store", "Shopping Center", 1475),
            days_ago(3),
        )
}

/// Insert a job directly through the model.
pub async fn create_test_job(pool: &PgPool, job: &NewJob, posted_date: NaiveDate) -> Result<Job> {
    Job::create(job, posted_date, pool).await
}
