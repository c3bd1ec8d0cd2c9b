use chrono::NaiveDate;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::salary::SalaryValue;
use crate::common::JobId;
use crate::domains::jobs::models::{Job, NewJob};

/// Largest hourly rate a `NUMERIC(10,2)` column can hold.
const MAX_SALARY: f64 = 99_999_999.99;

/// A job record as exchanged with clients and fed to the query pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobData {
    pub id: JobId,
    pub title: String,
    pub employer: String,
    pub location: String,
    #[serde(default)]
    pub salary: Option<SalaryValue>,
    #[serde(default)]
    pub description: Option<String>,
    pub posted_date: NaiveDate,
}

impl JobData {
    /// Salary as a finite number, if it is one (negative values included).
    pub fn salary_amount(&self) -> Option<f64> {
        self.salary.as_ref().and_then(SalaryValue::as_number)
    }

    /// Salary if it is a valid hourly rate (finite and non-negative).
    pub fn hourly_rate(&self) -> Option<f64> {
        self.salary.as_ref().and_then(SalaryValue::hourly_rate)
    }
}

impl From<Job> for JobData {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            title: job.title,
            employer: job.employer,
            location: job.location,
            salary: job.salary.to_f64().map(SalaryValue::Number),
            description: job.description,
            posted_date: job.posted_date,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Salary must be a non-negative number")]
    InvalidSalary,
}

/// Request body for creating or fully updating a job.
///
/// Everything is optional at the serde level so that a missing field is
/// reported as a validation error rather than a JSON rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub employer: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary: Option<SalaryValue>,
    #[serde(default)]
    pub description: Option<String>,
}

impl JobInput {
    pub fn validate(self) -> Result<NewJob, ValidationError> {
        let title = required(self.title);
        let employer = required(self.employer);
        let location = required(self.location);
        let salary = self
            .salary
            .filter(|s| !matches!(s, SalaryValue::Text(raw) if raw.trim().is_empty()));

        let (title, employer, location, salary) = match (title, employer, location, salary) {
            (Some(title), Some(employer), Some(location), Some(salary)) => {
                (title, employer, location, salary)
            }
            (title, employer, location, salary) => {
                let missing = [
                    ("title", title.is_none()),
                    ("employer", employer.is_none()),
                    ("location", location.is_none()),
                    ("salary", salary.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, absent)| absent.then_some(field))
                .collect();
                return Err(ValidationError::MissingFields(missing));
            }
        };

        let salary = salary
            .hourly_rate()
            .filter(|rate| *rate <= MAX_SALARY)
            .and_then(Decimal::from_f64)
            .ok_or(ValidationError::InvalidSalary)?
            .round_dp(2);

        Ok(NewJob {
            title,
            employer,
            location,
            salary,
            description: self
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        })
    }
}

fn required(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
