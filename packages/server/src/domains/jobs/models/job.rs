use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::JobId;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub employer: String,
    pub location: String,
    /// Hourly rate, two decimal places.
    pub salary: Decimal,
    pub description: Option<String>,
    pub posted_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated column values for an insert or a full update.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    pub title: String,
    pub employer: String,
    pub location: String,
    pub salary: Decimal,
    pub description: Option<String>,
}

// =============================================================================
// Job Queries
// =============================================================================

impl Job {
    pub async fn create(job: &NewJob, posted_date: NaiveDate, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO jobs (title, employer, location, salary, description, posted_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&job.title)
        .bind(&job.employer)
        .bind(&job.location)
        .bind(job.salary)
        .bind(&job.description)
        .bind(posted_date)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_by_id(id: JobId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Every job, most recently posted first.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM jobs ORDER BY posted_date DESC, id DESC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Replace the editable columns. `posted_date` is never touched.
    pub async fn update(id: JobId, job: &NewJob, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE jobs
            SET title = $2, employer = $3, location = $4, salary = $5, description = $6,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&job.title)
        .bind(&job.employer)
        .bind(&job.location)
        .bind(job.salary)
        .bind(&job.description)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Returns false when no row had that id.
    pub async fn delete(id: JobId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
