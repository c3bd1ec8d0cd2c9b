//! Job store abstraction.
//!
//! Routes and the CLI talk to `dyn JobStore` so that they can run against
//! PostgreSQL in production and an in-memory store in tests.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use super::models::{Job, NewJob};
use crate::common::JobId;

/// CRUD access to the `jobs` table.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Every job, most recently posted first.
    async fn list_all(&self) -> Result<Vec<Job>>;

    /// Insert a job posted on `posted_date` and return its new id.
    async fn create(&self, job: &NewJob, posted_date: NaiveDate) -> Result<JobId>;

    async fn get(&self, id: JobId) -> Result<Option<Job>>;

    /// Full update of the editable fields. Returns false if the id is unknown.
    async fn update(&self, id: JobId, job: &NewJob) -> Result<bool>;

    /// Returns false if the id is unknown.
    async fn delete(&self, id: JobId) -> Result<bool>;

    /// Cheap connectivity probe for health checks.
    async fn ping(&self) -> Result<()>;
}

/// PostgreSQL-backed store.
#[derive(Clone)]
pub struct PostgresJobStore {
    pool: PgPool,
}

impl PostgresJobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for PostgresJobStore {
    async fn list_all(&self) -> Result<Vec<Job>> {
        Job::find_all(&self.pool).await
    }

    async fn create(&self, job: &NewJob, posted_date: NaiveDate) -> Result<JobId> {
        let created = Job::create(job, posted_date, &self.pool).await?;
        tracing::info!(job_id = %created.id, title = %created.title, "Job created");
        Ok(created.id)
    }

    async fn get(&self, id: JobId) -> Result<Option<Job>> {
        Job::find_by_id(id, &self.pool).await
    }

    async fn update(&self, id: JobId, job: &NewJob) -> Result<bool> {
        let updated = Job::update(id, job, &self.pool).await?;
        Ok(updated.is_some())
    }

    async fn delete(&self, id: JobId) -> Result<bool> {
        Job::delete(id, &self.pool).await
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
