// TestDependencies - in-process implementations for testing
//
// Provides a fixed clock and an in-memory job store that can be injected
// into the app in place of the wall clock and PostgreSQL.

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use super::BaseClock;
use crate::common::JobId;
use crate::domains::jobs::{Job, JobStore, NewJob};

// =============================================================================
// Fixed Clock
// =============================================================================

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self(today)
    }
}

impl BaseClock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

// =============================================================================
// In-Memory Job Store
// =============================================================================

struct StoreState {
    jobs: Vec<Job>,
    next_id: i64,
}

pub struct InMemoryJobStore {
    state: Mutex<StoreState>,
    offline: AtomicBool,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState {
                jobs: Vec::new(),
                next_id: 1,
            }),
            offline: AtomicBool::new(false),
        }
    }

    /// Add a job as if it had been created on `posted_date`.
    pub fn with_job(self, job: NewJob, posted_date: NaiveDate) -> Self {
        self.insert(&job, posted_date);
        self
    }

    /// Make every call fail, as a lost database connection would.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of stored jobs.
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&self, job: &NewJob, posted_date: NaiveDate) -> JobId {
        let mut state = self.state.lock().unwrap();
        let id = JobId::from_i64(state.next_id);
        state.next_id += 1;
        let now = Utc::now();
        state.jobs.push(Job {
            id,
            title: job.title.clone(),
            employer: job.employer.clone(),
            location: job.location.clone(),
            salary: job.salary,
            description: job.description.clone(),
            posted_date,
            created_at: now,
            updated_at: now,
        });
        id
    }

    fn check_online(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            bail!("job store is offline");
        }
        Ok(())
    }
}

impl Default for InMemoryJobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn list_all(&self) -> Result<Vec<Job>> {
        self.check_online()?;
        let mut jobs = self.state.lock().unwrap().jobs.clone();
        jobs.sort_by(|a, b| {
            b.posted_date
                .cmp(&a.posted_date)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(jobs)
    }

    async fn create(&self, job: &NewJob, posted_date: NaiveDate) -> Result<JobId> {
        self.check_online()?;
        Ok(self.insert(job, posted_date))
    }

    async fn get(&self, id: JobId) -> Result<Option<Job>> {
        self.check_online()?;
        let state = self.state.lock().unwrap();
        Ok(state.jobs.iter().find(|job| job.id == id).cloned())
    }

    async fn update(&self, id: JobId, job: &NewJob) -> Result<bool> {
        self.check_online()?;
        let mut state = self.state.lock().unwrap();
        let Some(existing) = state.jobs.iter_mut().find(|existing| existing.id == id) else {
            return Ok(false);
        };
        existing.title = job.title.clone();
        existing.employer = job.employer.clone();
        existing.location = job.location.clone();
        existing.salary = job.salary;
        existing.description = job.description.clone();
        existing.updated_at = Utc::now();
        Ok(true)
    }

    async fn delete(&self, id: JobId) -> Result<bool> {
        self.check_online()?;
        let mut state = self.state.lock().unwrap();
        let before = state.jobs.len();
        state.jobs.retain(|job| job.id != id);
        Ok(state.jobs.len() < before)
    }

    async fn ping(&self) -> Result<()> {
        self.check_online()
    }
}
