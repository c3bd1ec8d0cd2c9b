//! CLI for operating on the job board database
//!
//! Runs the same query pipeline as the HTTP API against the configured
//! database. Every command prints a single JSON document.

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;

use job_board_core::common::JobId;
use job_board_core::config::Config;
use job_board_core::domains::jobs::pipeline::{
    filter_and_sort, JobAnalytics, JobCriteria, JobListing, SortKey,
};
use job_board_core::domains::jobs::{JobData, JobStore, NewJob, PostgresJobStore};
use job_board_core::kernel::{BaseClock, SystemClock};

#[derive(Parser)]
#[command(name = "jobs_cli")]
#[command(about = "Job board database CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending schema migrations
    Migrate,

    /// List jobs through the filter and sort pipeline
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        salary_min: Option<String>,
        #[arg(long)]
        salary_max: Option<String>,
        /// date, salary-high, salary-low or title
        #[arg(long, default_value = "date")]
        sort: String,
    },

    /// Show one job
    Show { id: JobId },

    /// Print the analytics summary
    Analytics {
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Insert the demo jobs
    Seed,

    /// Delete one job
    Delete { id: JobId },
}

// ============================================================================
// JSON Response Types
// ============================================================================

#[derive(Serialize)]
struct Response<T: Serialize> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T: Serialize> Response<T> {
    fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            count: None,
            data: Some(data),
        }
    }
}

impl Response<()> {
    fn message(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            message: Some(message.into()),
            count: None,
            data: None,
        }
    }
}

fn output<T: Serialize>(resp: Response<T>) -> Result<()> {
    println!("{}", serde_json::to_string(&resp)?);
    Ok(())
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate => cmd_migrate().await,
        Commands::List {
            search,
            location,
            salary_min,
            salary_max,
            sort,
        } => {
            let criteria = JobCriteria {
                search,
                location,
                salary_min,
                salary_max,
                sort_by: SortKey::parse(&sort),
            };
            cmd_list(&criteria).await
        }
        Commands::Show { id } => cmd_show(id).await,
        Commands::Analytics { today } => cmd_analytics(today).await,
        Commands::Seed => cmd_seed().await,
        Commands::Delete { id } => cmd_delete(id).await,
    }
}

async fn get_pool() -> Result<PgPool> {
    let config = Config::from_env()?;
    PgPool::connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

async fn get_store() -> Result<PostgresJobStore> {
    Ok(PostgresJobStore::new(get_pool().await?))
}

async fn snapshot(store: &PostgresJobStore) -> Result<Vec<JobData>> {
    let jobs = store.list_all().await?;
    Ok(jobs.into_iter().map(JobData::from).collect())
}

// ============================================================================
// Commands
// ============================================================================

async fn cmd_migrate() -> Result<()> {
    let pool = get_pool().await?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    output(Response::<()>::message(true, "Migrations applied"))
}

async fn cmd_list(criteria: &JobCriteria) -> Result<()> {
    let store = get_store().await?;
    let today = SystemClock.today();

    let listings: Vec<JobListing> = filter_and_sort(&snapshot(&store).await?, criteria)
        .into_iter()
        .map(|job| JobListing::new(job, today))
        .collect();

    let mut resp = Response::data(listings);
    resp.count = resp.data.as_ref().map(Vec::len);
    output(resp)
}

async fn cmd_show(id: JobId) -> Result<()> {
    let store = get_store().await?;

    match store.get(id).await? {
        Some(job) => output(Response::data(JobData::from(job))),
        None => output(Response::<()>::message(false, format!("Job {} not found", id))),
    }
}

async fn cmd_analytics(today: Option<NaiveDate>) -> Result<()> {
    let store = get_store().await?;
    let today = today.unwrap_or_else(|| SystemClock.today());

    let analytics = JobAnalytics::compute(&snapshot(&store).await?, today);
    output(Response::data(analytics))
}

async fn cmd_seed() -> Result<()> {
    let store = get_store().await?;
    let today = SystemClock.today();

    let mut ids = Vec::new();
    for (days_ago, job) in demo_jobs().into_iter().enumerate() {
        let posted = today
            .checked_sub_days(Days::new(days_ago as u64))
            .unwrap_or(today);
        ids.push(store.create(&job, posted).await?);
    }

    let count = ids.len();
    let mut resp = Response::data(ids);
    resp.message = Some(format!("Seeded {} jobs", count));
    resp.count = Some(count);
    output(resp)
}

async fn cmd_delete(id: JobId) -> Result<()> {
    let store = get_store().await?;

    if store.delete(id).await? {
        output(Response::<()>::message(true, format!("Job {} deleted", id)))
    } else {
        output(Response::<()>::message(false, format!("Job {} not found", id)))
    }
}

fn demo_jobs() -> Vec<NewJob> {
    let job = |title: &str, employer: &str, location: &str, cents: i64, description: &str| NewJob {
        title: title.to_string(),
        employer: employer.to_string(),
        location: location.to_string(),
        salary: Decimal::new(cents, 2),
        description: Some(description.to_string()),
    };

    vec![
        job(
            "Cashier",
            "Local Grocery Store",
            "Downtown",
            1500,
            "Part-time cashier position with customer service focus",
        ),
        job(
            "Cook",
            "Fast Food Restaurant",
            "Mall Area",
            1650,
            "Line cook position with flexible hours and team environment",
        ),
        job(
            "Barista",
            "Coffee Shop Chain",
            "Business District",
            1725,
            "Experienced barista needed for busy coffee shop location",
        ),
        job(
            "Sales Associate",
            "Retail Store",
            "Shopping Center",
            1475,
            "Retail sales position with commission opportunities",
        ),
    ]
}
