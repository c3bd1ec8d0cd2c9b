//! Job REST endpoints.
//!
//! CRUD goes straight to the store. Listing, analytics, locations and
//! suggestions load a fresh snapshot of every job and run it through the
//! query pipeline with the clock's date for this request.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::common::JobId;
use crate::domains::jobs::pipeline::{
    distinct_locations, filter_and_sort, search_suggestions, JobAnalytics, JobCriteria,
    JobListing, SortKey, SUGGESTION_LIMIT,
};
use crate::domains::jobs::{JobData, JobInput};
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResult};

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: JobId,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Query string of `GET /api/jobs`.
///
/// `searchText` and `sortKey` are accepted as alternative spellings. When
/// both spellings are sent, `search` and `sortBy` win.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListJobsQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub search_text: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary_min: Option<String>,
    #[serde(default)]
    pub salary_max: Option<String>,
    #[serde(default)]
    pub sort_by: Option<SortKey>,
    #[serde(default)]
    pub sort_key: Option<SortKey>,
}

impl From<ListJobsQuery> for JobCriteria {
    fn from(query: ListJobsQuery) -> Self {
        JobCriteria {
            search: query.search.or(query.search_text),
            location: query.location,
            salary_min: query.salary_min,
            salary_max: query.salary_max,
            sort_by: query.sort_by.or(query.sort_key).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub q: String,
}

pub fn job_routes() -> Router {
    Router::new()
        .route("/api/jobs", get(list_jobs_handler).post(create_job_handler))
        .route("/api/jobs/analytics", get(analytics_handler))
        .route("/api/jobs/locations", get(locations_handler))
        .route("/api/jobs/suggestions", get(suggestions_handler))
        .route(
            "/api/jobs/:id",
            get(get_job_handler)
                .put(update_job_handler)
                .delete(delete_job_handler),
        )
}

async fn load_snapshot(state: &AppState) -> ApiResult<Vec<JobData>> {
    let jobs = state.store.list_all().await?;
    Ok(jobs.into_iter().map(JobData::from).collect())
}

/// GET /api/jobs - filtered, sorted listing
pub async fn list_jobs_handler(
    Extension(state): Extension<AppState>,
    query: Result<Query<ListJobsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<JobListing>>> {
    let Query(query) = query?;
    let criteria = JobCriteria::from(query);
    let today = state.clock.today();
    let snapshot = load_snapshot(&state).await?;

    let listings: Vec<JobListing> = filter_and_sort(&snapshot, &criteria)
        .into_iter()
        .map(|job| JobListing::new(job, today))
        .collect();

    tracing::debug!(
        total = snapshot.len(),
        matched = listings.len(),
        sort_by = criteria.sort_by.as_str(),
        "Listed jobs"
    );
    Ok(Json(listings))
}

/// POST /api/jobs - create a job posted today
pub async fn create_job_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<JobInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let Json(input) = payload?;
    let job = input.validate()?;

    let id = state.store.create(&job, state.clock.today()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Job created successfully",
        }),
    ))
}

/// GET /api/jobs/:id
pub async fn get_job_handler(
    Extension(state): Extension<AppState>,
    id: Result<Path<JobId>, PathRejection>,
) -> ApiResult<Json<JobData>> {
    let Path(id) = id?;
    let job = state.store.get(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(JobData::from(job)))
}

/// PUT /api/jobs/:id - full update, posting date unchanged
pub async fn update_job_handler(
    Extension(state): Extension<AppState>,
    id: Result<Path<JobId>, PathRejection>,
    payload: Result<Json<JobInput>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let job = input.validate()?;

    if !state.store.update(id, &job).await? {
        return Err(ApiError::NotFound);
    }

    tracing::info!(job_id = %id, "Job updated");
    Ok(Json(MessageResponse {
        message: "Job updated successfully",
    }))
}

/// DELETE /api/jobs/:id
pub async fn delete_job_handler(
    Extension(state): Extension<AppState>,
    id: Result<Path<JobId>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = id?;

    if !state.store.delete(id).await? {
        return Err(ApiError::NotFound);
    }

    tracing::info!(job_id = %id, "Job deleted");
    Ok(Json(MessageResponse {
        message: "Job deleted successfully",
    }))
}

/// GET /api/jobs/analytics
pub async fn analytics_handler(
    Extension(state): Extension<AppState>,
) -> ApiResult<Json<JobAnalytics>> {
    let today = state.clock.today();
    let snapshot = load_snapshot(&state).await?;
    Ok(Json(JobAnalytics::compute(&snapshot, today)))
}

/// GET /api/jobs/locations - options for the location filter
pub async fn locations_handler(
    Extension(state): Extension<AppState>,
) -> ApiResult<Json<Vec<String>>> {
    let snapshot = load_snapshot(&state).await?;
    Ok(Json(distinct_locations(&snapshot)))
}

/// GET /api/jobs/suggestions?q=
pub async fn suggestions_handler(
    Extension(state): Extension<AppState>,
    query: Result<Query<SuggestionQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<JobData>>> {
    let Query(query) = query?;
    if query.q.trim().is_empty() {
        return Ok(Json(Vec::new()));
    }
    let snapshot = load_snapshot(&state).await?;
    Ok(Json(search_suggestions(
        &snapshot,
        &query.q,
        SUGGESTION_LIMIT,
    )))
}
