use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::search_dto::{JobListResponse, SearchFilters},
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/jobs",
    tag = "jobs",
    responses(
        (status = 200, description = "Every posting in the catalog", body = JobListResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_jobs(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.catalog_service.all().to_vec();
    Ok(Json(JobListResponse::from(items)))
}

#[utoipa::path(
    get,
    path = "/api/jobs/search",
    tag = "jobs",
    params(SearchFilters),
    responses(
        (status = 200, description = "Postings matching every given criterion", body = JobListResponse)
    )
)]
#[axum::debug_handler]
pub async fn search_jobs(
    State(state): State<AppState>,
    Query(filters): Query<SearchFilters>,
) -> Result<impl IntoResponse> {
    let items = state.catalog_service.search(&filters);
    tracing::debug!(
        position = %filters.position,
        skills = %filters.skills,
        location = %filters.location,
        hits = items.len(),
        "Job search"
    );
    Ok(Json(JobListResponse::from(items)))
}
