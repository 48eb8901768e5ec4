use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::job_source_dto::{CreateJobSourcePayload, JobSourceListResponse},
    error::Result,
    middleware::auth::Claims,
    models::job_source::JobSource,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/job-sources",
    tag = "job-sources",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Caller's job sources, newest first", body = JobSourceListResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn list_job_sources(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let owner = claims.user_id()?;
    let items = state.job_source_service.list_for_owner(owner).await?;
    Ok(Json(JobSourceListResponse::from(items)))
}

#[utoipa::path(
    post,
    path = "/api/job-sources",
    tag = "job-sources",
    security(("bearer" = [])),
    request_body = CreateJobSourcePayload,
    responses(
        (status = 201, description = "Job source created", body = JobSource),
        (status = 400, description = "missing_fields or invalid_url"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn create_job_source(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateJobSourcePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let owner = claims.user_id()?;
    let source = state
        .job_source_service
        .create(owner, &payload.into_new_source())
        .await?;
    Ok((StatusCode::CREATED, Json(source)))
}

#[utoipa::path(
    delete,
    path = "/api/job-sources/{id}",
    tag = "job-sources",
    security(("bearer" = [])),
    params(
        ("id" = Uuid, Path, description = "Job source ID")
    ),
    responses(
        (status = 204, description = "Job source deleted"),
        (status = 404, description = "No such job source owned by the caller")
    )
)]
#[axum::debug_handler]
pub async fn delete_job_source(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let owner = claims.user_id()?;
    state.job_source_service.delete(owner, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
