pub mod health;
pub mod job_sources;
pub mod jobs;
pub mod openapi;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::AppState;

/// Every route the service exposes; job sources sit behind bearer auth.
pub fn build_router(state: AppState) -> Router {
    let public_api = Router::new()
        .route("/health", get(health::health))
        .route("/api/openapi.json", get(openapi::openapi_json))
        .route("/api/jobs", get(jobs::list_jobs))
        .route("/api/jobs/search", get(jobs::search_jobs));

    let job_sources_api = Router::new()
        .route(
            "/api/job-sources",
            get(job_sources::list_job_sources).post(job_sources::create_job_source),
        )
        .route("/api/job-sources/:id", delete(job_sources::delete_job_source))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::auth::require_bearer_auth,
        ));

    public_api.merge(job_sources_api).with_state(state)
}
