use axum::{response::IntoResponse, Json};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::dto::job_source_dto::{CreateJobSourcePayload, JobSourceListResponse};
use crate::dto::search_dto::JobListResponse;
use crate::models::job::{Job, SourceCategory};
use crate::models::job_source::{JobSource, SourceType};

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::health::health,
        super::jobs::list_jobs,
        super::jobs::search_jobs,
        super::job_sources::list_job_sources,
        super::job_sources::create_job_source,
        super::job_sources::delete_job_source,
    ),
    components(schemas(
        Job,
        SourceCategory,
        JobListResponse,
        JobSource,
        SourceType,
        CreateJobSourcePayload,
        JobSourceListResponse,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "jobs", description = "Search over the static job catalog"),
        (name = "job-sources", description = "Per-user company pages and job boards"),
        (name = "system", description = "Liveness")
    )
)]
pub struct ApiDoc;

#[axum::debug_handler]
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
