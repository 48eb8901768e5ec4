pub mod client;
pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use crate::services::{catalog_service::CatalogService, job_source_service::JobSourceService};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub jwt_secret: Arc<str>,
    pub catalog_service: CatalogService,
    pub job_source_service: JobSourceService,
}

impl AppState {
    pub fn new(pool: PgPool, jwt_secret: &str, catalog_service: CatalogService) -> Self {
        let job_source_service = JobSourceService::new(pool);

        Self {
            jwt_secret: Arc::from(jwt_secret),
            catalog_service,
            job_source_service,
        }
    }
}
