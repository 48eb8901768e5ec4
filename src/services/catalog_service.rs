use std::sync::Arc;

use crate::dto::search_dto::SearchFilters;
use crate::error::Result;
use crate::models::job::Job;
use crate::services::search_service::filter_jobs;

const BUILTIN_CATALOG: &str = include_str!("../../data/jobs.json");

/// Read-only set of postings the search runs over.
#[derive(Clone)]
pub struct CatalogService {
    jobs: Arc<Vec<Job>>,
}

impl CatalogService {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs: Arc::new(jobs),
        }
    }

    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let jobs: Vec<Job> = serde_json::from_str(raw)?;
        Ok(Self::new(jobs))
    }

    /// Loads the catalog from `path` when given, otherwise the bundled one.
    pub async fn load(path: Option<&str>) -> Result<Self> {
        let catalog = match path {
            Some(path) => {
                let raw = tokio::fs::read_to_string(path).await?;
                Self::from_json(&raw)?
            }
            None => Self::builtin()?,
        };
        tracing::info!(
            jobs = catalog.jobs.len(),
            source = path.unwrap_or("builtin"),
            "Job catalog loaded"
        );
        Ok(catalog)
    }

    pub fn all(&self) -> &[Job] {
        &self.jobs
    }

    pub fn search(&self, filters: &SearchFilters) -> Vec<Job> {
        filter_jobs(&self.jobs, filters)
    }
}
