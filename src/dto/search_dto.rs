use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::job::Job;

/// Free-text search criteria. Every field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct SearchFilters {
    /// Case-insensitive substring of the job title.
    pub position: String,
    /// Comma separated; a job matches when any one of them overlaps its skills.
    pub skills: String,
    /// Case-insensitive substring of the job location.
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JobListResponse {
    pub total: usize,
    pub items: Vec<Job>,
}

impl From<Vec<Job>> for JobListResponse {
    fn from(items: Vec<Job>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}
