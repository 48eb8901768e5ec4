use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "job_source_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    #[default]
    Company,
    JobBoard,
}

impl SourceType {
    pub fn label(self) -> &'static str {
        match self {
            SourceType::Company => "Company",
            SourceType::JobBoard => "Job Board",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct JobSource {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub url: String,
    pub source_type: SourceType,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Insert payload after validation; `is_active` and `created_at` are left to
/// the table defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJobSource {
    pub name: String,
    pub url: String,
    pub source_type: SourceType,
}
