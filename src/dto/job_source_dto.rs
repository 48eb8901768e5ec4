use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::job_source::{JobSource, NewJobSource, SourceType};

pub const CODE_MISSING_FIELD: &str = "missing_field";
pub const CODE_INVALID_URL: &str = "invalid_url";

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(CODE_MISSING_FIELD));
    }
    Ok(())
}

fn absolute_url(value: &str) -> Result<(), ValidationError> {
    non_blank(value)?;
    match url::Url::parse(value.trim()) {
        Ok(_) => Ok(()),
        Err(err) => {
            let mut error = ValidationError::new(CODE_INVALID_URL);
            error.message = Some(err.to_string().into());
            Err(error)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateJobSourcePayload {
    #[validate(custom(function = "non_blank"))]
    pub name: String,
    #[validate(custom(function = "absolute_url"))]
    pub url: String,
    #[serde(default)]
    pub source_type: SourceType,
}

impl CreateJobSourcePayload {
    pub fn into_new_source(self) -> NewJobSource {
        NewJobSource {
            name: self.name.trim().to_string(),
            url: self.url.trim().to_string(),
            source_type: self.source_type,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JobSourceListResponse {
    pub total: usize,
    pub items: Vec<JobSource>,
}

impl From<Vec<JobSource>> for JobSourceListResponse {
    fn from(items: Vec<JobSource>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}
