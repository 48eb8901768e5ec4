use crate::dto::job_source_dto::CreateJobSourcePayload;
use crate::models::job_source::SourceType;

/// Editable state of the "add job source" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceForm {
    pub name: String,
    pub url: String,
    pub source_type: SourceType,
}

impl SourceForm {
    pub fn new(name: impl Into<String>, url: impl Into<String>, source_type: SourceType) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            source_type,
        }
    }

    pub fn payload(&self) -> CreateJobSourcePayload {
        CreateJobSourcePayload {
            name: self.name.clone(),
            url: self.url.clone(),
            source_type: self.source_type,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
