use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use validator::ValidationErrors;

use crate::dto::job_source_dto::{CODE_INVALID_URL, CODE_MISSING_FIELD};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Missing fields: name and url are required")]
    MissingFields,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Storage-side failures whose details are never shown to the user.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Error::Database(_) | Error::Migrate(_) | Error::Internal(_) | Error::Io(_)
        )
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self {
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            Error::NotAuthenticated => (StatusCode::UNAUTHORIZED, "not_authenticated".to_string()),
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Error::MissingFields => (StatusCode::BAD_REQUEST, "missing_fields".to_string()),
            Error::InvalidUrl(_) => (StatusCode::BAD_REQUEST, "invalid_url".to_string()),
            Error::SubmissionInFlight => (StatusCode::CONFLICT, "submission_in_flight".to_string()),
            Error::Json(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            err if err.is_storage() => {
                tracing::error!(error = %err, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "storage_error".to_string(),
                )
            }
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred".to_string(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("Resource not found".to_string()),
            other => Error::Database(other),
        }
    }
}

/// Blank required fields win over a malformed URL, so an empty url reports
/// as missing rather than invalid.
impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut codes = field_errors.values().flat_map(|errs| errs.iter());

        if codes.clone().any(|e| e.code == CODE_MISSING_FIELD) {
            return Error::MissingFields;
        }
        match codes.find(|e| e.code == CODE_INVALID_URL) {
            Some(err) => Error::InvalidUrl(
                err.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "malformed url".to_string()),
            ),
            None => Error::BadRequest(errors.to_string()),
        }
    }
}
