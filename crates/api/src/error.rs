use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::warn;

use extract::OracleError;
use graph::StorageError;
use story::StoryError;

/// Request failures, tagged with the pipeline stage that produced them so
/// callers see where things went wrong rather than a generic error.
#[derive(Debug)]
pub enum ApiError {
    MissingProfile,
    NothingExtracted,
    Extraction(OracleError),
    Storage(StorageError),
    Generation(StoryError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    stage: &'static str,
}

impl From<OracleError> for ApiError {
    fn from(err: OracleError) -> Self {
        ApiError::Extraction(err)
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::Storage(err)
    }
}

impl From<StoryError> for ApiError {
    fn from(err: StoryError) -> Self {
        ApiError::Generation(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, stage, message) = match &self {
            ApiError::MissingProfile => (
                StatusCode::BAD_REQUEST,
                "profile",
                "user info is missing, store the user profile first".to_string(),
            ),
            ApiError::NothingExtracted => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "extraction",
                "no meaningful data extracted".to_string(),
            ),
            ApiError::Extraction(err) => (StatusCode::BAD_GATEWAY, "extraction", err.to_string()),
            ApiError::Storage(err) => (StatusCode::BAD_GATEWAY, "storage", err.to_string()),
            ApiError::Generation(StoryError::NoData) => (
                StatusCode::NOT_FOUND,
                "generation",
                StoryError::NoData.to_string(),
            ),
            ApiError::Generation(err) => (StatusCode::BAD_GATEWAY, "generation", err.to_string()),
        };

        warn!(stage, error = %message, "request failed");

        (
            status,
            Json(ErrorBody {
                error: message,
                stage,
            }),
        )
            .into_response()
    }
}
