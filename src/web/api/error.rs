use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::preference::PreferenceError;
use crate::telemetry::Link;

#[derive(Debug)]
pub enum ApiError {
    NoSnapshot(Link),
    Preference(PreferenceError),
    Task(tokio::task::JoinError),
}

impl From<PreferenceError> for ApiError {
    fn from(e: PreferenceError) -> Self {
        ApiError::Preference(e)
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Task(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NoSnapshot(link) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::with_message(
                    "no_snapshot",
                    &format!("{} feed has not produced a snapshot yet", link),
                )),
            )
                .into_response(),
            ApiError::Preference(e) => {
                log::error!("Preference store failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::with_message(
                        "preference_error",
                        &e.to_string(),
                    )),
                )
                    .into_response()
            }
            ApiError::Task(e) => {
                log::error!("Background task failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::with_message("task_failed", &e.to_string())),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn with_message(error: &str, message: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: Some(message.to_string()),
        }
    }
}
