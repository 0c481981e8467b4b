use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::upstream::UpstreamError;

pub enum ApiError {
    /// Reference station could not be resolved
    ReferenceUnavailable(UpstreamError),
    /// Candidate feed could not be fetched or parsed
    CandidatesUnavailable(UpstreamError),
    /// Search ran but no candidate survived parsing
    NoCandidates,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::ReferenceUnavailable(e) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::with_message(
                    "buoy_coordinates_not_found",
                    &e.to_string(),
                )),
            )
                .into_response(),
            ApiError::CandidatesUnavailable(e) => (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::with_message(
                    "balloon_data_not_found",
                    &e.to_string(),
                )),
            )
                .into_response(),
            ApiError::NoCandidates => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse::new("no_valid_candidates")),
            )
                .into_response(),
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
    pub fn new(error: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: None,
        }
    }

    pub fn with_message(error: &str, message: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: Some(message.to_string()),
        }
    }
}
