use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to load seed data from {path:?}: {cause}")]
    DataLoad { path: PathBuf, cause: String },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Method not allowed: {message}")]
    MethodNotAllowed { message: String },

    #[error("No {collection} id left: collection length exceeds the Int range")]
    IdSpaceExhausted { collection: &'static str },
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            ApiError::DataLoad { path, cause } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "data_load_failed".to_string(),
                    message: format!("Failed to load {}: {}", path.display(), cause),
                },
            ),
            ApiError::InvalidRequest { message } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "invalid_request".to_string(),
                    message: message.clone(),
                },
            ),
            ApiError::MethodNotAllowed { message } => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorResponse {
                    error: "method_not_allowed".to_string(),
                    message: message.clone(),
                },
            ),
            ApiError::IdSpaceExhausted { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "id_space_exhausted".to_string(),
                    message: self.to_string(),
                },
            ),
        };

        (status, Json(error_response)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
