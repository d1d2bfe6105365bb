use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("Workbook error: {0}")]
    Xlsx(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to read data file".to_string(),
                )
            }
            AppError::Json(e) => {
                tracing::error!("JSON parse error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to parse match file".to_string(),
                )
            }
            AppError::Csv(e) => {
                tracing::error!("CSV parse error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to read CSV file".to_string(),
                )
            }
            AppError::Xlsx(e) => {
                tracing::error!("Workbook error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to read tournaments.xlsx".to_string(),
                )
            }
        };

        // Error body shape: {"detail": "message"}
        (status, Json(json!({ "detail": message }))).into_response()
    }
}
