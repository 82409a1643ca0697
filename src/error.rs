use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Message returned in the body of every 404 response.
pub const NOT_FOUND_MESSAGE: &str = "User not found";

#[derive(Debug, Error)]
pub enum AppError {
    /// The requested id is absent from the active backend.
    #[error("User not found")]
    NotFound,

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::NotFound => json!({ "message": NOT_FOUND_MESSAGE }),
            AppError::Database(_) | AppError::Internal(_) => {
                tracing::error!("Request failed: {}", self);
                json!({ "error": self.to_string() })
            }
        };
        (status, Json(body)).into_response()
    }
}
