use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload")]
    MalformedPayload,

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Internal error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedPayload | AppError::MissingField(_) | AppError::InvalidId(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            AppError::Database(e) => {
                error!("Database failure: {e}");
                json!({ "error": "Internal error", "details": e.to_string() })
            }
            other => json!({ "error": other.to_string() }),
        };

        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;
    use axum::http::StatusCode;

    #[test]
    fn test_validation_errors_are_400() {
        assert_eq!(AppError::MalformedPayload.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::MissingField("name").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidId("abc".to_string()).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_is_404() {
        assert_eq!(AppError::NotFound("Menu item").status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_errors_are_500() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
