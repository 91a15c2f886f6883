use crate::repositories::RepositoryError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("user with this email already exists.")]
    Conflict,
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{0}")]
    Database(String),
    #[error("database unavailable: {0}")]
    Unavailable(String),
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicate(_) => AppError::Conflict,
            RepositoryError::Unavailable(reason) => AppError::Unavailable(reason),
            RepositoryError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Conflict | AppError::InvalidRequest(_) | AppError::Database(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
