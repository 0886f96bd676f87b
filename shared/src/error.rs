use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("forwarding to the form service failed")]
    ForwardingError(#[from] reqwest::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ForwardingError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!(
            error.cause_chain = ?self,
            error.message = %self,
            "Unexpected error happened"
        );

        status_code.into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
