//! Error handling - maps application failures onto HTTP responses.
//!
//! Validation failures answer 400 with one message per violated field
//! (express-validator style `{"errors": [...]}` body). A missing profile is
//! also a 400, a deliberately non-standard status kept for client
//! compatibility. Store failures are a generic 500.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use devlink_shared::{ErrorResponse, FieldError, ValidationErrors};
use std::fmt;

use devlink_core::error::RepoError;
use devlink_core::ports::GithubError;

/// Application-level error type that converts to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Per-field validation failures, answered as 400.
    Validation(Vec<FieldError>),
    /// Business-level rejection with a message, answered as 400. Also used
    /// for the "no profile" replies.
    BadRequest(String),
    Unauthorized,
    Forbidden(String),
    NotFound(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(errors) => write!(f, "Validation errors: {errors:?}"),
            AppError::BadRequest(msg) => write!(f, "Bad request: {msg}"),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {msg}"),
            AppError::NotFound(msg) => write!(f, "Not found: {msg}"),
            AppError::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(errors) => HttpResponse::BadRequest().json(ValidationErrors {
                errors: errors.clone(),
            }),
            AppError::BadRequest(detail) => {
                HttpResponse::BadRequest().json(ErrorResponse::bad_request(detail))
            }
            AppError::Unauthorized => {
                HttpResponse::Unauthorized().json(ErrorResponse::unauthorized())
            }
            AppError::Forbidden(detail) => {
                HttpResponse::Forbidden().json(ErrorResponse::forbidden(detail))
            }
            AppError::NotFound(detail) => {
                HttpResponse::NotFound().json(ErrorResponse::not_found(detail))
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {detail}");
                HttpResponse::InternalServerError().json(ErrorResponse::internal_error())
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Constraint(msg) => AppError::BadRequest(msg),
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {msg}");
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {msg}");
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<GithubError> for AppError {
    fn from(err: GithubError) -> Self {
        match err {
            GithubError::NoProfile => AppError::NotFound("No Github profile found".to_string()),
            GithubError::Transport(msg) => {
                tracing::error!("Github request error: {msg}");
                AppError::Internal("Github request failed".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_answers_400() {
        let err = AppError::Validation(vec![FieldError::new("status", "Status is required")]);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_profile_answers_400_not_404() {
        let err = AppError::BadRequest("Profile not found".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn github_miss_answers_404() {
        let err = AppError::from(GithubError::NoProfile);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_failures_answer_500() {
        let err = AppError::from(RepoError::Query("boom".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
