use crate::error::GradeError;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use tracing::error;

/// HTTP-facing error. Internal detail is logged, never returned.
#[derive(Debug)]
pub enum ApiError {
    /// Missing URL parameter
    MissingUrl,
    /// URL failed the locator pattern
    InvalidUrl(String),
    /// Anything else
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

impl ApiError {
    fn public_message(&self) -> &'static str {
        match self {
            Self::MissingUrl => "Missing URL parameter",
            Self::InvalidUrl(_) => "Invalid repository URL",
            Self::Internal(_) => "Internal server error",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingUrl => write!(f, "Missing URL parameter"),
            Self::InvalidUrl(url) => write!(f, "Invalid repository URL: {url}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        let body = ErrorResponse {
            error: self.public_message(),
        };
        match self {
            Self::MissingUrl | Self::InvalidUrl(_) => HttpResponse::BadRequest().json(body),
            Self::Internal(_) => HttpResponse::InternalServerError().json(body),
        }
    }
}

impl From<GradeError> for ApiError {
    fn from(err: GradeError) -> Self {
        match err {
            GradeError::MissingLocator => Self::MissingUrl,
            GradeError::InvalidLocator(url) => Self::InvalidUrl(url),
            other => {
                error!("Error processing request: {}", other);
                Self::Internal(other.to_string())
            }
        }
    }
}
