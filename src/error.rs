//! Error types for the planning core and the HTTP layer.
//!
//! The core only ever raises `PlannerError::InvalidArgument`; everything the
//! HTTP surface can fail with is folded into `ApiError`, which knows how to
//! render itself as the `{"success": false, ...}` envelope.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// Failure raised by the calculation core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlannerError {
    #[error("invalid argument `{field}`: {reason}")]
    InvalidArgument { field: String, reason: String },
}

impl PlannerError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        PlannerError::InvalidArgument { field: field.into(), reason: reason.into() }
    }

    pub fn field(&self) -> &str {
        match self {
            PlannerError::InvalidArgument { field, .. } => field,
        }
    }
}

pub type PlannerResult<T> = Result<T, PlannerError>;

/// One failed validation rule, reported back to the client as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError { field: field.into(), message: message.into() }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),
    #[error("invalid JSON body: {0}")]
    InvalidJson(String),
    #[error(transparent)]
    Planner(#[from] PlannerError),
    #[error("Route not found")]
    NotFound,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation(details) => json!({
                "success": false,
                "error": self.to_string(),
                "details": details,
            }),
            ApiError::Planner(PlannerError::InvalidArgument { field, reason }) => json!({
                "success": false,
                "error": self.to_string(),
                "details": [FieldError::new(field.clone(), reason.clone())],
            }),
            _ => json!({"success": false, "error": self.to_string()}),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Problems found while reading runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value `{value}`: {reason}")]
    InvalidValue { key: &'static str, value: String, reason: String },
}
