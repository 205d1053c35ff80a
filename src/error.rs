//! Application error type and its HTTP representation.
//!
//! Every layer returns [`AppError`]; handlers propagate it with `?` and axum
//! turns it into a JSON response through [`IntoResponse`].
//!
//! # Response bodies
//!
//! - `400`, `404`, `500` - `{"error": "<message>"}`
//! - `422` - `{"errors": {"<field>": "<message>"}}`

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::domain::pagination::RangeError;

/// Body for errors carrying a single message.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body for errors keyed by request field.
#[derive(Debug, Serialize)]
pub struct FieldErrorsResponse {
    pub errors: BTreeMap<String, String>,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed client input (bad JSON, bad id, bad range).
    #[error("{message}")]
    BadRequest { message: String },

    /// Field-level validation failures.
    #[error("validation failed on {} field(s)", errors.len())]
    Validation { errors: BTreeMap<String, String> },

    #[error("{message}")]
    NotFound { message: String },

    /// Unique constraint violation, reported against the offending field.
    #[error("{field}: {message}")]
    Conflict { field: String, message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Conflict {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Replaces the message of an [`AppError::Internal`] with a description of
    /// the operation that failed. Other variants pass through untouched.
    pub fn describe(self, message: &str) -> Self {
        match self {
            Self::Internal { .. } => Self::internal(message),
            other => other,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Validation { .. } | Self::Conflict { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            AppError::Validation { errors } => {
                (status, Json(FieldErrorsResponse { errors })).into_response()
            }
            AppError::Conflict { field, message } => {
                let errors = BTreeMap::from([(field, message)]);
                (status, Json(FieldErrorsResponse { errors })).into_response()
            }
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::Internal { message } => {
                (status, Json(ErrorResponse { error: message })).into_response()
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<RangeError> for AppError {
    fn from(e: RangeError) -> Self {
        AppError::bad_request(format!("Invalid range parameter: {e}"))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let errors = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                errs.first()
                    .map(|err| (field.to_string(), describe_field_error(&field, err)))
            })
            .collect();

        AppError::Validation { errors }
    }
}

/// Maps database errors onto the application taxonomy.
///
/// Unique violations become [`AppError::Conflict`]; anything else is logged
/// and reported as an internal error.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return match db.constraint() {
            Some(constraint) if constraint.contains("short_name") => {
                AppError::conflict("short_name", "short name already in use")
            }
            _ => AppError::conflict("value", "value already in use"),
        };
    }

    tracing::error!(error = %e, "Database error");
    AppError::internal("Database error")
}

fn describe_field_error(field: &str, err: &ValidationError) -> String {
    match err.code.as_ref() {
        "required" => format!("{field} is required"),
        "url" => "must be a valid URL".to_string(),
        "length" => describe_length_error(err),
        "regex" => "must contain only letters, digits, '-' or '_'".to_string(),
        code => format!("validation failed on '{code}' tag"),
    }
}

fn describe_length_error(err: &ValidationError) -> String {
    let len = err
        .params
        .get("value")
        .and_then(Value::as_str)
        .map(|s| s.chars().count() as u64);
    let min = err.params.get("min").and_then(Value::as_u64);
    let max = err.params.get("max").and_then(Value::as_u64);

    match (len, min, max) {
        (Some(len), Some(min), _) if len < min => format!("must be at least {min} characters"),
        (_, _, Some(max)) => format!("must be at most {max} characters"),
        (_, Some(min), None) => format!("must be at least {min} characters"),
        _ => "has an invalid length".to_string(),
    }
}
