//! Application error type and its HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

use crate::utils::db_error::{is_foreign_key_violation, is_unique_violation_on_code};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned to API clients.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors surfaced by services and repositories.
///
/// | Variant | HTTP status |
/// |---|---|
/// | `Validation` | 400 |
/// | `NotFound` | 404 |
/// | `Conflict` | 409 |
/// | `Allocation` | 500 |
/// | `Store` | 500 |
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    /// A storage-level uniqueness violation. [`crate::application::services::LinkRegistry`]
    /// treats it as a code collision and retries.
    #[error("{message}")]
    Conflict { message: String, details: Value },
    /// Code allocation ran out of attempts.
    #[error("{message}")]
    Allocation { message: String, details: Value },
    #[error("{message}")]
    Store { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn allocation(message: impl Into<String>, details: Value) -> Self {
        Self::Allocation {
            message: message.into(),
            details,
        }
    }
    pub fn store(message: impl Into<String>, details: Value) -> Self {
        Self::Store {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Allocation { .. } | AppError::Store { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Allocation { message, details } => ("allocation_error", message, details),
            AppError::Store { message, details } => ("store_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(errors.field_errors()).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Invalid request format", details)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

/// Maps a SQLx error onto the application taxonomy.
///
/// - unique violation on `links.code` becomes [`AppError::Conflict`]
/// - foreign-key violation (a click on a missing link) becomes [`AppError::Validation`]
/// - everything else becomes [`AppError::Store`] and is logged
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if is_unique_violation_on_code(&e) {
        return AppError::conflict(
            "Short code already exists",
            json!({ "constraint": "links_code_key" }),
        );
    }

    if is_foreign_key_violation(&e) {
        return AppError::bad_request("Referenced link does not exist", json!({}));
    }

    tracing::error!(error = %e, "Database error");
    AppError::store("Database error", json!({}))
}
