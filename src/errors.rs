//! Error handling for the API.
//!
//! Outcomes are explicit `Result`s checked by the caller; nothing is caught.
//! Client-facing messages are sanitized: database errors are logged with the
//! `tracing` crate server-side and never reach the response body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use std::fmt;

/// API error type mapping to the HTTP status codes the service emits.
#[derive(Debug)]
pub enum ApiError {
    /// 404 Not Found - no record with the requested identifier (including a
    /// record that vanished between load and commit of an update).
    NotFound {
        /// Resource type, e.g. "Animal".
        resource: String,
        /// Identifier that wasn't found.
        id: Option<String>,
    },

    /// 400 Bad Request - malformed body, or a path/body identifier mismatch.
    BadRequest {
        /// User-facing error message.
        message: String,
    },

    /// 409 Conflict - persisted state contradicts the request at commit time.
    Conflict {
        /// User-facing error message.
        message: String,
    },

    /// 500 Internal Server Error - any other persistence failure. Details
    /// are logged, not exposed.
    Database {
        /// User-facing generic message.
        message: String,
        /// Internal error (logged, not sent to the client).
        internal: DbErr,
    },
}

impl ApiError {
    /// Create a 404 Not Found error.
    pub fn not_found(resource: impl Into<String>, id: Option<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id,
        }
    }

    /// Create a 400 Bad Request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a 409 Conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a 500 error from a database failure. The `DbErr` is logged
    /// but never sent to the client.
    pub fn database(err: DbErr) -> Self {
        Self::Database {
            message: "A database error occurred".to_string(),
            internal: err,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn user_message(&self) -> String {
        match self {
            Self::NotFound { resource, id } => {
                if let Some(id) = id {
                    format!("{resource} with ID '{id}' not found")
                } else {
                    format!("{resource} not found")
                }
            }
            Self::BadRequest { message } | Self::Conflict { message } => message.clone(),
            Self::Database { message, .. } => message.clone(),
        }
    }

    /// Log internal error details; only `tracing` subscribers see these.
    fn log_internal(&self) {
        match self {
            Self::Database { internal, .. } => {
                tracing::error!(error = ?internal, "Database error occurred");
            }
            _ => {
                tracing::debug!(
                    error = %self.user_message(),
                    status = %self.status_code(),
                    "API error"
                );
            }
        }
    }
}

/// Error body sent to clients (sanitized).
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log_internal();

        let status = self.status_code();
        let body = ErrorResponse {
            error: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for ApiError {}

/// Convert a Sea-ORM `DbErr` into an `ApiError`.
///
/// `DbErr::RecordNotFound` becomes 404; every other variant becomes a
/// sanitized 500. Conflict-shaped outcomes (`RecordNotUpdated`, unique key
/// violations) are mapped where the commit happens, in the storage accessor,
/// so their domain meaning isn't decided here.
impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        match &err {
            DbErr::RecordNotFound(msg) => {
                let resource = msg.split_whitespace().next().unwrap_or("Resource");
                Self::NotFound {
                    resource: resource.to_string(),
                    id: None,
                }
            }
            _ => Self::Database {
                message: "A database error occurred".to_string(),
                internal: err,
            },
        }
    }
}
