use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use investo_core::error::CoreError;
use investo_db::DbError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for validation failures and [`DbError`] for remote
/// backend failures. Implements [`IntoResponse`] to produce the
/// `{ "data": null, "error": ..., "code": ... }` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `investo_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A data-access error from `investo_db`.
    #[error(transparent)]
    Db(#[from] DbError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The body, query string or path could not be parsed.
    ///
    /// Keeps the extractor's status (400, 415 or 422).
    #[error("Invalid request: {message}")]
    InvalidRequest { status: StatusCode, message: String },
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Db(err) => classify_db_error(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InvalidRequest { status, message } => {
                (*status, "INVALID_REQUEST", message.clone())
            }
        };

        let body = json!({
            "data": null,
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a data-access error into an HTTP status, error code, and message.
///
/// The remote error text is passed through unchanged.
/// - Upstream 4xx keeps its status.
/// - Upstream 5xx maps to 502.
/// - Transport failures map to 502.
fn classify_db_error(err: &DbError) -> (StatusCode, &'static str, String) {
    match err {
        DbError::Api { status, body } => {
            let upstream = StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY);
            if upstream.is_client_error() {
                tracing::warn!(status, body = %body, "Remote backend rejected request");
                (upstream, "UPSTREAM_REJECTED", body.clone())
            } else {
                tracing::error!(status, body = %body, "Remote backend error");
                (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", body.clone())
            }
        }
        DbError::Request(inner) => {
            tracing::error!(error = %inner, "Remote backend unreachable");
            (StatusCode::BAD_GATEWAY, "UPSTREAM_UNAVAILABLE", err.to_string())
        }
    }
}
