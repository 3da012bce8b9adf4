//! API error types and helpers.
//!
//! # Purpose and responsibility
//! Centralizes HTTP error response construction to keep error shapes uniform
//! across gateway endpoints.
//!
//! # Where it fits in the gateway
//! All API handlers use these helpers to return structured errors to clients
//! and to translate store and upstream failures into HTTP responses. Refresh
//! cycle failures never pass through here; they are logged and swallowed
//! before a handler sees them.
//!
//! # Key invariants and assumptions
//! - Error responses must include a stable `code` and human-readable `message`.
//! - Status codes must align with the error category.
//! - Bad client input (non-numeric ids, malformed bodies) maps to 400 before
//!   any upstream traffic happens.
use crate::api::types::ErrorResponse;
use crate::store::StoreError;
use crate::upstream::UpstreamError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Structured API error returned by handlers.
///
/// # What it does
/// Couples an HTTP status code with a JSON error body.
///
/// # Why it exists
/// Provides a single error type that implements `IntoResponse` for Axum.
///
/// # Invariants
/// - `status` must match the semantics of `body.code`.
///
/// # Example
/// ```rust
/// use axum::http::StatusCode;
/// use entrega::api::error::ApiError;
/// use entrega::api::types::ErrorResponse;
///
/// let err = ApiError {
///     status: StatusCode::NOT_FOUND,
///     body: ErrorResponse {
///         code: "not_found".to_string(),
///         message: "missing".to_string(),
///         request_id: None,
///     },
/// };
/// ```
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Build a 404 Not Found error.
///
/// # What it does
/// Returns an `ApiError` with code `not_found` and the provided message.
///
/// # Errors
/// - Does not fail.
pub fn api_not_found(message: &str) -> ApiError {
    // Return a consistent not-found error shape.
    ApiError {
        status: StatusCode::NOT_FOUND,
        body: ErrorResponse {
            code: "not_found".to_string(),
            message: message.to_string(),
            request_id: None,
        },
    }
}

/// Build a 500 Internal Server Error from a store error.
///
/// # What it does
/// Logs the store error and returns a generic internal error response.
///
/// # Errors
/// - Does not fail.
pub fn api_internal(message: &str, err: &StoreError) -> ApiError {
    // Log internal details server-side for debugging; return generic message.
    tracing::error!(error = ?err, "order storage error");
    ApiError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: ErrorResponse {
            code: "internal".to_string(),
            message: message.to_string(),
            request_id: None,
        },
    }
}

/// Build a 500 Internal Server Error without a store error.
///
/// # What it does
/// Returns a generic internal error response with the provided message.
///
/// # Errors
/// - Does not fail.
pub fn api_internal_message(message: &str) -> ApiError {
    // Internal error without a concrete store error to log.
    ApiError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: ErrorResponse {
            code: "internal".to_string(),
            message: message.to_string(),
            request_id: None,
        },
    }
}

/// Build a 400 Bad Request validation error.
///
/// # What it does
/// Returns an `ApiError` with code `validation_error`.
///
/// # Errors
/// - Does not fail.
pub fn api_validation_error(message: &str) -> ApiError {
    // Client input failed validation or was malformed.
    ApiError {
        status: StatusCode::BAD_REQUEST,
        body: ErrorResponse {
            code: "validation_error".to_string(),
            message: message.to_string(),
            request_id: None,
        },
    }
}

/// Build a 502 Bad Gateway error from an upstream failure.
///
/// # What it does
/// Logs the upstream error and returns a response whose code tells transport
/// failures (`upstream_unavailable`) apart from non-200 upstream answers
/// (`upstream_status`). The error text is included in the message; the
/// upstream is a public data source, so there is nothing sensitive to hide.
///
/// # Errors
/// - Does not fail.
pub fn api_upstream(message: &str, err: &UpstreamError) -> ApiError {
    tracing::error!(error = %err, "upstream fetch failed");
    let code = match err {
        UpstreamError::Unavailable(_) => "upstream_unavailable",
        UpstreamError::Status { .. } => "upstream_status",
    };
    ApiError {
        status: StatusCode::BAD_GATEWAY,
        body: ErrorResponse {
            code: code.to_string(),
            message: format!("{message}: {err}"),
            request_id: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_helpers_build_expected_codes() {
        let not_found = api_not_found("missing");
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);
        assert_eq!(not_found.body.code, "not_found");

        let internal = api_internal_message("oops");
        assert_eq!(internal.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.body.code, "internal");

        let validation = api_validation_error("bad");
        assert_eq!(validation.status, StatusCode::BAD_REQUEST);
        assert_eq!(validation.body.code, "validation_error");
    }

    #[test]
    fn api_internal_logs_and_wraps_store_error() {
        let err = StoreError::Unexpected(anyhow::anyhow!("boom"));
        let api = api_internal("storage failed", &err);
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.body.code, "internal");
        assert_eq!(api.body.message, "storage failed");
    }

    #[test]
    fn api_upstream_distinguishes_status_from_transport() {
        let status_err = UpstreamError::Status {
            status: StatusCode::NOT_FOUND,
        };
        let api = api_upstream("user fetch failed", &status_err);
        assert_eq!(api.status, StatusCode::BAD_GATEWAY);
        assert_eq!(api.body.code, "upstream_status");
        assert!(api.body.message.contains("404"));
    }
}
