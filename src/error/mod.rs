//! Error types for the proxy layer.
//!
//! Every failure a route handler can produce is expressed through the [`Error`]
//! enum and rendered by its `IntoResponse` implementation. Responses carry the
//! status code's canonical reason phrase as a plain-text body; upstream detail
//! is logged server-side and never forwarded to the browser. The storage-engine
//! error-code classifier consumed by the backend service process lives in
//! [`engine`].

pub mod engine;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::service::backend::BackendError;

/// Failure taxonomy shared by every route handler.
///
/// The first four variants are decided locally before any upstream I/O; the
/// remaining ones carry an upstream verdict. Variants that map to a 500 log
/// the full error when converted to a response.
#[derive(Error, Debug)]
pub enum Error {
    /// The request carries no session token cookie.
    #[error("request carries no session token")]
    Unauthenticated,
    /// The upstream backend rejected the session token.
    ///
    /// The handler returning this must also clear the token cookie on the
    /// same response; a stale token is never retried silently.
    #[error("upstream rejected the session token")]
    TokenRejected,
    /// The identifier was unconvertible, or the upstream reported a missing
    /// resource. Malformed ids are deliberately indistinguishable from absent
    /// ones at this boundary.
    #[error("resource not found")]
    NotFound,
    /// The request body is not well-formed JSON.
    #[error("request body is not well-formed JSON")]
    MalformedBody,
    /// Upstream non-2xx status relayed to the caller as-is (delete path).
    #[error("{operation}: upstream responded with status {status}")]
    UpstreamStatus {
        operation: &'static str,
        status: StatusCode,
    },
    /// Upstream non-2xx status collapsed to an internal error (create,
    /// update, list and read paths).
    #[error("{operation}: upstream responded with status {status}")]
    UpstreamFailed {
        operation: &'static str,
        status: StatusCode,
    },
    /// The upstream call itself failed (connection refused, protocol error).
    #[error("{operation}: upstream call failed: {source}")]
    Unreachable {
        operation: &'static str,
        source: BackendError,
    },
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthenticated | Self::TokenRejected => {
                api_error(StatusCode::UNAUTHORIZED)
            }
            Self::NotFound => api_error(StatusCode::NOT_FOUND),
            Self::MalformedBody => api_error(StatusCode::BAD_REQUEST),
            Self::UpstreamStatus { status, .. } => api_error(status),
            err @ (Self::UpstreamFailed { .. } | Self::Unreachable { .. }) => {
                tracing::error!("{}", err);

                api_error(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

/// Builds the uniform plain-text error (or bare status) response.
///
/// The body is the status code's canonical reason phrase terminated with a
/// line break, `Content-Type: text/plain`.
pub fn api_error(status: StatusCode) -> Response {
    let reason = status.canonical_reason().unwrap_or("Unknown Status");

    (
        status,
        [(header::CONTENT_TYPE, "text/plain")],
        format!("{reason}\r\n"),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::{header, StatusCode};

    use super::{api_error, Error};
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn api_error_body_is_reason_phrase_with_line_break() {
        let response = api_error(StatusCode::NOT_FOUND);

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Not Found\r\n");
    }

    #[test]
    fn unauthenticated_and_rejected_tokens_both_map_to_401() {
        assert_eq!(
            Error::Unauthenticated.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            Error::TokenRejected.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn upstream_status_is_relayed_while_upstream_failure_collapses() {
        let relayed = Error::UpstreamStatus {
            operation: "test delete",
            status: StatusCode::CONFLICT,
        };
        assert_eq!(relayed.into_response().status(), StatusCode::CONFLICT);

        let collapsed = Error::UpstreamFailed {
            operation: "test update",
            status: StatusCode::CONFLICT,
        };
        assert_eq!(
            collapsed.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
