//! Classifier for the storage engine's structured error codes.
//!
//! The upstream backend's relational store reports failures as `P`-prefixed
//! codes grouped in families: `P1xxx` connection/availability, `P2xxx`
//! request-time, `P3xxx` migration, `P4xxx` introspection, `P5xxx` engine
//! internals. [`classify`] partitions them into the taxonomy below, and
//! [`EngineError`] is the response type the backend service process mounts
//! ahead of its default error handling so that engine failures surface as
//! definite status codes instead of opaque 500s.

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::error::api_error;

/// Request-time codes describing a missing row or relation.
const NOT_FOUND_CODES: [&str; 5] = ["P2001", "P2018", "P2021", "P2022", "P2025"];

/// Request-time codes describing a foreign-key or required-relation violation.
const CONFLICT_CODES: [&str; 2] = ["P2003", "P2014"];

/// Request-time codes describing an operation invalid for the engine's
/// current state (aggregation/raw-query misuse, transaction errors).
const INVALID_STATE_CODES: [&str; 7] = [
    "P2017", "P2023", "P2024", "P2028", "P2030", "P2031", "P2034",
];

/// The code flagging a feature the engine explicitly does not support.
const UNSUPPORTED_CODE: &str = "P5004";

/// Category of a storage-engine error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineClass {
    /// Engine unreachable or connection-level failure.
    Unavailable,
    /// Referenced row or dependent record missing.
    NotFound,
    /// Constraint violation.
    Conflict,
    /// Operation invalid for the engine's current state.
    InvalidState,
    /// Any other request-time code; the safe default for codes this
    /// classifier does not know.
    BadRequest,
    /// Engine-internal, migration or introspection failure.
    Internal,
    /// Feature explicitly flagged as not implemented.
    Unsupported,
    /// Not an engine code at all. The caller must route this to its generic
    /// failure path; it is never mapped to a status here.
    Unhandled,
}

impl EngineClass {
    /// HTTP status for the class, or `None` for [`EngineClass::Unhandled`].
    pub fn status(self) -> Option<StatusCode> {
        match self {
            Self::Unavailable | Self::InvalidState | Self::Internal => {
                Some(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::NotFound => Some(StatusCode::NOT_FOUND),
            Self::Conflict => Some(StatusCode::CONFLICT),
            Self::BadRequest => Some(StatusCode::BAD_REQUEST),
            Self::Unsupported => Some(StatusCode::NOT_IMPLEMENTED),
            Self::Unhandled => None,
        }
    }
}

/// Classifies a storage-engine error code by family.
pub fn classify(code: &str) -> EngineClass {
    if code.starts_with("P1") {
        return EngineClass::Unavailable;
    }
    if NOT_FOUND_CODES.contains(&code) {
        return EngineClass::NotFound;
    }
    if CONFLICT_CODES.contains(&code) {
        return EngineClass::Conflict;
    }
    if INVALID_STATE_CODES.contains(&code) {
        return EngineClass::InvalidState;
    }
    if code.starts_with("P2") {
        return EngineClass::BadRequest;
    }
    if code.starts_with("P3") || code.starts_with("P4") {
        return EngineClass::Internal;
    }
    if code == UNSUPPORTED_CODE {
        return EngineClass::Unsupported;
    }
    if code.starts_with("P5") {
        return EngineClass::Internal;
    }

    EngineClass::Unhandled
}

/// A storage-engine failure as caught by the backend service's error layer.
#[derive(Error, Debug, Clone)]
#[error("storage engine reported error code {code}")]
pub struct EngineError {
    /// The engine's structured error code, e.g. `P2025`.
    pub code: String,
}

impl EngineError {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl IntoResponse for EngineError {
    fn into_response(self) -> Response {
        match classify(&self.code).status() {
            Some(status) => {
                if status.is_server_error() {
                    tracing::error!("{}", self);
                }

                api_error(status)
            }
            None => {
                // Unrecognized code: generic failure path, nothing swallowed.
                tracing::error!("unclassified engine error: {}", self);

                api_error(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

/// Middleware form of the classifier, mounted ahead of the default error
/// handling.
///
/// A handler that catches an engine failure tags its response by inserting
/// the [`EngineError`] into the response extensions; this layer rewrites such
/// responses to the classified status. Untagged responses pass through
/// untouched.
pub async fn map_engine_errors(request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    match response.extensions().get::<EngineError>() {
        Some(engine_error) => engine_error.clone().into_response(),
        None => response,
    }
}
