//! The generic request-handling protocol shared by every resource route.
//!
//! Five operations — list, read, create, update, delete — each parameterized
//! by the resource's backend call and, where an identifier is involved, by a
//! converter from [`crate::controller::ident`]. Checks always run in the same
//! order: identifier validity, then token presence, then body shape, then the
//! upstream call. An invalid id with no token therefore answers 404, not 401.
//!
//! Whenever the upstream rejects the session token, the 401 response carries
//! the cleared token cookie; a stale token is never retried silently.

use std::future::Future;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::CookieJar;
use bytes::Bytes;
use serde_json::Value;

use crate::{
    error::Error,
    model::session::SessionToken,
    service::backend::{BackendError, CallOutcome},
};

/// Requires a token, fetches the resource collection and relays it as a 200
/// JSON array.
pub async fn list<F, Fut>(jar: CookieJar, operation: &'static str, fetch_all: F) -> Response
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<CallOutcome, BackendError>>,
{
    let Some(token) = SessionToken::read(&jar) else {
        return Error::Unauthenticated.into_response();
    };

    match fetch_all(token.into_value()).await {
        Ok(CallOutcome::Success { body, .. }) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Ok(CallOutcome::Unauthorized) => token_rejected(jar),
        Ok(CallOutcome::Failure { status }) => {
            Error::UpstreamFailed { operation, status }.into_response()
        }
        Err(source) => Error::Unreachable { operation, source }.into_response(),
    }
}

/// Fetches a single resource by identifier and relays its 200 body.
pub async fn read<I, C, F, Fut>(
    jar: CookieJar,
    raw_id: &str,
    convert: C,
    operation: &'static str,
    fetch_one: F,
) -> Response
where
    C: Fn(&str) -> Option<I>,
    F: FnOnce(String, I) -> Fut,
    Fut: Future<Output = Result<CallOutcome, BackendError>>,
{
    let Some(id) = convert(raw_id) else {
        tracing::debug!(operation, raw_id, "identifier is not convertible");
        return Error::NotFound.into_response();
    };
    let Some(token) = SessionToken::read(&jar) else {
        return Error::Unauthenticated.into_response();
    };

    match fetch_one(token.into_value(), id).await {
        Ok(CallOutcome::Success {
            body, content_type, ..
        }) => relay(StatusCode::OK, content_type, body),
        Ok(CallOutcome::Unauthorized) => token_rejected(jar),
        Ok(CallOutcome::Failure { status }) if status == StatusCode::NOT_FOUND => {
            Error::NotFound.into_response()
        }
        Ok(CallOutcome::Failure { status }) => {
            Error::UpstreamFailed { operation, status }.into_response()
        }
        Err(source) => Error::Unreachable { operation, source }.into_response(),
    }
}

/// Requires a token and a well-formed JSON body, forwards the creation
/// payload upstream and relays the upstream's 2xx status and body unchanged.
///
/// No structural validation happens here; the upstream enforces its own
/// schema and this layer stays a thin proxy.
pub async fn create<F, Fut>(
    jar: CookieJar,
    operation: &'static str,
    body: Bytes,
    create_fn: F,
) -> Response
where
    F: FnOnce(String, Value) -> Fut,
    Fut: Future<Output = Result<CallOutcome, BackendError>>,
{
    let Some(token) = SessionToken::read(&jar) else {
        return Error::Unauthenticated.into_response();
    };
    let Ok(payload) = serde_json::from_slice::<Value>(&body) else {
        return Error::MalformedBody.into_response();
    };

    match create_fn(token.into_value(), payload).await {
        Ok(CallOutcome::Success {
            status,
            body,
            content_type,
        }) => relay(status, content_type, body),
        Ok(CallOutcome::Unauthorized) => token_rejected(jar),
        Ok(CallOutcome::Failure { status }) if status == StatusCode::NOT_FOUND => {
            Error::NotFound.into_response()
        }
        Ok(CallOutcome::Failure { status }) => {
            Error::UpstreamFailed { operation, status }.into_response()
        }
        Err(source) => Error::Unreachable { operation, source }.into_response(),
    }
}

/// Same as [`create`] with an identifier converted up front.
pub async fn update<I, C, F, Fut>(
    jar: CookieJar,
    raw_id: &str,
    convert: C,
    operation: &'static str,
    body: Bytes,
    update_fn: F,
) -> Response
where
    C: Fn(&str) -> Option<I>,
    F: FnOnce(String, I, Value) -> Fut,
    Fut: Future<Output = Result<CallOutcome, BackendError>>,
{
    let Some(id) = convert(raw_id) else {
        tracing::debug!(operation, raw_id, "identifier is not convertible");
        return Error::NotFound.into_response();
    };
    let Some(token) = SessionToken::read(&jar) else {
        return Error::Unauthenticated.into_response();
    };
    let Ok(payload) = serde_json::from_slice::<Value>(&body) else {
        return Error::MalformedBody.into_response();
    };

    match update_fn(token.into_value(), id, payload).await {
        Ok(CallOutcome::Success {
            status,
            body,
            content_type,
        }) => relay(status, content_type, body),
        Ok(CallOutcome::Unauthorized) => token_rejected(jar),
        Ok(CallOutcome::Failure { status }) if status == StatusCode::NOT_FOUND => {
            Error::NotFound.into_response()
        }
        Ok(CallOutcome::Failure { status }) => {
            Error::UpstreamFailed { operation, status }.into_response()
        }
        Err(source) => Error::Unreachable { operation, source }.into_response(),
    }
}

/// Deletes a resource by identifier. Success is the literal `"OK"` marker;
/// any upstream failure status is relayed through the plain-text error
/// surface, so an already-deleted resource answers whatever the upstream
/// reports for "not found".
pub async fn delete<I, C, F, Fut>(
    jar: CookieJar,
    raw_id: &str,
    convert: C,
    operation: &'static str,
    delete_fn: F,
) -> Response
where
    C: Fn(&str) -> Option<I>,
    F: FnOnce(String, I) -> Fut,
    Fut: Future<Output = Result<CallOutcome, BackendError>>,
{
    let Some(id) = convert(raw_id) else {
        tracing::debug!(operation, raw_id, "identifier is not convertible");
        return Error::NotFound.into_response();
    };
    let Some(token) = SessionToken::read(&jar) else {
        return Error::Unauthenticated.into_response();
    };

    match delete_fn(token.into_value(), id).await {
        Ok(CallOutcome::Success { .. }) => (StatusCode::OK, Json("OK")).into_response(),
        Ok(CallOutcome::Unauthorized) => token_rejected(jar),
        Ok(CallOutcome::Failure { status }) => {
            Error::UpstreamStatus { operation, status }.into_response()
        }
        Err(source) => Error::Unreachable { operation, source }.into_response(),
    }
}

/// 401 with the token cookie cleared on the same response.
fn token_rejected(jar: CookieJar) -> Response {
    (
        SessionToken::invalidate(jar),
        Error::TokenRejected.into_response(),
    )
        .into_response()
}

/// Relays an upstream 2xx body, keeping the upstream's content type when it
/// sent one.
fn relay(status: StatusCode, content_type: Option<String>, body: Bytes) -> Response {
    let content_type = content_type.unwrap_or_else(|| "application/json".to_string());

    (status, [(header::CONTENT_TYPE, content_type)], body).into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use axum::http::{header, StatusCode};
    use axum_extra::extract::cookie::{Cookie, CookieJar};
    use bytes::Bytes;

    use super::{create, delete, list, read, update};
    use crate::{
        controller::ident,
        model::session::TOKEN_COOKIE,
        service::backend::{BackendError, CallOutcome},
    };

    fn jar_with_token() -> CookieJar {
        CookieJar::new().add(Cookie::new(TOKEN_COOKIE, "secret"))
    }

    fn ok_outcome() -> Result<CallOutcome, BackendError> {
        Ok(CallOutcome::Success {
            status: StatusCode::OK,
            body: Bytes::from_static(b"[]"),
            content_type: Some("application/json".to_string()),
        })
    }

    mod list_tests {
        use super::*;

        /// Expect 401 and no backend call when the token cookie is absent
        #[tokio::test]
        async fn missing_token_short_circuits_before_backend_call() {
            let calls = Arc::new(AtomicUsize::new(0));
            let counter = calls.clone();

            let response = list(CookieJar::new(), "test list", move |_token| {
                counter.fetch_add(1, Ordering::SeqCst);
                async move { ok_outcome() }
            })
            .await;

            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(calls.load(Ordering::SeqCst), 0);
        }

        /// Expect the JSON array relayed with status 200
        #[tokio::test]
        async fn success_relays_the_array() {
            let response = list(jar_with_token(), "test list", |_token| async move {
                Ok(CallOutcome::Success {
                    status: StatusCode::OK,
                    body: Bytes::from_static(b"[1,2]"),
                    content_type: Some("application/json".to_string()),
                })
            })
            .await;

            assert_eq!(response.status(), StatusCode::OK);
            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            assert_eq!(&body[..], b"[1,2]");
        }

        /// Expect 401 plus a cleared cookie when the upstream rejects the token
        #[tokio::test]
        async fn rejected_token_clears_the_cookie() {
            let response = list(jar_with_token(), "test list", |_token| async move {
                Ok(CallOutcome::Unauthorized)
            })
            .await;

            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            let set_cookie = response
                .headers()
                .get(header::SET_COOKIE)
                .expect("response must clear the token cookie")
                .to_str()
                .unwrap();
            assert!(set_cookie.starts_with("token=;"), "{set_cookie}");
            assert!(set_cookie.contains("1970"), "{set_cookie}");
        }

        /// Expect any other upstream failure to collapse to 500
        #[tokio::test]
        async fn other_failures_collapse_to_500() {
            let response = list(jar_with_token(), "test list", |_token| async move {
                Ok(CallOutcome::Failure {
                    status: StatusCode::CONFLICT,
                })
            })
            .await;

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    mod read_tests {
        use super::*;

        /// Expect 401 and no backend call when the token cookie is absent
        #[tokio::test]
        async fn missing_token_short_circuits_before_backend_call() {
            let calls = Arc::new(AtomicUsize::new(0));
            let counter = calls.clone();

            let response = read(
                CookieJar::new(),
                "oyster-3",
                ident::opaque_id,
                "test read",
                move |_token, _id: String| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    async move { ok_outcome() }
                },
            )
            .await;

            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(calls.load(Ordering::SeqCst), 0);
        }

        /// Expect 404 and no backend call for an unconvertible id even when
        /// no token is present
        #[tokio::test]
        async fn invalid_id_answers_404_before_the_token_check() {
            let calls = Arc::new(AtomicUsize::new(0));
            let counter = calls.clone();

            let response = read(
                CookieJar::new(),
                "",
                ident::opaque_id,
                "test read",
                move |_token, _id: String| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    async move { ok_outcome() }
                },
            )
            .await;

            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            assert_eq!(calls.load(Ordering::SeqCst), 0);
        }

        /// Expect an upstream 404 to be relayed as 404, not 500
        #[tokio::test]
        async fn upstream_404_stays_404() {
            let response = read(
                jar_with_token(),
                "oyster-3",
                ident::opaque_id,
                "test read",
                |_token, _id| async move {
                    Ok(CallOutcome::Failure {
                        status: StatusCode::NOT_FOUND,
                    })
                },
            )
            .await;

            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }

        /// Expect any other upstream failure to collapse to 500
        #[tokio::test]
        async fn other_failures_collapse_to_500() {
            let response = read(
                jar_with_token(),
                "oyster-3",
                ident::opaque_id,
                "test read",
                |_token, _id| async move {
                    Ok(CallOutcome::Failure {
                        status: StatusCode::CONFLICT,
                    })
                },
            )
            .await;

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }

        /// Expect the upstream body relayed with status 200
        #[tokio::test]
        async fn success_relays_the_body() {
            let response = read(
                jar_with_token(),
                "oyster-3",
                ident::opaque_id,
                "test read",
                |_token, _id| async move {
                    Ok(CallOutcome::Success {
                        status: StatusCode::OK,
                        body: Bytes::from_static(b"{\"id\":\"oyster-3\"}"),
                        content_type: Some("application/json".to_string()),
                    })
                },
            )
            .await;

            assert_eq!(response.status(), StatusCode::OK);
            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            assert_eq!(&body[..], b"{\"id\":\"oyster-3\"}");
        }
    }

    mod create_tests {
        use super::*;

        /// Expect an upstream 201 body to pass through unchanged
        #[tokio::test]
        async fn upstream_201_passes_through() {
            let response = create(
                jar_with_token(),
                "test create",
                Bytes::from_static(b"{\"name\":\"v\"}"),
                |_token, _payload| async move {
                    Ok(CallOutcome::Success {
                        status: StatusCode::CREATED,
                        body: Bytes::from_static(b"{\"id\":12}"),
                        content_type: Some("application/json".to_string()),
                    })
                },
            )
            .await;

            assert_eq!(response.status(), StatusCode::CREATED);
            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            assert_eq!(&body[..], b"{\"id\":12}");
        }

        /// Expect 400 for a body that is not well-formed JSON
        #[tokio::test]
        async fn malformed_body_is_rejected_before_backend_call() {
            let calls = Arc::new(AtomicUsize::new(0));
            let counter = calls.clone();

            let response = create(
                jar_with_token(),
                "test create",
                Bytes::from_static(b"not json"),
                move |_token, _payload| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    async move { ok_outcome() }
                },
            )
            .await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(calls.load(Ordering::SeqCst), 0);
        }

        /// Expect the token check to come before the body check
        #[tokio::test]
        async fn missing_token_wins_over_malformed_body() {
            let response = create(
                CookieJar::new(),
                "test create",
                Bytes::from_static(b"not json"),
                |_token, _payload| async move { ok_outcome() },
            )
            .await;

            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }

        /// Expect non-404 upstream errors to collapse to 500
        #[tokio::test]
        async fn conflict_from_upstream_collapses_to_500() {
            let response = create(
                jar_with_token(),
                "test create",
                Bytes::from_static(b"{}"),
                |_token, _payload| async move {
                    Ok(CallOutcome::Failure {
                        status: StatusCode::CONFLICT,
                    })
                },
            )
            .await;

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    mod update_tests {
        use super::*;

        /// Expect 401 and no backend call when the token cookie is absent
        #[tokio::test]
        async fn missing_token_short_circuits_before_backend_call() {
            let calls = Arc::new(AtomicUsize::new(0));
            let counter = calls.clone();

            let response = update(
                CookieJar::new(),
                "5",
                ident::numeric_id,
                "test update",
                Bytes::from_static(b"{}"),
                move |_token, _id: i64, _payload| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    async move { ok_outcome() }
                },
            )
            .await;

            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(calls.load(Ordering::SeqCst), 0);
        }

        /// Expect 404 for an unconvertible id even when no token is present
        #[tokio::test]
        async fn invalid_id_answers_404_before_the_token_check() {
            let calls = Arc::new(AtomicUsize::new(0));
            let counter = calls.clone();

            let response = update(
                CookieJar::new(),
                "abc",
                ident::numeric_id,
                "test update",
                Bytes::from_static(b"{}"),
                move |_token, _id, _payload| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    async move { ok_outcome() }
                },
            )
            .await;

            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            assert_eq!(calls.load(Ordering::SeqCst), 0);
        }

        /// Expect an upstream 404 to be relayed as 404, not 500
        #[tokio::test]
        async fn upstream_404_stays_404() {
            let response = update(
                jar_with_token(),
                "5",
                ident::numeric_id,
                "test update",
                Bytes::from_static(b"{}"),
                |_token, _id, _payload| async move {
                    Ok(CallOutcome::Failure {
                        status: StatusCode::NOT_FOUND,
                    })
                },
            )
            .await;

            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }

    mod delete_tests {
        use super::*;

        /// Expect 401 and no backend call when the token cookie is absent
        #[tokio::test]
        async fn missing_token_short_circuits_before_backend_call() {
            let calls = Arc::new(AtomicUsize::new(0));
            let counter = calls.clone();

            let response = delete(
                CookieJar::new(),
                "7",
                ident::numeric_id,
                "test delete",
                move |_token, _id: i64| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    async move { ok_outcome() }
                },
            )
            .await;

            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(calls.load(Ordering::SeqCst), 0);
        }

        /// Expect the "OK" marker for a successful deletion
        #[tokio::test]
        async fn success_answers_ok_marker() {
            let response = delete(
                jar_with_token(),
                "7",
                ident::numeric_id,
                "test delete",
                |_token, _id| async move { ok_outcome() },
            )
            .await;

            assert_eq!(response.status(), StatusCode::OK);
            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            assert_eq!(&body[..], b"\"OK\"");
        }

        /// Expect the upstream failure status to be relayed as-is
        #[tokio::test]
        async fn upstream_status_is_relayed() {
            let response = delete(
                jar_with_token(),
                "7",
                ident::numeric_id,
                "test delete",
                |_token, _id| async move {
                    Ok(CallOutcome::Failure {
                        status: StatusCode::CONFLICT,
                    })
                },
            )
            .await;

            assert_eq!(response.status(), StatusCode::CONFLICT);
        }

        /// Expect 404 and no backend call for an unconvertible id without a token
        #[tokio::test]
        async fn invalid_id_without_token_is_404_not_401() {
            let calls = Arc::new(AtomicUsize::new(0));
            let counter = calls.clone();

            let response = delete(
                CookieJar::new(),
                "abc",
                ident::numeric_id,
                "test delete",
                move |_token, _id: i64| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    async move { ok_outcome() }
                },
            )
            .await;

            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            assert_eq!(calls.load(Ordering::SeqCst), 0);
        }
    }
}
