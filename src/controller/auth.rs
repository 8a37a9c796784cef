use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::{
    error::api_error,
    model::{app::AppState, auth::AuthenticationRequest, session::SessionToken},
};

pub static AUTH_TAG: &str = "auth";

/// Handle submissions of the login form
///
/// Consumes the entered credentials as `application/json` with the fields
/// `username` and `password`, forwards them to the upstream login endpoint
/// and, on success, issues the session cookie.
///
/// # Responses
/// - 307 (Temporary Redirect): Login succeeded, session cookie issued
/// - 400 (Bad Request): Missing or malformed credentials
/// - 401 (Unauthorized): The upstream rejected the credentials
/// - 502 (Bad Gateway): The upstream could not be reached
#[utoipa::path(
    post,
    path = "/webapi/auth",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Login succeeded, session cookie issued"),
        (status = 400, description = "Missing or malformed credentials"),
        (status = 401, description = "Credentials rejected"),
        (status = 502, description = "Authentication backend unreachable"),
    ),
)]
pub async fn login(State(state): State<AppState>, jar: CookieJar, body: String) -> Response {
    let Ok(credentials) = serde_json::from_slice::<AuthenticationRequest>(body.as_bytes()) else {
        return api_error(StatusCode::BAD_REQUEST);
    };
    if credentials.username.is_empty() || credentials.password.is_empty() {
        return api_error(StatusCode::BAD_REQUEST);
    }

    match state.backend.authenticate(&credentials).await {
        Ok(Some(token)) => {
            tracing::info!(username = %credentials.username, "login successful");

            (SessionToken::issue(jar, token), Redirect::temporary("/")).into_response()
        }
        Ok(None) => {
            tracing::info!(username = %credentials.username, "login failed");

            api_error(StatusCode::UNAUTHORIZED)
        }
        Err(err) => {
            tracing::error!(username = %credentials.username, error = %err, "cannot reach authentication backend");

            api_error(StatusCode::BAD_GATEWAY)
        }
    }
}

/// Logs the operator out by clearing the session cookie
///
/// The token is opaque to this layer, so logout is purely a cookie deletion;
/// the upstream keeps its own notion of token validity.
///
/// # Responses
/// - 307 (Temporary Redirect): Cookie cleared, redirect to the login page
#[utoipa::path(
    post,
    path = "/webapi/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Session cookie cleared"),
    ),
)]
pub async fn logout(jar: CookieJar) -> Response {
    (SessionToken::invalidate(jar), Redirect::temporary("/")).into_response()
}
