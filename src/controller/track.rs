use axum::{extract::State, response::Response};
use axum_extra::extract::CookieJar;

use crate::{controller::generic, model::app::AppState};

pub static TRACK_TAG: &str = "track";

/// List all tracks
#[utoipa::path(
    get,
    path = "/webapi/tracks/list",
    tag = TRACK_TAG,
    responses(
        (status = 200, description = "JSON array of tracks"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn list(State(state): State<AppState>, jar: CookieJar) -> Response {
    generic::list(jar, "track list", move |token| async move {
        state.backend.list_tracks(&token).await
    })
    .await
}

/// Upload a new track
#[utoipa::path(
    post,
    path = "/webapi/tracks/new",
    tag = TRACK_TAG,
    responses(
        (status = 200, description = "Upstream response relayed"),
        (status = 400, description = "Body is not well-formed JSON"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn new(State(state): State<AppState>, jar: CookieJar, body: String) -> Response {
    generic::create(jar, "track upload", body.into(), move |token, payload| async move {
        state.backend.create_track(&token, &payload).await
    })
    .await
}
