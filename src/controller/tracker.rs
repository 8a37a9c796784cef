use axum::{
    extract::{Path, State},
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::{
    controller::{generic, ident},
    model::app::AppState,
};

pub static TRACKER_TAG: &str = "tracker";

/// List all trackers
#[utoipa::path(
    get,
    path = "/webapi/tracker/list",
    tag = TRACKER_TAG,
    responses(
        (status = 200, description = "JSON array of trackers"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn list(State(state): State<AppState>, jar: CookieJar) -> Response {
    generic::list(jar, "tracker list", move |token| async move {
        state.backend.list_trackers(&token).await
    })
    .await
}

/// Fetch a single tracker by its id
#[utoipa::path(
    get,
    path = "/webapi/tracker/read/{trackerID}",
    tag = TRACKER_TAG,
    params(("trackerID" = String, Path, description = "Tracker to fetch")),
    responses(
        (status = 200, description = "The tracker as JSON"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 404, description = "Tracker id empty or unknown upstream"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn read(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(tracker_id): Path<String>,
) -> Response {
    generic::read(
        jar,
        &tracker_id,
        ident::opaque_id,
        "tracker read",
        move |token, id| async move { state.backend.get_tracker(&token, &id).await },
    )
    .await
}

/// Register a tracker
#[utoipa::path(
    post,
    path = "/webapi/tracker/create",
    tag = TRACKER_TAG,
    responses(
        (status = 200, description = "Upstream response relayed"),
        (status = 400, description = "Body is not well-formed JSON"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn create(State(state): State<AppState>, jar: CookieJar, body: String) -> Response {
    generic::create(jar, "tracker create", body.into(), move |token, payload| async move {
        state.backend.create_tracker(&token, &payload).await
    })
    .await
}

/// Update a tracker
#[utoipa::path(
    put,
    path = "/webapi/tracker/update/{trackerID}",
    tag = TRACKER_TAG,
    params(("trackerID" = String, Path, description = "Tracker to update")),
    responses(
        (status = 200, description = "Upstream response relayed"),
        (status = 400, description = "Body is not well-formed JSON"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 404, description = "Tracker id empty or unknown upstream"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(tracker_id): Path<String>,
    body: String,
) -> Response {
    generic::update(
        jar,
        &tracker_id,
        ident::opaque_id,
        "tracker update",
        body.into(),
        move |token, id, payload| async move {
            state.backend.update_tracker(&token, &id, &payload).await
        },
    )
    .await
}

/// Remove a tracker
#[utoipa::path(
    delete,
    path = "/webapi/tracker/delete/{trackerID}",
    tag = TRACKER_TAG,
    params(("trackerID" = String, Path, description = "Tracker to remove")),
    responses(
        (status = 200, description = "Deleted, body is the \"OK\" marker"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 404, description = "Tracker id empty or unknown upstream"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(tracker_id): Path<String>,
) -> Response {
    generic::delete(
        jar,
        &tracker_id,
        ident::opaque_id,
        "tracker delete",
        move |token, id| async move { state.backend.delete_tracker(&token, &id).await },
    )
    .await
}
