use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;

use crate::{
    controller::{generic, ident},
    error::Error,
    model::app::AppState,
};

pub static POI_TAG: &str = "poi";

/// List all points of interest
#[utoipa::path(
    get,
    path = "/webapi/poi/list",
    tag = POI_TAG,
    responses(
        (status = 200, description = "JSON array of points of interest"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn list(State(state): State<AppState>, jar: CookieJar) -> Response {
    generic::list(jar, "poi list", move |token| async move {
        state.backend.list_pois(&token).await
    })
    .await
}

/// List the points of interest on one track
#[utoipa::path(
    get,
    path = "/webapi/poi/list/{trackID}",
    tag = POI_TAG,
    params(("trackID" = String, Path, description = "Track scoping the list")),
    responses(
        (status = 200, description = "JSON array of points of interest on the track"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 404, description = "Track id is not numeric"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn list_on_track(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(track_id): Path<String>,
) -> Response {
    let Some(track_id) = ident::numeric_id(&track_id) else {
        tracing::debug!(raw_id = %track_id, "cannot list pois, scope id is not numeric");
        return Error::NotFound.into_response();
    };

    generic::list(jar, "poi list on track", move |token| async move {
        state.backend.list_pois_on_track(&token, track_id).await
    })
    .await
}

/// Create a point of interest
#[utoipa::path(
    post,
    path = "/webapi/poi/create",
    tag = POI_TAG,
    responses(
        (status = 200, description = "Upstream response relayed"),
        (status = 400, description = "Body is not well-formed JSON"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn create(State(state): State<AppState>, jar: CookieJar, body: String) -> Response {
    generic::create(jar, "poi create", body.into(), move |token, payload| async move {
        state.backend.create_poi(&token, &payload).await
    })
    .await
}

/// Update a point of interest
#[utoipa::path(
    put,
    path = "/webapi/poi/update/{poiID}",
    tag = POI_TAG,
    params(("poiID" = String, Path, description = "Point of interest to update")),
    responses(
        (status = 200, description = "Upstream response relayed"),
        (status = 400, description = "Body is not well-formed JSON"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 404, description = "POI id invalid or unknown upstream"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(poi_id): Path<String>,
    body: String,
) -> Response {
    generic::update(
        jar,
        &poi_id,
        ident::numeric_id,
        "poi update",
        body.into(),
        move |token, id, payload| async move { state.backend.update_poi(&token, id, &payload).await },
    )
    .await
}

/// Delete a point of interest
#[utoipa::path(
    delete,
    path = "/webapi/poi/delete/{poiID}",
    tag = POI_TAG,
    params(("poiID" = String, Path, description = "Point of interest to delete")),
    responses(
        (status = 200, description = "Deleted, body is the \"OK\" marker"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 404, description = "POI id invalid or unknown upstream"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(poi_id): Path<String>,
) -> Response {
    generic::delete(
        jar,
        &poi_id,
        ident::numeric_id,
        "poi delete",
        move |token, id| async move { state.backend.delete_poi(&token, id).await },
    )
    .await
}
