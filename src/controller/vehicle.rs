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

pub static VEHICLE_TAG: &str = "vehicle";

/// List all vehicles
#[utoipa::path(
    get,
    path = "/webapi/vehicles/list",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "JSON array of vehicles"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn list(State(state): State<AppState>, jar: CookieJar) -> Response {
    generic::list(jar, "vehicle list", move |token| async move {
        state.backend.list_vehicles(&token).await
    })
    .await
}

/// List the vehicles on one track
#[utoipa::path(
    get,
    path = "/webapi/vehicles/list/{trackID}",
    tag = VEHICLE_TAG,
    params(("trackID" = String, Path, description = "Track scoping the list")),
    responses(
        (status = 200, description = "JSON array of vehicles on the track"),
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
    // the scope id is checked here, before the token, like any identifier
    let Some(track_id) = ident::numeric_id(&track_id) else {
        tracing::debug!(raw_id = %track_id, "cannot list vehicles, scope id is not numeric");
        return Error::NotFound.into_response();
    };

    generic::list(jar, "vehicle list on track", move |token| async move {
        state.backend.list_vehicles_on_track(&token, track_id).await
    })
    .await
}

/// Create a vehicle
#[utoipa::path(
    post,
    path = "/webapi/vehicles/create",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "Upstream response relayed"),
        (status = 400, description = "Body is not well-formed JSON"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn create(State(state): State<AppState>, jar: CookieJar, body: String) -> Response {
    generic::create(jar, "vehicle create", body.into(), move |token, payload| async move {
        state.backend.create_vehicle(&token, &payload).await
    })
    .await
}

/// Update a vehicle
#[utoipa::path(
    put,
    path = "/webapi/vehicles/update/{vehicleID}",
    tag = VEHICLE_TAG,
    params(("vehicleID" = String, Path, description = "Vehicle to update")),
    responses(
        (status = 200, description = "Upstream response relayed"),
        (status = 400, description = "Body is not well-formed JSON"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 404, description = "Vehicle id invalid or unknown upstream"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(vehicle_id): Path<String>,
    body: String,
) -> Response {
    generic::update(
        jar,
        &vehicle_id,
        ident::numeric_id,
        "vehicle update",
        body.into(),
        move |token, id, payload| async move {
            state.backend.update_vehicle(&token, id, &payload).await
        },
    )
    .await
}

/// Delete a vehicle
#[utoipa::path(
    delete,
    path = "/webapi/vehicles/delete/{vehicleID}",
    tag = VEHICLE_TAG,
    params(("vehicleID" = String, Path, description = "Vehicle to delete")),
    responses(
        (status = 200, description = "Deleted, body is the \"OK\" marker"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 404, description = "Vehicle id invalid or unknown upstream"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(vehicle_id): Path<String>,
) -> Response {
    generic::delete(
        jar,
        &vehicle_id,
        ident::numeric_id,
        "vehicle delete",
        move |token, id| async move { state.backend.delete_vehicle(&token, id).await },
    )
    .await
}
