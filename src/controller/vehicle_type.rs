use axum::{
    extract::{Path, State},
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::{
    controller::{generic, ident},
    model::app::AppState,
};

pub static VEHICLE_TYPE_TAG: &str = "vehicleType";

/// List all vehicle types
#[utoipa::path(
    get,
    path = "/webapi/vehicleTypes/list",
    tag = VEHICLE_TYPE_TAG,
    responses(
        (status = 200, description = "JSON array of vehicle types"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn list(State(state): State<AppState>, jar: CookieJar) -> Response {
    generic::list(jar, "vehicle type list", move |token| async move {
        state.backend.list_vehicle_types(&token).await
    })
    .await
}

/// Create a vehicle type
#[utoipa::path(
    post,
    path = "/webapi/vehicleTypes/create",
    tag = VEHICLE_TYPE_TAG,
    responses(
        (status = 200, description = "Upstream response relayed"),
        (status = 400, description = "Body is not well-formed JSON"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn create(State(state): State<AppState>, jar: CookieJar, body: String) -> Response {
    generic::create(
        jar,
        "vehicle type create",
        body.into(),
        move |token, payload| async move {
            state.backend.create_vehicle_type(&token, &payload).await
        },
    )
    .await
}

/// Update a vehicle type
#[utoipa::path(
    put,
    path = "/webapi/vehicleTypes/update/{vehicleTypeID}",
    tag = VEHICLE_TYPE_TAG,
    params(("vehicleTypeID" = String, Path, description = "Vehicle type to update")),
    responses(
        (status = 200, description = "Upstream response relayed"),
        (status = 400, description = "Body is not well-formed JSON"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 404, description = "Vehicle type id invalid or unknown upstream"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(vehicle_type_id): Path<String>,
    body: String,
) -> Response {
    generic::update(
        jar,
        &vehicle_type_id,
        ident::numeric_id,
        "vehicle type update",
        body.into(),
        move |token, id, payload| async move {
            state.backend.update_vehicle_type(&token, id, &payload).await
        },
    )
    .await
}

/// Delete a vehicle type
#[utoipa::path(
    delete,
    path = "/webapi/vehicleTypes/delete/{vehicleTypeID}",
    tag = VEHICLE_TYPE_TAG,
    params(("vehicleTypeID" = String, Path, description = "Vehicle type to delete")),
    responses(
        (status = 200, description = "Deleted, body is the \"OK\" marker"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 404, description = "Vehicle type id invalid or unknown upstream"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(vehicle_type_id): Path<String>,
) -> Response {
    generic::delete(
        jar,
        &vehicle_type_id,
        ident::numeric_id,
        "vehicle type delete",
        move |token, id| async move { state.backend.delete_vehicle_type(&token, id).await },
    )
    .await
}
