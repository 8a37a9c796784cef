use axum::{
    extract::{Path, State},
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::{
    controller::{generic, ident},
    model::app::AppState,
};

pub static POI_TYPE_TAG: &str = "poiType";

/// List all POI types
#[utoipa::path(
    get,
    path = "/webapi/poiTypes/list",
    tag = POI_TYPE_TAG,
    responses(
        (status = 200, description = "JSON array of POI types"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn list(State(state): State<AppState>, jar: CookieJar) -> Response {
    generic::list(jar, "poi type list", move |token| async move {
        state.backend.list_poi_types(&token).await
    })
    .await
}

/// Create a POI type
#[utoipa::path(
    post,
    path = "/webapi/poiTypes/create",
    tag = POI_TYPE_TAG,
    responses(
        (status = 200, description = "Upstream response relayed"),
        (status = 400, description = "Body is not well-formed JSON"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn create(State(state): State<AppState>, jar: CookieJar, body: String) -> Response {
    generic::create(jar, "poi type create", body.into(), move |token, payload| async move {
        state.backend.create_poi_type(&token, &payload).await
    })
    .await
}

/// Update a POI type
#[utoipa::path(
    put,
    path = "/webapi/poiTypes/update/{poiTypeID}",
    tag = POI_TYPE_TAG,
    params(("poiTypeID" = String, Path, description = "POI type to update")),
    responses(
        (status = 200, description = "Upstream response relayed"),
        (status = 400, description = "Body is not well-formed JSON"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 404, description = "POI type id invalid or unknown upstream"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(poi_type_id): Path<String>,
    body: String,
) -> Response {
    generic::update(
        jar,
        &poi_type_id,
        ident::numeric_id,
        "poi type update",
        body.into(),
        move |token, id, payload| async move {
            state.backend.update_poi_type(&token, id, &payload).await
        },
    )
    .await
}

/// Delete a POI type
#[utoipa::path(
    delete,
    path = "/webapi/poiTypes/delete/{poiTypeID}",
    tag = POI_TYPE_TAG,
    params(("poiTypeID" = String, Path, description = "POI type to delete")),
    responses(
        (status = 200, description = "Deleted, body is the \"OK\" marker"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 404, description = "POI type id invalid or unknown upstream"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(poi_type_id): Path<String>,
) -> Response {
    generic::delete(
        jar,
        &poi_type_id,
        ident::numeric_id,
        "poi type delete",
        move |token, id| async move { state.backend.delete_poi_type(&token, id).await },
    )
    .await
}
