//! HTTP routing and OpenAPI documentation configuration.
//!
//! All proxy endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is served at `/api/docs` for interactive exploration.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with every webapi endpoint and the
/// Swagger UI documentation.
///
/// Each concrete route is a thin composition of the generic handler protocol
/// with one backend call; the full inventory lives in the controller modules.
///
/// # Returns
/// An axum `Router<AppState>` ready to be served once state is attached.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Fleetgate",
            description = "Administrative web proxy for a fleet-tracking service"
        ),
        tags(
            (name = controller::auth::AUTH_TAG, description = "Session authentication routes"),
            (name = controller::track::TRACK_TAG, description = "Track routes"),
            (name = controller::vehicle::VEHICLE_TAG, description = "Vehicle routes"),
            (name = controller::vehicle_type::VEHICLE_TYPE_TAG, description = "Vehicle type routes"),
            (name = controller::poi::POI_TAG, description = "Point of interest routes"),
            (name = controller::poi_type::POI_TYPE_TAG, description = "POI type routes"),
            (name = controller::tracker::TRACKER_TAG, description = "Tracker routes"),
            (name = controller::user::USER_TAG, description = "Operator account routes"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::track::list))
        .routes(routes!(controller::track::new))
        .routes(routes!(controller::vehicle::list))
        .routes(routes!(controller::vehicle::list_on_track))
        .routes(routes!(controller::vehicle::create))
        .routes(routes!(controller::vehicle::update))
        .routes(routes!(controller::vehicle::delete))
        .routes(routes!(controller::vehicle_type::list))
        .routes(routes!(controller::vehicle_type::create))
        .routes(routes!(controller::vehicle_type::update))
        .routes(routes!(controller::vehicle_type::delete))
        .routes(routes!(controller::poi::list))
        .routes(routes!(controller::poi::list_on_track))
        .routes(routes!(controller::poi::create))
        .routes(routes!(controller::poi::update))
        .routes(routes!(controller::poi::delete))
        .routes(routes!(controller::poi_type::list))
        .routes(routes!(controller::poi_type::create))
        .routes(routes!(controller::poi_type::update))
        .routes(routes!(controller::poi_type::delete))
        .routes(routes!(controller::tracker::list))
        .routes(routes!(controller::tracker::read))
        .routes(routes!(controller::tracker::create))
        .routes(routes!(controller::tracker::update))
        .routes(routes!(controller::tracker::delete))
        .routes(routes!(controller::user::list))
        .routes(routes!(controller::user::create))
        .routes(routes!(controller::user::delete))
        .routes(routes!(controller::user::change_password))
        .routes(routes!(controller::user::change_username))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
