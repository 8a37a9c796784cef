use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;

use crate::{
    controller::{generic, ident},
    model::{app::AppState, session::SessionToken},
};

pub static USER_TAG: &str = "user";

/// List all operator accounts
#[utoipa::path(
    get,
    path = "/webapi/user/list",
    tag = USER_TAG,
    responses(
        (status = 200, description = "JSON array of users"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn list(State(state): State<AppState>, jar: CookieJar) -> Response {
    generic::list(jar, "user list", move |token| async move {
        state.backend.list_users(&token).await
    })
    .await
}

/// Create an operator account
#[utoipa::path(
    post,
    path = "/webapi/user/create",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Upstream response relayed"),
        (status = 400, description = "Body is not well-formed JSON"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn create(State(state): State<AppState>, jar: CookieJar, body: String) -> Response {
    generic::create(jar, "user create", body.into(), move |token, payload| async move {
        state.backend.create_user(&token, &payload).await
    })
    .await
}

/// Delete an operator account by username
#[utoipa::path(
    delete,
    path = "/webapi/user/delete/{username}",
    tag = USER_TAG,
    params(("username" = String, Path, description = "Account to delete")),
    responses(
        (status = 200, description = "Deleted, body is the \"OK\" marker"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 404, description = "Username empty or unknown upstream"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(username): Path<String>,
) -> Response {
    generic::delete(
        jar,
        &username,
        ident::opaque_id,
        "user delete",
        move |token, name| async move { state.backend.delete_user(&token, &name).await },
    )
    .await
}

/// Change the password of the logged-in operator
///
/// On success the token cookie is cleared as well: the upstream invalidates
/// the session once the credentials change, so the operator must log in again.
#[utoipa::path(
    put,
    path = "/webapi/user/changePassword",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Password changed, session cookie cleared"),
        (status = 400, description = "Body is not well-formed JSON"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    jar: CookieJar,
    body: String,
) -> Response {
    let response = generic::update(
        jar.clone(),
        "",
        ident::unit_id,
        "user password change",
        body.into(),
        move |token, _id, payload| async move {
            state.backend.change_password(&token, &payload).await
        },
    )
    .await;

    invalidate_on_success(jar, response)
}

/// Change the username of the logged-in operator
///
/// Clears the token cookie on success for the same reason as a password
/// change.
#[utoipa::path(
    put,
    path = "/webapi/user/changeUsername",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Username changed, session cookie cleared"),
        (status = 400, description = "Body is not well-formed JSON"),
        (status = 401, description = "Missing or rejected session token"),
        (status = 500, description = "Upstream failure"),
    ),
)]
pub async fn change_username(
    State(state): State<AppState>,
    jar: CookieJar,
    body: String,
) -> Response {
    let response = generic::update(
        jar.clone(),
        "",
        ident::unit_id,
        "user name change",
        body.into(),
        move |token, _id, payload| async move {
            state.backend.change_username(&token, &payload).await
        },
    )
    .await;

    invalidate_on_success(jar, response)
}

fn invalidate_on_success(jar: CookieJar, response: Response) -> Response {
    if response.status().is_success() {
        (SessionToken::invalidate(jar), response).into_response()
    } else {
        response
    }
}
