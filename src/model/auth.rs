use serde::{Deserialize, Serialize};

/// Credentials submitted by the login form.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthenticationRequest {
    pub username: String,
    pub password: String,
}

/// The upstream's answer to a successful authentication: the opaque session
/// token this proxy stores in the browser cookie. The token is never parsed
/// here; its meaning belongs entirely to the upstream.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthenticationResponse {
    pub token: String,
}
