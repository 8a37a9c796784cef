//! The browser-held session token.
//!
//! An opaque bearer token minted by the upstream backend, carried in an
//! HTTP-only, SameSite=Lax cookie. This module owns the cookie representation;
//! the token value itself is never inspected locally.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::OffsetDateTime;

/// Name of the session cookie.
pub const TOKEN_COOKIE: &str = "token";

/// An opaque session token read from the request cookie jar.
#[derive(Debug, Clone)]
pub struct SessionToken(String);

impl SessionToken {
    /// Extracts the token from the incoming cookie jar. Never fails; an
    /// absent cookie is simply `None`.
    pub fn read(jar: &CookieJar) -> Option<Self> {
        jar.get(TOKEN_COOKIE)
            .map(|cookie| Self(cookie.value().to_string()))
    }

    /// Sets the token cookie on the outgoing jar. Called only by the
    /// authentication endpoint.
    pub fn issue(jar: CookieJar, token: String) -> CookieJar {
        jar.add(Self::cookie(token))
    }

    /// Clears the token cookie: empty value, expiry at the UNIX epoch, same
    /// attributes as originally set.
    pub fn invalidate(jar: CookieJar) -> CookieJar {
        let mut cookie = Self::cookie(String::new());
        cookie.set_expires(OffsetDateTime::UNIX_EPOCH);

        jar.add(cookie)
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn into_value(self) -> String {
        self.0
    }

    fn cookie(value: String) -> Cookie<'static> {
        Cookie::build((TOKEN_COOKIE, value))
            .http_only(true)
            .same_site(SameSite::Lax)
            .path("/")
            .build()
    }
}
