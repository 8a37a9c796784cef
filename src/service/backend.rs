//! HTTP client for the upstream authoritative backend.
//!
//! Every call takes the operator's bearer token and returns a [`CallOutcome`]
//! instead of raising: the three cases a handler must distinguish (2xx
//! passthrough, rejected token, any other upstream status) are explicit
//! variants, and only transport-level failures surface as [`BackendError`].

use axum::http::{header, Method, StatusCode};
use bytes::Bytes;
use serde_json::Value;
use thiserror::Error;

use crate::model::auth::{AuthenticationRequest, AuthenticationResponse};

/// Transport-level failure while calling the upstream backend.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct BackendError(#[from] reqwest::Error);

/// Verdict of one upstream call.
pub enum CallOutcome {
    /// 2xx: status and body to relay to the browser.
    Success {
        status: StatusCode,
        body: Bytes,
        content_type: Option<String>,
    },
    /// 401: the upstream rejected the session token.
    Unauthorized,
    /// Any other non-2xx status.
    Failure { status: StatusCode },
}

/// Client for the upstream backend's resource-oriented REST surface.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Creates a client for the backend reachable at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    // -- authentication ----------------------------------------------------

    /// Submits credentials to the upstream login endpoint.
    ///
    /// Returns the opaque session token on success, `None` when the upstream
    /// rejects the credentials (for whatever reason it chooses).
    pub async fn authenticate(
        &self,
        credentials: &AuthenticationRequest,
    ) -> Result<Option<String>, BackendError> {
        let response = self
            .http
            .post(format!("{}/api/login/website", self.base_url))
            .json(credentials)
            .send()
            .await?;

        if response.status().is_success() {
            let auth: AuthenticationResponse = response.json().await?;
            Ok(Some(auth.token))
        } else {
            Ok(None)
        }
    }

    // -- tracks ------------------------------------------------------------

    pub async fn list_tracks(&self, token: &str) -> Result<CallOutcome, BackendError> {
        self.fetch(token, "/api/init/website").await
    }

    pub async fn create_track(
        &self,
        token: &str,
        payload: &Value,
    ) -> Result<CallOutcome, BackendError> {
        self.send(Method::POST, token, "/api/trackupload/website", payload)
            .await
    }

    // -- vehicles ----------------------------------------------------------

    pub async fn list_vehicles(&self, token: &str) -> Result<CallOutcome, BackendError> {
        self.fetch(token, "/api/vehicles/website").await
    }

    pub async fn list_vehicles_on_track(
        &self,
        token: &str,
        track_id: i64,
    ) -> Result<CallOutcome, BackendError> {
        self.fetch(token, &format!("/api/vehicles/website/crudlist/{track_id}"))
            .await
    }

    pub async fn create_vehicle(
        &self,
        token: &str,
        payload: &Value,
    ) -> Result<CallOutcome, BackendError> {
        self.send(Method::POST, token, "/api/vehicles/website", payload)
            .await
    }

    pub async fn update_vehicle(
        &self,
        token: &str,
        vehicle_id: i64,
        payload: &Value,
    ) -> Result<CallOutcome, BackendError> {
        self.send(
            Method::PUT,
            token,
            &format!("/api/vehicles/website/{vehicle_id}"),
            payload,
        )
        .await
    }

    pub async fn delete_vehicle(
        &self,
        token: &str,
        vehicle_id: i64,
    ) -> Result<CallOutcome, BackendError> {
        self.remove(token, &format!("/api/vehicles/website/{vehicle_id}"))
            .await
    }

    // -- vehicle types -----------------------------------------------------

    pub async fn list_vehicle_types(&self, token: &str) -> Result<CallOutcome, BackendError> {
        self.fetch(token, "/api/vehicletype/website").await
    }

    pub async fn create_vehicle_type(
        &self,
        token: &str,
        payload: &Value,
    ) -> Result<CallOutcome, BackendError> {
        self.send(Method::POST, token, "/api/vehicletype/website", payload)
            .await
    }

    pub async fn update_vehicle_type(
        &self,
        token: &str,
        vehicle_type_id: i64,
        payload: &Value,
    ) -> Result<CallOutcome, BackendError> {
        self.send(
            Method::PUT,
            token,
            &format!("/api/vehicletype/website/{vehicle_type_id}"),
            payload,
        )
        .await
    }

    pub async fn delete_vehicle_type(
        &self,
        token: &str,
        vehicle_type_id: i64,
    ) -> Result<CallOutcome, BackendError> {
        self.remove(token, &format!("/api/vehicletype/website/{vehicle_type_id}"))
            .await
    }

    // -- points of interest ------------------------------------------------

    pub async fn list_pois(&self, token: &str) -> Result<CallOutcome, BackendError> {
        self.fetch(token, "/api/poi/website").await
    }

    pub async fn list_pois_on_track(
        &self,
        token: &str,
        track_id: i64,
    ) -> Result<CallOutcome, BackendError> {
        self.fetch(token, &format!("/api/poi/website/track/{track_id}"))
            .await
    }

    pub async fn create_poi(
        &self,
        token: &str,
        payload: &Value,
    ) -> Result<CallOutcome, BackendError> {
        self.send(Method::POST, token, "/api/poi/website", payload)
            .await
    }

    pub async fn update_poi(
        &self,
        token: &str,
        poi_id: i64,
        payload: &Value,
    ) -> Result<CallOutcome, BackendError> {
        self.send(
            Method::PUT,
            token,
            &format!("/api/poi/website/{poi_id}"),
            payload,
        )
        .await
    }

    pub async fn delete_poi(&self, token: &str, poi_id: i64) -> Result<CallOutcome, BackendError> {
        self.remove(token, &format!("/api/poi/website/{poi_id}")).await
    }

    // -- POI types ---------------------------------------------------------

    pub async fn list_poi_types(&self, token: &str) -> Result<CallOutcome, BackendError> {
        self.fetch(token, "/api/poitype/website").await
    }

    pub async fn create_poi_type(
        &self,
        token: &str,
        payload: &Value,
    ) -> Result<CallOutcome, BackendError> {
        self.send(Method::POST, token, "/api/poitype/website", payload)
            .await
    }

    pub async fn update_poi_type(
        &self,
        token: &str,
        poi_type_id: i64,
        payload: &Value,
    ) -> Result<CallOutcome, BackendError> {
        self.send(
            Method::PUT,
            token,
            &format!("/api/poitype/website/{poi_type_id}"),
            payload,
        )
        .await
    }

    pub async fn delete_poi_type(
        &self,
        token: &str,
        poi_type_id: i64,
    ) -> Result<CallOutcome, BackendError> {
        self.remove(token, &format!("/api/poitype/website/{poi_type_id}"))
            .await
    }

    // -- trackers ----------------------------------------------------------

    pub async fn list_trackers(&self, token: &str) -> Result<CallOutcome, BackendError> {
        self.fetch(token, "/api/tracker/website").await
    }

    pub async fn get_tracker(
        &self,
        token: &str,
        tracker_id: &str,
    ) -> Result<CallOutcome, BackendError> {
        self.fetch(token, &format!("/api/tracker/website/{tracker_id}"))
            .await
    }

    pub async fn create_tracker(
        &self,
        token: &str,
        payload: &Value,
    ) -> Result<CallOutcome, BackendError> {
        self.send(Method::POST, token, "/api/tracker/website", payload)
            .await
    }

    pub async fn update_tracker(
        &self,
        token: &str,
        tracker_id: &str,
        payload: &Value,
    ) -> Result<CallOutcome, BackendError> {
        self.send(
            Method::PUT,
            token,
            &format!("/api/tracker/website/{tracker_id}"),
            payload,
        )
        .await
    }

    pub async fn delete_tracker(
        &self,
        token: &str,
        tracker_id: &str,
    ) -> Result<CallOutcome, BackendError> {
        self.remove(token, &format!("/api/tracker/website/{tracker_id}"))
            .await
    }

    // -- users -------------------------------------------------------------

    pub async fn list_users(&self, token: &str) -> Result<CallOutcome, BackendError> {
        self.fetch(token, "/api/user/website").await
    }

    pub async fn create_user(
        &self,
        token: &str,
        payload: &Value,
    ) -> Result<CallOutcome, BackendError> {
        self.send(Method::POST, token, "/api/user/website", payload)
            .await
    }

    pub async fn delete_user(
        &self,
        token: &str,
        username: &str,
    ) -> Result<CallOutcome, BackendError> {
        self.remove(token, &format!("/api/user/website/{username}"))
            .await
    }

    pub async fn change_password(
        &self,
        token: &str,
        payload: &Value,
    ) -> Result<CallOutcome, BackendError> {
        self.send(Method::PUT, token, "/api/user/website/password", payload)
            .await
    }

    pub async fn change_username(
        &self,
        token: &str,
        payload: &Value,
    ) -> Result<CallOutcome, BackendError> {
        self.send(Method::PUT, token, "/api/user/website/name", payload)
            .await
    }

    // -- request plumbing --------------------------------------------------

    async fn fetch(&self, token: &str, path: &str) -> Result<CallOutcome, BackendError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(token)
            .send()
            .await?;

        Self::outcome(response).await
    }

    async fn send(
        &self,
        method: Method,
        token: &str,
        path: &str,
        payload: &Value,
    ) -> Result<CallOutcome, BackendError> {
        let response = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;

        Self::outcome(response).await
    }

    async fn remove(&self, token: &str, path: &str) -> Result<CallOutcome, BackendError> {
        let response = self
            .http
            .delete(format!("{}{}", self.base_url, path))
            .bearer_auth(token)
            .send()
            .await?;

        Self::outcome(response).await
    }

    async fn outcome(response: reqwest::Response) -> Result<CallOutcome, BackendError> {
        let status = response.status();

        if status.is_success() {
            let content_type = response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);
            let body = response.bytes().await?;

            Ok(CallOutcome::Success {
                status,
                body,
                content_type,
            })
        } else if status == StatusCode::UNAUTHORIZED {
            Ok(CallOutcome::Unauthorized)
        } else {
            Ok(CallOutcome::Failure { status })
        }
    }
}
