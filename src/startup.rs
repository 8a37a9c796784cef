use tokio::net::TcpListener;

use crate::{
    config::Config,
    service::backend::{BackendClient, BackendError},
};

/// Build the HTTP client for the upstream backend
pub fn build_backend_client(config: &Config) -> Result<BackendClient, BackendError> {
    BackendClient::new(&config.backend_uri)
}

/// Bind the TCP listener the server accepts browser connections on
pub async fn bind_listener(config: &Config) -> std::io::Result<TcpListener> {
    TcpListener::bind(&config.listen_addr).await
}
