use tracing_subscriber::EnvFilter;

use fleetgate::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let backend = startup::build_backend_client(&config).expect("Failed to build backend client");
    let listener = startup::bind_listener(&config)
        .await
        .expect("Failed to bind listener");

    tracing::info!(listen_addr = %config.listen_addr, backend_uri = %config.backend_uri, "Starting server");

    let app = router::routes().with_state(AppState { backend });

    axum::serve(listener, app).await.expect("Server error");
}
