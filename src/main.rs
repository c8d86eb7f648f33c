use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use cookiteer::{api, AppState, AuthService, Config, DocumentStore, StoreProvider};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env().expect("Failed to load configuration");

    let provider = StoreProvider::from_env();
    let backend = match &provider {
        StoreProvider::Memory => "memory",
        StoreProvider::Mongo { .. } => "mongodb",
    };
    info!(backend, "Initializing document store");

    let store = provider
        .create_store()
        .await
        .expect("Failed to create document store");
    store.ping().await.expect("Document store ping failed");
    info!("Connected to document store");

    let auth = Arc::new(AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.token_validity_hours,
    ));

    let origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    let address = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState {
        config: Arc::new(config),
        store: store.clone(),
        auth,
    };
    let app = api::routes::app(state).layer(cors);

    let listener = TcpListener::bind(&address)
        .await
        .expect("Failed to bind address");
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    store.shutdown().await;
    info!("Server shut down");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
