//! Axum setup and router configuration
//!
//! Wires the routes, the cookie session layer, and request tracing, then
//! serves with graceful shutdown.

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};
use tracing::{info, warn};

use dreamlog_core::AppConfig;

use crate::db::Database;
use crate::error::ServerResult;
use crate::routes;
use crate::state::AppState;

/// Create the router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Sessions live in process memory; restarting the server logs
    // everyone out.
    let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(session_layer);

    Router::new()
        // Public; the static paths win over the {offset} capture
        .route("/", get(routes::index))
        .route("/{offset}", get(routes::page))
        .route("/dream/{id}", get(routes::show_entry))
        // Auth
        .route("/login", get(routes::login_form).post(routes::login))
        .route("/logout", get(routes::logout))
        // Admin
        .route("/admin", get(routes::admin))
        .route("/new", get(routes::new_form).post(routes::create))
        .route("/remove/{id}", get(routes::remove))
        .route("/modify/{id}", get(routes::edit_form).post(routes::update))
        .with_state(state)
        .layer(middleware)
}

/// Open the database from the config and serve until shutdown.
pub async fn run_server(config: AppConfig) -> ServerResult<()> {
    info!("Opening database at {}", config.database.display());
    let db = Database::open(&config.database)?;

    let bind = config.bind;
    let state = AppState::new(db, config);
    let app = create_router(state);

    let listener = TcpListener::bind(bind).await?;
    info!("Serving the journal on http://{}", bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
