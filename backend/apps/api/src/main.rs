//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but request-level errors should use
//! `auth::AuthError` / `kernel::error::AppError`.

mod config;
mod telemetry;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use auth::{AuthAppState, JwtTokenIssuer, PgCredentialStore, SystemClock, auth_router};
use axum::Router;
use axum::http::StatusCode;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = ServiceConfig::from_env().context("Invalid configuration")?;

    telemetry::init(config.env);
    tracing::debug!(?config, "Configuration loaded");

    // Database connection
    let store = PgCredentialStore::connect(
        config.database.connect_options(),
        config.database.max_connections,
    )
    .await
    .context("Could not reach the credential store")?;

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(store.pool())
        .await?;

    tracing::info!("Migrations completed");

    let tokens = JwtTokenIssuer::new(&config.jwt_secret, Arc::new(SystemClock))
        .context("Token issuer rejected its secret")?;

    let state = AuthAppState::new(store, tokens, config.auth);

    // Build router
    let app = Router::new()
        .nest("/api/auth", auth_router(state))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.http.request_timeout,
        ))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
