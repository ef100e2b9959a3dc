//! Auth Router

use axum::{Router, routing::post};

use crate::domain::repository::CredentialStore;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router for any credential store
pub fn auth_router<S>(state: AuthAppState<S>) -> Router
where
    S: CredentialStore + Send + Sync + 'static,
{
    Router::new()
        .route("/login", post(handlers::login::<S>))
        .route("/register", post(handlers::register::<S>))
        .route("/logout", post(handlers::logout))
        .route("/unregister", post(handlers::unregister))
        .route("/is-admin", post(handlers::is_admin))
        .with_state(state)
}
