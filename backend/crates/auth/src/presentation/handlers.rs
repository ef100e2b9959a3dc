//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    LoginInput, LoginUseCase, RegisterInput, RegisterUseCase, account,
};
use crate::domain::repository::CredentialStore;
use crate::domain::service::{IdGenerator, PasswordHasher, TokenIssuer};
use crate::error::AuthResult;
use crate::infra::{argon2::Argon2PasswordHasher, system::RandomIdGenerator};
use crate::presentation::dto::{
    IsAdminResponse, LoginRequest, LoginResponse, LogoutResponse, RegisterRequest,
    RegisterResponse, UnregisterResponse,
};
use crate::presentation::extract::AuthJson;

/// Shared state for auth handlers
pub struct AuthAppState<S> {
    pub store: Arc<S>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub tokens: Arc<dyn TokenIssuer>,
    pub ids: Arc<dyn IdGenerator>,
    pub config: Arc<AuthConfig>,
}

// derive(Clone) would demand S: Clone
impl<S> Clone for AuthAppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            hasher: Arc::clone(&self.hasher),
            tokens: Arc::clone(&self.tokens),
            ids: Arc::clone(&self.ids),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S> AuthAppState<S>
where
    S: CredentialStore + Send + Sync + 'static,
{
    /// Argon2 hashing per `config`, random ids
    pub fn new(store: S, tokens: impl TokenIssuer + 'static, config: AuthConfig) -> Self {
        Self {
            store: Arc::new(store),
            hasher: Arc::new(Argon2PasswordHasher::from_config(&config)),
            tokens: Arc::new(tokens),
            ids: Arc::new(RandomIdGenerator),
            config: Arc::new(config),
        }
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<S>(
    State(state): State<AuthAppState<S>>,
    AuthJson(req): AuthJson<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    S: CredentialStore + Send + Sync + 'static,
{
    req.validate()?;

    let use_case = LoginUseCase::new(
        state.store.clone(),
        state.hasher.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let input = LoginInput {
        login_string: req.login_string,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(LoginResponse {
        token: output.token,
    }))
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<S>(
    State(state): State<AuthAppState<S>>,
    AuthJson(req): AuthJson<RegisterRequest>,
) -> AuthResult<Json<RegisterResponse>>
where
    S: CredentialStore + Send + Sync + 'static,
{
    req.validate()?;

    let use_case = RegisterUseCase::new(
        state.store.clone(),
        state.hasher.clone(),
        state.ids.clone(),
    );

    let input = RegisterInput {
        email: req.email,
        nickname: req.nickname,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(RegisterResponse {
        user_id: output.user_id.get(),
    }))
}

// ============================================================================
// Account Lifecycle
// ============================================================================
//
// The body is never read, so these answer 501 whatever the request carries.

/// POST /api/auth/logout
pub async fn logout() -> AuthResult<Json<LogoutResponse>> {
    let success = account::logout()?;
    Ok(Json(LogoutResponse { success }))
}

/// POST /api/auth/unregister
pub async fn unregister() -> AuthResult<Json<UnregisterResponse>> {
    let user_id = account::unregister()?;
    Ok(Json(UnregisterResponse {
        user_id: user_id.get(),
    }))
}

/// POST /api/auth/is-admin
pub async fn is_admin() -> AuthResult<Json<IsAdminResponse>> {
    let is_admin = account::is_admin()?;
    Ok(Json(IsAdminResponse { is_admin }))
}
