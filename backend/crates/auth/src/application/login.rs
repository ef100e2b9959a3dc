//! Login Use Case
//!
//! Exchanges an identifier and password for a session token.

use std::sync::Arc;

use platform::password::PasswordHashError;

use crate::application::config::AuthConfig;
use crate::domain::repository::CredentialStore;
use crate::domain::service::{PasswordHasher, TokenIssuer};
use crate::domain::value_object::{
    login_identifier::LoginIdentifier, user_password::RawPassword,
};
use crate::error::{AuthError, AuthResult, StoreError};

/// Login input
pub struct LoginInput {
    /// Email or nickname
    pub login_string: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<S>
where
    S: CredentialStore,
{
    store: Arc<S>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
    config: Arc<AuthConfig>,
}

impl<S> LoginUseCase<S>
where
    S: CredentialStore,
{
    pub fn new(
        store: Arc<S>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            store,
            hasher,
            tokens,
            config,
        }
    }

    /// Unknown identifiers and wrong passwords both end in
    /// `InvalidCredentials`; the caller cannot tell them apart.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let identifier = LoginIdentifier::parse(&input.login_string);
        let password = RawPassword::new(input.password)?;

        let user = match self.store.provide_user(&identifier).await {
            Ok(user) => user,
            Err(StoreError::NotFound) => {
                tracing::warn!(by = identifier.kind(), "Login for unknown identifier");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                return Err(AuthError::Internal(format!("credential lookup failed: {e}")));
            }
        };

        // Argon2 is CPU-bound; keep it off the executor threads.
        let hasher = Arc::clone(&self.hasher);
        let stored = user.password_hash.clone();
        let verdict = tokio::task::spawn_blocking(move || hasher.verify(&stored, &password))
            .await
            .map_err(|e| AuthError::Internal(format!("password verification task failed: {e}")))?;

        match verdict {
            Ok(()) => {}
            Err(PasswordHashError::Mismatch) => {
                tracing::warn!(user_id = %user.id, "Login with wrong password");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                // Stored digest is unusable; fail closed.
                tracing::error!(user_id = %user.id, error = %e, "Stored password hash rejected");
                return Err(AuthError::InvalidCredentials);
            }
        }

        let token = self.tokens.issue_token(&user, self.config.token_ttl)?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginOutput { token })
    }
}
