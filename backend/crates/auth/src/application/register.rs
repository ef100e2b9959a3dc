//! Register Use Case
//!
//! Creates a new account from email, nickname and password.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::CredentialStore;
use crate::domain::service::{IdGenerator, PasswordHasher};
use crate::domain::value_object::{
    email::Email, nickname::Nickname, user_id::UserId, user_password::RawPassword,
};
use crate::error::{AuthError, AuthResult, StoreError};

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub nickname: String,
    pub password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user_id: UserId,
}

/// Register use case
pub struct RegisterUseCase<S>
where
    S: CredentialStore,
{
    store: Arc<S>,
    hasher: Arc<dyn PasswordHasher>,
    ids: Arc<dyn IdGenerator>,
}

impl<S> RegisterUseCase<S>
where
    S: CredentialStore,
{
    pub fn new(store: Arc<S>, hasher: Arc<dyn PasswordHasher>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, hasher, ids }
    }

    /// Validation runs before hashing, and hashing before any store call,
    /// so malformed input never costs an Argon2 round or a query.
    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let email = Email::new(input.email)?;
        let nickname = Nickname::new(input.nickname)?;
        let password = RawPassword::new(input.password)?;

        let hasher = Arc::clone(&self.hasher);
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::Internal(format!("password hashing task failed: {e}")))?
            .map_err(|e| AuthError::Internal(format!("password hashing failed: {e}")))?;

        let user = User::new(self.ids.next_id(), email, nickname, password_hash);

        let user_id = match self.store.register_user(&user).await {
            Ok(user_id) => user_id,
            Err(StoreError::AlreadyExists(field)) => {
                tracing::warn!(%field, "Registration rejected, duplicate value");
                return Err(AuthError::AlreadyExists(field));
            }
            Err(e) => {
                return Err(AuthError::Internal(format!("user registration failed: {e}")));
            }
        };

        tracing::info!(%user_id, "User registered");

        Ok(RegisterOutput { user_id })
    }
}
