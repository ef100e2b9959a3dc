//! Repository Traits
//!
//! Interfaces for credential persistence. Implementations are in the
//! infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::{login_identifier::LoginIdentifier, user_id::UserId};
use crate::error::StoreResult;

/// Durable mapping from identity to stored credentials
///
/// Email and nickname are each unique across all records. Concurrent
/// registrations racing on the same email or nickname must leave at most one
/// record behind, with the loser seeing `StoreError::AlreadyExists`.
#[trait_variant::make(CredentialStore: Send)]
pub trait LocalCredentialStore {
    /// Persist a new user and return its id
    async fn register_user(&self, user: &User) -> StoreResult<UserId>;

    /// Find a user by email or nickname, `StoreError::NotFound` if absent
    async fn provide_user(&self, identifier: &LoginIdentifier) -> StoreResult<User>;
}
