//! In-Memory Credential Store
//!
//! For tests and local runs without a database. Uniqueness checks and the
//! insert happen under one write lock, so racing registrations cannot both
//! succeed.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::CredentialStore;
use crate::domain::value_object::{login_identifier::LoginIdentifier, user_id::UserId};
use crate::error::{StoreError, StoreResult, UniqueField};

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, User>,
    by_email: HashMap<String, UserId>,
    by_nickname: HashMap<String, UserId>,
}

/// Process-local credential store
#[derive(Clone, Default)]
pub struct InMemoryCredentialStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered users
    pub async fn len(&self) -> usize {
        self.tables.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl CredentialStore for InMemoryCredentialStore {
    async fn register_user(&self, user: &User) -> StoreResult<UserId> {
        let mut tables = self.tables.write().await;

        if tables.users.contains_key(&user.id) {
            return Err(StoreError::IdCollision);
        }
        if tables.by_email.contains_key(user.email.as_str()) {
            return Err(StoreError::AlreadyExists(UniqueField::Email));
        }
        if tables.by_nickname.contains_key(user.nickname.as_str()) {
            return Err(StoreError::AlreadyExists(UniqueField::Nickname));
        }

        tables.by_email.insert(user.email.as_str().to_owned(), user.id);
        tables.by_nickname.insert(user.nickname.as_str().to_owned(), user.id);
        tables.users.insert(user.id, user.clone());

        Ok(user.id)
    }

    async fn provide_user(&self, identifier: &LoginIdentifier) -> StoreResult<User> {
        let tables = self.tables.read().await;

        let index = match identifier {
            LoginIdentifier::Email(_) => &tables.by_email,
            LoginIdentifier::Nickname(_) => &tables.by_nickname,
        };

        index
            .get(identifier.as_str())
            .and_then(|id| tables.users.get(id))
            .cloned()
            .ok_or(StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{
        email::Email, nickname::Nickname, user_password::UserPassword,
    };

    fn user(id: i64, email: &str, nickname: &str) -> User {
        User::new(
            UserId::from_i64(id),
            Email::new(email).unwrap(),
            Nickname::new(nickname).unwrap(),
            UserPassword::from_bytes(b"digest".to_vec()),
        )
    }

    #[tokio::test]
    async fn test_register_and_provide_by_either_identifier() {
        let store = InMemoryCredentialStore::new();
        let id = store.register_user(&user(7, "a@x.io", "alice")).await.unwrap();
        assert_eq!(id, UserId::from_i64(7));

        let by_email = store
            .provide_user(&LoginIdentifier::parse("a@x.io"))
            .await
            .unwrap();
        let by_nick = store
            .provide_user(&LoginIdentifier::parse("alice"))
            .await
            .unwrap();
        assert_eq!(by_email.id, id);
        assert_eq!(by_nick.id, id);
        assert_eq!(by_nick.password_hash.as_bytes(), b"digest");
    }

    #[tokio::test]
    async fn test_unknown_identifier_is_not_found() {
        let store = InMemoryCredentialStore::new();
        store.register_user(&user(1, "a@x.io", "alice")).await.unwrap();

        // nickname lookup never falls through to the email index
        let err = store
            .provide_user(&LoginIdentifier::Nickname("a@x.io".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_uniqueness() {
        let store = InMemoryCredentialStore::new();
        store.register_user(&user(1, "a@x.io", "alice")).await.unwrap();

        let err = store.register_user(&user(2, "a@x.io", "bob")).await.unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(UniqueField::Email)));

        let err = store.register_user(&user(3, "b@x.io", "alice")).await.unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(UniqueField::Nickname)));

        let err = store.register_user(&user(1, "c@x.io", "carol")).await.unwrap_err();
        assert!(matches!(err, StoreError::IdCollision));

        assert_eq!(store.len().await, 1);
    }
}
