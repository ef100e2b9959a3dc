//! PostgreSQL Credential Store
//!
//! Uniqueness is enforced by the `users` table constraints, so concurrent
//! registrations are serialized by the database itself.

use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::domain::entity::user::User;
use crate::domain::repository::CredentialStore;
use crate::domain::value_object::{
    email::Email, login_identifier::LoginIdentifier, nickname::Nickname, user_id::UserId,
    user_password::UserPassword,
};
use crate::error::{StoreError, StoreResult, UniqueField};

/// Constraint names from `database/migrations`
const USERS_PKEY: &str = "users_pkey";
const USERS_EMAIL_KEY: &str = "users_email_key";
const USERS_NICKNAME_KEY: &str = "users_nickname_key";

/// PostgreSQL-backed credential store
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool and make sure the server answers
    pub async fn connect(options: PgConnectOptions, max_connections: u32) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let store = Self::new(pool);
        store.ping().await?;

        tracing::info!(max_connections, "Credential store connected");

        Ok(store)
    }

    pub async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

// ============================================================================
// Credential Store Implementation
// ============================================================================

impl CredentialStore for PgCredentialStore {
    async fn register_user(&self, user: &User) -> StoreResult<UserId> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, nickname, pass_hash)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.id.get())
        .bind(user.email.as_str())
        .bind(user.nickname.as_str())
        .bind(user.password_hash.as_bytes())
        .execute(&self.pool)
        .await?;

        tracing::debug!(user_id = %user.id, "User row inserted");

        Ok(user.id)
    }

    async fn provide_user(&self, identifier: &LoginIdentifier) -> StoreResult<User> {
        let query = match identifier {
            LoginIdentifier::Email(_) => {
                "SELECT id, email, nickname, pass_hash FROM users WHERE email = $1"
            }
            LoginIdentifier::Nickname(_) => {
                "SELECT id, email, nickname, pass_hash FROM users WHERE nickname = $1"
            }
        };

        let row = sqlx::query_as::<_, UserRow>(query)
            .bind(identifier.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.map(UserRow::into_user).ok_or(StoreError::NotFound)
    }
}

// ============================================================================
// Error Classification
// ============================================================================

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                match db_err.constraint() {
                    Some(USERS_EMAIL_KEY) => StoreError::AlreadyExists(UniqueField::Email),
                    Some(USERS_NICKNAME_KEY) => StoreError::AlreadyExists(UniqueField::Nickname),
                    Some(USERS_PKEY) => StoreError::IdCollision,
                    _ => StoreError::Query(err),
                }
            }
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => StoreError::Unavailable(err),
            _ => StoreError::Query(err),
        }
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    nickname: String,
    pass_hash: Vec<u8>,
}

impl UserRow {
    fn into_user(self) -> User {
        User::new(
            UserId::from_i64(self.id),
            Email::from_db(self.email),
            Nickname::from_db(self.nickname),
            UserPassword::from_bytes(self.pass_hash),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::error::Error as StdError;

    use sqlx::error::{DatabaseError, ErrorKind};

    /// Server-side failure carrying a constraint name, as Postgres reports it
    #[derive(Debug, thiserror::Error)]
    #[error("constraint \"{constraint}\" violated")]
    struct ConstraintViolation {
        unique: bool,
        constraint: &'static str,
    }

    impl ConstraintViolation {
        fn unique(constraint: &'static str) -> sqlx::Error {
            sqlx::Error::Database(Box::new(Self {
                unique: true,
                constraint,
            }))
        }

        fn foreign_key(constraint: &'static str) -> sqlx::Error {
            sqlx::Error::Database(Box::new(Self {
                unique: false,
                constraint,
            }))
        }
    }

    impl DatabaseError for ConstraintViolation {
        fn message(&self) -> &str {
            "constraint violated"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(if self.unique { "23505" } else { "23503" }))
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn constraint(&self) -> Option<&str> {
            Some(self.constraint)
        }

        fn kind(&self) -> ErrorKind {
            if self.unique {
                ErrorKind::UniqueViolation
            } else {
                ErrorKind::ForeignKeyViolation
            }
        }
    }

    fn user(id: i64, email: &str, nickname: &str) -> User {
        User::new(
            UserId::from_i64(id),
            Email::from_db(email.to_owned()),
            Nickname::from_db(nickname.to_owned()),
            UserPassword::from_bytes(b"$argon2id$v=19$m=64,t=1,p=1$c2FsdA$aGFzaA".to_vec()),
        )
    }

    #[test]
    fn test_classify_unique_violations_by_constraint() {
        assert!(matches!(
            StoreError::from(ConstraintViolation::unique("users_email_key")),
            StoreError::AlreadyExists(UniqueField::Email)
        ));
        assert!(matches!(
            StoreError::from(ConstraintViolation::unique("users_nickname_key")),
            StoreError::AlreadyExists(UniqueField::Nickname)
        ));
        assert!(matches!(
            StoreError::from(ConstraintViolation::unique("users_pkey")),
            StoreError::IdCollision
        ));
        assert!(matches!(
            StoreError::from(ConstraintViolation::unique("sessions_token_key")),
            StoreError::Query(_)
        ));
    }

    #[test]
    fn test_classify_non_unique_violation_as_query() {
        assert!(matches!(
            StoreError::from(ConstraintViolation::foreign_key("users_email_key")),
            StoreError::Query(_)
        ));
    }

    #[sqlx::test(migrations = "../../../database/migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_concurrent_duplicate_email_registers_once(pool: PgPool) {
        let store = PgCredentialStore::new(pool);
        let first = user(1, "dup@example.com", "first");
        let second = user(2, "dup@example.com", "second");

        let (a, b) = tokio::join!(store.register_user(&first), store.register_user(&second));

        let outcomes = [a, b];
        assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(
            outcomes
                .iter()
                .any(|r| matches!(r, Err(StoreError::AlreadyExists(UniqueField::Email))))
        );
    }

    #[test]
    fn test_classify_missing_row() {
        assert!(matches!(
            StoreError::from(sqlx::Error::RowNotFound),
            StoreError::NotFound
        ));
    }

    #[test]
    fn test_classify_connection_failures() {
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolTimedOut),
            StoreError::Unavailable(_)
        ));
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolClosed),
            StoreError::Unavailable(_)
        ));
    }

    #[test]
    fn test_classify_other_failures_as_query() {
        assert!(matches!(
            StoreError::from(sqlx::Error::ColumnNotFound("pass_hash".into())),
            StoreError::Query(_)
        ));
    }
}
