//! Domain Services
//!
//! Capabilities the use cases depend on without caring how they are
//! provided. All are synchronous; CPU-heavy callers move them off the
//! async executor.

use crate::domain::entity::user::User;
use crate::domain::value_object::{
    user_id::UserId,
    user_password::{RawPassword, UserPassword},
};
use crate::error::TokenError;
use chrono::{DateTime, Utc};
use platform::password::PasswordHashError;
use std::time::Duration;

/// Salted, slow, one-way password digests
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &RawPassword) -> Result<UserPassword, PasswordHashError>;

    /// `Ok(())` on match, `PasswordHashError::Mismatch` otherwise
    fn verify(&self, hash: &UserPassword, password: &RawPassword) -> Result<(), PasswordHashError>;
}

/// Signed, expiring session tokens
pub trait TokenIssuer: Send + Sync {
    fn issue_token(&self, user: &User, ttl: Duration) -> Result<String, TokenError>;
}

/// Source of fresh user ids
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> UserId;
}

/// Wall clock
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
