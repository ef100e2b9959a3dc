//! User Password Value Objects
//!
//! - `RawPassword`: what the caller typed, zeroized on drop
//! - `UserPassword`: the stored, opaque salted digest

use crate::error::{AuthError, AuthResult};
use platform::password::{ClearTextPassword, PasswordPolicyError};
use std::fmt;

/// Plaintext password as received from a caller
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    pub fn new(raw: String) -> AuthResult<Self> {
        ClearTextPassword::new(raw).map(Self).map_err(|e| match e {
            PasswordPolicyError::Empty => AuthError::InvalidArgument("password required".into()),
            PasswordPolicyError::TooLong { .. } => AuthError::InvalidArgument(e.to_string()),
        })
    }

    pub(crate) fn as_clear_text(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawPassword([REDACTED])")
    }
}

/// Salted password digest
///
/// Opaque to everything except the hasher that produced it.
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(Vec<u8>);

impl UserPassword {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UserPassword([HASH])")
    }
}
