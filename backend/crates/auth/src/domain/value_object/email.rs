//! Email Value Object
//!
//! Format check only. Emails are stored exactly as given (no trimming, no
//! case folding), so `A@x.io` and `a@x.io` are distinct accounts.

use crate::error::{AuthError, AuthResult};
use derive_more::Display;
use regex::Regex;
use std::sync::OnceLock;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Whether `candidate` looks like an email address.
///
/// Local part of `[a-zA-Z0-9._%+-]`, a domain of `[a-zA-Z0-9.-]` and an
/// alphabetic TLD of at least two letters. The empty string is invalid.
pub fn is_valid_email(candidate: &str) -> bool {
    email_regex().is_match(candidate)
}

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl Into<String>) -> AuthResult<Self> {
        let email = email.into();
        if !is_valid_email(&email) {
            return Err(AuthError::InvalidEmail);
        }
        Ok(Self(email))
    }

    /// Rehydrate from storage (already validated on insert)
    pub fn from_db(email: String) -> Self {
        Self(email)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
