//! Auth Error Types
//!
//! Three layers of errors meet here:
//! - [`StoreError`] - what the credential store reports
//! - [`TokenError`] - what the token issuer reports
//! - [`AuthError`] - what a use case reports to the transport layer
//!
//! Use cases translate the first two into `AuthError` explicitly; there is no
//! blanket `From` so a store-level "not found" can never leak to a caller.

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use derive_more::Display;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Store result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// A user field carrying a uniqueness constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum UniqueField {
    #[display("email")]
    Email,
    #[display("nickname")]
    Nickname,
}

/// Credential store failures
///
/// Every backend failure is classified into exactly one variant.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record matches the lookup
    #[error("User not found")]
    NotFound,

    /// Uniqueness constraint violated on email or nickname
    #[error("A user with this {0} already exists")]
    AlreadyExists(UniqueField),

    /// The generated primary key already exists
    #[error("Generated user id collided with an existing record")]
    IdCollision,

    /// Connection-level failure (pool exhausted, socket, TLS)
    #[error("Credential store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// Any other query failure
    #[error("Credential store query failed: {0}")]
    Query(#[source] sqlx::Error),
}

/// Token issuance and verification failures
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token signing secret is empty")]
    EmptySecret,

    #[error("Token TTL is out of range")]
    TtlOutOfRange,

    #[error("Token encoding failed: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),

    #[error("Token is malformed or carries a bad signature: {0}")]
    Malformed(#[source] jsonwebtoken::errors::Error),

    #[error("Token has expired")]
    Expired,
}

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed or missing input, caught before any I/O
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Unknown identifier or wrong password (deliberately merged)
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid nickname")]
    InvalidNickname,

    #[error("A user with this {0} already exists")]
    AlreadyExists(UniqueField),

    /// Declared operation without an implementation
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    /// Token issuer wired with an unusable secret
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Hashing, signing or store failure not attributable to the caller
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidArgument(_) => ErrorKind::BadRequest,
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::InvalidEmail | AuthError::InvalidNickname => ErrorKind::UnprocessableEntity,
            AuthError::AlreadyExists(_) => ErrorKind::Conflict,
            AuthError::NotImplemented(_) => ErrorKind::NotImplemented,
            AuthError::Configuration(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Stable machine-readable reason
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidArgument(_) => "INVALID_ARGUMENT",
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::InvalidEmail => "INVALID_EMAIL",
            AuthError::InvalidNickname => "INVALID_NICKNAME",
            AuthError::AlreadyExists(_) => "ALREADY_EXISTS",
            AuthError::NotImplemented(_) => "NOT_IMPLEMENTED",
            AuthError::Configuration(_) | AuthError::Internal(_) => "INTERNAL",
        }
    }

    /// Convert to AppError
    ///
    /// Internal details stay server-side; the caller gets an opaque message.
    pub fn to_app_error(&self) -> AppError {
        let message = if self.kind().is_server_error() && !self.is_not_implemented() {
            "Internal error".to_string()
        } else {
            self.to_string()
        };
        AppError::new(self.kind(), message).with_code(self.code())
    }

    fn is_not_implemented(&self) -> bool {
        matches!(self, AuthError::NotImplemented(_))
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::Configuration(msg) => {
                tracing::error!(message = %msg, "Auth configuration error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::NotImplemented(op) => {
                tracing::info!(operation = op, "Unimplemented operation called");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

/// Token failures while issuing are never the caller's fault
impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::EmptySecret => AuthError::Configuration(err.to_string()),
            _ => AuthError::Internal(format!("token issuance failed: {err}")),
        }
    }
}

/// Unparseable or wrongly typed request bodies are malformed input
impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AuthError::InvalidArgument(rejection.body_text())
    }
}
