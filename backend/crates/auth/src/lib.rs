//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, store and service traits
//! - `application/` - Login and Register use cases
//! - `infra/` - PostgreSQL and in-memory stores, Argon2, JWT, clocks
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Register with email + nickname + password
//! - Login with either email or nickname, answered with a signed session token
//! - Logout / Unregister / IsAdmin are routed but answer 501
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (optional pepper, tunable cost)
//! - Unknown users and wrong passwords are indistinguishable to callers
//! - Internal failures never reach the response body

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult, StoreError, TokenError};
pub use infra::{InMemoryCredentialStore, JwtTokenIssuer, PgCredentialStore, SystemClock};
pub use presentation::{AuthAppState, auth_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::AppError,
    kind::ErrorKind,
};
