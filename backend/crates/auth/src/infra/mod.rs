//! Infrastructure Layer
//!
//! Database implementations and external service integrations.

pub mod argon2;
pub mod jwt;
pub mod memory;
pub mod postgres;
pub mod system;

pub use argon2::Argon2PasswordHasher;
pub use jwt::{JwtTokenIssuer, SessionClaims};
pub use memory::InMemoryCredentialStore;
pub use postgres::PgCredentialStore;
pub use system::{FixedClock, RandomIdGenerator, SystemClock};
