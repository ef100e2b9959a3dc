//! Domain Layer
//!
//! Contains entities, value objects, repository traits and service traits.

pub mod entity;
pub mod repository;
pub mod service;
pub mod value_object;

// Re-exports
pub use entity::user::User;
pub use repository::CredentialStore;
pub use service::{Clock, IdGenerator, PasswordHasher, TokenIssuer};
