//! Value Object Module

pub mod email;
pub mod login_identifier;
pub mod nickname;
pub mod user_id;
pub mod user_password;
