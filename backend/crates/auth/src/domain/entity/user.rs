//! User Entity
//!
//! A registered account: identity plus the stored password digest.

use crate::domain::value_object::{
    email::Email, nickname::Nickname, user_id::UserId, user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub nickname: Nickname,
    pub password_hash: UserPassword,
}

impl User {
    pub fn new(id: UserId, email: Email, nickname: Nickname, password_hash: UserPassword) -> Self {
        Self {
            id,
            email,
            nickname,
            password_hash,
        }
    }
}
