//! API DTOs (Data Transfer Objects)
//!
//! Request fields default to empty so a missing field and an empty one are
//! rejected the same way, by `validate()`.

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

fn required(value: &str, message: &str) -> AuthResult<()> {
    if value.is_empty() {
        return Err(AuthError::InvalidArgument(message.to_string()));
    }
    Ok(())
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Email or nickname
    #[serde(default)]
    pub login_string: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> AuthResult<()> {
        required(&self.login_string, "nickname or email required")?;
        required(&self.password, "password required")
    }
}

/// Login response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
}

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> AuthResult<()> {
        required(&self.email, "Email required")?;
        required(&self.nickname, "Nickname required")?;
        required(&self.password, "Password required")
    }
}

/// Register response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub user_id: i64,
}

// ============================================================================
// Account Lifecycle
// ============================================================================
//
// Only responses: the stubbed operations take no input.

/// Logout response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponse {
    pub success: bool,
}

/// Unregister response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnregisterResponse {
    pub user_id: i64,
}

/// Admin check response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IsAdminResponse {
    pub is_admin: bool,
}
