//! Account Lifecycle
//!
//! Declared operations that have no implementation yet. Each one answers
//! `AuthError::NotImplemented` without reading its input or touching state.

use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Invalidate a session token
pub fn logout() -> AuthResult<bool> {
    Err(AuthError::NotImplemented("Logout"))
}

/// Delete an account after re-confirming its password
pub fn unregister() -> AuthResult<UserId> {
    Err(AuthError::NotImplemented("Unregister"))
}

/// Whether the user holds the admin role
pub fn is_admin() -> AuthResult<bool> {
    Err(AuthError::NotImplemented("IsAdmin"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_operations_are_not_implemented() {
        assert!(matches!(logout(), Err(AuthError::NotImplemented("Logout"))));
        assert!(matches!(
            unregister(),
            Err(AuthError::NotImplemented("Unregister"))
        ));
        assert!(matches!(
            is_admin(),
            Err(AuthError::NotImplemented("IsAdmin"))
        ));
    }
}
