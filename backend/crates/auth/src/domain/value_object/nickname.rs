//! Nickname Value Object

use crate::error::{AuthError, AuthResult};
use derive_more::Display;

/// Whether `candidate` can serve as a nickname.
///
/// The only rule is that it contains no `@`, which keeps nicknames and
/// emails apart in a single login field. The empty string passes here;
/// presence is checked at the request boundary.
pub fn is_valid_nickname(candidate: &str) -> bool {
    !candidate.contains('@')
}

/// Nickname value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct Nickname(String);

impl Nickname {
    pub fn new(nickname: impl Into<String>) -> AuthResult<Self> {
        let nickname = nickname.into();
        if !is_valid_nickname(&nickname) {
            return Err(AuthError::InvalidNickname);
        }
        Ok(Self(nickname))
    }

    /// Rehydrate from storage
    pub fn from_db(nickname: String) -> Self {
        Self(nickname)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nickname_rules() {
        assert!(is_valid_nickname("alice"));
        assert!(is_valid_nickname("alice.smith-42"));
        assert!(is_valid_nickname("ünïcødé"));
        assert!(is_valid_nickname(""));
        assert!(!is_valid_nickname("alice@home"));
        assert!(!is_valid_nickname("@"));
    }

    #[test]
    fn test_nickname_rejects_at_sign() {
        assert!(matches!(
            Nickname::new("a@b"),
            Err(AuthError::InvalidNickname)
        ));
        assert_eq!(Nickname::new("bob").unwrap().as_str(), "bob");
    }
}
