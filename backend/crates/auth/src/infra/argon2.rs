//! Argon2id Password Hasher
//!
//! Digests are stored as the UTF-8 bytes of a PHC string, which carries the
//! algorithm, cost and salt alongside the hash.

use std::fmt;

use platform::password::{HashCost, HashedPassword, PasswordHashError};

use crate::application::config::AuthConfig;
use crate::domain::service::PasswordHasher;
use crate::domain::value_object::user_password::{RawPassword, UserPassword};

pub struct Argon2PasswordHasher {
    cost: HashCost,
    pepper: Option<Vec<u8>>,
}

impl Argon2PasswordHasher {
    pub fn new(cost: HashCost, pepper: Option<Vec<u8>>) -> Self {
        Self { cost, pepper }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.hash_cost.clone(), config.password_pepper.clone())
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &RawPassword) -> Result<UserPassword, PasswordHashError> {
        let hashed = password
            .as_clear_text()
            .hash(&self.cost, self.pepper.as_deref())?;
        Ok(UserPassword::from_bytes(hashed.as_phc_string().as_bytes().to_vec()))
    }

    fn verify(&self, hash: &UserPassword, password: &RawPassword) -> Result<(), PasswordHashError> {
        let phc = std::str::from_utf8(hash.as_bytes())
            .map_err(|_| PasswordHashError::InvalidHashFormat)?;
        HashedPassword::from_phc_string(phc)?.verify(password.as_clear_text(), self.pepper.as_deref())
    }
}

impl fmt::Debug for Argon2PasswordHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Argon2PasswordHasher")
            .field("cost", &self.cost)
            .field("pepper", &self.pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap() -> HashCost {
        HashCost::new(64, 1, 1).unwrap()
    }

    fn pw(s: &str) -> RawPassword {
        RawPassword::new(s.to_string()).unwrap()
    }

    #[test]
    fn test_hash_then_verify() {
        let hasher = Argon2PasswordHasher::new(cheap(), None);
        let digest = hasher.hash(&pw("correct horse")).unwrap();

        assert!(hasher.verify(&digest, &pw("correct horse")).is_ok());
        assert!(matches!(
            hasher.verify(&digest, &pw("battery staple")),
            Err(PasswordHashError::Mismatch)
        ));
    }

    #[test]
    fn test_same_password_different_salt() {
        let hasher = Argon2PasswordHasher::new(cheap(), None);
        let a = hasher.hash(&pw("secret")).unwrap();
        let b = hasher.hash(&pw("secret")).unwrap();
        assert_ne!(a, b);
        assert!(hasher.verify(&b, &pw("secret")).is_ok());
    }

    #[test]
    fn test_pepper_must_match() {
        let peppered = Argon2PasswordHasher::new(cheap(), Some(b"pepper".to_vec()));
        let plain = Argon2PasswordHasher::new(cheap(), None);
        let digest = peppered.hash(&pw("secret")).unwrap();

        assert!(peppered.verify(&digest, &pw("secret")).is_ok());
        assert!(matches!(
            plain.verify(&digest, &pw("secret")),
            Err(PasswordHashError::Mismatch)
        ));
    }

    #[test]
    fn test_corrupt_digest() {
        let hasher = Argon2PasswordHasher::new(cheap(), None);
        assert!(matches!(
            hasher.verify(&UserPassword::from_bytes(b"not-a-phc".to_vec()), &pw("x")),
            Err(PasswordHashError::InvalidHashFormat)
        ));
        assert!(matches!(
            hasher.verify(&UserPassword::from_bytes(vec![0xff, 0xfe]), &pw("x")),
            Err(PasswordHashError::InvalidHashFormat)
        ));
    }

    #[test]
    fn test_debug_hides_pepper() {
        let hasher = Argon2PasswordHasher::new(cheap(), Some(b"pepper".to_vec()));
        let debug = format!("{hasher:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("112"));
    }
}
