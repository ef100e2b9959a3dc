//! Password Hashing and Verification
//!
//! - Argon2id hashing (memory-hard, salted, slow by design)
//! - Tunable work factor via [`HashCost`]
//! - Zeroization of clear text on drop
//! - Optional application-wide pepper
//!
//! Verification distinguishes a wrong password ([`PasswordHashError::Mismatch`])
//! from a failure of the hashing machinery itself, so callers can log the two
//! differently while answering the user identically.

use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::{self, SaltString},
};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Upper bound on accepted password length, in Unicode code points
///
/// Keeps a single request from feeding megabytes into the hash function.
pub const MAX_PASSWORD_LENGTH: usize = 1024;

// ============================================================================
// Error Types
// ============================================================================

/// Password input rejected before hashing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password cannot be empty")]
    Empty,

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Password does not match the stored hash
    #[error("Password does not match")]
    Mismatch,

    /// Hashing operation failed (entropy, allocation, ...)
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored hash is not a valid PHC string
    #[error("Invalid password hash format")]
    InvalidHashFormat,

    /// Work factor parameters are out of range
    #[error("Invalid hash cost: {0}")]
    InvalidCost(String),
}

// ============================================================================
// Work Factor
// ============================================================================

/// Argon2id work factor
///
/// The default is the OWASP profile (m=19456 KiB, t=2, p=1).
#[derive(Debug, Clone)]
pub struct HashCost(Params);

impl HashCost {
    /// Build a custom work factor
    ///
    /// ## Arguments
    /// * `memory_kib` - memory cost in KiB (at least `8 * parallelism`)
    /// * `iterations` - number of passes (at least 1)
    /// * `parallelism` - lanes (at least 1)
    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self, PasswordHashError> {
        Params::new(memory_kib, iterations, parallelism, None)
            .map(Self)
            .map_err(|e| PasswordHashError::InvalidCost(e.to_string()))
    }

    pub fn memory_kib(&self) -> u32 {
        self.0.m_cost()
    }

    pub fn iterations(&self) -> u32 {
        self.0.t_cost()
    }

    pub fn parallelism(&self) -> u32 {
        self.0.p_cost()
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.0.clone())
    }
}

impl Default for HashCost {
    fn default() -> Self {
        Self(Params::default())
    }
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Accept a password from user input
    ///
    /// Unicode is normalized using NFKC so that visually identical input
    /// typed on different keyboards hashes the same way.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let mut raw = raw;
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();

        if normalized.is_empty() {
            return Err(PasswordPolicyError::Empty);
        }

        let char_count = normalized.chars().count();
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        Ok(Self(normalized))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    fn peppered(&self, pepper: Option<&[u8]>) -> Zeroizing<Vec<u8>> {
        let mut combined = Zeroizing::new(self.as_bytes().to_vec());
        if let Some(p) = pepper {
            combined.extend_from_slice(p);
        }
        combined
    }

    /// Hash the password using Argon2id with a fresh random salt
    ///
    /// ## Returns
    /// PHC-formatted hash string wrapped in `HashedPassword`
    pub fn hash(
        &self,
        cost: &HashCost,
        pepper: Option<&[u8]>,
    ) -> Result<HashedPassword, PasswordHashError> {
        let password_bytes = self.peppered(pepper);

        // 128-bit salt from the OS RNG
        let salt = SaltString::generate(OsRng);

        let hash = cost
            .argon2()
            .hash_password(&password_bytes, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// The PHC string carries algorithm, version, parameters and salt, so a hash
/// produced under one [`HashCost`] still verifies after the cost is changed.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self { hash })
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// Argon2 compares digests in constant time.
    ///
    /// ## Returns
    /// * `Ok(())` - the password matches
    /// * `Err(PasswordHashError::Mismatch)` - wrong password (or wrong pepper)
    /// * `Err(_)` - the stored hash or the hasher is broken
    pub fn verify(
        &self,
        password: &ClearTextPassword,
        pepper: Option<&[u8]>,
    ) -> Result<(), PasswordHashError> {
        let parsed_hash =
            PasswordHash::new(&self.hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        let password_bytes = password.peppered(pepper);

        match Argon2::default().verify_password(&password_bytes, &parsed_hash) {
            Ok(()) => Ok(()),
            Err(password_hash::Error::Password) => Err(PasswordHashError::Mismatch),
            Err(e) => Err(PasswordHashError::HashingFailed(e.to_string())),
        }
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
