//! JWT Token Issuer
//!
//! HS256 tokens with claims `uid`, `email` and `exp` (seconds since epoch).

use std::sync::Arc;
use std::time::Duration;

use chrono::TimeDelta;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;
use crate::domain::service::{Clock, TokenIssuer};
use crate::error::TokenError;

/// Session token claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub uid: i64,
    pub email: String,
    pub exp: i64,
}

pub struct JwtTokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    clock: Arc<dyn Clock>,
}

impl JwtTokenIssuer {
    /// Build an issuer around a shared secret. An empty secret is refused.
    pub fn new(secret: &[u8], clock: Arc<dyn Clock>) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::EmptySecret);
        }
        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            clock,
        })
    }

    /// Check signature and expiry, returning the claims.
    ///
    /// Expiry is judged against the injected clock with no leeway: a token
    /// whose `exp` equals the current second is already expired.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;

        let data = decode::<SessionClaims>(token, &self.decoding, &validation)
            .map_err(TokenError::Malformed)?;

        if data.claims.exp <= self.clock.now().timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue_token(&self, user: &User, ttl: Duration) -> Result<String, TokenError> {
        let ttl = TimeDelta::from_std(ttl).map_err(|_| TokenError::TtlOutOfRange)?;
        let expires_at = self
            .clock
            .now()
            .checked_add_signed(ttl)
            .ok_or(TokenError::TtlOutOfRange)?;

        let claims = SessionClaims {
            uid: user.id.get(),
            email: user.email.as_str().to_owned(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(TokenError::Encode)
    }
}
