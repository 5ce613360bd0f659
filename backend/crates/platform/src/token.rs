//! Bearer Token Issuing and Verification
//!
//! Compact HS256 tokens whose payload carries the user identifier
//! (`sub`) and nothing else. Tokens carry no expiry claim and are
//! valid indefinitely once issued; verification therefore disables
//! the `exp` check instead of relying on the default validation.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing failed (key/serialization problem)
    #[error("Token signing failed: {0}")]
    Signing(String),

    /// Signature or structure did not verify
    #[error("Token verification failed")]
    Invalid,
}

/// Token payload: the subject is the user id, nothing more
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
}

/// Issues and verifies bearer tokens with a shared HS256 secret
#[derive(Clone)]
pub struct TokenCodec {
    secret: String,
}

impl TokenCodec {
    /// Create a codec over a shared secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Issue a token embedding the given subject
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let claims = Claims {
            sub: subject.to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify a token and return the embedded subject
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // No expiry is enforced; tokens never carry an exp claim.
        validation.validate_exp = false;
        validation.set_required_spec_claims(&[] as &[&str]);

        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|_| TokenError::Invalid)?;

        Ok(decoded.claims.sub)
    }
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let codec = TokenCodec::new("test-secret-key-12345");
        let subject = Uuid::new_v4().to_string();

        let token = codec.issue(&subject).unwrap();
        assert!(!token.is_empty());

        let decoded = codec.verify(&token).unwrap();
        assert_eq!(decoded, subject);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let codec = TokenCodec::new("test-secret-key-12345");
        assert!(codec.verify("invalid.token.here").is_err());
        assert!(codec.verify("").is_err());
    }

    #[test]
    fn test_different_secrets_reject() {
        let codec1 = TokenCodec::new("secret1");
        let codec2 = TokenCodec::new("secret2");

        let token = codec1.issue("user-1").unwrap();
        assert!(codec2.verify(&token).is_err());
    }

    #[test]
    fn test_token_without_expiry_verifies() {
        // The payload has no exp claim; verification must not demand one.
        let codec = TokenCodec::new("test-secret-key-12345");
        let token = codec.issue("user-1").unwrap();
        assert_eq!(codec.verify(&token).unwrap(), "user-1");
    }
}
