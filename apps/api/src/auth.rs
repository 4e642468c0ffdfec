//! Authentication collaborators: JWT issuance/verification and password
//! hashing.
//!
//! Both are modeled as swappable capabilities: the service layer sees
//! `sign(claims) → token` / `verify(token) → claims` and
//! `hash(password) → hash` / `verify(password, hash) → bool`, never the
//! algorithm behind them.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// =============================================================================
// JWT
// =============================================================================

/// JWT claims: the minimal payload `{userId, email}` plus the standard
/// issued-at/expiry stamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account identifier
    #[serde(rename = "userId")]
    pub user_id: i64,

    /// Account email
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// JWT token manager (HS256).
#[derive(Clone)]
pub struct JwtManager {
    secret: String,
    token_lifetime_secs: i64,
}

impl JwtManager {
    /// Create a new JWT manager.
    pub fn new(secret: String, token_lifetime_secs: i64) -> Self {
        JwtManager {
            secret,
            token_lifetime_secs,
        }
    }

    /// Issue a signed token for the given account.
    pub fn issue_token(&self, user_id: i64, email: &str) -> Result<String, ApiError> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.token_lifetime_secs);

        let claims = Claims {
            user_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| ApiError::Internal(format!("Failed to generate token: {}", e)))
    }

    /// Validate signature and expiry, returning the embedded claims.
    ///
    /// Every failure cause (malformed, expired, bad signature) collapses into
    /// the same `Invalid token` error; callers are never told which.
    pub fn verify_token(&self, token: &str) -> Result<Claims, ApiError> {
        let token_data: TokenData<Claims> = decode(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| ApiError::Unauthorized("Invalid token".to_string()))?;

        Ok(token_data.claims)
    }
}

// =============================================================================
// Password Hashing
// =============================================================================

/// One-way, salted credential hashing capability.
pub trait CredentialHasher: Send + Sync {
    /// Hashes a password for storage. The output embeds the salt.
    fn hash(&self, password: &str) -> Result<String, ApiError>;

    /// Verifies a password against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Argon2id implementation of [`CredentialHasher`].
pub struct Argon2Hasher;

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, ApiError> {
        use argon2::{
            password_hash::{rand_core::OsRng, SaltString},
            Argon2, PasswordHasher,
        };

        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| ApiError::Internal(format!("Failed to hash password: {}", e)))?;

        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        use argon2::{Argon2, PasswordHash, PasswordVerifier};

        let parsed_hash = match PasswordHash::new(hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip_preserves_claims() {
        let jwt = JwtManager::new("test-secret".to_string(), 86_400);

        let token = jwt.issue_token(42, "user@example.com").unwrap();
        let claims = jwt.verify_token(&token).unwrap();

        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.email, "user@example.com");
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, 86_400);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let jwt = JwtManager::new("test-secret".to_string(), 86_400);
        let other = JwtManager::new("other-secret".to_string(), 86_400);

        let token = jwt.issue_token(42, "user@example.com").unwrap();
        let err = other.verify_token(&token).unwrap_err();
        assert_eq!(err.to_string(), "Invalid token");

        let err = jwt.verify_token("not-a-token").unwrap_err();
        assert_eq!(err.to_string(), "Invalid token");
    }

    #[test]
    fn test_expired_token_rejected() {
        // Negative lifetime produces an already-expired token (beyond the
        // default 60s validation leeway).
        let jwt = JwtManager::new("test-secret".to_string(), -120);

        let token = jwt.issue_token(42, "user@example.com").unwrap();
        let err = jwt.verify_token(&token).unwrap_err();
        assert_eq!(err.to_string(), "Invalid token");
    }

    #[test]
    fn test_password_hash_and_verify() {
        let hasher = Argon2Hasher;

        let hash = hasher.hash("hunter2secret").unwrap();
        assert_ne!(hash, "hunter2secret");
        assert!(hasher.verify("hunter2secret", &hash));
        assert!(!hasher.verify("wrong-password", &hash));
        assert!(!hasher.verify("hunter2secret", "not-a-valid-hash"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = Argon2Hasher;

        let a = hasher.hash("same-password").unwrap();
        let b = hasher.hash("same-password").unwrap();
        assert_ne!(a, b);
    }
}
