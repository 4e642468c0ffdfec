//! Registration, login, and token verification.
//!
//! Per-account state machine: `Anonymous → Registered → Authenticated`, with
//! "authenticated" represented purely by a client-held signed token that is
//! re-verified on each use. No server-side session storage.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::auth::{Claims, CredentialHasher, JwtManager};
use crate::error::ApiError;
use sweetshop_core::{validation, CoreError, User};
use sweetshop_db::UserRepository;

/// The result of a successful registration or login.
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

/// Service for account and token operations.
#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    hasher: Arc<dyn CredentialHasher>,
    jwt: JwtManager,
}

impl AuthService {
    /// Creates a new AuthService with explicit collaborator handles.
    pub fn new(users: UserRepository, hasher: Arc<dyn CredentialHasher>, jwt: JwtManager) -> Self {
        AuthService { users, hasher, jwt }
    }

    /// Registers a new account and issues its first token.
    ///
    /// Validates password length, then email shape, before any storage call,
    /// rejects duplicate emails, and stores only the salted hash.
    pub async fn register(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        validation::validate_password(password)?;
        validation::validate_email(email)?;

        if self.users.find_by_email(email).await?.is_some() {
            return Err(CoreError::UserAlreadyExists.into());
        }

        let password_hash = self.hasher.hash(password)?;

        // A racing registration past the lookup above still fails here on the
        // UNIQUE email constraint, which maps to the same conflict error.
        let user = self.users.insert(email, &password_hash).await?;

        let token = self.jwt.issue_token(user.id, &user.email)?;
        info!(user_id = user.id, "User registered");

        Ok(AuthSession { user, token })
    }

    /// Authenticates an account and issues a fresh token.
    ///
    /// Unknown email and wrong password produce the identical error so the
    /// endpoint cannot be used to enumerate accounts.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        let user = match self.users.find_by_email(email).await? {
            Some(user) => user,
            None => {
                warn!(email = %email, "Login attempt for unknown email");
                return Err(CoreError::InvalidCredentials.into());
            }
        };

        if !self.hasher.verify(password, &user.password_hash) {
            warn!(user_id = user.id, "Login attempt with wrong password");
            return Err(CoreError::InvalidCredentials.into());
        }

        let token = self.jwt.issue_token(user.id, &user.email)?;
        info!(user_id = user.id, "Login successful");

        Ok(AuthSession { user, token })
    }

    /// Verifies a bearer token and returns its claims.
    pub fn verify_token(&self, token: &str) -> Result<Claims, ApiError> {
        self.jwt.verify_token(token)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
