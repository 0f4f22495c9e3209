//! Authentication use-cases: register, login, current identity
//!
//! HTTP handlers should be thin wrappers that delegate to this service.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::credentials::{CredentialService, IssuedToken};
use crate::domain::{DomainError, DomainResult, RepositoryProvider, User, UserRole};

/// Same message whether the email is unknown or the password wrong.
pub const INVALID_CREDENTIALS: &str = "invalid email or password";

/// Authentication result returned after a successful login or registration
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub token: IssuedToken,
    pub user: User,
}

pub struct AuthService {
    repos: Arc<dyn RepositoryProvider>,
    credentials: Arc<CredentialService>,
}

impl AuthService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, credentials: Arc<CredentialService>) -> Self {
        Self { repos, credentials }
    }

    // ── Registration ────────────────────────────────────────────

    /// Self-registration always yields the default role.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> DomainResult<AuthResult> {
        let users = self.repos.users();

        if users.exists_by_email(email).await? {
            return Err(DomainError::Conflict(format!("email {}", email)));
        }

        let now = Utc::now();
        let user = users
            .create(User {
                id: uuid::Uuid::new_v4().to_string(),
                name: name.to_string(),
                email: email.to_string(),
                password_hash: self.credentials.hash(password)?,
                role: UserRole::default(),
                created_at: now,
                updated_at: now,
            })
            .await?;

        let token = self.credentials.issue(&user)?;
        info!(user_id = %user.id, role = %user.role, "New user registered");

        Ok(AuthResult { token, user })
    }

    // ── Authentication ──────────────────────────────────────────

    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResult> {
        let user = self.repos.users().find_by_email(email).await?;

        let Some(user) = user.filter(|u| self.credentials.verify(password, &u.password_hash)) else {
            warn!("Rejected login attempt");
            metrics::counter!("auth_logins_total", "outcome" => "rejected").increment(1);
            return Err(DomainError::Unauthenticated(INVALID_CREDENTIALS.into()));
        };

        let token = self.credentials.issue(&user)?;
        metrics::counter!("auth_logins_total", "outcome" => "accepted").increment(1);
        info!(user_id = %user.id, "User logged in");

        Ok(AuthResult { token, user })
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn current_user(&self, user_id: &str) -> DomainResult<User> {
        self.repos
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", "id", user_id))
    }
}
