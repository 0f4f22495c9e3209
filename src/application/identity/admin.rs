//! Account administration (admin-only use-cases)

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::credentials::CredentialService;
use crate::domain::{DomainError, DomainResult, RepositoryProvider, User, UserRole};

/// Input for a new account. `role` is the raw role name.
#[derive(Debug, Clone)]
pub struct CreateAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone)]
pub struct UpdateAccount {
    pub name: String,
    pub email: String,
    pub role: String,
}

pub struct AccountAdminService {
    repos: Arc<dyn RepositoryProvider>,
    credentials: Arc<CredentialService>,
}

impl AccountAdminService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, credentials: Arc<CredentialService>) -> Self {
        Self { repos, credentials }
    }

    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.repos.users().find_all().await
    }

    pub async fn create_user(&self, input: CreateAccount) -> DomainResult<User> {
        let users = self.repos.users();

        if users.exists_by_email(&input.email).await? {
            return Err(DomainError::Conflict(format!("email {}", input.email)));
        }
        self.credentials.check_policy(&input.password)?;
        let password_hash = self.credentials.hash(&input.password)?;
        let role: UserRole = input.role.parse()?;

        let now = Utc::now();
        let user = users
            .create(User {
                id: uuid::Uuid::new_v4().to_string(),
                name: input.name,
                email: input.email,
                password_hash,
                role,
                created_at: now,
                updated_at: now,
            })
            .await?;

        info!(user_id = %user.id, role = %user.role, "Account created");
        Ok(user)
    }

    pub async fn update_user(&self, id: &str, input: UpdateAccount) -> DomainResult<User> {
        let users = self.repos.users();

        let mut user = users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", "id", id))?;

        if input.email != user.email && users.exists_by_email(&input.email).await? {
            return Err(DomainError::Conflict(format!("email {}", input.email)));
        }

        user.role = input.role.parse()?;
        user.name = input.name;
        user.email = input.email;

        let updated = users.update(&user).await?;
        info!(user_id = %updated.id, role = %updated.role, "Account updated");
        Ok(updated)
    }

    pub async fn delete_user(&self, id: &str) -> DomainResult<()> {
        self.repos.users().delete(id).await?;
        info!(user_id = id, "Account deleted");
        Ok(())
    }

    pub async fn change_password(&self, id: &str, new_password: &str) -> DomainResult<()> {
        let users = self.repos.users();

        if users.find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("User", "id", id));
        }
        self.credentials.check_policy(new_password)?;

        let digest = self.credentials.hash(new_password)?;
        users.update_password(id, &digest).await?;

        info!(user_id = id, "Password changed");
        Ok(())
    }

    /// Creates the configured admin account when no account exists yet.
    ///
    /// Returns the new account, or `None` when accounts were already present.
    pub async fn ensure_default_admin(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<Option<User>> {
        let users = self.repos.users();
        if users.count().await? > 0 {
            return Ok(None);
        }

        let now = Utc::now();
        let admin = users
            .create(User {
                id: uuid::Uuid::new_v4().to_string(),
                name: name.to_string(),
                email: email.to_string(),
                password_hash: self.credentials.hash(password)?,
                role: UserRole::Admin,
                created_at: now,
                updated_at: now,
            })
            .await?;

        info!(email = %admin.email, "Default admin created");
        Ok(Some(admin))
    }
}
