use async_trait::async_trait;

use super::User;
use crate::shared::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: User) -> DomainResult<User>;

    async fn find_all(&self) -> DomainResult<Vec<User>>;
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;
    async fn exists_by_email(&self, email: &str) -> DomainResult<bool>;
    async fn count(&self) -> DomainResult<u64>;

    /// Persists name, email and role.
    async fn update(&self, user: &User) -> DomainResult<User>;
    /// Persists only the password hash.
    async fn update_password(&self, id: &str, password_hash: &str) -> DomainResult<()>;
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
