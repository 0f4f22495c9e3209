//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, SqlErr,
};

use crate::domain::{DomainError, DomainResult, User, UserRepository, UserRole};
use crate::infrastructure::database::entities::user;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn role_to_entity(role: UserRole) -> user::Role {
    match role {
        UserRole::Dispatcher => user::Role::Dispatcher,
        UserRole::Engineer => user::Role::Engineer,
        UserRole::Admin => user::Role::Admin,
    }
}

fn role_to_domain(role: user::Role) -> UserRole {
    match role {
        user::Role::Dispatcher => UserRole::Dispatcher,
        user::Role::Engineer => UserRole::Engineer,
        user::Role::Admin => UserRole::Admin,
    }
}

fn model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        role: role_to_domain(model.role),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

/// Unique-index violations surface as `Conflict`, everything else as storage.
fn write_err<'a>(operation: &'static str, email: &'a str) -> impl FnOnce(DbErr) -> DomainError + 'a {
    move |e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::Conflict(format!("email {}", email)),
        _ => DomainError::storage(operation)(e),
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, u: User) -> DomainResult<User> {
        let model = user::ActiveModel {
            id: Set(u.id),
            name: Set(u.name),
            email: Set(u.email.clone()),
            password_hash: Set(u.password_hash),
            role: Set(role_to_entity(u.role)),
            created_at: Set(u.created_at),
            updated_at: Set(u.updated_at),
        };

        let stored = model
            .insert(&self.db)
            .await
            .map_err(write_err("create user", &u.email))?;

        Ok(model_to_domain(stored))
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let models = user::Entity::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(DomainError::storage("list users"))?;

        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(DomainError::storage("find user"))?;

        Ok(model.map(model_to_domain))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(DomainError::storage("find user by email"))?;

        Ok(model.map(model_to_domain))
    }

    async fn exists_by_email(&self, email: &str) -> DomainResult<bool> {
        let count = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .count(&self.db)
            .await
            .map_err(DomainError::storage("check email"))?;

        Ok(count > 0)
    }

    async fn count(&self) -> DomainResult<u64> {
        user::Entity::find()
            .count(&self.db)
            .await
            .map_err(DomainError::storage("count users"))
    }

    async fn update(&self, u: &User) -> DomainResult<User> {
        let existing = user::Entity::find_by_id(u.id.as_str())
            .one(&self.db)
            .await
            .map_err(DomainError::storage("update user"))?
            .ok_or_else(|| DomainError::not_found("User", "id", &u.id))?;

        let mut active: user::ActiveModel = existing.into();
        active.name = Set(u.name.clone());
        active.email = Set(u.email.clone());
        active.role = Set(role_to_entity(u.role));
        active.updated_at = Set(Utc::now());

        let updated = active
            .update(&self.db)
            .await
            .map_err(write_err("update user", &u.email))?;

        Ok(model_to_domain(updated))
    }

    async fn update_password(&self, id: &str, password_hash: &str) -> DomainResult<()> {
        let existing = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(DomainError::storage("update password"))?
            .ok_or_else(|| DomainError::not_found("User", "id", id))?;

        let mut active: user::ActiveModel = existing.into();
        active.password_hash = Set(password_hash.to_string());
        active.updated_at = Set(Utc::now());
        active
            .update(&self.db)
            .await
            .map_err(DomainError::storage("update password"))?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let result = user::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(DomainError::storage("delete user"))?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("User", "id", id));
        }

        Ok(())
    }
}
