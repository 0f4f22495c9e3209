//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{EquipmentRepository, HistoryRepository, RepositoryProvider, UserRepository};

use super::equipment_repository::SeaOrmEquipmentRepository;
use super::history_repository::SeaOrmHistoryRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let unit = repos.equipment().find_unit("ru-1").await?;
/// let user = repos.users().find_by_email("a@x.com").await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    users: SeaOrmUserRepository,
    equipment: SeaOrmEquipmentRepository,
    history: SeaOrmHistoryRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db.clone()),
            equipment: SeaOrmEquipmentRepository::new(db.clone()),
            history: SeaOrmHistoryRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn equipment(&self) -> &dyn EquipmentRepository {
        &self.equipment
    }

    fn history(&self) -> &dyn HistoryRepository {
        &self.history
    }
}
