//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod equipment_repository;
pub mod history_repository;
pub mod repository_provider;
pub mod user_repository;

pub use equipment_repository::SeaOrmEquipmentRepository;
pub use history_repository::SeaOrmHistoryRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use user_repository::SeaOrmUserRepository;
