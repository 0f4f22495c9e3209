pub mod equipment;
pub mod history;
pub mod repositories;
pub mod user;

// Re-export commonly used types
pub use equipment::{
    Cell, CellStatus, CellType, EquipmentRepository, EquipmentUnit, NewCell, UnitNameplate,
    UnitType,
};
pub use history::{HistoryDetails, HistoryRepository, NewOperationRecord, OperationRecord};
pub use repositories::RepositoryProvider;
pub use user::{User, UserRepository, UserRole};

pub use crate::shared::errors::{DomainError, DomainResult};
