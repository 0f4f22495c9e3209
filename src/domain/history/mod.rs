//! Operations history ledger
//!
//! Append-only: the repository exposes no update or delete.

pub mod model;
pub mod repository;

pub use model::{HistoryDetails, NewOperationRecord, OperationRecord};
pub use repository::HistoryRepository;
