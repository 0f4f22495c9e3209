//! Database entities module

pub mod cell;
pub mod operation_record;
pub mod ru;
pub mod user;

pub use cell::Entity as Cell;
pub use operation_record::Entity as OperationRecord;
pub use ru::Entity as Ru;
pub use user::Entity as User;
