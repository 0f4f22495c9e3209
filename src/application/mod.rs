//! Application layer: use-case services orchestrating the domain

pub mod equipment;
pub mod history;
pub mod identity;

#[cfg(test)]
pub(crate) mod testing;

pub use equipment::{
    CellInfo, EquipmentService, NewUnit, ReassignmentItem, ReassignmentOutcome,
    ReassignmentReport, UnitWithCells,
};
pub use history::HistoryService;
pub use identity::{
    AccountAdminService, AuthResult, AuthService, CreateAccount, CredentialService, IssuedToken,
    UpdateAccount,
};
