//! Equipment registry use-cases

pub mod service;

pub use service::{
    CellInfo, EquipmentService, NewUnit, ReassignmentItem, ReassignmentOutcome,
    ReassignmentReport, UnitWithCells,
};
