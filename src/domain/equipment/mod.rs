//! Equipment registry aggregate
//!
//! Switchgear units ("RU") own their cells. Both carry a `version` used for
//! compare-and-swap writes.

pub mod model;
pub mod repository;

pub use model::{Cell, CellStatus, CellType, EquipmentUnit, NewCell, UnitNameplate, UnitType};
pub use repository::EquipmentRepository;
