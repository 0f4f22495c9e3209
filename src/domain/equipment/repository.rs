//! Equipment repository interface

use async_trait::async_trait;

use super::model::{Cell, EquipmentUnit, NewCell};
use crate::shared::DomainResult;

#[async_trait]
pub trait EquipmentRepository: Send + Sync {
    /// All units, newest first.
    async fn find_all_units(&self) -> DomainResult<Vec<EquipmentUnit>>;
    async fn find_unit(&self, id: &str) -> DomainResult<Option<EquipmentUnit>>;
    async fn find_units_by_substation(&self, substation_id: &str) -> DomainResult<Vec<EquipmentUnit>>;
    async fn insert_unit(&self, unit: EquipmentUnit) -> DomainResult<EquipmentUnit>;
    /// Compare-and-swap on `unit.version`; returns the stored row.
    async fn save_unit(&self, unit: &EquipmentUnit) -> DomainResult<EquipmentUnit>;

    /// Cells of a unit ordered by id.
    async fn find_cells(&self, ru_id: &str) -> DomainResult<Vec<Cell>>;
    /// Resolves a cell only within its own unit.
    async fn find_cell(&self, ru_id: &str, cell_id: i32) -> DomainResult<Option<Cell>>;
    async fn insert_cells(&self, ru_id: &str, cells: Vec<NewCell>) -> DomainResult<Vec<Cell>>;
    /// Compare-and-swap on `cell.version`; returns the stored row.
    async fn save_cell(&self, cell: &Cell) -> DomainResult<Cell>;
}
