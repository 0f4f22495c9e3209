//! Equipment registry service
//!
//! Every write is a single-row compare-and-swap through the repository, so a
//! concurrent writer on the same row surfaces as `StaleWrite`.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::domain::{
    Cell, CellStatus, DomainError, DomainResult, EquipmentUnit, NewCell, RepositoryProvider,
    UnitNameplate, UnitType,
};

/// A unit together with its cells ordered by id.
#[derive(Debug, Clone)]
pub struct UnitWithCells {
    pub unit: EquipmentUnit,
    pub cells: Vec<Cell>,
}

/// Editable metadata of a cell.
#[derive(Debug, Clone)]
pub struct CellInfo {
    pub name: String,
    pub description: String,
    pub voltage: String,
}

#[derive(Debug, Clone)]
pub struct NewUnit {
    pub id: String,
    pub name: String,
    pub unit_type: UnitType,
    pub status: String,
    pub substation_id: Option<String>,
    pub nameplate: UnitNameplate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReassignmentOutcome {
    Updated,
    NotFound,
    Failed,
}

#[derive(Debug, Clone)]
pub struct ReassignmentItem {
    pub ru_id: String,
    pub outcome: ReassignmentOutcome,
    pub error: Option<String>,
}

/// Per-unit result of a bulk reassignment.
#[derive(Debug, Clone, Default)]
pub struct ReassignmentReport {
    pub items: Vec<ReassignmentItem>,
    pub updated: Vec<EquipmentUnit>,
}

pub struct EquipmentService {
    repos: Arc<dyn RepositoryProvider>,
}

impl EquipmentService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn list_units(&self) -> DomainResult<Vec<EquipmentUnit>> {
        self.repos.equipment().find_all_units().await
    }

    pub async fn get_unit(&self, ru_id: &str) -> DomainResult<UnitWithCells> {
        let equipment = self.repos.equipment();
        let unit = self.load_unit(ru_id).await?;
        let cells = equipment.find_cells(ru_id).await?;
        Ok(UnitWithCells { unit, cells })
    }

    pub async fn substation_units(&self, substation_id: &str) -> DomainResult<Vec<EquipmentUnit>> {
        self.repos
            .equipment()
            .find_units_by_substation(substation_id)
            .await
    }

    // ── Cell transitions ────────────────────────────────────────

    /// Any status may follow any other. `last_operation` is stamped on
    /// every call, grounding only when `is_grounded` is supplied.
    pub async fn update_cell_status(
        &self,
        ru_id: &str,
        cell_id: i32,
        status: CellStatus,
        is_grounded: Option<bool>,
    ) -> DomainResult<Cell> {
        let mut cell = self.load_cell(ru_id, cell_id).await?;
        cell.apply_status(status, is_grounded, Utc::now());

        let saved = self.repos.equipment().save_cell(&cell).await?;

        metrics::counter!("cell_operations_total", "kind" => "status").increment(1);
        info!(
            ru_id,
            cell_id,
            status = ?saved.status,
            grounded = saved.is_grounded,
            "Cell status changed"
        );
        Ok(saved)
    }

    pub async fn update_cell_info(&self, ru_id: &str, cell_id: i32, info: CellInfo) -> DomainResult<Cell> {
        let mut cell = self.load_cell(ru_id, cell_id).await?;
        cell.apply_info(info.name, info.description, info.voltage, Utc::now());

        let saved = self.repos.equipment().save_cell(&cell).await?;

        metrics::counter!("cell_operations_total", "kind" => "info").increment(1);
        info!(ru_id, cell_id, "Cell info updated");
        Ok(saved)
    }

    // ── Unit updates ────────────────────────────────────────────

    pub async fn update_unit_status(&self, ru_id: &str, status: &str) -> DomainResult<EquipmentUnit> {
        let mut unit = self.load_unit(ru_id).await?;
        unit.status = status.to_string();
        unit.updated_at = Utc::now();

        let saved = self.repos.equipment().save_unit(&unit).await?;
        info!(ru_id, status, "Unit status changed");
        Ok(saved)
    }

    /// Each id is handled on its own; the batch never aborts.
    pub async fn reassign_substation(&self, substation_id: &str, ru_ids: &[String]) -> ReassignmentReport {
        let mut report = ReassignmentReport::default();

        for ru_id in ru_ids {
            let (outcome, error) = match self.reassign_one(ru_id, substation_id).await {
                Ok(unit) => {
                    report.updated.push(unit);
                    (ReassignmentOutcome::Updated, None)
                }
                Err(DomainError::NotFound { .. }) => (ReassignmentOutcome::NotFound, None),
                Err(e) => {
                    warn!(ru_id = %ru_id, substation_id, error = %e, "Reassignment failed");
                    (ReassignmentOutcome::Failed, Some(e.to_string()))
                }
            };

            report.items.push(ReassignmentItem {
                ru_id: ru_id.clone(),
                outcome,
                error,
            });
        }

        info!(
            substation_id,
            requested = ru_ids.len(),
            updated = report.updated.len(),
            "Units reassigned"
        );
        report
    }

    async fn reassign_one(&self, ru_id: &str, substation_id: &str) -> DomainResult<EquipmentUnit> {
        let mut unit = self.load_unit(ru_id).await?;
        unit.substation_id = Some(substation_id.to_string());
        unit.updated_at = Utc::now();
        self.repos.equipment().save_unit(&unit).await
    }

    // ── Provisioning ────────────────────────────────────────────

    pub async fn create_unit(&self, input: NewUnit) -> DomainResult<EquipmentUnit> {
        let equipment = self.repos.equipment();

        if equipment.find_unit(&input.id).await?.is_some() {
            return Err(DomainError::Conflict(format!("unit {}", input.id)));
        }

        let now = Utc::now();
        let unit = equipment
            .insert_unit(EquipmentUnit {
                id: input.id,
                name: input.name,
                unit_type: input.unit_type,
                status: input.status,
                substation_id: input.substation_id,
                nameplate: input.nameplate,
                version: 0,
                created_at: now,
                updated_at: now,
            })
            .await?;

        info!(ru_id = %unit.id, "Unit created");
        Ok(unit)
    }

    /// Cells without an id get the next free id in the unit.
    pub async fn add_cells(&self, ru_id: &str, cells: Vec<NewCell>) -> DomainResult<Vec<Cell>> {
        let stored = self.repos.equipment().insert_cells(ru_id, cells).await?;
        info!(ru_id, count = stored.len(), "Cells added");
        Ok(stored)
    }

    // ── Helpers ─────────────────────────────────────────────────

    async fn load_unit(&self, ru_id: &str) -> DomainResult<EquipmentUnit> {
        self.repos
            .equipment()
            .find_unit(ru_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Unit", "id", ru_id))
    }

    async fn load_cell(&self, ru_id: &str, cell_id: i32) -> DomainResult<Cell> {
        self.repos
            .equipment()
            .find_cell(ru_id, cell_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Cell", "id", format!("{}/{}", ru_id, cell_id)))
    }
}
