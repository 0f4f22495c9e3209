//! Equipment unit and cell DTOs
//!
//! Field names follow the operator console's camelCase JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::{CellInfo, NewUnit, UnitWithCells};
use crate::domain::{Cell, CellStatus, CellType, EquipmentUnit, NewCell, UnitNameplate, UnitType};
use crate::shared::time::instant_opt;

/// Switchgear unit with its nameplate data
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuDto {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub unit_type: UnitType,
    pub status: String,
    pub substation_id: Option<String>,
    pub voltage: String,
    pub sections: i32,
    pub cells_count: i32,
    pub transformers: i32,
    pub transformer_power: String,
    pub location: String,
    pub installation_date: String,
    pub manufacturer: String,
    pub last_maintenance: String,
    pub next_maintenance: String,
    pub scheme_type: String,
    pub total_load_high: String,
    pub total_load_low: String,
    pub total_power_high: String,
    pub total_power_low: String,
    pub max_capacity_high: String,
    pub max_capacity_low: String,
    pub operational_hours: i32,
    pub last_inspection: String,
    pub has_high_side: bool,
    pub has_low_side: bool,
    pub bus_sections: i32,
    pub cells_per_section: i32,
    /// Optimistic concurrency token
    pub version: i32,
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updated_at")]
    pub updated_at: DateTime<Utc>,
}

impl From<EquipmentUnit> for RuDto {
    fn from(u: EquipmentUnit) -> Self {
        let n = u.nameplate;
        Self {
            id: u.id,
            name: u.name,
            unit_type: u.unit_type,
            status: u.status,
            substation_id: u.substation_id,
            voltage: n.voltage,
            sections: n.sections,
            cells_count: n.cells_count,
            transformers: n.transformers,
            transformer_power: n.transformer_power,
            location: n.location,
            installation_date: n.installation_date,
            manufacturer: n.manufacturer,
            last_maintenance: n.last_maintenance,
            next_maintenance: n.next_maintenance,
            scheme_type: n.scheme_type,
            total_load_high: n.total_load_high,
            total_load_low: n.total_load_low,
            total_power_high: n.total_power_high,
            total_power_low: n.total_power_low,
            max_capacity_high: n.max_capacity_high,
            max_capacity_low: n.max_capacity_low,
            operational_hours: n.operational_hours,
            last_inspection: n.last_inspection,
            has_high_side: n.has_high_side,
            has_low_side: n.has_low_side,
            bus_sections: n.bus_sections,
            cells_per_section: n.cells_per_section,
            version: u.version,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CellDto {
    pub id: i32,
    pub ru_id: String,
    pub number: String,
    pub name: String,
    #[serde(rename = "type")]
    pub cell_type: CellType,
    pub status: CellStatus,
    pub voltage: String,
    pub voltage_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,
    pub description: String,
    pub is_grounded: bool,
    /// `DD.MM.YYYY HH:MM:SS`, server local time
    #[serde(with = "instant_opt", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "07.03.2024 09:05:01")]
    pub last_operation: Option<DateTime<Utc>>,
    #[serde(with = "instant_opt", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "07.03.2024 09:05:01")]
    pub last_grounded_operation: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transformer_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bus_section: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load: Option<f64>,
    pub version: i32,
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updated_at")]
    pub updated_at: DateTime<Utc>,
}

impl From<Cell> for CellDto {
    fn from(c: Cell) -> Self {
        Self {
            id: c.id,
            ru_id: c.ru_id,
            number: c.number,
            name: c.name,
            cell_type: c.cell_type,
            status: c.status,
            voltage: c.voltage,
            voltage_level: c.voltage_level,
            power: c.power,
            description: c.description,
            is_grounded: c.is_grounded,
            last_operation: c.last_operation,
            last_grounded_operation: c.last_grounded_operation,
            transformer_number: c.transformer_number,
            bus_section: c.bus_section,
            current: c.current,
            temperature: c.temperature,
            load: c.load,
            version: c.version,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Unit with its cells ordered by id
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuDetailsDto {
    pub ru_info: RuDto,
    pub cells: Vec<CellDto>,
}

impl From<UnitWithCells> for RuDetailsDto {
    fn from(v: UnitWithCells) -> Self {
        Self {
            ru_info: RuDto::from(v.unit),
            cells: v.cells.into_iter().map(CellDto::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCellStatusRequest {
    pub status: CellStatus,
    /// When present, grounding is set and its timestamp stamped
    pub is_grounded: Option<bool>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCellInfoRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 500, message = "description must be 1-500 characters"))]
    pub description: String,
    #[validate(length(min = 1, max = 20, message = "voltage must be 1-20 characters"))]
    pub voltage: String,
}

impl From<UpdateCellInfoRequest> for CellInfo {
    fn from(r: UpdateCellInfoRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            voltage: r.voltage,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRuStatusRequest {
    #[validate(length(min = 1, max = 50, message = "status must be 1-50 characters"))]
    pub status: String,
}

fn default_unit_status() -> String {
    "normal".to_string()
}

/// New unit. Nameplate fields default to empty/zero.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRuRequest {
    #[validate(length(min = 1, max = 64, message = "id must be 1-64 characters"))]
    pub id: String,
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
    #[serde(rename = "type", default)]
    pub unit_type: UnitType,
    #[serde(default = "default_unit_status")]
    pub status: String,
    #[serde(default)]
    pub substation_id: Option<String>,
    #[serde(default)]
    pub voltage: String,
    #[serde(default)]
    pub sections: i32,
    #[serde(default)]
    pub cells_count: i32,
    #[serde(default)]
    pub transformers: i32,
    #[serde(default)]
    pub transformer_power: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub installation_date: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub last_maintenance: String,
    #[serde(default)]
    pub next_maintenance: String,
    #[serde(default)]
    pub scheme_type: String,
    #[serde(default)]
    pub total_load_high: String,
    #[serde(default)]
    pub total_load_low: String,
    #[serde(default)]
    pub total_power_high: String,
    #[serde(default)]
    pub total_power_low: String,
    #[serde(default)]
    pub max_capacity_high: String,
    #[serde(default)]
    pub max_capacity_low: String,
    #[serde(default)]
    pub operational_hours: i32,
    #[serde(default)]
    pub last_inspection: String,
    #[serde(default)]
    pub has_high_side: bool,
    #[serde(default)]
    pub has_low_side: bool,
    #[serde(default)]
    pub bus_sections: i32,
    #[serde(default)]
    pub cells_per_section: i32,
}

impl From<CreateRuRequest> for NewUnit {
    fn from(r: CreateRuRequest) -> Self {
        Self {
            id: r.id,
            name: r.name,
            unit_type: r.unit_type,
            status: r.status,
            substation_id: r.substation_id,
            nameplate: UnitNameplate {
                voltage: r.voltage,
                sections: r.sections,
                cells_count: r.cells_count,
                transformers: r.transformers,
                transformer_power: r.transformer_power,
                location: r.location,
                installation_date: r.installation_date,
                manufacturer: r.manufacturer,
                last_maintenance: r.last_maintenance,
                next_maintenance: r.next_maintenance,
                scheme_type: r.scheme_type,
                total_load_high: r.total_load_high,
                total_load_low: r.total_load_low,
                total_power_high: r.total_power_high,
                total_power_low: r.total_power_low,
                max_capacity_high: r.max_capacity_high,
                max_capacity_low: r.max_capacity_low,
                operational_hours: r.operational_hours,
                last_inspection: r.last_inspection,
                has_high_side: r.has_high_side,
                has_low_side: r.has_low_side,
                bus_sections: r.bus_sections,
                cells_per_section: r.cells_per_section,
            },
        }
    }
}

fn default_cell_status() -> CellStatus {
    CellStatus::Off
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCellRequest {
    /// Next free id in the unit when omitted
    #[validate(range(min = 1, message = "id must be positive"))]
    pub id: Option<i32>,
    #[validate(length(min = 1, max = 20, message = "number must be 1-20 characters"))]
    pub number: String,
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[serde(rename = "type")]
    pub cell_type: CellType,
    #[serde(default = "default_cell_status")]
    pub status: CellStatus,
    #[serde(default)]
    pub voltage: String,
    #[serde(default)]
    pub voltage_level: String,
    pub power: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_grounded: bool,
    pub transformer_number: Option<String>,
    pub bus_section: Option<i32>,
    pub current: Option<f64>,
    pub temperature: Option<f64>,
    pub load: Option<f64>,
}

impl From<CreateCellRequest> for NewCell {
    fn from(r: CreateCellRequest) -> Self {
        Self {
            id: r.id,
            number: r.number,
            name: r.name,
            cell_type: r.cell_type,
            status: r.status,
            voltage: r.voltage,
            voltage_level: r.voltage_level,
            power: r.power,
            description: r.description,
            is_grounded: r.is_grounded,
            transformer_number: r.transformer_number,
            bus_section: r.bus_section,
            current: r.current,
            temperature: r.temperature,
            load: r.load,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCellsRequest {
    #[validate(length(min = 1, message = "at least one cell is required"), nested)]
    pub cells: Vec<CreateCellRequest>,
}
