//! Equipment unit and cell entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Construction type of a switchgear unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum UnitType {
    /// Complete switchgear lineup
    #[serde(rename = "KRU")]
    Kru,
    /// Transformer substation
    #[serde(rename = "TP")]
    Tp,
}

impl Default for UnitType {
    fn default() -> Self {
        Self::Kru
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CellType {
    Input,
    Sr,
    Sv,
    Transformer,
    Reserve,
    Bus,
    LowVoltage,
    Output,
    Protection,
    Measurement,
}

/// Operational status of a cell. Any status may follow any other; physical
/// interlocks are enforced outside this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CellStatus {
    On,
    Off,
    Reserve,
    Error,
    Maintenance,
}

/// Descriptive attributes of a unit. Opaque to the registry logic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitNameplate {
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
}

/// Switchgear installation. `id` is immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentUnit {
    pub id: String,
    pub name: String,
    pub unit_type: UnitType,
    pub status: String,
    pub substation_id: Option<String>,
    pub nameplate: UnitNameplate,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One compartment of a unit, addressed by `(ru_id, id)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub id: i32,
    pub ru_id: String,
    pub number: String,
    pub name: String,
    pub cell_type: CellType,
    pub status: CellStatus,
    pub voltage: String,
    pub voltage_level: String,
    pub power: Option<String>,
    pub description: String,
    pub is_grounded: bool,
    pub last_operation: Option<DateTime<Utc>>,
    pub last_grounded_operation: Option<DateTime<Utc>>,
    pub transformer_number: Option<String>,
    pub bus_section: Option<i32>,
    pub current: Option<f64>,
    pub temperature: Option<f64>,
    pub load: Option<f64>,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cell {
    /// Replaces the status and, when given, the grounding flag.
    ///
    /// Always stamps `last_operation`; `last_grounded_operation` only when a
    /// grounding value was supplied.
    pub fn apply_status(&mut self, status: CellStatus, is_grounded: Option<bool>, now: DateTime<Utc>) {
        self.status = status;
        if let Some(grounded) = is_grounded {
            self.is_grounded = grounded;
            self.last_grounded_operation = Some(now);
        }
        self.last_operation = Some(now);
        self.updated_at = now;
    }

    /// Metadata correction; not an operational action.
    pub fn apply_info(&mut self, name: String, description: String, voltage: String, now: DateTime<Utc>) {
        self.name = name;
        self.description = description;
        self.voltage = voltage;
        self.updated_at = now;
    }
}

/// Cell to be added to an existing unit. Without `id` the next free id in
/// the unit is used.
#[derive(Debug, Clone)]
pub struct NewCell {
    pub id: Option<i32>,
    pub number: String,
    pub name: String,
    pub cell_type: CellType,
    pub status: CellStatus,
    pub voltage: String,
    pub voltage_level: String,
    pub power: Option<String>,
    pub description: String,
    pub is_grounded: bool,
    pub transformer_number: Option<String>,
    pub bus_section: Option<i32>,
    pub current: Option<f64>,
    pub temperature: Option<f64>,
    pub load: Option<f64>,
}
