//! Cell entity
//!
//! Cell ids are only unique within their unit, hence the composite key.

use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum CellKind {
    #[sea_orm(string_value = "INPUT")]
    Input,
    #[sea_orm(string_value = "SR")]
    Sr,
    #[sea_orm(string_value = "SV")]
    Sv,
    #[sea_orm(string_value = "TRANSFORMER")]
    Transformer,
    #[sea_orm(string_value = "RESERVE")]
    Reserve,
    #[sea_orm(string_value = "BUS")]
    Bus,
    #[sea_orm(string_value = "LOW_VOLTAGE")]
    LowVoltage,
    #[sea_orm(string_value = "OUTPUT")]
    Output,
    #[sea_orm(string_value = "PROTECTION")]
    Protection,
    #[sea_orm(string_value = "MEASUREMENT")]
    Measurement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum CellState {
    #[sea_orm(string_value = "ON")]
    On,
    #[sea_orm(string_value = "OFF")]
    Off,
    #[sea_orm(string_value = "RESERVE")]
    Reserve,
    #[sea_orm(string_value = "ERROR")]
    Error,
    #[sea_orm(string_value = "MAINTENANCE")]
    Maintenance,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cells")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub ru_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    pub number: String,
    pub name: String,
    pub cell_type: CellKind,
    pub status: CellState,
    pub voltage: String,
    pub voltage_level: String,
    #[sea_orm(nullable)]
    pub power: Option<String>,
    pub description: String,
    pub is_grounded: bool,

    #[sea_orm(nullable)]
    pub last_operation: Option<DateTimeUtc>,
    #[sea_orm(nullable)]
    pub last_grounded_operation: Option<DateTimeUtc>,

    #[sea_orm(nullable)]
    pub transformer_number: Option<String>,
    #[sea_orm(nullable)]
    pub bus_section: Option<i32>,

    // Telemetry
    #[sea_orm(nullable)]
    pub current: Option<f64>,
    #[sea_orm(nullable)]
    pub temperature: Option<f64>,
    #[sea_orm(nullable)]
    pub load: Option<f64>,

    pub version: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ru::Entity",
        from = "Column::RuId",
        to = "super::ru::Column::Id"
    )]
    Ru,
}

impl Related<super::ru::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ru.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
