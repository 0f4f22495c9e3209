//! Switchgear unit entity

use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum UnitKind {
    #[sea_orm(string_value = "KRU")]
    Kru,
    #[sea_orm(string_value = "TP")]
    Tp,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rus")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub unit_type: UnitKind,
    pub status: String,

    /// Owning facility, if assigned
    #[sea_orm(nullable)]
    pub substation_id: Option<String>,

    // Nameplate
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

    /// Incremented on every write
    pub version: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cell::Entity")]
    Cells,
    #[sea_orm(has_many = "super::operation_record::Entity")]
    OperationRecords,
}

impl Related<super::cell::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cells.def()
    }
}

impl Related<super::operation_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OperationRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
