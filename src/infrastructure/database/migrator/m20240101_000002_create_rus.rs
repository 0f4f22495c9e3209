//! Create rus (switchgear units) table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let text = |col: Rus| ColumnDef::new(col).string().not_null().default("").to_owned();
        let count = |col: Rus| ColumnDef::new(col).integer().not_null().default(0).to_owned();

        manager
            .create_table(
                Table::create()
                    .table(Rus::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rus::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rus::Name).string().not_null())
                    .col(
                        ColumnDef::new(Rus::UnitType)
                            .string_len(8)
                            .not_null()
                            .default("KRU"),
                    )
                    .col(
                        ColumnDef::new(Rus::Status)
                            .string()
                            .not_null()
                            .default("active"),
                    )
                    .col(ColumnDef::new(Rus::SubstationId).string())
                    .col(text(Rus::Voltage))
                    .col(count(Rus::Sections))
                    .col(count(Rus::CellsCount))
                    .col(count(Rus::Transformers))
                    .col(text(Rus::TransformerPower))
                    .col(text(Rus::Location))
                    .col(text(Rus::InstallationDate))
                    .col(text(Rus::Manufacturer))
                    .col(text(Rus::LastMaintenance))
                    .col(text(Rus::NextMaintenance))
                    .col(text(Rus::SchemeType))
                    .col(text(Rus::TotalLoadHigh))
                    .col(text(Rus::TotalLoadLow))
                    .col(text(Rus::TotalPowerHigh))
                    .col(text(Rus::TotalPowerLow))
                    .col(text(Rus::MaxCapacityHigh))
                    .col(text(Rus::MaxCapacityLow))
                    .col(count(Rus::OperationalHours))
                    .col(text(Rus::LastInspection))
                    .col(
                        ColumnDef::new(Rus::HasHighSide)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Rus::HasLowSide)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(count(Rus::BusSections))
                    .col(count(Rus::CellsPerSection))
                    .col(count(Rus::Version))
                    .col(
                        ColumnDef::new(Rus::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Rus::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rus_substation")
                    .table(Rus::Table)
                    .col(Rus::SubstationId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rus::Table).to_owned())
            .await
    }
}

#[derive(Iden, Clone, Copy)]
pub enum Rus {
    Table,
    Id,
    Name,
    UnitType,
    Status,
    SubstationId,
    Voltage,
    Sections,
    CellsCount,
    Transformers,
    TransformerPower,
    Location,
    InstallationDate,
    Manufacturer,
    LastMaintenance,
    NextMaintenance,
    SchemeType,
    TotalLoadHigh,
    TotalLoadLow,
    TotalPowerHigh,
    TotalPowerLow,
    MaxCapacityHigh,
    MaxCapacityLow,
    OperationalHours,
    LastInspection,
    HasHighSide,
    HasLowSide,
    BusSections,
    CellsPerSection,
    Version,
    CreatedAt,
    UpdatedAt,
}
