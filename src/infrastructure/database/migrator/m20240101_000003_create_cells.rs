//! Create cells table

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_rus::Rus;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cells::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Cells::RuId).string().not_null())
                    .col(ColumnDef::new(Cells::Id).integer().not_null())
                    .col(ColumnDef::new(Cells::Number).string().not_null())
                    .col(ColumnDef::new(Cells::Name).string().not_null())
                    .col(ColumnDef::new(Cells::CellType).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Cells::Status)
                            .string_len(20)
                            .not_null()
                            .default("OFF"),
                    )
                    .col(
                        ColumnDef::new(Cells::Voltage)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Cells::VoltageLevel)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Cells::Power).string())
                    .col(
                        ColumnDef::new(Cells::Description)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Cells::IsGrounded)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Cells::LastOperation).timestamp_with_time_zone())
                    .col(ColumnDef::new(Cells::LastGroundedOperation).timestamp_with_time_zone())
                    .col(ColumnDef::new(Cells::TransformerNumber).string())
                    .col(ColumnDef::new(Cells::BusSection).integer())
                    .col(ColumnDef::new(Cells::Current).double())
                    .col(ColumnDef::new(Cells::Temperature).double())
                    .col(ColumnDef::new(Cells::Load).double())
                    .col(
                        ColumnDef::new(Cells::Version)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Cells::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Cells::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(Index::create().col(Cells::RuId).col(Cells::Id))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cells_ru")
                            .from(Cells::Table, Cells::RuId)
                            .to(Rus::Table, Rus::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cells::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Cells {
    Table,
    RuId,
    Id,
    Number,
    Name,
    CellType,
    Status,
    Voltage,
    VoltageLevel,
    Power,
    Description,
    IsGrounded,
    LastOperation,
    LastGroundedOperation,
    TransformerNumber,
    BusSection,
    Current,
    Temperature,
    Load,
    Version,
    CreatedAt,
    UpdatedAt,
}
