//! Create operation_records table

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
                    .table(OperationRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OperationRecords::Seq)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OperationRecords::Id)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(OperationRecords::RuId).string().not_null())
                    .col(ColumnDef::new(OperationRecords::CellNumber).string().not_null())
                    .col(ColumnDef::new(OperationRecords::CellName).string().not_null())
                    .col(ColumnDef::new(OperationRecords::Action).string().not_null())
                    .col(ColumnDef::new(OperationRecords::Operator).string().not_null())
                    .col(ColumnDef::new(OperationRecords::Timestamp).date_time().not_null())
                    .col(ColumnDef::new(OperationRecords::Reason).string())
                    .col(ColumnDef::new(OperationRecords::DocumentType).string())
                    .col(ColumnDef::new(OperationRecords::OrderNumber).string())
                    .col(ColumnDef::new(OperationRecords::WorkOrderNumber).string())
                    .col(ColumnDef::new(OperationRecords::StartDate).date())
                    .col(ColumnDef::new(OperationRecords::EndDate).date())
                    .col(ColumnDef::new(OperationRecords::ResponsiblePerson).string())
                    .col(ColumnDef::new(OperationRecords::Comment).text())
                    .col(ColumnDef::new(OperationRecords::Severity).string())
                    .col(
                        ColumnDef::new(OperationRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OperationRecords::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_operation_records_ru")
                            .from(OperationRecords::Table, OperationRecords::RuId)
                            .to(Rus::Table, Rus::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_operation_records_ru_created")
                    .table(OperationRecords::Table)
                    .col(OperationRecords::RuId)
                    .col(OperationRecords::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OperationRecords::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum OperationRecords {
    Table,
    Seq,
    Id,
    RuId,
    CellNumber,
    CellName,
    Action,
    Operator,
    Timestamp,
    Reason,
    DocumentType,
    OrderNumber,
    WorkOrderNumber,
    StartDate,
    EndDate,
    ResponsiblePerson,
    Comment,
    Severity,
    CreatedAt,
    UpdatedAt,
}
