//! SeaORM implementation of HistoryRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::domain::{
    DomainError, DomainResult, HistoryDetails, HistoryRepository, OperationRecord,
};
use crate::infrastructure::database::entities::operation_record;

pub struct SeaOrmHistoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmHistoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: operation_record::Model) -> OperationRecord {
    OperationRecord {
        id: m.id,
        ru_id: m.ru_id,
        cell_number: m.cell_number,
        cell_name: m.cell_name,
        action: m.action,
        operator: m.operator,
        timestamp: m.timestamp,
        details: HistoryDetails {
            reason: m.reason,
            document_type: m.document_type,
            order_number: m.order_number,
            work_order_number: m.work_order_number,
            start_date: m.start_date,
            end_date: m.end_date,
            responsible_person: m.responsible_person,
            comment: m.comment,
            severity: m.severity,
        },
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

#[async_trait]
impl HistoryRepository for SeaOrmHistoryRepository {
    async fn append(&self, record: OperationRecord) -> DomainResult<OperationRecord> {
        let d = record.details;
        let model = operation_record::ActiveModel {
            seq: NotSet,
            id: Set(record.id),
            ru_id: Set(record.ru_id),
            cell_number: Set(record.cell_number),
            cell_name: Set(record.cell_name),
            action: Set(record.action),
            operator: Set(record.operator),
            timestamp: Set(record.timestamp),
            reason: Set(d.reason),
            document_type: Set(d.document_type),
            order_number: Set(d.order_number),
            work_order_number: Set(d.work_order_number),
            start_date: Set(d.start_date),
            end_date: Set(d.end_date),
            responsible_person: Set(d.responsible_person),
            comment: Set(d.comment),
            severity: Set(d.severity),
            created_at: Set(record.created_at),
            updated_at: Set(record.updated_at),
        };

        let stored = model
            .insert(&self.db)
            .await
            .map_err(DomainError::storage("append history"))?;

        Ok(model_to_domain(stored))
    }

    async fn find_by_unit(&self, ru_id: &str, limit: Option<u64>) -> DomainResult<Vec<OperationRecord>> {
        let mut query = operation_record::Entity::find()
            .filter(operation_record::Column::RuId.eq(ru_id))
            .order_by_desc(operation_record::Column::CreatedAt)
            .order_by_desc(operation_record::Column::Seq);

        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let models = query
            .all(&self.db)
            .await
            .map_err(DomainError::storage("query history"))?;

        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
