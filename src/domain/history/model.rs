//! Operation record entity

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};

/// Optional context attached to an operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryDetails {
    pub reason: Option<String>,
    pub document_type: Option<String>,
    pub order_number: Option<String>,
    pub work_order_number: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub responsible_person: Option<String>,
    pub comment: Option<String>,
    pub severity: Option<String>,
}

/// Caller-supplied part of a ledger entry.
#[derive(Debug, Clone)]
pub struct NewOperationRecord {
    /// Snapshot of the cell label at the time of the action
    pub cell_number: String,
    pub cell_name: String,
    pub action: String,
    /// Operator name, not an account reference
    pub operator: String,
    /// Operator's wall-clock time of the action; server local time when absent
    pub timestamp: Option<NaiveDateTime>,
    pub details: HistoryDetails,
}

/// Immutable ledger entry.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    pub id: String,
    pub ru_id: String,
    pub cell_number: String,
    pub cell_name: String,
    pub action: String,
    pub operator: String,
    pub timestamp: NaiveDateTime,
    pub details: HistoryDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OperationRecord {
    pub fn new(id: String, ru_id: &str, entry: NewOperationRecord, now: DateTime<Utc>) -> Self {
        Self {
            id,
            ru_id: ru_id.to_string(),
            cell_number: entry.cell_number,
            cell_name: entry.cell_name,
            action: entry.action,
            operator: entry.operator,
            timestamp: entry
                .timestamp
                .unwrap_or_else(|| now.with_timezone(&Local).naive_local()),
            details: entry.details,
            created_at: now,
            updated_at: now,
        }
    }
}
