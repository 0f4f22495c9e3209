//! Operation history DTOs

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{HistoryDetails, NewOperationRecord, OperationRecord};
use crate::shared::time::{date_opt, wall_clock, wall_clock_opt};

/// Records returned when the caller gives no `limit`.
pub const DEFAULT_HISTORY_LIMIT: i64 = 50;

#[derive(Debug, Deserialize, IntoParams)]
pub struct HistoryQuery {
    /// Maximum number of records, newest first. `0` or less returns all.
    /// Defaults to 50.
    pub limit: Option<i64>,
}

impl HistoryQuery {
    pub fn bound(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_HISTORY_LIMIT)
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddHistoryRecordRequest {
    #[validate(length(min = 1, max = 20, message = "cellNumber must be 1-20 characters"))]
    pub cell_number: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "cellName must be at most 100 characters"))]
    pub cell_name: String,
    #[serde(default)]
    #[validate(length(max = 200, message = "action must be at most 200 characters"))]
    pub action: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "operator must be at most 100 characters"))]
    pub operator: String,
    /// Operator's wall-clock time, `DD.MM.YYYY HH:MM:SS`; receive time when omitted
    #[serde(default, with = "wall_clock_opt")]
    #[schema(value_type = Option<String>, example = "07.03.2024 09:05:01")]
    pub timestamp: Option<NaiveDateTime>,
    pub reason: Option<String>,
    pub document_type: Option<String>,
    pub order_number: Option<String>,
    pub work_order_number: Option<String>,
    #[serde(default, with = "date_opt")]
    #[schema(value_type = Option<String>, example = "07.03.2024")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "date_opt")]
    #[schema(value_type = Option<String>, example = "08.03.2024")]
    pub end_date: Option<NaiveDate>,
    pub responsible_person: Option<String>,
    pub comment: Option<String>,
    pub severity: Option<String>,
}

impl From<AddHistoryRecordRequest> for NewOperationRecord {
    fn from(r: AddHistoryRecordRequest) -> Self {
        Self {
            cell_number: r.cell_number,
            cell_name: r.cell_name,
            action: r.action,
            operator: r.operator,
            timestamp: r.timestamp,
            details: HistoryDetails {
                reason: r.reason,
                document_type: r.document_type,
                order_number: r.order_number,
                work_order_number: r.work_order_number,
                start_date: r.start_date,
                end_date: r.end_date,
                responsible_person: r.responsible_person,
                comment: r.comment,
                severity: r.severity,
            },
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecordDto {
    pub id: String,
    pub ru_id: String,
    pub cell_number: String,
    pub cell_name: String,
    pub action: String,
    pub operator: String,
    #[serde(with = "wall_clock")]
    #[schema(value_type = String, example = "07.03.2024 09:05:01")]
    pub timestamp: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_order_number: Option<String>,
    #[serde(with = "date_opt", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub start_date: Option<NaiveDate>,
    #[serde(with = "date_opt", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updated_at")]
    pub updated_at: DateTime<Utc>,
}

impl From<OperationRecord> for HistoryRecordDto {
    fn from(r: OperationRecord) -> Self {
        let d = r.details;
        Self {
            id: r.id,
            ru_id: r.ru_id,
            cell_number: r.cell_number,
            cell_name: r.cell_name,
            action: r.action,
            operator: r.operator,
            timestamp: r.timestamp,
            reason: d.reason,
            document_type: d.document_type,
            order_number: d.order_number,
            work_order_number: d.work_order_number,
            start_date: d.start_date,
            end_date: d.end_date,
            responsible_person: d.responsible_person,
            comment: d.comment,
            severity: d.severity,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn limit_defaults_to_fifty() {
        assert_eq!(HistoryQuery { limit: None }.bound(), 50);
        assert_eq!(HistoryQuery { limit: Some(0) }.bound(), 0);
        assert_eq!(HistoryQuery { limit: Some(5) }.bound(), 5);
    }

    #[test]
    fn request_parses_operator_formats() {
        let req: AddHistoryRecordRequest = serde_json::from_value(json!({
            "cellNumber": "3",
            "cellName": "Feeder 3",
            "action": "Switched OFF",
            "operator": "Ivanov",
            "timestamp": "07.03.2024 09:05:01",
            "startDate": "07.03.2024",
            "endDate": "",
            "severity": "high"
        }))
        .unwrap();

        let entry = NewOperationRecord::from(req);
        assert_eq!(
            entry.timestamp.map(|t| crate::shared::time::format_wall_clock(&t)).as_deref(),
            Some("07.03.2024 09:05:01")
        );
        assert_eq!(entry.details.start_date, NaiveDate::from_ymd_opt(2024, 3, 7));
        assert_eq!(entry.details.end_date, None);
        assert_eq!(entry.details.severity.as_deref(), Some("high"));
        assert_eq!(entry.details.reason, None);
    }

    #[test]
    fn only_cell_number_is_required() {
        let req: AddHistoryRecordRequest =
            serde_json::from_value(json!({"cellNumber": "3"})).unwrap();
        assert!(req.validate().is_ok());

        let entry = NewOperationRecord::from(req);
        assert_eq!(entry.timestamp, None);
        assert_eq!(entry.action, "");
        assert_eq!(entry.operator, "");

        let missing = serde_json::from_value::<AddHistoryRecordRequest>(json!({"action": "x"}));
        assert!(missing.is_err());

        let blank: AddHistoryRecordRequest =
            serde_json::from_value(json!({"cellNumber": ""})).unwrap();
        assert!(blank.validate().is_err());
    }

    #[test]
    fn comma_separated_timestamp_is_accepted() {
        let req: AddHistoryRecordRequest = serde_json::from_value(json!({
            "cellNumber": "3",
            "timestamp": "07.03.2024, 09:05:01"
        }))
        .unwrap();
        assert_eq!(
            req.timestamp,
            NaiveDate::from_ymd_opt(2024, 3, 7).and_then(|d| d.and_hms_opt(9, 5, 1))
        );
    }

    #[test]
    fn bad_timestamp_is_rejected() {
        let parsed = serde_json::from_value::<AddHistoryRecordRequest>(json!({
            "cellNumber": "3",
            "cellName": "Feeder 3",
            "action": "Switched OFF",
            "operator": "Ivanov",
            "timestamp": "yesterday"
        }));
        assert!(parsed.is_err());
    }
}
