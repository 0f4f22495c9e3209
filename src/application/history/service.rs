//! Operations history service
//!
//! Append and query only. There is deliberately no update or delete path.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::{
    DomainError, DomainResult, NewOperationRecord, OperationRecord, RepositoryProvider,
};

pub struct HistoryService {
    repos: Arc<dyn RepositoryProvider>,
}

impl HistoryService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Stores a new record for an existing unit.
    pub async fn append(&self, ru_id: &str, entry: NewOperationRecord) -> DomainResult<OperationRecord> {
        if self.repos.equipment().find_unit(ru_id).await?.is_none() {
            return Err(DomainError::not_found("Unit", "id", ru_id));
        }

        let record = OperationRecord::new(uuid::Uuid::new_v4().to_string(), ru_id, entry, Utc::now());
        let stored = self.repos.history().append(record).await?;

        metrics::counter!("history_records_total").increment(1);
        info!(
            ru_id,
            record_id = %stored.id,
            cell = %stored.cell_number,
            action = %stored.action,
            "History record appended"
        );
        Ok(stored)
    }

    /// Newest first. `limit <= 0` returns every record.
    pub async fn query(&self, ru_id: &str, limit: i64) -> DomainResult<Vec<OperationRecord>> {
        let bound = u64::try_from(limit).ok().filter(|n| *n > 0);
        self.repos.history().find_by_unit(ru_id, bound).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::equipment::{EquipmentService, NewUnit};
    use crate::application::testing::repos;
    use crate::domain::{HistoryDetails, UnitNameplate, UnitType};
    use chrono::NaiveDate;

    fn entry(action: &str) -> NewOperationRecord {
        NewOperationRecord {
            cell_number: "1".into(),
            cell_name: "Input 1".into(),
            action: action.into(),
            operator: "Petrov".into(),
            timestamp: Some(
                NaiveDate::from_ymd_opt(2024, 2, 3)
                    .unwrap()
                    .and_hms_opt(10, 0, 0)
                    .unwrap(),
            ),
            details: HistoryDetails::default(),
        }
    }

    async fn service() -> HistoryService {
        let repos = repos().await;
        let units = EquipmentService::new(repos.clone());
        for id in ["ru-a", "ru-b"] {
            units
                .create_unit(NewUnit {
                    id: id.into(),
                    name: id.into(),
                    unit_type: UnitType::Tp,
                    status: "active".into(),
                    substation_id: None,
                    nameplate: UnitNameplate::default(),
                })
                .await
                .unwrap();
        }
        HistoryService::new(repos)
    }

    #[tokio::test]
    async fn appended_record_comes_first() {
        let svc = service().await;
        svc.append("ru-a", entry("switch off")).await.unwrap();
        let latest = svc.append("ru-a", entry("switch on")).await.unwrap();

        let log = svc.query("ru-a", 50).await.unwrap();
        assert_eq!(log[0].id, latest.id);
        assert!(svc.query("ru-b", 50).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn bound_truncates_and_non_positive_is_unbounded() {
        let svc = service().await;
        for i in 0..4 {
            svc.append("ru-a", entry(&format!("op {i}"))).await.unwrap();
        }

        assert_eq!(svc.query("ru-a", 3).await.unwrap().len(), 3);
        assert_eq!(svc.query("ru-a", 0).await.unwrap().len(), 4);
        assert_eq!(svc.query("ru-a", -1).await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn missing_timestamp_falls_back_to_receive_time() {
        let svc = service().await;
        let before = chrono::Local::now().naive_local() - chrono::Duration::seconds(1);
        let stored = svc
            .append(
                "ru-a",
                NewOperationRecord {
                    cell_number: "4".into(),
                    cell_name: String::new(),
                    action: String::new(),
                    operator: String::new(),
                    timestamp: None,
                    details: HistoryDetails::default(),
                },
            )
            .await
            .unwrap();

        assert!(stored.timestamp >= before);
        assert_eq!(svc.query("ru-a", 0).await.unwrap()[0].id, stored.id);
    }

    #[tokio::test]
    async fn unknown_unit_is_rejected() {
        let svc = service().await;
        let err = svc.append("ru-x", entry("op")).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
