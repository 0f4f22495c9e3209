use async_trait::async_trait;

use super::OperationRecord;
use crate::shared::DomainResult;

#[async_trait]
pub trait HistoryRepository: Send + Sync {
    async fn append(&self, record: OperationRecord) -> DomainResult<OperationRecord>;

    /// Records of one unit, newest first. `None` means unbounded.
    async fn find_by_unit(&self, ru_id: &str, limit: Option<u64>) -> DomainResult<Vec<OperationRecord>>;
}
