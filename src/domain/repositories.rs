//! Repository access for the domain layer

use super::equipment::EquipmentRepository;
use super::history::HistoryRepository;
use super::user::UserRepository;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let unit = repos.equipment().find_unit("ru-1").await?;
///     let log = repos.history().find_by_unit("ru-1", Some(50)).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn equipment(&self) -> &dyn EquipmentRepository;
    fn history(&self) -> &dyn HistoryRepository;
}
