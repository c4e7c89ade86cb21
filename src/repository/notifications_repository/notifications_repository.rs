use super::NotificationRecord;
use crate::repository;
use async_trait::async_trait;

///
/// Storage of the notification feed.
///
/// The feed is persisted as a whole, every [Self::save] replaces
/// the previously stored sequence.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsRepository: Send + Sync {
    /// Returns [None] when no feed was persisted yet
    async fn read(&self) -> Result<Option<Vec<NotificationRecord>>, repository::Error>;

    async fn save(&self, records: &[NotificationRecord]) -> Result<(), repository::Error>;

    async fn delete(&self) -> Result<(), repository::Error>;
}
