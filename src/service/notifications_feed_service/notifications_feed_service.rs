use crate::{error::Error, repository::NotificationRecord};
use async_trait::async_trait;

///
/// Ordered log of received notifications, most recent first.
///
/// Every mutation is persisted before it returns, so the in memory
/// sequence and the stored feed agree after each successful call.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsFeedService: Send + Sync {
    /// Snapshot of the feed, most recent first
    async fn records(&self) -> Vec<NotificationRecord>;

    async fn append(&self, record: NotificationRecord) -> Result<(), Error>;

    async fn mark_all_read(&self) -> Result<(), Error>;

    /// Removing an id that is not part of the feed is not an error
    async fn remove(&self, id: i64) -> Result<(), Error>;

    async fn clear(&self) -> Result<(), Error>;

    async fn unread_count(&self) -> usize;
}
