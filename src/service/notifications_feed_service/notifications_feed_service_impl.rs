use super::NotificationsFeedService;
use crate::{
    error::Error,
    repository::{NotificationRecord, NotificationsRepository},
};
use async_trait::async_trait;
use std::{collections::VecDeque, sync::Arc};
use tokio::sync::Mutex;

pub struct NotificationsFeedServiceImpl {
    records: Mutex<VecDeque<NotificationRecord>>,
    repository: Arc<dyn NotificationsRepository>,
}

impl NotificationsFeedServiceImpl {
    ///
    /// Loads the persisted feed. A missing, unreadable or malformed
    /// slot starts an empty feed instead of failing.
    ///
    pub async fn new(repository: Arc<dyn NotificationsRepository>) -> Self {
        let records = match repository.read().await {
            Ok(Some(records)) => {
                tracing::info!(count = records.len(), "loaded persisted feed");
                VecDeque::from(records)
            }
            Ok(None) => VecDeque::new(),
            Err(err) => {
                tracing::warn!(%err, "failed to load persisted feed, starting empty");
                VecDeque::new()
            }
        };
        let records = Mutex::new(records);

        Self {
            records,
            repository,
        }
    }
}

#[async_trait]
impl NotificationsFeedService for NotificationsFeedServiceImpl {
    async fn records(&self) -> Vec<NotificationRecord> {
        let records = self.records.lock().await;
        records.iter().cloned().collect()
    }

    ///
    /// Prepends record to the feed and persists the new sequence.
    ///
    /// ### Errors
    /// - [Error::Storage] when
    ///     - the slot file cannot be written, the record stays in memory
    ///       and the next successful mutation rewrites the slot
    ///
    async fn append(&self, record: NotificationRecord) -> Result<(), Error> {
        tracing::debug!(id = record.id, kind = record.kind.as_ref(), "appending record");

        let mut records = self.records.lock().await;
        records.push_front(record);
        self.repository.save(records.make_contiguous()).await?;

        Ok(())
    }

    ///
    /// Marks every record as read.
    ///
    /// When nothing is unread the stored feed is left untouched,
    /// repeated calls are no-ops.
    ///
    async fn mark_all_read(&self) -> Result<(), Error> {
        let mut records = self.records.lock().await;
        if records.iter().all(|record| record.read) {
            return Ok(());
        }

        tracing::info!("marking all records read");
        records.iter_mut().for_each(|record| record.read = true);
        self.repository.save(records.make_contiguous()).await?;

        Ok(())
    }

    async fn remove(&self, id: i64) -> Result<(), Error> {
        let mut records = self.records.lock().await;
        let len_before = records.len();
        records.retain(|record| record.id != id);
        if records.len() == len_before {
            tracing::debug!(id, "no record removed");
            return Ok(());
        }

        tracing::debug!(id, "removed record");
        self.repository.save(records.make_contiguous()).await?;

        Ok(())
    }

    ///
    /// Empties the feed and deletes the stored slot entirely.
    ///
    async fn clear(&self) -> Result<(), Error> {
        tracing::info!("clearing feed");

        let mut records = self.records.lock().await;
        records.clear();
        self.repository.delete().await?;

        Ok(())
    }

    async fn unread_count(&self) -> usize {
        let records = self.records.lock().await;
        records.iter().filter(|record| !record.read).count()
    }
}
