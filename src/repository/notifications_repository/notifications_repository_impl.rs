use super::{NotificationRecord, NotificationsRepository};
use crate::repository::{self, Error};
use async_trait::async_trait;
use std::{io::ErrorKind, path::PathBuf};

pub struct NotificationsRepositoryImpl {
    path: PathBuf,
}

impl NotificationsRepositoryImpl {
    pub async fn new(path: PathBuf) -> Result<Self, Error> {
        if let Some(directory) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            tracing::debug!(directory = %directory.display(), "creating feed directory");
            tokio::fs::create_dir_all(directory).await?;
        }

        Ok(Self { path })
    }
}

#[async_trait]
impl NotificationsRepository for NotificationsRepositoryImpl {
    async fn read(&self) -> Result<Option<Vec<NotificationRecord>>, repository::Error> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(Error::Io(err)),
        };

        let records = serde_json::from_slice(&bytes)?;

        Ok(Some(records))
    }

    ///
    /// Replaces the stored feed with `records`.
    ///
    /// Records are written to a sibling file first and renamed over
    /// the slot, so a crash mid write cannot corrupt the stored feed.
    ///
    async fn save(&self, records: &[NotificationRecord]) -> Result<(), repository::Error> {
        let bytes = serde_json::to_vec(records)?;

        let tmp_path = self.path.with_extension("tmp");
        tokio::fs::write(&tmp_path, &bytes).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        Ok(())
    }

    async fn delete(&self) -> Result<(), repository::Error> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Error::Io(err)),
        }
    }
}
