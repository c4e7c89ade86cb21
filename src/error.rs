use crate::repository;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("feed storage error: {0}")]
    Storage(#[from] repository::Error),
}
