#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed feed slot: {0}")]
    Malformed(#[from] serde_json::Error),
}
