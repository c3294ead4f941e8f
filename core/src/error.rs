use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Snapshot I/O error: {0}")]
    SnapshotIo(#[from] std::io::Error),

    #[error("Invalid {entity} payload: {reason}")]
    InvalidPayload { entity: &'static str, reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type AdminResult<T> = Result<T, AdminError>;
