use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum KnolibError {
    #[error("Topic not found: {0}")]
    TopicNotFound(Uuid),

    #[error("No library loaded")]
    NotLoaded,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, KnolibError>;
