use thiserror::Error;

#[derive(Error, Debug)]
pub enum AffinityError {
    #[error("Invalid config: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Performer {0} does not appear in any scene")]
    PerformerNotFound(String),
}

pub type Result<T> = std::result::Result<T, AffinityError>;
