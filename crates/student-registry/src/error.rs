use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("All fields are required.")]
    MissingFields,

    #[error("No identifier left after {0}")]
    IdsExhausted(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to replace data file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
