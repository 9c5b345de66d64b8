use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed storage data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record with id {0} not found")]
    NotFound(u64),

    #[error("Slug {0:?} is already used by another record")]
    SlugTaken(String),

    #[error("No record ids left")]
    IdsExhausted,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}
