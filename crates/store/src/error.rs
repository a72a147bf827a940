use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Doctype '{0}' already exists")]
    DoctypeExists(String),

    #[error("Page '{0}' already exists")]
    PageExists(String),

    #[error("Theme '{0}' already exists")]
    ThemeExists(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] veneer_types::ValidationError),

    #[error("IO operation '{operation}' failed on path '{path}': {source}")]
    Io {
        operation: String,
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    pub(crate) fn io(
        operation: &str,
        path: impl Into<std::path::PathBuf>,
        source: std::io::Error,
    ) -> Self {
        StoreError::Io {
            operation: operation.to_string(),
            path: path.into(),
            source,
        }
    }
}
