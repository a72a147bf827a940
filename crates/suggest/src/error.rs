use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuggestError {
    #[error("analyzer pass failed: {0}")]
    PassFailed(String),
}

pub type Result<T> = std::result::Result<T, SuggestError>;
