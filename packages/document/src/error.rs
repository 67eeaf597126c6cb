use thiserror::Error;

pub type DocumentResult<T> = Result<T, DocumentError>;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Invalid site document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("Unknown color mode: {0}")]
    UnknownColorMode(String),
}
