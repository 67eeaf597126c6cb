//! Error types for the editor

use storefront_common::CommonError;
use storefront_document::DocumentError;
use thiserror::Error;

pub type EditorResult<T> = Result<T, EditorError>;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Site is open in render mode and cannot be edited")]
    ReadOnly,

    #[error("Cannot undo or redo while a batch is open")]
    BatchOpen,

    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    File(#[from] CommonError),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Invalid site id: {0:?}")]
    InvalidSiteId(String),
}

impl StoreError {
    /// Stored data exists but could not be parsed
    pub fn is_corrupt(&self) -> bool {
        matches!(
            self,
            StoreError::File(CommonError::Json(_)) | StoreError::Document(DocumentError::Json(_))
        )
    }
}
