use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open database at {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to create tasks table: {0}")]
    Schema(#[source] rusqlite::Error),

    #[error("failed to save task: {0}")]
    Save(#[source] rusqlite::Error),

    #[error("failed to update task: {0}")]
    Update(#[source] rusqlite::Error),

    #[error("failed to delete task: {0}")]
    Delete(#[source] rusqlite::Error),

    #[error("failed to close database: {0}")]
    Close(#[source] rusqlite::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
