use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("failed to walk content directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to serialize index: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = IndexError> = std::result::Result<T, E>;
