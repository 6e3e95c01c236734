use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HashseekError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid search configuration: {0}")]
    InvalidConfig(String),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("An unexpected error occurred: {0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, HashseekError>;
