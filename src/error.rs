use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not seed '{name}' from template {}: {source}", .source_path.display())]
    SeedFailed {
        name: String,
        source_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not resolve the roaming application data folder")]
    NoRoamingDirectory,
}

pub type ImeResult<T> = Result<T, ImeError>;
