//! Error types for the desk.

use std::path::PathBuf;

/// All errors that can occur while running a desk command.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to read cost table {path}: {source}")]
    TableRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write cost table {path}: {source}")]
    TableWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read cost item file {path}: {source}")]
    ItemRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Engine(#[from] landed_cost::Error),

    #[error("aborted: {0}")]
    Aborted(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
