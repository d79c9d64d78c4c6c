// Fri Jan 16 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Tool registry file not found: {0}")]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported registry format: {0}")]
    UnsupportedFormat(String),

    #[error("Tool with empty name in registry")]
    EmptyName,

    #[error("Tool {0} has an empty command")]
    EmptyCommand(String),

    #[error("Tool {0} has a zero duration estimate")]
    ZeroEstimate(String),

    #[error("Tool {0} is defined more than once")]
    DuplicateTool(String),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
