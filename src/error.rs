use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserDeckError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error! Status: {status}")]
    Status { status: u16 },

    #[error("Failed to parse user list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid bind address: {0}")]
    InvalidBind(String),

    #[error("User data unavailable")]
    Unavailable,
}

pub type Result<T> = std::result::Result<T, UserDeckError>;
