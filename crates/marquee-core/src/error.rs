use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid length: {0}")]
    InvalidLength(String),

    #[error("Invalid slider configuration: {0}")]
    InvalidConfig(String),

    #[error("Animation unavailable: {0}")]
    AnimationUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
