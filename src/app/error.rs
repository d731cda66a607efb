use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudiodeckError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Parsing error: {0}")]
    Parsing(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, AudiodeckError>;
