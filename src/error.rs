use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("invalid json")]
    Decode(#[from] serde_json::Error),
    #[error("invalid session: {0}")]
    InvalidSession(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
