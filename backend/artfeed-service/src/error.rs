use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, FeedError>;
