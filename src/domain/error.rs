use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not connected to market data feed")]
    NotConnected,

    #[error("Feed error: {0}")]
    Feed(String),
}

impl From<String> for DomainError {
    fn from(s: String) -> Self {
        DomainError::Feed(s)
    }
}

impl From<&str> for DomainError {
    fn from(s: &str) -> Self {
        DomainError::InvalidInput(s.to_string())
    }
}
