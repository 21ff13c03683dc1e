use thiserror::Error;

use crate::services::gateway::GatewayError;

/// Errors surfaced by the transactions page
#[derive(Debug, Error)]
pub enum PageError {
    /// The page was wired against a missing or malformed root element
    #[error("invalid element: {0}")]
    Configuration(String),
    /// A read (account title or transaction list) failed at the transport level
    #[error("fetch failed: {0}")]
    Fetch(#[from] GatewayError),
}

impl PageError {
    pub fn invalid_element() -> Self {
        PageError::Configuration("invalid element".to_string())
    }
}
