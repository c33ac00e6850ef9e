//! Errors surfaced by the wallet-fetch service

use thiserror::Error;

/// Failure of a single wallet fetch. Carried back to the coordinator as an
/// intent, so it only holds owned strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("address API returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("wallet service unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Http {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}
