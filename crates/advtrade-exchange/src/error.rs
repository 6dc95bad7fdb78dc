//! Exchange client error types.

use thiserror::Error;

/// Errors surfaced by the exchange client facade.
///
/// `NotConfigured` is detectable before any network call; everything else
/// wraps a failure of the remote call itself. Callers that only need
/// "did it work" treat all variants uniformly, while the distinct
/// `NotConfigured` message lets them branch on missing credentials.
#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("Coinbase API credentials not configured. Please set COINBASE_API_KEY and COINBASE_PRIVATE_KEY environment variables.")]
    NotConfigured,

    #[error("Failed to build auth token: {0}")]
    Auth(String),

    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("Exchange rejected request: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Failed to decode exchange response: {0}")]
    Decode(String),

    #[error("Order cancellation rejected: {0}")]
    CancelRejected(String),
}

pub type ExchangeResult<T> = Result<T, ExchangeError>;
