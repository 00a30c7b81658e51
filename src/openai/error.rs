//! Error types for the review client.

use thiserror::Error;

use super::params::ParamError;

/// Errors that can occur while requesting a review.
///
/// Each variant is surfaced to the caller once; nothing is retried.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The model alias or a sampling parameter failed validation.
    #[error(transparent)]
    Params(#[from] ParamError),

    /// The request body could not be encoded. Detected before any
    /// network I/O.
    #[error("failed to encode request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The HTTP call itself failed (connection, TLS, DNS).
    #[error("http request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be parsed into the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The API answered at the transport level but returned an error
    /// payload, e.g. a bad key or exhausted quota.
    #[error("api error: {0}")]
    Upstream(String),
}
