//! Failures raised while talking to a remote endpoint.

use thiserror::Error;

/// Transport-level errors encountered while issuing HTTP requests.
///
/// Adapters classify their client errors into these variants so the domain
/// layer can log them without depending on a particular HTTP stack.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TransportError {
    /// The server answered with a non-success status.
    #[error("request to {url} failed with status {status}: {message}")]
    Http {
        /// Fully qualified request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description from the client.
        message: String,
    },
    /// The request did not complete before the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Fully qualified request URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// Connection or I/O failure.
    #[error("network error contacting {url}: {message}")]
    Network {
        /// Fully qualified request URL.
        url: String,
        /// Error description from the client.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("malformed response from {url}: {message}")]
    Decode {
        /// Fully qualified request URL.
        url: String,
        /// Decoder error description.
        message: String,
    },
}
