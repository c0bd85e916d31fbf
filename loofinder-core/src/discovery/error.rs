//! Error raised when toilet discovery fails.

use thiserror::Error;

use crate::TransportError;

/// Raised when nearby toilets could not be fetched.
///
/// The message is the same for every cause. The upstream failure stays
/// reachable through [`std::error::Error::source`] and [`Self::cause`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to find nearby toilets")]
pub struct DiscoveryError {
    #[source]
    source: TransportError,
}

impl DiscoveryError {
    /// Wrap the transport failure that aborted the query.
    #[must_use]
    pub const fn new(source: TransportError) -> Self {
        Self { source }
    }

    /// The transport failure behind this error.
    #[must_use]
    pub const fn cause(&self) -> &TransportError {
        &self.source
    }
}
