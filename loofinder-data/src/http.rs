//! Shared reqwest and tokio plumbing for the HTTP adapters.
//!
//! The domain traits are synchronous to keep the core embeddable in
//! synchronous contexts. Adapters bridge their async requests to those traits
//! through [`BlockingRuntime`], which blocks on a runtime owned by the
//! adapter.

use std::future::Future;
use std::time::Duration;

use log::debug;
use loofinder_core::TransportError;
use reqwest::{Client, RequestBuilder};
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

/// Default user agent for outgoing requests.
///
/// Public OSM services ask clients to identify themselves.
pub const DEFAULT_USER_AGENT: &str = "loofinder/0.1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error type for adapter construction failures.
#[derive(Debug)]
pub enum ClientBuildError {
    /// The configured endpoint is not a valid absolute URL.
    InvalidUrl {
        /// Endpoint as configured.
        url: String,
        /// Parser failure.
        source: url::ParseError,
    },
    /// Failed to build the HTTP client.
    HttpClient(reqwest::Error),
    /// Failed to build the Tokio runtime.
    Runtime(std::io::Error),
}

impl std::fmt::Display for ClientBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUrl { url, source } => write!(f, "invalid endpoint {url:?}: {source}"),
            Self::HttpClient(err) => write!(f, "failed to build HTTP client: {err}"),
            Self::Runtime(err) => write!(f, "failed to build Tokio runtime: {err}"),
        }
    }
}

impl std::error::Error for ClientBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidUrl { source, .. } => Some(source),
            Self::HttpClient(err) => Some(err),
            Self::Runtime(err) => Some(err),
        }
    }
}

/// Parse a configured endpoint.
pub(crate) fn parse_endpoint(url: &str) -> Result<Url, ClientBuildError> {
    Url::parse(url).map_err(|source| ClientBuildError::InvalidUrl {
        url: url.to_owned(),
        source,
    })
}

/// Build a client with the adapter's user agent and timeouts.
pub(crate) fn build_client(user_agent: &str, timeout: Duration) -> Result<Client, ClientBuildError> {
    Client::builder()
        .user_agent(user_agent)
        .connect_timeout(timeout)
        .timeout(timeout)
        .build()
        .map_err(ClientBuildError::HttpClient)
}

/// Runtime used to drive requests for synchronous callers.
///
/// When called from outside any Tokio runtime, the stored current-thread
/// runtime is used. When called from within a multi-threaded runtime, that
/// runtime's handle is used with [`tokio::task::block_in_place`] to avoid
/// nested runtime panics. Callers already running on a `current_thread`
/// runtime must use the adapters' async methods instead.
///
/// Dropping the owned runtime blocks, so adapters must be dropped outside
/// async contexts (or inside [`tokio::task::block_in_place`]).
pub(crate) struct BlockingRuntime {
    runtime: Runtime,
}

impl std::fmt::Debug for BlockingRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<tokio::runtime::Runtime>")
    }
}

impl BlockingRuntime {
    pub(crate) fn new() -> Result<Self, ClientBuildError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ClientBuildError::Runtime)?;
        Ok(Self { runtime })
    }

    pub(crate) fn block_on<F: Future>(&self, future: F) -> F::Output {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }
}

/// Send `request` and return the body of a successful response.
///
/// Non-success statuses become [`TransportError::Http`].
pub(crate) async fn fetch_body(
    request: RequestBuilder,
    url: &Url,
    timeout: Duration,
) -> Result<Vec<u8>, TransportError> {
    debug!("GET {url}");
    let response = request
        .send()
        .await
        .map_err(|err| convert_reqwest_error(&err, url, timeout))?
        .error_for_status()
        .map_err(|err| convert_reqwest_error(&err, url, timeout))?;
    let body = response
        .bytes()
        .await
        .map_err(|err| convert_reqwest_error(&err, url, timeout))?;
    Ok(body.to_vec())
}

/// Describe a body that failed to decode.
pub(crate) fn decode_error(error: &serde_json::Error, url: &Url) -> TransportError {
    TransportError::Decode {
        url: url.to_string(),
        message: error.to_string(),
    }
}

/// Convert a reqwest error to a [`TransportError`].
fn convert_reqwest_error(error: &reqwest::Error, url: &Url, timeout: Duration) -> TransportError {
    if error.is_timeout() {
        return TransportError::Timeout {
            url: url.to_string(),
            timeout_secs: timeout.as_secs(),
        };
    }

    if let Some(status) = error.status() {
        return TransportError::Http {
            url: url.to_string(),
            status: status.as_u16(),
            message: error.to_string(),
        };
    }

    TransportError::Network {
        url: url.to_string(),
        message: error.to_string(),
    }
}
