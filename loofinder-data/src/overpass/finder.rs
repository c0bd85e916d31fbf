//! HTTP-based `ToiletFinder` backed by an Overpass interpreter.

use std::time::Duration;

use loofinder_core::{
    DiscoveryError, GeoFeature, Location, ToiletFinder, ToiletRecord, TransportError,
    complete_discovery,
};
use reqwest::Client;
use url::Url;

use super::build_toilet_query;
use super::decode_features;
use crate::http::{
    BlockingRuntime, ClientBuildError, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, build_client,
    decode_error, fetch_body, parse_endpoint,
};

/// Public Overpass interpreter used when no endpoint is configured.
pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

/// Configuration for [`HttpToiletFinder`].
#[derive(Debug, Clone)]
pub struct HttpToiletFinderConfig {
    /// Interpreter endpoint (e.g., `"https://overpass-api.de/api/interpreter"`).
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpToiletFinderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OVERPASS_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpToiletFinderConfig {
    /// Create a new configuration with the given endpoint.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Toilet finder querying an Overpass interpreter over HTTP.
///
/// Each call issues one GET request carrying the query in the `data`
/// parameter. Failures are logged and surface as a generic
/// [`DiscoveryError`]; there are no retries.
///
/// # Example
///
/// ```no_run
/// use loofinder_core::{Location, ToiletFinder};
/// use loofinder_data::overpass::HttpToiletFinder;
///
/// let finder = HttpToiletFinder::new("https://overpass-api.de/api/interpreter")?;
/// let toilets = finder.find_toilets(Location::new(1.2834, 103.8607))?;
/// for toilet in &toilets {
///     println!("{}: {}", toilet.name, toilet.address);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct HttpToiletFinder {
    client: Client,
    endpoint: Url,
    config: HttpToiletFinderConfig,
    runtime: BlockingRuntime,
}

impl HttpToiletFinder {
    /// Create a new finder with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL, or the HTTP client
    /// or Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientBuildError> {
        Self::with_config(HttpToiletFinderConfig::new(base_url))
    }

    /// Create a new finder with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL, or the HTTP client
    /// or Tokio runtime fails to build.
    pub fn with_config(config: HttpToiletFinderConfig) -> Result<Self, ClientBuildError> {
        let endpoint = parse_endpoint(&config.base_url)?;
        let client = build_client(&config.user_agent, config.timeout)?;
        let runtime = BlockingRuntime::new()?;
        Ok(Self {
            client,
            endpoint,
            config,
            runtime,
        })
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &HttpToiletFinderConfig {
        &self.config
    }

    /// Build the request URL carrying the query for `location`.
    fn request_url(&self, location: Location) -> Url {
        let query = build_toilet_query(&location.search_bounds());
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("data", &query);
        url
    }

    /// Fetch the raw features around `location`.
    async fn fetch_features(&self, location: Location) -> Result<Vec<GeoFeature>, TransportError> {
        let url = self.request_url(location);
        let body = fetch_body(self.client.get(url.clone()), &url, self.config.timeout).await?;
        decode_features(&body).map_err(|err| decode_error(&err, &url))
    }

    /// Find toilets around `location` without blocking.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError`] on transport failure, non-success status or
    /// an undecodable body.
    pub async fn find_toilets_async(
        &self,
        location: Location,
    ) -> Result<Vec<ToiletRecord>, DiscoveryError> {
        complete_discovery(self.fetch_features(location).await)
    }
}

impl ToiletFinder for HttpToiletFinder {
    /// Find toilets around `location`, blocking the calling thread.
    ///
    /// # Runtime requirements
    ///
    /// When called from within an existing Tokio runtime, the runtime must be
    /// multi-threaded; on a `current_thread` runtime use
    /// [`HttpToiletFinder::find_toilets_async`] instead.
    fn find_toilets(&self, location: Location) -> Result<Vec<ToiletRecord>, DiscoveryError> {
        self.runtime.block_on(self.find_toilets_async(location))
    }
}
