//! HTTP-based `AddressResolver` backed by a Nominatim `reverse` endpoint.

use std::time::Duration;

use loofinder_core::{
    AddressResolver, Location, ReverseGeocodeResult, TransportError, describe_outcome,
};
use reqwest::Client;
use reqwest::header::ACCEPT_LANGUAGE;
use url::Url;

use super::dto::ReverseResponseDto;
use crate::http::{
    BlockingRuntime, ClientBuildError, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, build_client,
    decode_error, fetch_body, parse_endpoint,
};

/// Public Nominatim reverse endpoint used when none is configured.
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/reverse";

/// Language requested for address components.
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en";

/// Configuration for [`HttpAddressResolver`].
#[derive(Debug, Clone)]
pub struct HttpAddressResolverConfig {
    /// Reverse endpoint (e.g., `"https://nominatim.openstreetmap.org/reverse"`).
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
    /// Value of the `Accept-Language` header.
    pub accept_language: String,
}

impl Default for HttpAddressResolverConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_NOMINATIM_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_owned(),
        }
    }
}

impl HttpAddressResolverConfig {
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

    /// Set the preferred language for address components.
    #[must_use]
    pub fn with_accept_language(mut self, accept_language: impl Into<String>) -> Self {
        self.accept_language = accept_language.into();
        self
    }
}

/// Address resolver querying a Nominatim endpoint over HTTP.
///
/// Resolution is total: any failure is reported through the returned string.
///
/// # Example
///
/// ```no_run
/// use loofinder_core::{AddressResolver, Location};
/// use loofinder_data::nominatim::HttpAddressResolver;
///
/// let resolver = HttpAddressResolver::new("https://nominatim.openstreetmap.org/reverse")?;
/// println!("{}", resolver.reverse_geocode(Location::new(1.2834, 103.8607)));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct HttpAddressResolver {
    client: Client,
    endpoint: Url,
    config: HttpAddressResolverConfig,
    runtime: BlockingRuntime,
}

impl HttpAddressResolver {
    /// Create a new resolver with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL, or the HTTP client
    /// or Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientBuildError> {
        Self::with_config(HttpAddressResolverConfig::new(base_url))
    }

    /// Create a new resolver with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL, or the HTTP client
    /// or Tokio runtime fails to build.
    pub fn with_config(config: HttpAddressResolverConfig) -> Result<Self, ClientBuildError> {
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
    pub const fn config(&self) -> &HttpAddressResolverConfig {
        &self.config
    }

    fn request_url(&self, location: Location) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("lat", &location.latitude.to_string())
            .append_pair("lon", &location.longitude.to_string())
            .append_pair("format", "json")
            .append_pair("addressdetails", "1");
        url
    }

    async fn lookup(&self, location: Location) -> Result<ReverseGeocodeResult, TransportError> {
        let url = self.request_url(location);
        let request = self
            .client
            .get(url.clone())
            .header(ACCEPT_LANGUAGE, self.config.accept_language.as_str());
        let body = fetch_body(request, &url, self.config.timeout).await?;
        serde_json::from_slice::<ReverseResponseDto>(&body)
            .map(ReverseGeocodeResult::from)
            .map_err(|err| decode_error(&err, &url))
    }

    /// Resolve `location` into a display address without blocking.
    pub async fn reverse_geocode_async(&self, location: Location) -> String {
        describe_outcome(self.lookup(location).await)
    }
}

impl AddressResolver for HttpAddressResolver {
    /// Resolve `location`, blocking the calling thread.
    ///
    /// # Runtime requirements
    ///
    /// When called from within an existing Tokio runtime, the runtime must be
    /// multi-threaded; on a `current_thread` runtime use
    /// [`HttpAddressResolver::reverse_geocode_async`] instead.
    fn reverse_geocode(&self, location: Location) -> String {
        self.runtime.block_on(self.reverse_geocode_async(location))
    }
}
