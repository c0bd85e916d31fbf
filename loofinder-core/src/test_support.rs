//! Deterministic doubles for [`ToiletFinder`] and [`AddressResolver`], used by
//! unit and behaviour tests.

use std::collections::HashMap;

use crate::{AddressResolver, DiscoveryError, Location, ToiletFinder, ToiletRecord};

/// `ToiletFinder` returning a pre-configured outcome for any location.
#[derive(Debug, Clone)]
pub struct StubToiletFinder {
    response: Result<Vec<ToiletRecord>, DiscoveryError>,
}

impl StubToiletFinder {
    /// Create a finder that returns `records`.
    #[must_use]
    pub const fn with_records(records: Vec<ToiletRecord>) -> Self {
        Self {
            response: Ok(records),
        }
    }

    /// Create a finder that fails with `error`.
    #[must_use]
    pub const fn with_error(error: DiscoveryError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl ToiletFinder for StubToiletFinder {
    fn find_toilets(&self, _location: Location) -> Result<Vec<ToiletRecord>, DiscoveryError> {
        self.response.clone()
    }
}

/// `AddressResolver` answering from a fixed table, with a default for
/// unknown coordinates.
#[derive(Debug, Clone, Default)]
pub struct FixedAddressResolver {
    answers: HashMap<(u64, u64), String>,
    fallback: String,
}

impl FixedAddressResolver {
    /// Resolve every location to `address`.
    #[must_use]
    pub fn always(address: impl Into<String>) -> Self {
        Self {
            answers: HashMap::new(),
            fallback: address.into(),
        }
    }

    /// Answer `address` for exactly `location`.
    #[must_use]
    pub fn with_answer(mut self, location: Location, address: impl Into<String>) -> Self {
        self.answers.insert(key(location), address.into());
        self
    }
}

impl AddressResolver for FixedAddressResolver {
    fn reverse_geocode(&self, location: Location) -> String {
        self.answers
            .get(&key(location))
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

const fn key(location: Location) -> (u64, u64) {
    (location.latitude.to_bits(), location.longitude.to_bits())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TransportError;
    use rstest::rstest;

    #[rstest]
    fn stub_finder_replays_error() {
        let error = DiscoveryError::new(TransportError::Network {
            url: "http://example.com".to_owned(),
            message: "connection refused".to_owned(),
        });
        let finder = StubToiletFinder::with_error(error.clone());

        let outcome = finder.find_toilets(Location::new(0.0, 0.0));

        assert_eq!(outcome, Err(error));
    }

    #[rstest]
    fn fixed_resolver_prefers_exact_answer() {
        let here = Location::new(1.0, 2.0);
        let resolver = FixedAddressResolver::always("somewhere").with_answer(here, "right here");

        assert_eq!(resolver.reverse_geocode(here), "right here");
        assert_eq!(resolver.reverse_geocode(Location::new(2.0, 1.0)), "somewhere");
    }
}
