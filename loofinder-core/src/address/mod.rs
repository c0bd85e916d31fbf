//! Address resolution: turning a coordinate into a display string.
//!
//! Unlike discovery, resolution never fails. Every outcome degrades through
//! fixed tiers, from most to least informative:
//!
//! 1. the structured address, formatted by [`format_components`];
//! 2. the geocoder's free-text display name;
//! 3. the geocoder's explicit error message;
//! 4. [`UNDETERMINED_ADDRESS`].
//!
//! A request that never produced a usable response (network failure,
//! non-success status, undecodable body) short-circuits to
//! [`NETWORK_ERROR_ADDRESS`].

mod format;

use log::warn;

use crate::{Location, TransportError};

pub use format::{AddressComponents, COMBINED_POSTCODE_CITY, format_components};

/// Returned when the geocoder could not be reached or answered badly.
pub const NETWORK_ERROR_ADDRESS: &str = "unknown location (network error)";

/// Returned when the geocoder answered without anything usable.
pub const UNDETERMINED_ADDRESS: &str = "could not determine address";

/// Decoded reverse-geocoding response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReverseGeocodeResult {
    /// Structured address, when the geocoder supplied one.
    pub address: Option<AddressComponents>,
    /// Free-text description of the place.
    pub display_name: Option<String>,
    /// Explicit error reported by the geocoder.
    pub error: Option<String>,
}

/// Pick the most informative description available in `result`.
///
/// # Examples
/// ```
/// use loofinder_core::{describe_result, ReverseGeocodeResult};
///
/// let result = ReverseGeocodeResult {
///     error: Some("Unable to geocode".into()),
///     ..ReverseGeocodeResult::default()
/// };
/// assert_eq!(describe_result(&result), "location lookup failed: unable to geocode");
/// ```
#[must_use]
pub fn describe_result(result: &ReverseGeocodeResult) -> String {
    if let Some(formatted) = result.address.as_ref().and_then(format_components) {
        return formatted;
    }
    if let Some(name) = result.display_name.as_deref().filter(|name| !name.is_empty()) {
        return name.to_lowercase();
    }
    if let Some(error) = result.error.as_deref().filter(|error| !error.is_empty()) {
        return format!("location lookup failed: {error}").to_lowercase();
    }
    UNDETERMINED_ADDRESS.to_owned()
}

/// Describe the outcome of a reverse-geocoding request.
///
/// Transport failures of any kind collapse into [`NETWORK_ERROR_ADDRESS`];
/// a non-success status is not distinguished from an unreachable host.
#[must_use]
pub fn describe_outcome(outcome: Result<ReverseGeocodeResult, TransportError>) -> String {
    match outcome {
        Ok(result) => describe_result(&result),
        Err(source) => {
            warn!("Address lookup failed: {source}");
            NETWORK_ERROR_ADDRESS.to_owned()
        }
    }
}

/// Resolve a coordinate into a human-readable address.
///
/// Implementations are total: failures are reported through the returned
/// string rather than an error type, so a missing address never blocks
/// showing the location itself.
///
/// # Examples
///
/// ```rust
/// use loofinder_core::{AddressResolver, Location};
///
/// struct Nowhere;
///
/// impl AddressResolver for Nowhere {
///     fn reverse_geocode(&self, _location: Location) -> String {
///         "middle of the ocean".to_owned()
///     }
/// }
///
/// assert_eq!(Nowhere.reverse_geocode(Location::new(0.0, 0.0)), "middle of the ocean");
/// ```
pub trait AddressResolver {
    /// Return a lower-cased display address for `location`.
    fn reverse_geocode(&self, location: Location) -> String;
}
