//! Overpass adapter for toilet discovery.
//!
//! The query, transport DTOs and HTTP client live in separate submodules.
//! [`decode_features`] is public so captured payloads can be normalised
//! offline without a running interpreter.

mod dto;
mod finder;
mod query;

use loofinder_core::GeoFeature;

pub use finder::{DEFAULT_OVERPASS_URL, HttpToiletFinder, HttpToiletFinderConfig};
pub use query::{QUERY_TIMEOUT_SECS, build_toilet_query};

/// Decode an Overpass JSON body into domain features.
///
/// Element order is preserved. Elements of unsupported type, such as `area`,
/// are skipped with a warning.
///
/// # Errors
///
/// Returns the decoder error when `body` is not an Overpass JSON document.
///
/// # Examples
/// ```
/// use loofinder_data::overpass::decode_features;
///
/// let body = br#"{"elements":[{"type":"node","id":1,"lat":1.0,"lon":2.0}]}"#;
/// let features = decode_features(body)?;
/// assert_eq!(features.len(), 1);
/// # Ok::<(), serde_json::Error>(())
/// ```
pub fn decode_features(body: &[u8]) -> Result<Vec<GeoFeature>, serde_json::Error> {
    serde_json::from_slice::<dto::OverpassResponseDto>(body).map(dto::OverpassResponseDto::into_features)
}
