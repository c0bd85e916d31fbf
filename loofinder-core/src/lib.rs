//! Core domain types for loofinder.
//!
//! Responsibilities:
//! - Model geospatial features, their recognised tags and the normalised
//!   [`ToiletRecord`] handed to presentation layers.
//! - Select toilet-bearing features and resolve which named way houses them.
//! - Format reverse-geocoded addresses with locale-specific rules and a fixed
//!   fallback order.
//!
//! Boundaries:
//! - No I/O. Adapters in `loofinder-data` fetch features and addresses and
//!   feed the outcome into [`complete_discovery`] and [`describe_outcome`].
//!
//! Invariants:
//! - Every string in a [`ToiletRecord`] is lower-cased.
//! - Discovery fails loudly with [`DiscoveryError`]; address resolution never
//!   fails and always yields a string.
#![forbid(unsafe_code)]

pub mod address;
pub mod discovery;
mod feature;
mod location;
mod tags;
mod toilet;
mod transport;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use address::{
    AddressComponents, AddressResolver, COMBINED_POSTCODE_CITY, NETWORK_ERROR_ADDRESS,
    ReverseGeocodeResult, UNDETERMINED_ADDRESS, describe_outcome, describe_result,
    format_components,
};
pub use discovery::{
    ContainmentIndex, DiscoveryError, ToiletFinder, complete_discovery, is_toilet,
    normalize_feature, normalize_features,
};
pub use feature::{ElementKind, GeoFeature, Node, Relation, Way};
pub use location::{Location, SEARCH_HALF_WIDTH_DEGREES};
pub use tags::{TagKey, Tags, UnrecognisedTag};
pub use toilet::{ADDRESS_NOT_AVAILABLE, ToiletRecord};
pub use transport::TransportError;
