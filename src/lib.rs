//! Facade crate for loofinder.
//!
//! This crate re-exports the core domain types and exposes the HTTP adapters
//! for Overpass and Nominatim behind the `http` feature.

#![forbid(unsafe_code)]

pub use loofinder_core::{
    AddressComponents, AddressResolver, DiscoveryError, GeoFeature, Location, ToiletFinder,
    ToiletRecord, TransportError, normalize_features,
};

#[cfg(feature = "test-support")]
pub use loofinder_core::test_support;

#[cfg(feature = "http")]
pub use loofinder_data::nominatim::{HttpAddressResolver, HttpAddressResolverConfig};
#[cfg(feature = "http")]
pub use loofinder_data::overpass::{HttpToiletFinder, HttpToiletFinderConfig};
#[cfg(feature = "http")]
pub use loofinder_data::ClientBuildError;
