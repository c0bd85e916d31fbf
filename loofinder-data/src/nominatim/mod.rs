//! Nominatim adapter for reverse geocoding.
//!
//! Responses are decoded into [`loofinder_core::ReverseGeocodeResult`] and
//! interpreted by the core, so the adapter never decides which tier of the
//! address wins.

mod dto;
mod resolver;

pub use resolver::{
    DEFAULT_ACCEPT_LANGUAGE, DEFAULT_NOMINATIM_URL, HttpAddressResolver,
    HttpAddressResolverConfig,
};
