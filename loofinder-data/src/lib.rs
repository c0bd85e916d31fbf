//! HTTP adapters for loofinder.
//!
//! Responsibilities:
//! - Query an Overpass interpreter for toilet-tagged elements around a
//!   location ([`overpass`]).
//! - Reverse-geocode coordinates through a Nominatim endpoint
//!   ([`nominatim`]).
//! - Classify transport failures into [`loofinder_core::TransportError`].
//!
//! Boundaries:
//! - Do not encode domain rules (live in `loofinder-core`); adapters only
//!   fetch, decode and hand the outcome over.
//! - Each adapter owns its runtime so the blocking trait implementations can
//!   be used from synchronous callers.
//!
//! Invariants:
//! - Single attempt per call, no retries and no caching.
//! - No global mutable state.
#![forbid(unsafe_code)]

mod http;
pub mod nominatim;
pub mod overpass;

pub use http::{ClientBuildError, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
