//! Toilet discovery: selecting toilet-bearing features and normalising them.
//!
//! Adapters fetch a flat list of [`GeoFeature`]s for the search window and
//! hand the outcome to [`complete_discovery`]. Processing happens in two
//! passes: a [`ContainmentIndex`] is built over the whole list, then the
//! toilet elements are filtered and mapped into [`ToiletRecord`]s.
//!
//! Transport failures are logged with their detail and surface as a single
//! generic [`DiscoveryError`].

mod containment;
mod error;
mod finder;
mod normalize;

use log::error;

use crate::{GeoFeature, ToiletRecord, TransportError};

pub use containment::ContainmentIndex;
pub use error::DiscoveryError;
pub use finder::ToiletFinder;
pub use normalize::{is_toilet, normalize_feature, normalize_features};

/// Turn the outcome of a feature query into toilet records.
///
/// # Errors
///
/// Returns [`DiscoveryError`] when `outcome` holds a transport failure.
pub fn complete_discovery(
    outcome: Result<Vec<GeoFeature>, TransportError>,
) -> Result<Vec<ToiletRecord>, DiscoveryError> {
    match outcome {
        Ok(features) => Ok(normalize_features(&features)),
        Err(source) => {
            error!("Toilet query failed: {source}");
            Err(DiscoveryError::new(source))
        }
    }
}
