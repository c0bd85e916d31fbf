//! Port for finding toilets around a location.

use crate::{Location, ToiletRecord};

use super::DiscoveryError;

/// Find public toilets around a location.
///
/// # Examples
///
/// ```rust
/// use loofinder_core::{DiscoveryError, Location, ToiletFinder, ToiletRecord};
///
/// struct Nowhere;
///
/// impl ToiletFinder for Nowhere {
///     fn find_toilets(&self, _location: Location) -> Result<Vec<ToiletRecord>, DiscoveryError> {
///         Ok(Vec::new())
///     }
/// }
///
/// let toilets = Nowhere.find_toilets(Location::new(0.0, 0.0))?;
/// assert!(toilets.is_empty());
/// # Ok::<(), DiscoveryError>(())
/// ```
pub trait ToiletFinder {
    /// Return the toilets within the search window around `location`, in the
    /// order the feature database listed them.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError`] when the upstream query cannot be completed.
    fn find_toilets(&self, location: Location) -> Result<Vec<ToiletRecord>, DiscoveryError>;
}
