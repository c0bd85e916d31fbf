//! Normalised toilet records and the address placeholder.

use crate::Location;

/// Placeholder address used when an element carries no address tags.
pub const ADDRESS_NOT_AVAILABLE: &str = "address not available";

/// A normalised public toilet, ready for display.
///
/// Every string field is lower-cased. Records are produced fresh for each
/// query and carry no identity beyond it.
///
/// # Examples
/// ```
/// use loofinder_core::{Location, ToiletRecord, ADDRESS_NOT_AVAILABLE};
///
/// let record = ToiletRecord {
///     id: "42".into(),
///     name: "public toilet".into(),
///     location: Location::new(1.0, 2.0),
///     address: ADDRESS_NOT_AVAILABLE.into(),
///     housed_in: None,
///     free: true,
///     wheelchair: false,
///     diaper: false,
/// };
/// assert!(record.needs_address_lookup());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToiletRecord {
    /// Source element identifier in string form.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Where the toilet is.
    pub location: Location,
    /// Display address, or [`ADDRESS_NOT_AVAILABLE`].
    pub address: String,
    /// Name of the named way the toilet node belongs to.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub housed_in: Option<String>,
    /// Known to be free of charge.
    pub free: bool,
    /// Wheelchair accessible.
    pub wheelchair: bool,
    /// Has a baby changing table.
    pub diaper: bool,
}

impl ToiletRecord {
    /// Whether the address must come from reverse geocoding instead.
    #[must_use]
    pub fn needs_address_lookup(&self) -> bool {
        self.address == ADDRESS_NOT_AVAILABLE
    }
}
