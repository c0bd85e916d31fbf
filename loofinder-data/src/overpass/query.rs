//! Overpass QL for toilets inside a bounding box.

use geo::Rect;

/// Server-side evaluation limit requested in the query, in seconds.
pub const QUERY_TIMEOUT_SECS: u32 = 25;

/// Build the Overpass QL document selecting toilets within `bounds`.
///
/// `bounds` follows the `geo` convention (`x = longitude`, `y = latitude`).
/// The query selects nodes, ways and relations tagged `amenity=toilets`, and
/// railway stations tagged `toilets=yes`. It then selects every way and
/// relation referencing one of the matched nodes so containment can be
/// resolved from the same response. Both sets are emitted with `out center`
/// so ways and relations carry a centroid and member list.
///
/// # Examples
/// ```
/// use loofinder_core::Location;
/// use loofinder_data::overpass::build_toilet_query;
///
/// let query = build_toilet_query(&Location::new(1.0, 2.0).search_bounds());
/// assert!(query.starts_with("[out:json][timeout:25];"));
/// assert!(query.contains("(0.95,1.95,1.05,2.05)"));
/// ```
#[must_use]
pub fn build_toilet_query(bounds: &Rect<f64>) -> String {
    let south = bounds.min().y;
    let west = bounds.min().x;
    let north = bounds.max().y;
    let east = bounds.max().x;
    let bbox = format!("{south},{west},{north},{east}");
    format!(
        r#"[out:json][timeout:{QUERY_TIMEOUT_SECS}];
(
  nwr["amenity"="toilets"]({bbox});
  nwr["railway"="station"]["toilets"="yes"]({bbox});
)->.toilets;
.toilets out center;
(
  way(bn.toilets);
  rel(bn.toilets);
);
out center;"#
    )
}
