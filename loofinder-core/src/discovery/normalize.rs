//! Mapping of toilet-bearing elements into [`ToiletRecord`]s.

use std::collections::HashSet;

use log::warn;

use super::ContainmentIndex;
use crate::{ADDRESS_NOT_AVAILABLE, ElementKind, GeoFeature, TagKey, Tags, ToiletRecord};

const ADDRESS_KEYS: [TagKey; 4] = [
    TagKey::Street,
    TagKey::HouseNumber,
    TagKey::Postcode,
    TagKey::City,
];

/// Whether the tags describe a toilet.
///
/// Either an explicit `amenity=toilets`, or a railway station advertising
/// `toilets=yes`.
#[must_use]
pub fn is_toilet(tags: &Tags) -> bool {
    tags.is(TagKey::Amenity, "toilets")
        || (tags.is(TagKey::Railway, "station") && tags.is(TagKey::Toilets, "yes"))
}

/// Normalise every toilet-bearing feature, preserving input order.
///
/// Features that are not toilets are dropped; they are typically the parent
/// ways fetched alongside so containment can be resolved. An element repeated
/// in the input is only emitted once.
///
/// # Examples
/// ```
/// use loofinder_core::{normalize_features, GeoFeature, Location, Node, Tags};
///
/// let features = vec![GeoFeature::Node(Node {
///     id: 3,
///     location: Location::new(1.0, 2.0),
///     tags: Tags::from_pairs([("amenity", "toilets"), ("fee", "no")]),
/// })];
/// let records = normalize_features(&features);
/// assert_eq!(records[0].name, "public toilet");
/// assert!(records[0].free);
/// ```
#[must_use]
pub fn normalize_features(features: &[GeoFeature]) -> Vec<ToiletRecord> {
    let index = ContainmentIndex::build(features);
    let mut seen: HashSet<(ElementKind, u64)> = HashSet::new();
    features
        .iter()
        .filter(|feature| is_toilet(feature.tags()))
        .filter(|feature| seen.insert((feature.kind(), feature.id())))
        .filter_map(|feature| normalize_feature(feature, &index))
        .collect()
}

/// Normalise a single feature.
///
/// Returns `None` when the feature is not a toilet, or when it is a way or
/// relation without a centroid to place it on the map.
#[must_use]
pub fn normalize_feature(feature: &GeoFeature, index: &ContainmentIndex) -> Option<ToiletRecord> {
    let tags = feature.tags();
    if !is_toilet(tags) {
        return None;
    }
    let Some(location) = feature.location() else {
        warn!(
            "Skipped {} {} without a centroid",
            feature.kind(),
            feature.id()
        );
        return None;
    };
    let housed_in = match feature {
        GeoFeature::Node(node) => index.parent_of(node.id).map(str::to_lowercase),
        GeoFeature::Way(_) | GeoFeature::Relation(_) => None,
    };

    Some(ToiletRecord {
        id: feature.id().to_string(),
        name: display_name(tags).to_lowercase(),
        location,
        address: display_address(tags).to_lowercase(),
        housed_in,
        free: matches!(tags.get(TagKey::Fee), Some("no" | "0")),
        wheelchair: tags.is(TagKey::Wheelchair, "yes"),
        diaper: tags.is(TagKey::Diaper, "yes"),
    })
}

fn display_name(tags: &Tags) -> String {
    let name = tags.get(TagKey::Name);
    if tags.is(TagKey::Railway, "station") {
        return name.map_or_else(
            || "station toilet".to_owned(),
            |station| format!("{station} station toilet"),
        );
    }
    name.unwrap_or("public toilet").to_owned()
}

fn display_address(tags: &Tags) -> String {
    let parts: Vec<&str> = ADDRESS_KEYS
        .iter()
        .filter_map(|key| tags.get(*key))
        .collect();
    if parts.is_empty() {
        ADDRESS_NOT_AVAILABLE.to_owned()
    } else {
        parts.join(", ")
    }
}
