//! DTOs for decoding Overpass JSON responses.
//!
//! The adapter decodes into these transport DTOs first, then maps them into
//! domain [`GeoFeature`]s in one pass.

use std::collections::BTreeMap;

use log::warn;
use loofinder_core::{GeoFeature, Location, Node, Relation, Tags, Way};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct OverpassResponseDto {
    #[serde(default)]
    pub(super) elements: Vec<ElementDto>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(super) enum ElementDto {
    Node {
        id: u64,
        lat: f64,
        lon: f64,
        #[serde(default)]
        tags: BTreeMap<String, String>,
    },
    Way {
        id: u64,
        center: Option<CenterDto>,
        #[serde(default)]
        nodes: Vec<u64>,
        #[serde(default)]
        tags: BTreeMap<String, String>,
    },
    Relation {
        id: u64,
        center: Option<CenterDto>,
        #[serde(default)]
        tags: BTreeMap<String, String>,
    },
    /// Any other element type, such as `area`.
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub(super) struct CenterDto {
    lat: f64,
    lon: f64,
}

impl From<CenterDto> for Location {
    fn from(center: CenterDto) -> Self {
        Self::new(center.lat, center.lon)
    }
}

impl OverpassResponseDto {
    pub(super) fn into_features(self) -> Vec<GeoFeature> {
        self.elements
            .into_iter()
            .filter_map(ElementDto::into_feature)
            .collect()
    }
}

impl ElementDto {
    fn into_feature(self) -> Option<GeoFeature> {
        let feature = match self {
            Self::Node { id, lat, lon, tags } => GeoFeature::Node(Node {
                id,
                location: Location::new(lat, lon),
                tags: Tags::from_pairs(tags),
            }),
            Self::Way {
                id,
                center,
                nodes,
                tags,
            } => GeoFeature::Way(Way {
                id,
                center: center.map(Location::from),
                nodes,
                tags: Tags::from_pairs(tags),
            }),
            Self::Relation { id, center, tags } => GeoFeature::Relation(Relation {
                id,
                center: center.map(Location::from),
                tags: Tags::from_pairs(tags),
            }),
            Self::Unsupported => {
                warn!("Skipped element of unsupported type");
                return None;
            }
        };
        Some(feature)
    }
}
