//! Geospatial elements returned by the feature database.

use std::fmt;

use crate::{Location, Tags};

/// Element kind as named by OpenStreetMap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A single point.
    Node,
    /// An ordered list of nodes.
    Way,
    /// A grouping of other elements.
    Relation,
}

impl ElementKind {
    /// Lower-case OSM name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Way => "way",
            Self::Relation => "relation",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point element with its own coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// OSM identifier.
    pub id: u64,
    /// Position of the node.
    pub location: Location,
    /// Recognised tags.
    pub tags: Tags,
}

/// A way with an optional server-computed centroid.
#[derive(Debug, Clone, PartialEq)]
pub struct Way {
    /// OSM identifier.
    pub id: u64,
    /// Centroid computed by the feature database, when requested.
    pub center: Option<Location>,
    /// Member node identifiers in order.
    pub nodes: Vec<u64>,
    /// Recognised tags.
    pub tags: Tags,
}

/// A relation with an optional server-computed centroid.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    /// OSM identifier.
    pub id: u64,
    /// Centroid computed by the feature database, when requested.
    pub center: Option<Location>,
    /// Recognised tags.
    pub tags: Tags,
}

/// Any element the feature database can return.
///
/// # Examples
/// ```
/// use loofinder_core::{ElementKind, GeoFeature, Location, Node, Tags};
///
/// let feature = GeoFeature::Node(Node {
///     id: 7,
///     location: Location::new(1.0, 2.0),
///     tags: Tags::from_pairs([("amenity", "toilets")]),
/// });
/// assert_eq!(feature.kind(), ElementKind::Node);
/// assert_eq!(feature.location(), Some(Location::new(1.0, 2.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum GeoFeature {
    /// See [`Node`].
    Node(Node),
    /// See [`Way`].
    Way(Way),
    /// See [`Relation`].
    Relation(Relation),
}

impl GeoFeature {
    /// OSM identifier. Only unique together with [`Self::kind`].
    #[must_use]
    pub const fn id(&self) -> u64 {
        match self {
            Self::Node(node) => node.id,
            Self::Way(way) => way.id,
            Self::Relation(relation) => relation.id,
        }
    }

    /// Kind of the element.
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::Node(_) => ElementKind::Node,
            Self::Way(_) => ElementKind::Way,
            Self::Relation(_) => ElementKind::Relation,
        }
    }

    /// Recognised tags of the element.
    #[must_use]
    pub const fn tags(&self) -> &Tags {
        match self {
            Self::Node(node) => &node.tags,
            Self::Way(way) => &way.tags,
            Self::Relation(relation) => &relation.tags,
        }
    }

    /// Representative position: the centroid for ways and relations, the
    /// node's own coordinate otherwise.
    #[must_use]
    pub const fn location(&self) -> Option<Location> {
        match self {
            Self::Node(node) => Some(node.location),
            Self::Way(way) => way.center,
            Self::Relation(relation) => relation.center,
        }
    }
}
