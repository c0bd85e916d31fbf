//! Node-in-way containment derived from way membership.

use std::collections::HashMap;

use crate::{GeoFeature, TagKey};

/// Maps node identifiers to the name of the first named way listing them.
///
/// Membership stands in for geometric containment: a toilet node that is part
/// of a station's outline is treated as housed in that station.
///
/// # Examples
/// ```
/// use loofinder_core::{ContainmentIndex, GeoFeature, Tags, Way};
///
/// let station = GeoFeature::Way(Way {
///     id: 1,
///     center: None,
///     nodes: vec![10, 11],
///     tags: Tags::from_pairs([("name", "Central")]),
/// });
/// let index = ContainmentIndex::build(&[station]);
/// assert_eq!(index.parent_of(11), Some("Central"));
/// assert_eq!(index.parent_of(12), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainmentIndex {
    parents: HashMap<u64, String>,
}

impl ContainmentIndex {
    /// Build the index in one pass over `features`.
    ///
    /// Only ways with both a `name` tag and at least one member contribute.
    /// The first way to claim a node keeps it.
    #[must_use]
    pub fn build(features: &[GeoFeature]) -> Self {
        let mut parents = HashMap::new();
        for feature in features {
            let GeoFeature::Way(way) = feature else {
                continue;
            };
            let Some(name) = way.tags.get(TagKey::Name) else {
                continue;
            };
            for node_id in &way.nodes {
                parents
                    .entry(*node_id)
                    .or_insert_with(|| name.to_owned());
            }
        }
        Self { parents }
    }

    /// Name of the way containing `node_id`, if any.
    #[must_use]
    pub fn parent_of(&self, node_id: u64) -> Option<&str> {
        self.parents.get(&node_id).map(String::as_str)
    }

    /// Number of nodes with a known parent.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Whether no node has a known parent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Location, Node, Relation, Tags, Way};
    use rstest::rstest;

    fn way(id: u64, name: Option<&str>, nodes: Vec<u64>) -> GeoFeature {
        let tags = name.map_or_else(Tags::new, |value| Tags::from_pairs([("name", value)]));
        GeoFeature::Way(Way {
            id,
            center: None,
            nodes,
            tags,
        })
    }

    #[rstest]
    fn first_named_way_wins() {
        let features = vec![
            way(1, Some("North Hall"), vec![5, 6]),
            way(2, Some("South Hall"), vec![6, 7]),
        ];

        let index = ContainmentIndex::build(&features);

        assert_eq!(index.parent_of(5), Some("North Hall"));
        assert_eq!(index.parent_of(6), Some("North Hall"));
        assert_eq!(index.parent_of(7), Some("South Hall"));
        assert_eq!(index.len(), 3);
    }

    #[rstest]
    fn unnamed_ways_are_ignored() {
        let features = vec![way(1, None, vec![5]), way(2, Some("Depot"), vec![5])];

        let index = ContainmentIndex::build(&features);

        assert_eq!(index.parent_of(5), Some("Depot"));
    }

    #[rstest]
    fn nodes_and_relations_do_not_contribute() {
        let named = Tags::from_pairs([("name", "Museum")]);
        let features = vec![
            GeoFeature::Node(Node {
                id: 1,
                location: Location::new(0.0, 0.0),
                tags: named.clone(),
            }),
            GeoFeature::Relation(Relation {
                id: 2,
                center: None,
                tags: named,
            }),
        ];

        assert!(ContainmentIndex::build(&features).is_empty());
    }
}
