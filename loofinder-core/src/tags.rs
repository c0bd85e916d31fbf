//! Recognised OpenStreetMap tags.
//!
//! Upstream elements carry free-form key/value maps. Only the keys listed in
//! [`TagKey`] influence toilet records; everything else is dropped when a
//! [`Tags`] value is built, and lookups go through the enum so a misspelt key
//! cannot compile.

use std::collections::HashMap;
use std::str::FromStr;

/// Tag keys the normaliser understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKey {
    /// `name`
    Name,
    /// `addr:street`
    Street,
    /// `addr:housenumber`
    HouseNumber,
    /// `addr:postcode`
    Postcode,
    /// `addr:city`
    City,
    /// `railway`
    Railway,
    /// `toilets`
    Toilets,
    /// `amenity`
    Amenity,
    /// `fee`
    Fee,
    /// `wheelchair`
    Wheelchair,
    /// `diaper`, or its successor `changing_table`
    Diaper,
}

/// Returned by [`TagKey::from_str`] for keys outside the recognised set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnrecognisedTag;

impl FromStr for TagKey {
    type Err = UnrecognisedTag;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let parsed = match key {
            "name" => Self::Name,
            "addr:street" => Self::Street,
            "addr:housenumber" => Self::HouseNumber,
            "addr:postcode" => Self::Postcode,
            "addr:city" => Self::City,
            "railway" => Self::Railway,
            "toilets" => Self::Toilets,
            "amenity" => Self::Amenity,
            "fee" => Self::Fee,
            "wheelchair" => Self::Wheelchair,
            "diaper" | "changing_table" => Self::Diaper,
            _ => return Err(UnrecognisedTag),
        };
        Ok(parsed)
    }
}

/// Recognised tags of a single element.
///
/// # Examples
/// ```
/// use loofinder_core::{TagKey, Tags};
///
/// let tags = Tags::from_pairs([("amenity", "toilets"), ("colour", "blue")]);
/// assert!(tags.is(TagKey::Amenity, "toilets"));
/// assert_eq!(tags.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags {
    values: HashMap<TagKey, String>,
}

impl Tags {
    /// Empty tag set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect recognised pairs, ignoring unknown keys.
    ///
    /// When two raw keys map to the same [`TagKey`], the first one wins.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut values = HashMap::new();
        for (key, value) in pairs {
            if let Ok(tag) = key.as_ref().parse::<TagKey>() {
                values.entry(tag).or_insert_with(|| value.into());
            }
        }
        Self { values }
    }

    /// Value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: TagKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// Whether `key` is present with exactly `expected` as its value.
    #[must_use]
    pub fn is(&self, key: TagKey, expected: &str) -> bool {
        self.get(key) == Some(expected)
    }

    /// Number of recognised tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no recognised tag is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Tags
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
