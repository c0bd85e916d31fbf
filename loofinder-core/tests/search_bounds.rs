//! Property tests for the search window around a location.

use loofinder_core::{Location, SEARCH_HALF_WIDTH_DEGREES};
use proptest::prelude::*;

/// Tolerance for comparing the window's width against the fixed margin.
const MARGIN_EPSILON: f64 = 1.0e-9;

proptest! {
    #[test]
    fn window_strictly_contains_location(
        latitude in -89.9_f64..89.9,
        longitude in -179.9_f64..179.9,
    ) {
        let location = Location::new(latitude, longitude);
        let bounds = location.search_bounds();

        prop_assert!(bounds.min().y < latitude);
        prop_assert!(latitude < bounds.max().y);
        prop_assert!(bounds.min().x < longitude);
        prop_assert!(longitude < bounds.max().x);
    }

    #[test]
    fn window_uses_fixed_margin(
        latitude in -89.9_f64..89.9,
        longitude in -179.9_f64..179.9,
    ) {
        let bounds = Location::new(latitude, longitude).search_bounds();

        prop_assert!((latitude - bounds.min().y - SEARCH_HALF_WIDTH_DEGREES).abs() < MARGIN_EPSILON);
        prop_assert!((bounds.max().y - latitude - SEARCH_HALF_WIDTH_DEGREES).abs() < MARGIN_EPSILON);
        prop_assert!((longitude - bounds.min().x - SEARCH_HALF_WIDTH_DEGREES).abs() < MARGIN_EPSILON);
        prop_assert!((bounds.max().x - longitude - SEARCH_HALF_WIDTH_DEGREES).abs() < MARGIN_EPSILON);
    }
}
