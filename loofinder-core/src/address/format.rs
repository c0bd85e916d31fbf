//! Locale-aware assembly of structured address components.

/// City value whose postcode is written together with it as one token.
pub const COMBINED_POSTCODE_CITY: &str = "singapore";

/// Structured address as returned by a reverse geocoder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressComponents {
    /// Building number.
    pub house_number: Option<String>,
    /// Street.
    pub road: Option<String>,
    /// Neighbourhood or district.
    pub suburb: Option<String>,
    /// City, or the city-state's name.
    pub city: Option<String>,
    /// Postal code.
    pub postcode: Option<String>,
}

/// Build a lower-cased display string from `components`.
///
/// Order is house number, road, suburb, then city and postcode. When the city
/// is [`COMBINED_POSTCODE_CITY`] (any case) the two are written as a single
/// `"<city> <postcode>"` token. Repeated tokens keep only their first
/// occurrence. Returns `None` when nothing usable is present.
///
/// # Examples
/// ```
/// use loofinder_core::{format_components, AddressComponents};
///
/// let components = AddressComponents {
///     house_number: Some("12".into()),
///     road: Some("Main St".into()),
///     city: Some("Singapore".into()),
///     postcode: Some("123456".into()),
///     ..AddressComponents::default()
/// };
/// assert_eq!(
///     format_components(&components).as_deref(),
///     Some("12, main st, singapore 123456"),
/// );
/// ```
#[must_use]
pub fn format_components(components: &AddressComponents) -> Option<String> {
    let mut tokens: Vec<String> = [
        &components.house_number,
        &components.road,
        &components.suburb,
    ]
    .into_iter()
    .filter_map(|part| present(part.as_deref()))
    .map(str::to_owned)
    .collect();

    let city = present(components.city.as_deref());
    let postcode = present(components.postcode.as_deref());
    match city {
        Some(name) if name.eq_ignore_ascii_case(COMBINED_POSTCODE_CITY) => {
            tokens.push(postcode.map_or_else(|| name.to_owned(), |code| format!("{name} {code}")));
        }
        _ => tokens.extend(city.into_iter().chain(postcode).map(str::to_owned)),
    }

    let mut unique: Vec<String> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if !unique.contains(&token) {
            unique.push(token);
        }
    }
    if unique.is_empty() {
        return None;
    }
    Some(unique.join(", ").to_lowercase())
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}
