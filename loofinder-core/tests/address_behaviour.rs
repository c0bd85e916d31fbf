//! Behavioural tests for address resolution fallbacks.

use loofinder_core::{AddressComponents, ReverseGeocodeResult, TransportError, describe_outcome};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

/// Reverse-geocoding outcome under test.
type LookupCell = RefCell<Result<ReverseGeocodeResult, TransportError>>;

#[fixture]
fn lookup() -> LookupCell {
    RefCell::new(Ok(ReverseGeocodeResult::default()))
}

#[fixture]
fn described() -> RefCell<Option<String>> {
    RefCell::new(None)
}

fn structured(address: AddressComponents) -> Result<ReverseGeocodeResult, TransportError> {
    Ok(ReverseGeocodeResult {
        address: Some(address),
        display_name: Some("should not be used".to_owned()),
        error: None,
    })
}

// --- Given steps ---

#[given("a structured Singapore address with house number, road and postcode")]
fn singapore_address(#[from(lookup)] lookup: &LookupCell) {
    *lookup.borrow_mut() = structured(AddressComponents {
        house_number: Some("12".to_owned()),
        road: Some("Main St".to_owned()),
        suburb: None,
        city: Some("Singapore".to_owned()),
        postcode: Some("123456".to_owned()),
    });
}

#[given("a structured Berlin address with a duplicated suburb")]
fn berlin_address(#[from(lookup)] lookup: &LookupCell) {
    *lookup.borrow_mut() = structured(AddressComponents {
        house_number: Some("1".to_owned()),
        road: Some("Unter den Linden".to_owned()),
        suburb: Some("Berlin".to_owned()),
        city: Some("Berlin".to_owned()),
        postcode: Some("10117".to_owned()),
    });
}

#[given("a response with only a display name")]
fn display_name_only(#[from(lookup)] lookup: &LookupCell) {
    *lookup.borrow_mut() = Ok(ReverseGeocodeResult {
        address: None,
        display_name: Some("Raffles Place, Downtown Core, Singapore".to_owned()),
        error: None,
    });
}

#[given("a response with only an error message")]
fn error_only(#[from(lookup)] lookup: &LookupCell) {
    *lookup.borrow_mut() = Ok(ReverseGeocodeResult {
        error: Some("Unable to geocode".to_owned()),
        ..ReverseGeocodeResult::default()
    });
}

#[given("an empty response")]
fn empty_response(#[from(lookup)] lookup: &LookupCell) {
    *lookup.borrow_mut() = Ok(ReverseGeocodeResult::default());
}

#[given("the geocoder answers with status 500")]
fn server_error(#[from(lookup)] lookup: &LookupCell) {
    *lookup.borrow_mut() = Err(TransportError::Http {
        url: "https://nominatim.example/reverse".to_owned(),
        status: 500,
        message: "internal server error".to_owned(),
    });
}

// --- When steps ---

#[when("I describe the lookup")]
fn describe(
    #[from(lookup)] lookup: &LookupCell,
    #[from(described)] described: &RefCell<Option<String>>,
) {
    let outcome = lookup.borrow().clone();
    *described.borrow_mut() = Some(describe_outcome(outcome));
}

// --- Then steps ---

#[then("the address combines city and postcode")]
fn then_singapore(#[from(described)] described: &RefCell<Option<String>>) {
    assert_described(described, "12, main st, singapore 123456");
}

#[then("the address lists city and postcode separately without repeats")]
fn then_berlin(#[from(described)] described: &RefCell<Option<String>>) {
    assert_described(described, "1, unter den linden, berlin, 10117");
}

#[then("the display name is used")]
fn then_display_name(#[from(described)] described: &RefCell<Option<String>>) {
    assert_described(described, "raffles place, downtown core, singapore");
}

#[then("the upstream error is reported")]
fn then_error(#[from(described)] described: &RefCell<Option<String>>) {
    assert_described(described, "location lookup failed: unable to geocode");
}

#[then("the generic placeholder is used")]
fn then_undetermined(#[from(described)] described: &RefCell<Option<String>>) {
    assert_described(described, "could not determine address");
}

#[then("the network error placeholder is used")]
fn then_network_error(#[from(described)] described: &RefCell<Option<String>>) {
    assert_described(described, "unknown location (network error)");
}

fn assert_described(described: &RefCell<Option<String>>, expected: &str) {
    let borrowed = described.borrow();
    let actual = borrowed.as_deref().expect("lookup must have been described");
    assert_eq!(actual, expected);
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/address.feature", name = $title)]
        fn $fn_name(lookup: LookupCell, described: RefCell<Option<String>>) {
            let _ = (lookup, described);
        }
    };
}

register_scenario!(
    combining_singapore_postcode,
    "combining city and postcode for Singapore"
);
register_scenario!(
    separate_city_and_postcode,
    "keeping city and postcode apart elsewhere"
);
register_scenario!(falling_back_to_display_name, "falling back to the display name");
register_scenario!(reporting_upstream_error, "reporting an explicit upstream error");
register_scenario!(answering_empty_response, "answering an empty response");
register_scenario!(surviving_server_error, "surviving a server error");
