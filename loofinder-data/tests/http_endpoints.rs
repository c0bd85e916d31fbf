//! End-to-end tests of the HTTP adapters against a local server.

mod support;

use loofinder_core::{
    AddressResolver, Location, NETWORK_ERROR_ADDRESS, ToiletFinder, TransportError,
};
use loofinder_data::nominatim::{HttpAddressResolver, HttpAddressResolverConfig};
use loofinder_data::overpass::HttpToiletFinder;
use rstest::rstest;
use support::{OneShotServer, unreachable_url};

const OVERPASS_BODY: &str = r#"{
    "version": 0.6,
    "elements": [
        {"type": "node", "id": 42, "lat": 1.3001, "lon": 103.8001,
         "tags": {"amenity": "toilets", "name": "Food Court WC", "fee": "no",
                  "wheelchair": "yes", "addr:street": "Orchard Road"}},
        {"type": "way", "id": 7, "center": {"lat": 1.3, "lon": 103.8},
         "nodes": [41, 42, 43], "tags": {"name": "ION Orchard"}}
    ]
}"#;

const NOMINATIM_BODY: &str = r#"{
    "display_name": "12, Main St, Singapore",
    "address": {"house_number": "12", "road": "Main St",
                "city": "Singapore", "postcode": "123456"}
}"#;

fn location() -> Location {
    Location::new(1.3, 103.8)
}

#[rstest]
fn finder_normalises_successful_response() {
    let server = OneShotServer::respond("/api/interpreter", 200, OVERPASS_BODY);
    let finder = HttpToiletFinder::new(server.url.clone()).expect("finder");

    let records = finder.find_toilets(location()).expect("discovery succeeds");
    let head = server.request_head();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.id, "42");
    assert_eq!(record.name, "food court wc");
    assert_eq!(record.address, "orchard road");
    assert_eq!(record.housed_in.as_deref(), Some("ion orchard"));
    assert!(record.free);
    assert!(record.wheelchair);
    assert!(!record.diaper);
    assert!(head.starts_with("GET /api/interpreter?data="), "{head}");
}

#[rstest]
#[case(500, "{}")]
#[case(429, "rate limited")]
#[case(200, "<html>busy</html>")]
fn finder_reports_generic_failure(#[case] status: u16, #[case] body: &str) {
    let server = OneShotServer::respond("/api/interpreter", status, body);
    let finder = HttpToiletFinder::new(server.url.clone()).expect("finder");

    let err = finder.find_toilets(location()).expect_err("discovery fails");
    server.request_head();

    assert_eq!(err.to_string(), "failed to find nearby toilets");
    if status == 200 {
        assert!(matches!(err.cause(), TransportError::Decode { .. }));
    } else {
        assert!(
            matches!(err.cause(), TransportError::Http { status: code, .. } if *code == status)
        );
    }
}

#[rstest]
fn finder_reports_unreachable_endpoint() {
    let finder = HttpToiletFinder::new(unreachable_url("/api/interpreter")).expect("finder");

    let err = finder.find_toilets(location()).expect_err("discovery fails");

    assert!(matches!(err.cause(), TransportError::Network { .. }));
}

#[rstest]
fn resolver_formats_structured_address() {
    let server = OneShotServer::respond("/reverse", 200, NOMINATIM_BODY);
    let resolver = HttpAddressResolver::new(server.url.clone()).expect("resolver");

    let address = resolver.reverse_geocode(location());
    let head = server.request_head().to_lowercase();

    assert_eq!(address, "12, main st, singapore 123456");
    assert!(head.contains("format=json"), "{head}");
    assert!(head.contains("addressdetails=1"), "{head}");
    assert!(head.contains("accept-language: en\r\n"), "{head}");
}

#[rstest]
fn resolver_sends_configured_language() {
    let server = OneShotServer::respond("/reverse", 200, NOMINATIM_BODY);
    let config = HttpAddressResolverConfig::new(server.url.clone()).with_accept_language("fr");
    let resolver = HttpAddressResolver::with_config(config).expect("resolver");

    resolver.reverse_geocode(location());
    let head = server.request_head().to_lowercase();

    assert!(head.contains("accept-language: fr\r\n"), "{head}");
}

#[rstest]
fn resolver_reports_geocoder_error() {
    let server = OneShotServer::respond("/reverse", 200, r#"{"error": "Unable to geocode"}"#);
    let resolver = HttpAddressResolver::new(server.url.clone()).expect("resolver");

    let address = resolver.reverse_geocode(location());
    server.request_head();

    assert_eq!(address, "location lookup failed: unable to geocode");
}

#[rstest]
#[case(500, "{}")]
#[case(200, "not json")]
fn resolver_collapses_bad_responses(#[case] status: u16, #[case] body: &str) {
    let server = OneShotServer::respond("/reverse", status, body);
    let resolver = HttpAddressResolver::new(server.url.clone()).expect("resolver");

    let address = resolver.reverse_geocode(location());
    server.request_head();

    assert_eq!(address, NETWORK_ERROR_ADDRESS);
}

#[rstest]
fn resolver_collapses_unreachable_endpoint() {
    let resolver = HttpAddressResolver::new(unreachable_url("/reverse")).expect("resolver");
    assert_eq!(resolver.reverse_geocode(location()), NETWORK_ERROR_ADDRESS);
}

#[tokio::test(flavor = "multi_thread")]
async fn blocking_calls_work_inside_multi_thread_runtime() {
    let server = OneShotServer::respond("/reverse", 200, NOMINATIM_BODY);
    let resolver = HttpAddressResolver::new(server.url.clone()).expect("resolver");

    let address = resolver.reverse_geocode(location());
    server.request_head();
    tokio::task::block_in_place(move || drop(resolver));

    assert_eq!(address, "12, main st, singapore 123456");
}

#[tokio::test]
async fn async_calls_work_inside_current_thread_runtime() {
    let server = OneShotServer::respond("/api/interpreter", 200, OVERPASS_BODY);
    let finder = HttpToiletFinder::new(server.url.clone()).expect("finder");

    let records = finder
        .find_toilets_async(location())
        .await
        .expect("discovery succeeds");
    server.request_head();
    tokio::task::spawn_blocking(move || drop(finder))
        .await
        .expect("adapter dropped off the runtime thread");

    assert_eq!(records.len(), 1);
}
