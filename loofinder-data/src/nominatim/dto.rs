//! DTOs for decoding Nominatim reverse responses.

use loofinder_core::{AddressComponents, ReverseGeocodeResult};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct ReverseResponseDto {
    #[serde(default)]
    address: Option<AddressDto>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct AddressDto {
    #[serde(default)]
    house_number: Option<String>,
    #[serde(default)]
    road: Option<String>,
    #[serde(default)]
    suburb: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    postcode: Option<String>,
}

impl From<AddressDto> for AddressComponents {
    fn from(address: AddressDto) -> Self {
        Self {
            house_number: address.house_number,
            road: address.road,
            suburb: address.suburb,
            city: address.city,
            postcode: address.postcode,
        }
    }
}

impl From<ReverseResponseDto> for ReverseGeocodeResult {
    fn from(response: ReverseResponseDto) -> Self {
        Self {
            address: response.address.map(AddressComponents::from),
            display_name: response.display_name,
            error: response.error,
        }
    }
}
