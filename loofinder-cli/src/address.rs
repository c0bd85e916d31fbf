//! `address` command: reverse-geocode a single coordinate.

use std::io::Write;
use std::time::Duration;

use clap::Parser;
use loofinder_core::{AddressResolver, Location};
use loofinder_data::nominatim::{HttpAddressResolver, HttpAddressResolverConfig};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_ACCEPT_LANGUAGE, ARG_LATITUDE, ARG_LONGITUDE, ARG_NOMINATIM_URL, ARG_TIMEOUT_SECS,
    ARG_USER_AGENT, CliError, CoordinateFields, ENV_ADDRESS_LATITUDE, ENV_ADDRESS_LONGITUDE,
    require_location,
};

/// CLI arguments for the `address` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "address",
    about = "Reverse-geocode a coordinate into a display address",
    allow_negative_numbers = true
)]
#[ortho_config(prefix = "LOOFINDER")]
pub(crate) struct AddressArgs {
    /// Latitude in decimal degrees.
    #[arg(long = ARG_LATITUDE, value_name = "degrees")]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Longitude in decimal degrees.
    #[arg(long = ARG_LONGITUDE, value_name = "degrees")]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Nominatim reverse endpoint.
    #[arg(long = ARG_NOMINATIM_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) nominatim_url: Option<String>,
    /// Preferred language for address components (e.g. "en").
    #[arg(long = ARG_ACCEPT_LANGUAGE, value_name = "tag")]
    #[serde(default)]
    pub(crate) accept_language: Option<String>,
    /// User agent sent with the request.
    #[arg(long = ARG_USER_AGENT, value_name = "agent")]
    #[serde(default)]
    pub(crate) user_agent: Option<String>,
    /// Request timeout in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "seconds")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
}

impl AddressArgs {
    pub(crate) fn into_config(self) -> Result<AddressConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AddressConfig::try_from(merged)
    }
}

/// Resolved `address` command configuration.
#[derive(Debug, Clone)]
pub(crate) struct AddressConfig {
    pub(crate) location: Location,
    pub(crate) resolver: HttpAddressResolverConfig,
}

impl TryFrom<AddressArgs> for AddressConfig {
    type Error = CliError;

    fn try_from(args: AddressArgs) -> Result<Self, Self::Error> {
        let location = require_location(
            args.latitude,
            args.longitude,
            &CoordinateFields {
                latitude_env: ENV_ADDRESS_LATITUDE,
                longitude_env: ENV_ADDRESS_LONGITUDE,
            },
        )?;

        let mut resolver = args
            .nominatim_url
            .map_or_else(HttpAddressResolverConfig::default, HttpAddressResolverConfig::new);
        if let Some(language) = args.accept_language {
            resolver = resolver.with_accept_language(language);
        }
        if let Some(agent) = args.user_agent {
            resolver = resolver.with_user_agent(agent);
        }
        if let Some(secs) = args.timeout_secs {
            resolver = resolver.with_timeout(Duration::from_secs(secs));
        }

        Ok(Self { location, resolver })
    }
}

pub(crate) fn run_address(args: AddressArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let resolver = HttpAddressResolver::with_config(config.resolver.clone()).map_err(|source| {
        CliError::BuildClient {
            base_url: config.resolver.base_url.clone(),
            source,
        }
    })?;
    let mut stdout = std::io::stdout().lock();
    run_address_with(config.location, &resolver, &mut stdout)
}

/// Resolve `location` and write the address on its own line.
pub(crate) fn run_address_with(
    location: Location,
    resolver: &dyn AddressResolver,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let address = resolver.reverse_geocode(location);
    writeln!(writer, "{address}").map_err(CliError::WriteOutput)
}
