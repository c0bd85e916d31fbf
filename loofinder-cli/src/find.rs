//! `find` command: discover toilets around a coordinate.

use std::io::Write;
use std::time::Duration;

use clap::Parser;
use log::debug;
use loofinder_core::{AddressResolver, Location, ToiletFinder, ToiletRecord};
use loofinder_data::nominatim::{HttpAddressResolver, HttpAddressResolverConfig};
use loofinder_data::overpass::{HttpToiletFinder, HttpToiletFinderConfig};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_LATITUDE, ARG_LONGITUDE, ARG_NOMINATIM_URL, ARG_OVERPASS_URL, ARG_RESOLVE_ADDRESSES,
    ARG_TIMEOUT_SECS, ARG_USER_AGENT, CliError, CoordinateFields, ENV_FIND_LATITUDE,
    ENV_FIND_LONGITUDE, require_location,
};

/// CLI arguments for the `find` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "find",
    long_about = "Query an Overpass interpreter for public toilets within \
                 roughly five kilometres of a coordinate and print them as \
                 JSON. Options can come from CLI flags, configuration files, \
                 or environment variables.",
    about = "List toilets around a coordinate",
    allow_negative_numbers = true
)]
#[ortho_config(prefix = "LOOFINDER")]
pub(crate) struct FindArgs {
    /// Latitude of the search centre in decimal degrees.
    #[arg(long = ARG_LATITUDE, value_name = "degrees")]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Longitude of the search centre in decimal degrees.
    #[arg(long = ARG_LONGITUDE, value_name = "degrees")]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Overpass interpreter endpoint.
    #[arg(long = ARG_OVERPASS_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) overpass_url: Option<String>,
    /// Nominatim reverse endpoint used with `--resolve-addresses`.
    #[arg(long = ARG_NOMINATIM_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) nominatim_url: Option<String>,
    /// User agent sent with every request.
    #[arg(long = ARG_USER_AGENT, value_name = "agent")]
    #[serde(default)]
    pub(crate) user_agent: Option<String>,
    /// Request timeout in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "seconds")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    /// Reverse-geocode toilets that carry no address tags.
    #[arg(
        long = ARG_RESOLVE_ADDRESSES,
        value_name = "bool",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) resolve_addresses: Option<bool>,
}

impl FindArgs {
    pub(crate) fn into_config(self) -> Result<FindConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        FindConfig::try_from(merged)
    }
}

/// Resolved `find` command configuration.
#[derive(Debug, Clone)]
pub(crate) struct FindConfig {
    pub(crate) location: Location,
    pub(crate) finder: HttpToiletFinderConfig,
    pub(crate) resolver: HttpAddressResolverConfig,
    pub(crate) resolve_addresses: bool,
}

impl TryFrom<FindArgs> for FindConfig {
    type Error = CliError;

    fn try_from(args: FindArgs) -> Result<Self, Self::Error> {
        let location = require_location(
            args.latitude,
            args.longitude,
            &CoordinateFields {
                latitude_env: ENV_FIND_LATITUDE,
                longitude_env: ENV_FIND_LONGITUDE,
            },
        )?;

        let mut finder = args
            .overpass_url
            .map_or_else(HttpToiletFinderConfig::default, HttpToiletFinderConfig::new);
        let mut resolver = args
            .nominatim_url
            .map_or_else(HttpAddressResolverConfig::default, HttpAddressResolverConfig::new);
        if let Some(agent) = args.user_agent {
            finder = finder.with_user_agent(agent.clone());
            resolver = resolver.with_user_agent(agent);
        }
        if let Some(secs) = args.timeout_secs {
            finder = finder.with_timeout(Duration::from_secs(secs));
            resolver = resolver.with_timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            location,
            finder,
            resolver,
            resolve_addresses: args.resolve_addresses.unwrap_or(false),
        })
    }
}

/// A discovered toilet as printed by `find`.
#[derive(Debug, Serialize)]
pub(crate) struct FoundToilet<'a> {
    #[serde(flatten)]
    record: &'a ToiletRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    resolved_address: Option<String>,
}

pub(crate) fn run_find(args: FindArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let finder = HttpToiletFinder::with_config(config.finder.clone()).map_err(|source| {
        CliError::BuildClient {
            base_url: config.finder.base_url.clone(),
            source,
        }
    })?;
    let resolver = if config.resolve_addresses {
        Some(
            HttpAddressResolver::with_config(config.resolver.clone()).map_err(|source| {
                CliError::BuildClient {
                    base_url: config.resolver.base_url.clone(),
                    source,
                }
            })?,
        )
    } else {
        None
    };
    let mut stdout = std::io::stdout().lock();
    run_find_with(
        config.location,
        &finder,
        resolver.as_ref().map(|value| value as &dyn AddressResolver),
        &mut stdout,
    )
}

/// Discover toilets and write them as pretty JSON.
///
/// When `resolver` is given, records without address tags gain a
/// `resolved_address` field.
pub(crate) fn run_find_with(
    location: Location,
    finder: &dyn ToiletFinder,
    resolver: Option<&dyn AddressResolver>,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let records = finder.find_toilets(location)?;
    debug!("Found {} toilets", records.len());
    let found: Vec<FoundToilet<'_>> = records
        .iter()
        .map(|record| FoundToilet {
            record,
            resolved_address: resolver
                .filter(|_| record.needs_address_lookup())
                .map(|lookup| lookup.reverse_geocode(record.location)),
        })
        .collect();
    write_found(writer, &found)
}

fn write_found(writer: &mut dyn Write, found: &[FoundToilet<'_>]) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(found).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<FindConfig, CliError> {
    let merged = FindArgs::merge_from_layers(layers).map_err(CliError::from)?;
    FindConfig::try_from(merged)
}
