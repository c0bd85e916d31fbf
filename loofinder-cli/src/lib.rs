//! Command-line interface for finding nearby public toilets.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use loofinder_core::Location;

mod address;
mod error;
mod find;

pub use error::CliError;

use address::AddressArgs;
use find::FindArgs;

const ARG_LATITUDE: &str = "latitude";
const ARG_LONGITUDE: &str = "longitude";
const ARG_OVERPASS_URL: &str = "overpass-url";
const ARG_NOMINATIM_URL: &str = "nominatim-url";
const ARG_USER_AGENT: &str = "user-agent";
const ARG_TIMEOUT_SECS: &str = "timeout-secs";
const ARG_ACCEPT_LANGUAGE: &str = "accept-language";
const ARG_RESOLVE_ADDRESSES: &str = "resolve-addresses";
const ENV_FIND_LATITUDE: &str = "LOOFINDER_CMDS_FIND_LATITUDE";
const ENV_FIND_LONGITUDE: &str = "LOOFINDER_CMDS_FIND_LONGITUDE";
const ENV_ADDRESS_LATITUDE: &str = "LOOFINDER_CMDS_ADDRESS_LATITUDE";
const ENV_ADDRESS_LONGITUDE: &str = "LOOFINDER_CMDS_ADDRESS_LONGITUDE";

/// Run the loofinder CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments or configuration are invalid, a client
/// cannot be built, discovery fails, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Find(args) => find::run_find(args),
        Command::Address(args) => address::run_address(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "loofinder",
    about = "Find public toilets near a coordinate using OpenStreetMap data",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List toilets around a coordinate.
    Find(FindArgs),
    /// Reverse-geocode a coordinate into a display address.
    Address(AddressArgs),
}

/// Coordinate field names used when reporting a missing value.
struct CoordinateFields {
    latitude_env: &'static str,
    longitude_env: &'static str,
}

fn require_location(
    latitude: Option<f64>,
    longitude: Option<f64>,
    fields: &CoordinateFields,
) -> Result<Location, CliError> {
    Ok(Location::new(
        latitude.ok_or(CliError::MissingArgument {
            field: ARG_LATITUDE,
            env: fields.latitude_env,
        })?,
        longitude.ok_or(CliError::MissingArgument {
            field: ARG_LONGITUDE,
            env: fields.longitude_env,
        })?,
    ))
}

#[cfg(test)]
mod tests;
