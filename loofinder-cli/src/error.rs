//! Error types emitted by the loofinder CLI.

use std::sync::Arc;

use loofinder_core::DiscoveryError;
use loofinder_data::ClientBuildError;
use thiserror::Error;

/// Errors emitted by the loofinder CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name of the option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// Constructing an HTTP adapter failed.
    #[error("failed to build client for {base_url:?}: {source}")]
    BuildClient {
        /// Endpoint the adapter was configured with.
        base_url: String,
        /// Underlying construction failure.
        #[source]
        source: ClientBuildError,
    },
    /// Toilet discovery failed.
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
    /// Serialising the discovered toilets failed.
    #[error("failed to serialise toilets: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
