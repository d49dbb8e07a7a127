//! CLI argument parsing for envoy-template.
//!
//! Every flag is optional: with no arguments the tool reads `DOMAIN_NAME`
//! from the environment and writes `envoy.yaml` next to the executable.

use crate::config::ConfigOverrides;
use crate::template::MissingPolicy;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Render the Envoy front-proxy bootstrap configuration.
///
/// Options are read from the environment (`DOMAIN_NAME`, `XDS_HOST_ADDRESS`),
/// an optional YAML config file, and the flags below, in increasing order of
/// precedence.
#[derive(Parser, Debug)]
#[command(name = "envoy-template")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Write the configuration here instead of `envoy.yaml` next to the executable.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// YAML file providing `domain_name` and `xds_host_address`.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Domain served by the proxy (overrides `DOMAIN_NAME`).
    #[arg(long, value_name = "DOMAIN")]
    pub domain_name: Option<String>,

    /// xDS management server address (overrides `XDS_HOST_ADDRESS`).
    #[arg(long, value_name = "ADDRESS")]
    pub xds_host_address: Option<String>,

    /// Render unset placeholders as empty strings instead of failing.
    #[arg(long)]
    pub allow_missing: bool,

    /// Do not echo the rendered configuration to stdout.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Option values given on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            domain_name: self.domain_name.clone(),
            xds_host_address: self.xds_host_address.clone(),
        }
    }

    /// How unset placeholders are handled.
    pub fn missing_policy(&self) -> MissingPolicy {
        if self.allow_missing {
            MissingPolicy::Empty
        } else {
            MissingPolicy::Fail
        }
    }
}
