//! envoy-template: renders the Envoy front-proxy bootstrap configuration.
//!
//! This is the entry point for the `envoy-template` CLI. It parses arguments,
//! installs logging, runs the render pass, and maps errors to exit codes.

mod cli;
mod commands;
mod config;
mod error;
mod exit_codes;
mod fs;
mod logging;
mod output;
mod render;
mod template;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
