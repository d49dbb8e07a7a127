//! Command implementation for envoy-template.
//!
//! The tool has a single linear pass:
//!
//! 1. Resolve the options from config file, environment, and flags
//! 2. Pick the output path (explicit `--output`, or derived from the executable)
//! 3. Render the bootstrap template and write it
//! 4. Echo the path and content to stdout unless `--quiet`

use crate::cli::Cli;
use crate::config::{Config, recognized_env};
use crate::error::Result;
use crate::output::{absolute, default_output_path};
use crate::render::{echo, render};
use crate::template::ENVOY_BOOTSTRAP_TEMPLATE;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Run the tool against the process environment and stdout.
pub fn dispatch(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    run(&cli, recognized_env(), &mut stdout.lock())
}

/// Run the tool with an explicit environment and output stream.
pub fn run<I, W>(cli: &Cli, env: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = (String, String)>,
    W: Write,
{
    let config = Config::resolve(cli.config.as_deref(), env, cli.overrides())?;
    debug!(?config, "resolved options");

    let output_path = resolve_output_path(cli)?;
    let artifact = render(
        ENVOY_BOOTSTRAP_TEMPLATE,
        &config.to_template_vars(),
        &output_path,
        cli.missing_policy(),
    )?;

    if !cli.quiet {
        echo(out, &artifact)?;
    }

    Ok(())
}

fn resolve_output_path(cli: &Cli) -> Result<PathBuf> {
    match &cli.output {
        Some(path) => absolute(path),
        None => default_output_path(),
    }
}
