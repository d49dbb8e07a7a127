//! Config loading, layering, validation, and conversion to template variables.

use super::model::Config;
use super::types::{ConfigOverrides, DOMAIN_NAME_ENV, RECOGNIZED_ENV_VARS, XDS_HOST_ADDRESS_ENV};
use crate::error::{BootstrapError, Result};
use crate::template::{self, DOMAIN_NAME, XDS_HOST_ADDRESS};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

/// `domain_name` lands in a double-quoted YAML scalar and in a certificate
/// path, so whitespace, quotes, backslashes, and slashes are rejected.
static DOMAIN_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[^\s"\\/]+$"#).expect("Invalid domain name regex"));

/// `xds_host_address` lands in an unquoted YAML scalar, so only hostname and
/// IP address characters are allowed, starting and ending alphanumeric.
static HOST_ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9._:-]*[A-Za-z0-9])?$")
        .expect("Invalid host address regex")
});

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            BootstrapError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        // A null document (`~`) means "no options", like an empty file.
        let config: Config = serde_yaml::from_str::<Option<Config>>(yaml)
            .map_err(|e| {
                BootstrapError::UserError(format!("failed to parse config YAML: {}", e))
            })?
            .unwrap_or_default();

        config.validate()?;
        Ok(config)
    }

    /// Build the effective config from every source.
    ///
    /// `env` is the full process environment (or a stand-in for tests); only
    /// the recognized variables are read from it.
    pub fn resolve<I>(
        config_path: Option<&Path>,
        env: I,
        overrides: ConfigOverrides,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = match config_path {
            Some(path) => {
                debug!(path = %path.display(), "loading config file");
                Self::load(path)?
            }
            None => Self::default(),
        };

        config.apply_env(env);
        config.apply_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Overlay recognized environment variables. Empty values count as unset.
    pub fn apply_env<I>(&mut self, env: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in env {
            if value.is_empty() {
                continue;
            }
            match key.as_str() {
                DOMAIN_NAME_ENV => {
                    debug!(variable = DOMAIN_NAME_ENV, "read option from environment");
                    self.domain_name = Some(value);
                }
                XDS_HOST_ADDRESS_ENV => {
                    debug!(variable = XDS_HOST_ADDRESS_ENV, "read option from environment");
                    self.xds_host_address = value;
                }
                _ => {}
            }
        }
    }

    /// Overlay command-line values.
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(domain_name) = overrides.domain_name {
            self.domain_name = Some(domain_name);
        }
        if let Some(xds_host_address) = overrides.xds_host_address {
            self.xds_host_address = xds_host_address;
        }
    }

    /// Validate option values.
    ///
    /// Validation rules:
    /// - `domain_name`, when set, must be a non-empty single token other
    ///   than `.` or `..`, without quotes, backslashes, or slashes
    /// - `xds_host_address` must be a hostname or IP address
    pub fn validate(&self) -> Result<()> {
        if let Some(domain_name) = &self.domain_name {
            validate_domain_name(domain_name)?;
        }
        validate_host_address(&self.xds_host_address)
    }

    /// Convert the config to template variables.
    ///
    /// An unset `domain_name` is left out of the map so the template engine's
    /// missing-value policy decides how to handle it.
    pub fn to_template_vars(&self) -> HashMap<String, String> {
        let mut vars = template::vars([(XDS_HOST_ADDRESS, self.xds_host_address.as_str())]);
        if let Some(domain_name) = &self.domain_name {
            vars.insert(DOMAIN_NAME.to_string(), domain_name.clone());
        }
        vars
    }
}

/// Snapshot the recognized variables from the process environment.
///
/// Variables whose value is not valid UTF-8 are skipped.
pub fn recognized_env() -> Vec<(String, String)> {
    RECOGNIZED_ENV_VARS
        .iter()
        .filter_map(|&name| {
            let value = std::env::var_os(name)?.into_string().ok()?;
            Some((name.to_string(), value))
        })
        .collect()
}

fn validate_domain_name(value: &str) -> Result<()> {
    require_non_empty("domain_name", value)?;
    if value == "." || value == ".." || !DOMAIN_NAME_REGEX.is_match(value) {
        return Err(BootstrapError::UserError(format!(
            "config validation failed: domain_name must be a single path component without whitespace, quotes or backslashes (found '{}')",
            value.escape_debug()
        )));
    }
    Ok(())
}

fn validate_host_address(value: &str) -> Result<()> {
    require_non_empty("xds_host_address", value)?;
    if !HOST_ADDRESS_REGEX.is_match(value) {
        return Err(BootstrapError::UserError(format!(
            "config validation failed: xds_host_address must be a hostname or IP address (found '{}')",
            value.escape_debug()
        )));
    }
    Ok(())
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(BootstrapError::UserError(format!(
            "config validation failed: {} must not be empty",
            field
        )));
    }
    Ok(())
}
