//! Config struct definition and default implementation.

use super::types::*;
use serde::Deserialize;

/// Options consumed by the bootstrap template.
///
/// As a YAML file:
///
/// ```yaml
/// domain_name: example.com
/// xds_host_address: 10.0.0.12
/// ```
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Public domain of the front proxy (`DOMAIN_NAME`).
    ///
    /// Used as the HTTP virtual-host domain and to locate the Let's Encrypt
    /// certificate chain and private key. Required unless missing values are
    /// allowed to render empty.
    #[serde(default)]
    pub domain_name: Option<String>,

    /// Address of the xDS management server (`XDS_HOST_ADDRESS`).
    #[serde(default = "default_xds_host_address")]
    pub xds_host_address: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain_name: None,
            xds_host_address: default_xds_host_address(),
        }
    }
}
