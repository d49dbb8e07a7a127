//! Option names, defaults, and override types for [`super::Config`].

/// Environment variable naming the domain served by the front proxy.
pub const DOMAIN_NAME_ENV: &str = "DOMAIN_NAME";

/// Environment variable naming the xDS management server address.
pub const XDS_HOST_ADDRESS_ENV: &str = "XDS_HOST_ADDRESS";

/// Every environment variable the renderer reads. Anything else is ignored.
pub const RECOGNIZED_ENV_VARS: &[&str] = &[DOMAIN_NAME_ENV, XDS_HOST_ADDRESS_ENV];

/// Marker left in place of the xDS host when no address is configured.
///
/// Container start-up scripts rewrite this token after rendering, so the
/// default output stays compatible with them.
pub const DEFAULT_XDS_HOST_ADDRESS: &str = "REPlACE_HOSTADDRESS";

pub fn default_xds_host_address() -> String {
    DEFAULT_XDS_HOST_ADDRESS.to_string()
}

/// Values supplied on the command line. `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub domain_name: Option<String>,
    pub xds_host_address: Option<String>,
}
