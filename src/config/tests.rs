//! Tests for config functionality.

use crate::config::types::DEFAULT_XDS_HOST_ADDRESS;
use crate::config::{Config, ConfigOverrides};
use crate::error::BootstrapError;
use crate::template::{DOMAIN_NAME, XDS_HOST_ADDRESS};
use std::fs;
use tempfile::TempDir;

fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.domain_name, None);
    assert_eq!(config.xds_host_address, DEFAULT_XDS_HOST_ADDRESS);
    assert_eq!(config.xds_host_address, "REPlACE_HOSTADDRESS");
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
domain_name: example.com
xds_host_address: 10.0.0.12
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.domain_name.as_deref(), Some("example.com"));
    assert_eq!(config.xds_host_address, "10.0.0.12");
}

#[test]
fn test_parse_yaml_ignores_unknown_fields() {
    let yaml = r#"
domain_name: example.com
future_option: true
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.domain_name.as_deref(), Some("example.com"));
    assert_eq!(config.xds_host_address, DEFAULT_XDS_HOST_ADDRESS);
}

#[test]
fn test_parse_null_document_uses_defaults() {
    assert_eq!(Config::from_yaml("~\n").unwrap(), Config::default());
    assert_eq!(Config::from_yaml("null").unwrap(), Config::default());
    assert_eq!(Config::from_yaml("# nothing set\n").unwrap(), Config::default());
}

#[test]
fn test_parse_invalid_yaml() {
    let err = Config::from_yaml("domain_name: [unterminated").unwrap_err();
    assert!(matches!(err, BootstrapError::UserError(_)));
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_yaml_values_are_validated() {
    let err = Config::from_yaml("domain_name: \"two words\"").unwrap_err();
    assert!(err.to_string().contains("domain_name"));
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load(temp_dir.path().join("missing.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_env_sets_recognized_options() {
    let mut config = Config::default();
    config.apply_env(env(&[
        ("DOMAIN_NAME", "example.com"),
        ("XDS_HOST_ADDRESS", "172.17.0.1"),
    ]));

    assert_eq!(config.domain_name.as_deref(), Some("example.com"));
    assert_eq!(config.xds_host_address, "172.17.0.1");
}

#[test]
fn test_env_ignores_unrecognized_variables() {
    let mut config = Config::default();
    config.apply_env(env(&[
        ("HOME", "/root"),
        ("PATH", "/usr/bin:/bin"),
        ("domain_name", "lowercase.example.com"),
    ]));

    assert_eq!(config, Config::default());
}

#[test]
fn test_env_empty_value_counts_as_unset() {
    let mut config = Config::default();
    config.apply_env(env(&[("DOMAIN_NAME", ""), ("XDS_HOST_ADDRESS", "")]));

    assert_eq!(config, Config::default());
}

#[test]
fn test_resolve_precedence() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bootstrap.yaml");
    fs::write(
        &path,
        "domain_name: file.example.com\nxds_host_address: 10.0.0.1\n",
    )
    .unwrap();

    // File only
    let config =
        Config::resolve(Some(path.as_path()), env(&[]), ConfigOverrides::default()).unwrap();
    assert_eq!(config.domain_name.as_deref(), Some("file.example.com"));
    assert_eq!(config.xds_host_address, "10.0.0.1");

    // Environment beats file
    let config = Config::resolve(
        Some(path.as_path()),
        env(&[("DOMAIN_NAME", "env.example.com")]),
        ConfigOverrides::default(),
    )
    .unwrap();
    assert_eq!(config.domain_name.as_deref(), Some("env.example.com"));
    assert_eq!(config.xds_host_address, "10.0.0.1");

    // Command line beats environment
    let config = Config::resolve(
        Some(path.as_path()),
        env(&[("DOMAIN_NAME", "env.example.com")]),
        ConfigOverrides {
            domain_name: Some("cli.example.com".to_string()),
            xds_host_address: Some("10.0.0.2".to_string()),
        },
    )
    .unwrap();
    assert_eq!(config.domain_name.as_deref(), Some("cli.example.com"));
    assert_eq!(config.xds_host_address, "10.0.0.2");
}

#[test]
fn test_resolve_rejects_invalid_override() {
    let err = Config::resolve(
        None,
        env(&[]),
        ConfigOverrides {
            domain_name: Some("example.com\"\ninjected: true".to_string()),
            xds_host_address: None,
        },
    )
    .unwrap_err();

    assert!(matches!(err, BootstrapError::UserError(_)));
    assert!(err.to_string().contains("domain_name"));
}

#[test]
fn test_validate_rejects_empty_and_path_values() {
    let config = Config {
        domain_name: Some(String::new()),
        ..Config::default()
    };
    assert!(config.validate().is_err());

    let config = Config {
        domain_name: Some("../etc".to_string()),
        ..Config::default()
    };
    assert!(config.validate().is_err());

    let config = Config {
        xds_host_address: String::new(),
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_dot_segments_as_domain() {
    for domain in [".", ".."] {
        let config = Config {
            domain_name: Some(domain.to_string()),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, BootstrapError::UserError(_)), "{}", domain);
    }

    let config = Config {
        domain_name: Some("..example.com".to_string()),
        ..Config::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_resolve_rejects_yaml_syntax_in_host_address() {
    for address in ["*x", "{a:b}", "[x]", "#c", "&anchor", "host:", "a: b", "-x", "!tag"] {
        let err = Config::resolve(
            None,
            env(&[("DOMAIN_NAME", "example.com"), ("XDS_HOST_ADDRESS", address)]),
            ConfigOverrides::default(),
        )
        .unwrap_err();

        assert!(matches!(err, BootstrapError::UserError(_)), "{}", address);
        assert!(err.to_string().contains("xds_host_address"), "{}", address);
    }
}

#[test]
fn test_host_address_accepts_hostnames_and_ips() {
    for address in [
        "xds.internal",
        "10.0.0.12",
        "fd00::1",
        "control-plane-0",
        DEFAULT_XDS_HOST_ADDRESS,
    ] {
        let config = Config {
            xds_host_address: address.to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_ok(), "{}", address);
    }
}

#[test]
fn test_validate_accepts_wildcard_and_ip_values() {
    let config = Config {
        domain_name: Some("*.example.com".to_string()),
        xds_host_address: "192.168.1.10".to_string(),
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_template_vars_only_contain_known_options() {
    let config = Config {
        domain_name: Some("example.com".to_string()),
        ..Config::default()
    };
    let vars = config.to_template_vars();

    assert_eq!(vars.len(), 2);
    assert_eq!(vars.get(DOMAIN_NAME).map(String::as_str), Some("example.com"));
    assert_eq!(
        vars.get(XDS_HOST_ADDRESS).map(String::as_str),
        Some(DEFAULT_XDS_HOST_ADDRESS)
    );
}

#[test]
fn test_template_vars_omit_unset_domain() {
    let vars = Config::default().to_template_vars();
    assert!(!vars.contains_key(DOMAIN_NAME));
}

#[test]
fn test_recognized_env_only_reads_known_names() {
    for (name, _) in crate::config::recognized_env() {
        assert!(crate::config::RECOGNIZED_ENV_VARS.contains(&name.as_str()));
    }
}
