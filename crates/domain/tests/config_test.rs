use minidns_domain::config::{ConfigError, LogFormat};
use minidns_domain::{CliOverrides, Config};
use std::io::Write;
use std::net::SocketAddr;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.server.dns_port, 2053);
    assert_eq!(config.server.listen_addr(), "127.0.0.1:2053");
    assert!(config.upstream.resolver.is_none());
    assert_eq!(config.upstream.timeout_ms, 5000);
    assert_eq!(config.local.address, "8.8.8.8");
    assert_eq!(config.local.ttl, 60);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Text);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = Config::from_toml(
        r#"
        [upstream]
        resolver = "1.1.1.1:53"

        [logging]
        format = "json"
        "#,
    )
    .unwrap();

    assert_eq!(config.server.dns_port, 2053);
    assert_eq!(config.upstream.resolver.as_deref(), Some("1.1.1.1:53"));
    assert_eq!(config.upstream.timeout_ms, 5000);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(
        config.upstream.resolver_addr().unwrap(),
        Some("1.1.1.1:53".parse::<SocketAddr>().unwrap())
    );
}

#[test]
fn test_load_from_file_with_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[server]\nbind_address = \"0.0.0.0\"\ndns_port = 5353\n\n[local]\naddress = \"10.0.0.1\"\nttl = 300"
    )
    .unwrap();

    let overrides = CliOverrides {
        dns_port: Some(5454),
        resolver: Some("9.9.9.9:53".to_string()),
        log_level: Some("debug".to_string()),
        ..CliOverrides::default()
    };

    let config = Config::load(file.path().to_str(), overrides).unwrap();

    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.server.dns_port, 5454);
    assert_eq!(config.upstream.resolver.as_deref(), Some("9.9.9.9:53"));
    assert_eq!(config.local.address_octets().unwrap(), [10, 0, 0, 1]);
    assert_eq!(config.local.ttl, 300);
    assert_eq!(config.logging.level, "debug");
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_missing_file() {
    let result = Config::load(Some("/nonexistent/minidns.toml"), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::FileRead(..))));
}

#[test]
fn test_load_invalid_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server\ndns_port = ").unwrap();

    let result = Config::load(file.path().to_str(), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_validate_rejects_port_zero() {
    let mut config = Config::default();
    config.server.dns_port = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_bad_resolver() {
    let mut config = Config::default();
    config.upstream.resolver = Some("dns.google".to_string());
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let mut config = Config::default();
    config.upstream.timeout_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_bad_local_address() {
    let mut config = Config::default();
    config.local.address = "256.1.1.1".to_string();

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("256.1.1.1"));
}
