use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("CATALOG_PATH");
    }
}

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_valid_port() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 4000 ")).unwrap(), 4000);
}

#[test]
fn parse_port_rejects_garbage_and_overflow() {
    assert!(matches!(parse_port(Some("http")), Err(ConfigError::InvalidPort(v)) if v == "http"));
    assert!(matches!(parse_port(Some("70000")), Err(ConfigError::InvalidPort(_))));
}

#[test]
fn from_env_uses_defaults_and_overrides() {
    unsafe { clear_server_env() };
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.catalog_path, PathBuf::from(DEFAULT_CATALOG_PATH));

    unsafe {
        std::env::set_var("PORT", "9090");
        std::env::set_var("CATALOG_PATH", "/srv/catalog.json");
    }
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 9090);
    assert_eq!(cfg.catalog_path, PathBuf::from("/srv/catalog.json"));

    unsafe { clear_server_env() };
}

#[test]
fn config_error_display_quotes_value() {
    assert_eq!(ConfigError::InvalidPort("abc".into()).to_string(), "invalid PORT value: \"abc\"");
}
