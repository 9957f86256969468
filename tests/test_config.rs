use clap::Parser;
use statik::config::Config;

#[test]
fn test_config_parses_positional_port() {
    let cfg = Config::try_parse_from(["statik", "8080"]).unwrap();
    assert_eq!(cfg.port, 8080);
}

#[test]
fn test_config_default_root_is_working_directory() {
    let cfg = Config::try_parse_from(["statik", "8080"]).unwrap();
    assert_eq!(cfg.root, ".");
}

#[test]
fn test_config_custom_root() {
    let cfg = Config::try_parse_from(["statik", "8080", "--root", "/srv/www"]).unwrap();
    assert_eq!(cfg.root, "/srv/www");
}

#[test]
fn test_config_missing_port_is_an_error() {
    assert!(Config::try_parse_from(["statik"]).is_err());
}

#[test]
fn test_config_non_numeric_port_is_an_error() {
    assert!(Config::try_parse_from(["statik", "http"]).is_err());
}

#[test]
fn test_config_usage_errors_take_the_exit_1_path() {
    // `load` maps any parse error onto process exit 1; these are the error
    // values it maps, one per bad-usage shape.
    use clap::error::ErrorKind;

    let missing = Config::try_parse_from(["statik"]).unwrap_err();
    assert_eq!(missing.kind(), ErrorKind::MissingRequiredArgument);

    let non_numeric = Config::try_parse_from(["statik", "http"]).unwrap_err();
    assert_eq!(non_numeric.kind(), ErrorKind::ValueValidation);

    let extra = Config::try_parse_from(["statik", "8080", "extra"]).unwrap_err();
    assert_eq!(extra.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn test_config_addr_binds_all_interfaces() {
    let cfg = Config::try_parse_from(["statik", "8080"]).unwrap();
    assert_eq!(cfg.addr(), "0.0.0.0:8080");
}
