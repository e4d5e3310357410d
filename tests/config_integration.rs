use chatus_shell::config::{AppConfig, LogFormat};
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;

const ARGS: [&str; 1] = ["chatus-shell"];

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("CHATUS_SERVER__PORT");
        env::remove_var("CHATUS_THEME__BAR_HEIGHT");
        env::remove_var("CHATUS_BREAKPOINTS__SMALL");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("HOST");
        env::remove_var("LOG_FORMAT");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args(ARGS).expect("defaults should load");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.theme.bar_height, 50);
    assert_eq!(config.theme.drawer_width, 240);
    assert_eq!(config.breakpoints.small, 600);
    assert_eq!(config.shell.placeholder_rows, 100);
    assert_eq!(config.log.format, LogFormat::Pretty);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("CHATUS_SERVER__PORT", "9090");
        env::set_var("CHATUS_THEME__BAR_HEIGHT", "64");
    }

    let config = AppConfig::load_from_args(ARGS).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.theme.bar_height, 64);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("CHATUS_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args(["chatus-shell", "--port", "4242", "--log-format", "json"])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 4242);
    assert_eq!(config.log.format, LogFormat::Json);

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    write!(
        file,
        r#"
server:
  port: 7070
theme:
  drawer_width: 320
breakpoints:
  small: 768
"#
    )
    .expect("Failed to write temp config");

    let path = file.path().to_string_lossy().to_string();
    let config = AppConfig::load_from_args(["chatus-shell", "--config", path.as_str()])
        .expect("Failed to load config from file");

    assert_eq!(config.server.port, 7070);
    assert_eq!(config.theme.drawer_width, 320);
    assert_eq!(config.theme.bar_height, 50);
    assert_eq!(config.breakpoints.small, 768);
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    let config_content = r#"
server:
  port: 6060
    "#;
    let cwd_path = "config.yaml";
    fs::write(cwd_path, config_content).expect("Failed to write ./config.yaml");

    let result = AppConfig::load_from_args(ARGS);
    fs::remove_file(cwd_path).unwrap();

    assert_eq!(result.expect("Failed to load config").server.port, 6060);
}

#[test]
#[serial]
fn test_rejects_closed_width_wider_than_drawer() {
    clear_env_vars();

    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    write!(
        file,
        r#"
theme:
  drawer_width: 100
  drawer_closed_width: 200
"#
    )
    .expect("Failed to write temp config");

    let path = file.path().to_string_lossy().to_string();
    let err = AppConfig::load_from_args(["chatus-shell", "--config", path.as_str()])
        .expect_err("invalid theme should be rejected");
    assert!(err.to_string().contains("drawer_closed_width"));
}
