//! Tests for command-line parsing.

use clap::Parser;
use istanbul_churches::config::{LogFormat, LogLevel, DEFAULT_PORT};
use istanbul_churches::{Config, Opt};
use std::path::PathBuf;

#[test]
fn test_cli_defaults() {
    let opt = Opt::try_parse_from(["istanbul_churches"]).expect("Should parse without arguments");
    assert_eq!(opt.port, DEFAULT_PORT);
    assert!(!opt.no_browser);
    assert!(!opt.no_serve);
    assert!(!opt.with_buildings);
    assert!(!opt.with_analysis);
    assert!(!opt.quiet);
    assert_eq!(opt.output_dir, PathBuf::from("."));
    assert_eq!(opt.timeout_seconds, 30);
    // LogLevel doesn't implement PartialEq, so we compare via conversion
    assert_eq!(
        log::LevelFilter::from(opt.log_level.clone()),
        log::LevelFilter::from(LogLevel::Info)
    );
    match opt.log_format {
        LogFormat::Plain => {}
        _ => panic!("Should be Plain format"),
    }
}

#[test]
fn test_cli_all_flags() {
    let args = vec![
        "istanbul_churches",
        "--port",
        "9000",
        "--no-browser",
        "--no-serve",
        "--with-buildings",
        "--with-analysis",
        "--quiet",
        "--output-dir",
        "maps",
        "--overpass-url",
        "http://localhost:12345/api/interpreter",
        "--log-format",
        "json",
    ];
    let config = Config::from(Opt::try_parse_from(args).expect("Should parse flags"));
    assert_eq!(config.port, 9000);
    assert!(config.no_browser);
    assert!(config.no_serve);
    assert!(config.with_buildings);
    assert!(config.with_analysis);
    assert!(config.quiet);
    assert_eq!(config.output_dir, PathBuf::from("maps"));
    assert_eq!(config.overpass_url, "http://localhost:12345/api/interpreter");
    match config.log_format {
        LogFormat::Json => {}
        _ => panic!("Should be Json format"),
    }
}

#[test]
fn test_cli_short_flags() {
    let opt = Opt::try_parse_from(["istanbul_churches", "-p", "8181", "-q"])
        .expect("Should parse short flags");
    assert_eq!(opt.port, 8181);
    assert!(opt.quiet);
}

#[test]
fn test_quiet_caps_log_level() {
    let opt = Opt::try_parse_from(["istanbul_churches", "-q", "--log-level", "debug"])
        .expect("Should parse");
    let config = Config::from(opt);
    assert_eq!(config.effective_log_level(), log::LevelFilter::Warn);

    let opt =
        Opt::try_parse_from(["istanbul_churches", "--log-level", "debug"]).expect("Should parse");
    assert_eq!(
        Config::from(opt).effective_log_level(),
        log::LevelFilter::Debug
    );
}

#[test]
fn test_cli_rejects_invalid_port() {
    assert!(Opt::try_parse_from(["istanbul_churches", "--port", "70000"]).is_err());
    assert!(Opt::try_parse_from(["istanbul_churches", "--port", "http"]).is_err());
}

#[test]
fn test_cli_rejects_unknown_log_level() {
    assert!(Opt::try_parse_from(["istanbul_churches", "--log-level", "loud"]).is_err());
}
