//! Logging helper tests

use crosscut_infrastructure::logging::parse_log_level;
use tracing::Level;

#[test]
fn known_levels_parse() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
}

#[test]
fn parsing_is_case_insensitive() {
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("Warn").unwrap(), Level::WARN);
}

#[test]
fn unknown_level_is_rejected() {
    assert!(parse_log_level("verbose").is_err());
    assert!(parse_log_level("").is_err());
}
