use helpkit::logging::parse_level_str;
use tracing::Level;

#[test]
fn env_level_names_are_case_insensitive() {
    assert_eq!(parse_level_str("DEBUG"), Some(Level::DEBUG));
    assert_eq!(parse_level_str(" trace "), Some(Level::TRACE));
    assert_eq!(parse_level_str("warning"), Some(Level::WARN));
}

#[test]
fn unknown_env_level_is_ignored() {
    assert_eq!(parse_level_str("verbose"), None);
    assert_eq!(parse_level_str(""), None);
}
