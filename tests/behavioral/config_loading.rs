// ABOUTME: Behavioral tests for configuration loading
// Verifies defaults and that a config file overrides only what it names

use std::time::Duration;

use gh_pair::app::SessionPolicy;
use gh_pair::config::AppConfig;
use tempfile::TempDir;

#[test]
fn test_default_config_matches_session_policy() {
    let config = AppConfig::default();
    let policy = SessionPolicy::from_config(&config);

    assert_eq!(policy.debounce_delay, Duration::from_millis(300));
    assert_eq!(policy.min_query_len, 2);
    assert_eq!(policy.char_limit, 50);
}

#[test]
fn test_file_overrides_feed_the_session() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[search]\ndebounce_ms = 120\nmin_query_len = 3\n\n[provider]\ntimeout_secs = 15\n",
    )
    .unwrap();

    let mut config = AppConfig::default();
    config.merge(AppConfig::load_file(&path).unwrap().unwrap());
    let policy = SessionPolicy::from_config(&config);

    assert_eq!(policy.debounce_delay, Duration::from_millis(120));
    assert_eq!(policy.min_query_len, 3);
    assert_eq!(config.command_timeout(), Some(Duration::from_secs(15)));
    assert_eq!(config.provider.program, "gh");
}
