use boiler_core::types::AppConfig;
use tempfile::TempDir;

/// Missing config file means defaults, not an error.
#[test]
fn test_missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();

    let config = AppConfig::load(&AppConfig::path(dir.path())).unwrap();

    assert_eq!(config.search.page_size.get(), 12);
    assert_eq!(config.search.highlight_pre_tag, "<mark>");
    assert_eq!(config.account.min_password_length, 10);
    assert_eq!(config.account.code_length, 6);
    assert_eq!(config.account.email_domain, "purdue.edu");
    assert_eq!(config.endpoints.home_backend, "http://localhost:8080/home");
    assert_eq!(config.reviews.max_thumbs, 20);
    assert_eq!(config.limits.auth_cooldown_ms, 500);
}

/// Values written by `save` come back through `load`.
#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = AppConfig::path(dir.path());
    let mut config = AppConfig::default();
    config.reviews.max_thumbs = 5;
    config.endpoints.meili_key = Some("search-only".to_string());

    config.save(&path).unwrap();
    let loaded = AppConfig::load(&path).unwrap();

    assert_eq!(loaded.reviews.max_thumbs, 5);
    assert_eq!(loaded.endpoints.meili_key.as_deref(), Some("search-only"));
}

/// Sections left out of the file keep their defaults.
#[test]
fn test_partial_file() {
    let dir = TempDir::new().unwrap();
    let path = AppConfig::path(dir.path());
    std::fs::write(&path, "[search]\npage_size = 24\n").unwrap();

    let config = AppConfig::load(&path).unwrap();

    assert_eq!(config.search.page_size.get(), 24);
    assert_eq!(config.search.highlight_post_tag, "</mark>");
    assert_eq!(config.reviews.max_chars, 350);
}

/// A zero page size is rejected at parse time.
#[test]
fn test_zero_page_size_rejected() {
    let dir = TempDir::new().unwrap();
    let path = AppConfig::path(dir.path());
    std::fs::write(&path, "[search]\npage_size = 0\n").unwrap();

    assert!(AppConfig::load(&path).is_err());
}

/// Inconsistent bounds are reported and repaired with defaults.
#[test]
fn test_invalid_values_fall_back() {
    let mut config = AppConfig::default();
    config.account.min_password_length = 0;
    config.reviews.min_chars = 400;
    config.reviews.max_thumbs = 0;

    assert_eq!(config.validate().len(), 3);

    let repaired = config.with_defaults_for_invalid();

    assert!(repaired.validate().is_empty());
    assert_eq!(repaired.account.min_password_length, 10);
    assert_eq!(repaired.reviews.min_chars, 10);
    assert_eq!(repaired.reviews.max_chars, 350);
    assert_eq!(repaired.reviews.max_thumbs, 20);
}
