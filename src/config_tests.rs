use crate::config::Config;
use std::env;
use std::sync::Mutex;
use std::sync::OnceLock;

// Global lock to prevent race conditions when modifying environment variables in tests
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

// env mutation is unsafe in edition 2024; all tests hold ENV_LOCK while doing it
fn set_var(key: &str, value: &str) {
    unsafe { env::set_var(key, value) }
}

fn remove_var(key: &str) {
    unsafe { env::remove_var(key) }
}

#[test]
fn test_config_defaults() {
    let _guard = get_env_lock().lock().unwrap();
    remove_var("API_BASE_URL");
    remove_var("REQUEST_TIMEOUT_SECS");
    remove_var("DEFAULT_AREA_SQFT");
    remove_var("DEFAULT_HORIZON_MONTHS");

    let config = Config::from_env().unwrap();

    assert_eq!(config.api_base_url, "http://127.0.0.1:5000");
    assert_eq!(config.request_timeout_secs, 30);
    assert!((config.default_area_sqft - 1000.0).abs() < f64::EPSILON);
    assert_eq!(config.default_horizon_months, 12);
}

#[test]
fn test_config_overrides() {
    let _guard = get_env_lock().lock().unwrap();
    set_var("API_BASE_URL", "http://prediction.internal:8080/");
    set_var("REQUEST_TIMEOUT_SECS", "5");
    set_var("DEFAULT_HORIZON_MONTHS", "24");

    let config = Config::from_env().unwrap();

    // Trailing slash is stripped so endpoint paths can be appended directly
    assert_eq!(config.api_base_url, "http://prediction.internal:8080");
    assert_eq!(config.request_timeout_secs, 5);
    assert_eq!(config.default_horizon_months, 24);

    // Cleanup
    remove_var("API_BASE_URL");
    remove_var("REQUEST_TIMEOUT_SECS");
    remove_var("DEFAULT_HORIZON_MONTHS");
}

#[test]
fn test_config_rejects_bad_timeout() {
    let _guard = get_env_lock().lock().unwrap();
    set_var("REQUEST_TIMEOUT_SECS", "soon");

    let result = Config::from_env();
    assert!(result.is_err());

    remove_var("REQUEST_TIMEOUT_SECS");
}
