use std::{collections::HashMap, time::Duration};

use rstest::rstest;
use synapse_backend::config::{
    ConfigError, DEFAULT_OLLAMA_BASE_URL, MAX_SEED_OFFSET_HOURS, Settings,
};

fn settings_from(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    Settings::from_lookup(|name| vars.get(name).cloned())
}

#[test]
fn test_defaults_without_environment() {
    let settings = settings_from(&[]).expect("Defaults should always load");
    assert_eq!(settings.ollama_base_url, DEFAULT_OLLAMA_BASE_URL);
    assert_eq!(settings.environment, "development");
    assert_eq!(settings.data_refresh_seconds, 60);
    assert_eq!(settings.seed_offset_hours, 0);
    assert_eq!(settings.upstream_timeout, Duration::from_secs(30));
    assert!(settings.allows_any_origin());
}

#[test]
fn test_reads_overrides() {
    let settings = settings_from(&[
        ("ENVIRONMENT", "production"),
        ("OLLAMA_BASE_URL", "http://gpu-box:11434/"),
        ("DATA_REFRESH_SECONDS", "15"),
        ("DATA_SEED_OFFSET_HOURS", "-3"),
        ("OLLAMA_TIMEOUT", "5"),
        (
            "CORS_ALLOW_ORIGINS",
            "http://localhost:5173, https://dash.example.com,",
        ),
    ])
    .expect("Valid overrides should load");

    assert_eq!(settings.environment, "production");
    assert_eq!(settings.ollama_base_url, "http://gpu-box:11434/");
    assert_eq!(settings.data_refresh_seconds, 15);
    assert_eq!(settings.seed_offset_hours, -3);
    assert_eq!(settings.upstream_timeout, Duration::from_secs(5));
    assert_eq!(
        settings.allowed_origins,
        vec!["http://localhost:5173", "https://dash.example.com"]
    );
    assert!(!settings.allows_any_origin());
}

#[test]
fn test_blank_values_fall_back_to_defaults() {
    let settings = settings_from(&[("OLLAMA_BASE_URL", "  "), ("CORS_ALLOW_ORIGINS", " , ")])
        .expect("Blank values should be ignored");
    assert_eq!(settings.ollama_base_url, DEFAULT_OLLAMA_BASE_URL);
    assert!(settings.allows_any_origin());
}

#[test]
fn test_rejects_non_numeric_refresh_interval() {
    let err = settings_from(&[("DATA_REFRESH_SECONDS", "soon")])
        .expect_err("A non-numeric interval should be rejected");
    assert!(matches!(
        err,
        ConfigError::InvalidNumber {
            name: "DATA_REFRESH_SECONDS",
            ..
        }
    ));
}

#[rstest]
#[case::far_future("3000000000", 3_000_000_000)]
#[case::far_past("-3000000000", -3_000_000_000)]
#[case::i64_max("9223372036854775807", i64::MAX)]
fn test_rejects_out_of_range_seed_offset(#[case] raw: &str, #[case] expected: i64) {
    let err = settings_from(&[("DATA_SEED_OFFSET_HOURS", raw)])
        .expect_err("An offset beyond the supported range should be rejected");
    assert!(matches!(
        err,
        ConfigError::OutOfRange {
            name: "DATA_SEED_OFFSET_HOURS",
            value,
            max: MAX_SEED_OFFSET_HOURS,
        } if value == expected
    ));
}

#[test]
fn test_accepts_seed_offset_at_the_limit() {
    let limit = MAX_SEED_OFFSET_HOURS.to_string();
    let settings = settings_from(&[("DATA_SEED_OFFSET_HOURS", &limit)])
        .expect("The limit itself should be accepted");
    assert_eq!(settings.seed_offset_hours, MAX_SEED_OFFSET_HOURS);
}
