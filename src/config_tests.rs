use std::collections::HashMap;

use super::*;
use tempfile::tempdir;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn config_defaults_when_missing() {
    let dir = tempdir().expect("temp dir");
    let cfg = HarnessConfig::load(&dir.path().join("missing.toml")).expect("load missing config");
    assert_eq!(cfg, HarnessConfig::default());
    assert_eq!(cfg.iterations, 32);
    assert_eq!(cfg.max_sequence_len, 255);
    assert_eq!(cfg.seed, None);
    assert!(cfg.parallel);
}

#[test]
fn config_parses_partial_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("harness.toml");
    std::fs::write(
        &path,
        r#"
            iterations = 5
            seed = 1234
        "#,
    )
    .expect("write config");

    let cfg = HarnessConfig::load(&path).expect("load config");
    assert_eq!(cfg.iterations, 5);
    assert_eq!(cfg.seed, Some(1234));
    assert_eq!(cfg.max_sequence_len, 255);
    assert!(cfg.parallel);
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("harness.toml");
    std::fs::write(&path, "iteratons = 3\n").expect("write");
    let err = HarnessConfig::load(&path).expect_err("typo must fail");
    assert!(format!("{err:#}").contains("failed to parse config"));
}

#[test]
fn invalid_toml_returns_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("harness.toml");
    std::fs::write(&path, "{{{{not toml!").expect("write");
    assert!(HarnessConfig::load(&path).is_err());
}

#[test]
fn env_overrides_file_values() {
    let mut cfg = HarnessConfig {
        iterations: 5,
        seed: Some(1),
        ..HarnessConfig::default()
    };
    cfg.apply_env_from(lookup(&[(SEED_ENV, "77"), (ITERATIONS_ENV, " 9 ")]))
        .expect("apply env");
    assert_eq!(cfg.seed, Some(77));
    assert_eq!(cfg.iterations, 9);
}

#[test]
fn blank_env_values_are_ignored() {
    let mut cfg = HarnessConfig::default();
    cfg.apply_env_from(lookup(&[(SEED_ENV, "  ")])).expect("apply env");
    assert_eq!(cfg, HarnessConfig::default());
}

#[test]
fn malformed_env_value_is_an_error() {
    let mut cfg = HarnessConfig::default();
    let err = cfg
        .apply_env_from(lookup(&[(ITERATIONS_ENV, "many")]))
        .expect_err("must fail");
    assert!(err.to_string().contains(ITERATIONS_ENV));
}

#[test]
fn cli_override_takes_precedence() {
    let cfg = HarnessConfig {
        seed: Some(1),
        iterations: 2,
        ..HarnessConfig::default()
    }
    .with_overrides(Some(3), None);
    assert_eq!(cfg.seed, Some(3));
    assert_eq!(cfg.iterations, 2);
}

#[test]
fn zero_iterations_is_invalid() {
    let cfg = HarnessConfig::default().with_overrides(None, Some(0));
    assert!(cfg.validate().is_err());
    assert!(HarnessConfig::default().validate().is_ok());
}

#[test]
fn limits_follow_config() {
    let cfg = HarnessConfig {
        max_sequence_len: 4,
        ..HarnessConfig::default()
    };
    assert_eq!(cfg.limits().max_sequence_len, 4);
}
