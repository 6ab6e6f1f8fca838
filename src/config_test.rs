use super::*;

#[test]
fn defaults_match_hook_constants() {
    let config = BridgeConfig::default();
    assert_eq!(config.storage_key, "word_bump_word");
    assert!(config.position.enable_high_accuracy);
    assert_eq!(config.position.timeout_ms, 10_000);
    assert_eq!(config.position.maximum_age_ms, 300_000);
}

#[test]
fn from_json_empty_object_yields_defaults() {
    let config = BridgeConfig::from_json("{}").unwrap();
    assert_eq!(config, BridgeConfig::default());
}

#[test]
fn from_json_merges_partial_overrides() {
    let config = BridgeConfig::from_json(r#"{"storage_key":"other","position":{"timeout_ms":500}}"#).unwrap();
    assert_eq!(config.storage_key, "other");
    assert_eq!(config.position.timeout_ms, 500);
    assert_eq!(config.position.maximum_age_ms, DEFAULT_LOCATION_MAXIMUM_AGE_MS);
    assert!(config.position.enable_high_accuracy);
}

#[test]
fn from_json_rejects_mistyped_fields() {
    let err = BridgeConfig::from_json(r#"{"storage_key":42}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid bridge config"));
}
