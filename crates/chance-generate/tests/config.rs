use chance_core::pool::POOL_CONFLICT;
use chance_core::{Casing, Error};
use chance_generate::{ChanceConfig, GenerateError};

#[test]
fn parses_full_toml_config() {
    let config = ChanceConfig::from_toml_str(
        r#"
seed = 42

[pool]
custom_set = "xyzXYZ"
casing = "upper"
alpha_only = true
"#,
    )
    .expect("config parses");
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.pool.custom_set, "xyzXYZ");
    assert_eq!(config.pool.casing, Casing::Upper);
    assert!(config.pool.alpha_only);
}

#[test]
fn empty_toml_uses_defaults() {
    let config = ChanceConfig::from_toml_str("").expect("config parses");
    assert_eq!(config, ChanceConfig::default());
}

#[test]
fn rejects_conflicting_pool_filters() {
    let result = ChanceConfig::from_toml_str(
        r#"
[pool]
alpha_only = true
symbol_only = true
"#,
    );
    match result {
        Err(GenerateError::Core(Error::Range(message))) => assert_eq!(message, POOL_CONFLICT),
        other => panic!("expected pool conflict, got {other:?}"),
    }
}

#[test]
fn rejects_unknown_casing() {
    let result = ChanceConfig::from_toml_str("[pool]\ncasing = \"title\"\n");
    assert!(matches!(result, Err(GenerateError::Config(_))));
}

#[test]
fn config_round_trips_through_json() {
    let config = ChanceConfig::with_seed(7);
    let json = serde_json::to_string(&config).expect("serialize config");
    let back: ChanceConfig = serde_json::from_str(&json).expect("deserialize config");
    assert_eq!(back, config);
}
