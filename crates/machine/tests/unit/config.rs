//! # Configuration Tests
//!
//! Defaults and JSON deserialization for the run configuration.

use hx8_core::Config;

#[test]
fn test_default_has_step_ceiling_and_no_tracing() {
    let cfg = Config::default();
    assert!(!cfg.trace);
    assert!(!cfg.dump_memory);
    assert!(cfg.max_steps.is_some());
}

#[test]
fn test_partial_json_keeps_defaults() {
    let cfg = Config::from_json(r#"{"trace": true}"#).unwrap();
    assert!(cfg.trace);
    assert_eq!(cfg.max_steps, Config::default().max_steps);
}

#[test]
fn test_full_json_overrides_everything() {
    let cfg = Config::from_json(r#"{"trace": true, "max_steps": 42, "dump_memory": true}"#)
        .unwrap();
    assert!(cfg.trace);
    assert!(cfg.dump_memory);
    assert_eq!(cfg.max_steps, Some(42));
}

#[test]
fn test_malformed_json_is_rejected() {
    assert!(Config::from_json("{").is_err());
}
