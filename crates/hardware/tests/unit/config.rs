//! # Configuration Tests
//!
//! Defaults, partial JSON documents, and rejection of invalid input.

use simplecpu_core::common::SimError;
use simplecpu_core::config::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.max_cycles, None);
    assert!(config.general.dump_on_halt);
    assert_eq!(config.general.dump_words, 16);
    assert_eq!(config.execution.store_source, StoreSource::Field);
}

#[test]
fn test_empty_document_is_default() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.general.dump_words, 16);
    assert_eq!(config.execution.store_source, StoreSource::Field);
}

#[test]
fn test_partial_general_section() {
    let config = Config::from_json(r#"{"general": {"dump_on_halt": false}}"#).unwrap();
    assert!(!config.general.dump_on_halt);
    assert_eq!(config.general.dump_words, 16);
    assert_eq!(config.general.max_cycles, None);
}

#[test]
fn test_store_source_register() {
    let config = Config::from_json(r#"{"execution": {"store_source": "Register"}}"#).unwrap();
    assert_eq!(config.execution.store_source, StoreSource::Register);
}

#[test]
fn test_unknown_store_source_rejected() {
    let err = Config::from_json(r#"{"execution": {"store_source": "Bus"}}"#).unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
}

#[test]
fn test_malformed_json_rejected() {
    assert!(matches!(
        Config::from_json("{general:"),
        Err(SimError::Config(_))
    ));
}
