use geocomply_core::errors::*;

#[test]
fn glossary_unknown_canonical_carries_type_and_name() {
    let err = GlossaryError::UnknownCanonical {
        entity_type: "location".into(),
        name: "Atlantis".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("location"));
    assert!(msg.contains("Atlantis"));
}

#[test]
fn oracle_timeout_carries_duration() {
    let err = OracleError::Timeout { timeout_ms: 1500 };
    assert!(err.to_string().contains("1500"));
}

#[test]
fn config_validation_failed_carries_field() {
    let err = ConfigError::ValidationFailed {
        field: "thresholds.legal_compliance".into(),
        message: "out of range".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("thresholds.legal_compliance"));
    assert!(msg.contains("out of range"));
}

#[test]
fn subsystem_errors_convert_into_top_level() {
    let err: GeoComplyError = OracleError::Cancelled.into();
    assert!(matches!(err, GeoComplyError::Oracle(OracleError::Cancelled)));
    assert!(err.to_string().contains("cancelled"));

    let err: GeoComplyError = ExtractionError::Failed {
        reason: "tokenizer crashed".into(),
    }
    .into();
    assert!(err.to_string().contains("tokenizer crashed"));
}

#[test]
fn error_codes_are_stable() {
    assert_eq!(OracleError::Timeout { timeout_ms: 1 }.error_code(), "ORACLE_TIMEOUT");
    assert_eq!(OracleError::Cancelled.error_code(), "CANCELLED");
    let wrapped: GeoComplyError = GlossaryError::LockPoisoned.into();
    assert_eq!(wrapped.error_code(), "GLOSSARY_ERROR");
}
