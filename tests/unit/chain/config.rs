use super::*;

#[test]
fn defaults_fill_in_missing_fields() {
    let cfg = ChainConfig::from_json_str(r#"{"effects": [{"kind": "strobe"}]}"#).unwrap();
    assert_eq!(cfg.global_intensity, 1.0);
    assert_eq!(cfg.effects.len(), 1);
    assert_eq!(cfg.effects[0].intensity, 1.0);
    assert!(cfg.effects[0].params.is_null());
}

#[test]
fn full_document_is_parsed() {
    let cfg = ChainConfig::from_json_str(
        r#"{ "global_intensity": 0.7,
             "effects": [ { "kind": "feedback", "intensity": 0.5, "params": { "decay": 0.9 } },
                          { "kind": "kaleidoscope", "intensity": 0.25 } ] }"#,
    )
    .unwrap();
    assert_eq!(cfg.global_intensity, 0.7);
    assert_eq!(cfg.effects[0].kind, "feedback");
    assert_eq!(cfg.effects[0].params["decay"], 0.9);
    assert_eq!(cfg.effects[1].intensity, 0.25);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = ChainConfig::from_json_str(r#"{"effects": [], "speed": 2}"#).unwrap_err();
    assert!(matches!(err, FramefxError::InvalidConfig(_)));
    let err = ChainConfig::from_json_str(r#"{"effects": [{"kind": "lut", "amount": 1}]}"#).unwrap_err();
    assert!(err.to_string().contains("amount"));
}

#[test]
fn serialized_form_parses_back() {
    let cfg = ChainConfig::from_json_str(r#"{"effects": [{"kind": "lut", "params": {"palette": "rainbow"}}]}"#)
        .unwrap();
    let again = ChainConfig::from_json_str(&cfg.to_json_pretty().unwrap()).unwrap();
    assert_eq!(again, cfg);
}

#[test]
fn missing_files_are_reported_with_the_path() {
    let err = ChainConfig::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.json"));
}
