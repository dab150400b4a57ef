//! Content domain: tuning parser tests.

use super::loader::{TUNING_SCHEMA_VERSION, TuningFile, parse_tuning};

fn default_document() -> String {
    ron::ser::to_string(&TuningFile::default()).unwrap()
}

#[test]
fn test_parse_default_document() {
    let tuning = parse_tuning(&default_document(), "tuning.ron").unwrap();
    assert_eq!(tuning.schema_version, TUNING_SCHEMA_VERSION);
    assert!(tuning.movement.move_speed > 0.0);
    assert!(tuning.zipline.progress_speed > 0.0);
    assert!(tuning.ghost.recording_interval > 0.0);
}

#[test]
fn test_rejects_schema_mismatch() {
    let mut file = TuningFile::default();
    file.schema_version = TUNING_SCHEMA_VERSION + 1;
    let doc = ron::ser::to_string(&file).unwrap();

    let err = parse_tuning(&doc, "tuning.ron").unwrap_err();
    assert!(err.message.contains("Schema version mismatch"), "{}", err);
}

#[test]
fn test_rejects_malformed_document() {
    let err = parse_tuning("(schema_version: 1,", "tuning.ron").unwrap_err();
    assert!(err.message.contains("Parse error"), "{}", err);
}

#[test]
fn test_rejects_nonsense_values() {
    let mut file = TuningFile::default();
    file.movement.move_speed = -10.0;
    file.zipline.end_band = 0.7;
    let doc = ron::ser::to_string(&file).unwrap();

    let err = parse_tuning(&doc, "tuning.ron").unwrap_err();
    assert!(err.message.contains("move_speed"), "{}", err);
    assert!(err.message.contains("end_band"), "{}", err);
}
