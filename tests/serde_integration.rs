//! JSON interop: value sets in, snapshots out, snapshots back in for merging

#![cfg(feature = "serde")]

use fieldguard::definition::SchemaDefinition;
use fieldguard::{assert_field_errors, Snapshot, Validator, ValueSet};
use serde_json::json;

fn validator() -> Validator {
    let definition: SchemaDefinition = serde_json::from_value(json!({
        "fields": [
            { "name": "email", "rules": [
                { "rule": "required", "message": "Required field" },
                { "rule": "match", "pattern": "^[^@]+@[^@]+$", "message": "Not an email" }
            ]},
            { "name": "age", "rules": [
                { "rule": "not_less_then", "limit": 18, "message": "Too young" }
            ]},
            { "name": "notes" }
        ]
    }))
    .expect("definition parses");
    Validator::from_definition(&definition).expect("definition builds")
}

#[test]
fn test_snapshot_serializes_to_plain_json() {
    let values: ValueSet = serde_json::from_value(json!({ "email": "nope", "age": 12 })).unwrap();
    let result = validator().validate(&values);

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "valid": false,
            "errors": { "age": ["Too young"], "email": ["Not an email"] }
        })
    );
}

#[test]
fn test_transmitted_snapshot_can_be_merged() {
    let v = validator();
    let values: ValueSet =
        serde_json::from_value(json!({ "email": "nope", "age": 30 })).unwrap();
    let wire = serde_json::to_string(&v.validate(&values)).unwrap();

    let previous: Snapshot = serde_json::from_str(&wire).unwrap();
    let fixed: ValueSet =
        serde_json::from_value(json!({ "email": "a@b.c", "age": 30 })).unwrap();
    let merged = v.revalidate(&fixed, "email", previous);

    assert!(merged.valid());
    assert_eq!(
        serde_json::to_value(&merged).unwrap(),
        json!({ "valid": true, "errors": {} })
    );
}

#[test]
fn test_numeric_strings_from_form_posts() {
    let values: ValueSet =
        serde_json::from_value(json!({ "email": "a@b.c", "age": "17" })).unwrap();
    let result = validator().validate(&values);
    assert_field_errors!(result, "age", ["Too young"]);
}

#[test]
fn test_definition_round_trips() {
    let text = r#"{"fields":[{"name":"a","rules":[{"rule":"between","min":1.0,"max":2.0,"message":"m"}]}]}"#;
    let definition: SchemaDefinition = serde_json::from_str(text).unwrap();
    assert_eq!(serde_json::to_string(&definition).unwrap(), text);
}
