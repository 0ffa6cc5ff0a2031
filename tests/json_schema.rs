#![cfg(feature = "json-schema")]

use serde_json::json;
use validus::generate::{GenerateError, References};
use validus::json_schema::{to_json_schema, to_json_schema_document};
use validus::prelude::*;
use validus::regex_lite::Regex;

fn schema_of(description: impl Into<Description>) -> serde_json::Value {
    to_json_schema(&validus::resolve(description).unwrap()).unwrap()
}

#[test]
fn leaves() {
    assert_eq!(schema_of(validus::any()), json!({}));
    assert_eq!(schema_of(validus::boolean()), json!({"type": "boolean"}));
    assert_eq!(
        schema_of(validus::boolean().from_string()),
        json!({"type": ["boolean", "string"]})
    );
    assert_eq!(
        schema_of(validus::number().minimum(0.0).exclusive_maximum(10.0)),
        json!({"type": "number", "minimum": 0.0, "exclusiveMaximum": 10.0})
    );
    assert_eq!(schema_of(validus::number().integer())["type"], "integer");
    assert_eq!(
        schema_of(validus::string().max_length(3).pattern(Regex::new("^a").unwrap())),
        json!({"type": "string", "maxLength": 3, "pattern": "^a"})
    );
    assert_eq!(schema_of(validus::date())["format"], "date-time");
    assert_eq!(schema_of(()), json!({"type": "null"}));
    assert_eq!(schema_of("x"), json!({"const": "x"}));
}

#[test]
fn array_constraints() {
    assert_eq!(
        schema_of(validus::array(validus::string()).min_items(1).unique_items()),
        json!({
            "type": "array",
            "items": {"type": "string"},
            "minItems": 1,
            "uniqueItems": true,
        })
    );
}

#[test]
fn object_shape() {
    let schema = validus::object()
        .property("id", validus::readonly(validus::string()))
        .property("note", validus::optional(validus::string()))
        .never("secret");
    assert_eq!(
        schema_of(schema),
        json!({
            "type": "object",
            "properties": {
                "id": {"type": "string", "readOnly": true},
                "note": {"type": "string"},
                "secret": false,
            },
            "additionalProperties": false,
            "required": ["id"],
        })
    );
    assert_eq!(
        schema_of(validus::object().additional(validus::number()))["additionalProperties"],
        json!({"type": "number"})
    );
}

#[test]
fn tuples() {
    assert_eq!(
        schema_of(validus::tuple([validus::string(), validus::string()])),
        json!({
            "type": "array",
            "minItems": 2,
            "maxItems": 2,
            "prefixItems": [{"type": "string"}, {"type": "string"}],
            "items": false,
        })
    );
    assert_eq!(
        schema_of(validus::tuple([TupleMember::from("cmd"), validus::rest(validus::number())])),
        json!({
            "type": "array",
            "minItems": 1,
            "prefixItems": [{"const": "cmd"}],
            "items": {"type": "number"},
        })
    );
}

#[test]
fn leading_rest_has_no_json_schema() {
    let t = validus::resolve(validus::tuple([
        validus::rest(validus::string()),
        TupleMember::from(()),
    ]))
    .unwrap();
    assert!(matches!(
        to_json_schema(&t),
        Err(GenerateError::Unsupported { kind: ValidatorKind::Tuple, .. })
    ));
}

#[test]
fn unions_and_defaults() {
    assert_eq!(
        schema_of(validus::one_of(["a", "b"])),
        json!({"anyOf": [{"const": "a"}, {"const": "b"}]})
    );
    assert_eq!(
        schema_of(validus::all_of([validus::string().min_length(1)])),
        json!({"allOf": [{"type": "string", "minLength": 1}]})
    );
    assert_eq!(
        schema_of(validus::with_default(validus::number(), 5)),
        json!({"type": "number", "default": 5})
    );
}

#[test]
fn document_with_definitions() {
    let name = validus::resolve(validus::string().min_length(1)).unwrap();
    let root = validus::resolve(
        validus::object()
            .property("first", &name)
            .property("aliases", validus::array(&name)),
    )
    .unwrap();
    let mut refs = References::new();
    refs.insert("Name", name);

    let doc = to_json_schema_document(&root, &refs).unwrap();
    assert_eq!(doc["properties"]["first"], json!({"$ref": "#/$defs/Name"}));
    assert_eq!(doc["properties"]["aliases"]["items"], json!({"$ref": "#/$defs/Name"}));
    assert_eq!(doc["$defs"]["Name"], json!({"type": "string", "minLength": 1}));
}

#[test]
fn custom_validators_need_a_generator() {
    struct Anything;

    impl Validate for Anything {
        fn validate(
            &self,
            value: &serde_json::Value,
            _: &ValidationOptions,
        ) -> Result<serde_json::Value, ValidationError> {
            Ok(value.clone())
        }

        fn kind(&self) -> ValidatorKind {
            ValidatorKind::Custom("anything")
        }
    }

    let v = Validator::new(Anything);
    assert_eq!(
        to_json_schema(&v).unwrap_err(),
        GenerateError::Unregistered(ValidatorKind::Custom("anything"))
    );
}
