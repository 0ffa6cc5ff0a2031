use serde_json::{json, Value};
use validus::prelude::*;

fn run(
    description: impl Into<Description>,
    value: &Value,
    options: ValidationOptions,
) -> Result<Value, ValidationError> {
    validus::validate(description, value, options).map_err(|e| match e {
        Error::Validation(e) => e,
        Error::Schema(e) => panic!("unexpected schema error: {e}"),
    })
}

fn check(description: impl Into<Description>, value: Value) -> Result<Value, ValidationError> {
    run(description, &value, ValidationOptions::default())
}

#[test]
fn rejects_non_objects() {
    for value in [json!(null), json!([]), json!("x"), json!(1)] {
        let err = check(validus::object(), value).unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(err.issues[0].message.starts_with("Value is not an object"));
    }
}

#[test]
fn nested_failure_reports_full_path() {
    let schema = validus::object().property(
        "a",
        validus::object().property("b", validus::number()),
    );
    let err = check(schema, json!({"a": {"b": "x"}})).unwrap_err();
    assert_eq!(err.len(), 1);
    assert_eq!(err.issues[0].path, vec![PathSegment::from("a"), PathSegment::from("b")]);
}

#[test]
fn reports_every_missing_property() {
    let schema = validus::object()
        .property("a", validus::number())
        .property("b", validus::string());
    let err = check(schema, json!({})).unwrap_err();
    assert_eq!(err.len(), 2);
    assert_eq!(err.issues[0].path, vec![PathSegment::from("a")]);
    assert_eq!(err.issues[1].path, vec![PathSegment::from("b")]);
    assert!(err
        .issues
        .iter()
        .all(|i| i.message == "Required property missing"));
}

#[test]
fn failures_accumulate_across_properties() {
    let schema = validus::object()
        .property("name", validus::string())
        .property("age", validus::number())
        .property("admin", validus::boolean());
    let err = check(schema, json!({"name": 1, "age": "x", "admin": true})).unwrap_err();
    assert_eq!(err.len(), 2);
    assert_eq!(err.issues[0].to_string(), "name: Value is not a string, received number");
    assert_eq!(err.issues[1].to_string(), "age: Value is not a number, received string");
}

#[test]
fn optional_property_may_be_absent() {
    let schema = validus::object()
        .property("name", validus::string())
        .property("nickname", validus::optional(validus::string()));
    assert_eq!(
        check(schema.clone(), json!({"name": "Alex"})).unwrap(),
        json!({"name": "Alex"})
    );
    assert!(check(schema, json!({"name": "Alex", "nickname": 1})).is_err());
}

#[test]
fn optional_null_is_kept_unless_stripped() {
    let schema = validus::object().property("note", validus::optional(validus::one_of([
        Description::from(validus::string()),
        ().into(),
    ])));
    let input = json!({"note": null});
    assert_eq!(
        run(schema.clone(), &input, ValidationOptions::default()).unwrap(),
        json!({"note": null})
    );
    let options = ValidationOptions::new().strip_optional_nulls(true);
    assert_eq!(run(schema, &input, options).unwrap(), json!({}));
}

#[test]
fn default_fills_absent_property() {
    let schema = validus::object()
        .property("role", validus::with_default(validus::string(), "user"))
        .property("limit", validus::optional(validus::with_default(validus::number(), 10)));
    assert_eq!(
        check(schema.clone(), json!({})).unwrap(),
        json!({"role": "user", "limit": 10})
    );
    assert_eq!(
        check(schema.clone(), json!({"role": "admin"})).unwrap(),
        json!({"role": "admin", "limit": 10})
    );
    assert!(check(schema, json!({"role": 5})).is_err());
}

#[test]
fn forbidden_property_is_reported() {
    let schema = validus::object()
        .property("name", validus::string())
        .never("password");
    let err = check(schema, json!({"name": "Alex", "password": "x"})).unwrap_err();
    assert_eq!(err.len(), 1);
    assert_eq!(err.issues[0].to_string(), "password: Forbidden property");
}

#[test]
fn forbidden_property_is_stripped() {
    let schema = validus::object()
        .property("name", validus::string())
        .never("password");
    let options = ValidationOptions::new().strip_forbidden_properties(true);
    let input = json!({"name": "Alex", "password": "x"});
    assert_eq!(run(schema, &input, options).unwrap(), json!({"name": "Alex"}));
}

#[test]
fn stripping_unknown_keys_does_not_strip_forbidden_ones() {
    let schema = validus::object().never("password");
    let options = ValidationOptions::new().strip_additional_properties(true);
    let err = run(schema, &json!({"password": "x", "extra": 1}), options).unwrap_err();
    assert_eq!(err.len(), 1);
    assert_eq!(err.issues[0].path, vec![PathSegment::from("password")]);
}

#[test]
fn unknown_property_is_reported() {
    let schema = validus::object().property("name", validus::string());
    let err = check(schema, json!({"name": "Alex", "extra": true, "more": 1})).unwrap_err();
    assert_eq!(err.len(), 2);
    assert!(err.issues.iter().all(|i| i.message == "Unknown property"));
}

#[test]
fn unknown_property_is_stripped() {
    let schema = validus::object().property("name", validus::string());
    let options = ValidationOptions::new().strip_additional_properties(true);
    let input = json!({"name": "Alex", "extra": true});
    assert_eq!(run(schema, &input, options).unwrap(), json!({"name": "Alex"}));
}

#[test]
fn additional_validator_checks_unknown_keys() {
    let schema = validus::object()
        .property("id", validus::string())
        .additional(validus::number());
    assert_eq!(
        check(schema.clone(), json!({"id": "x", "a": 1, "b": 2})).unwrap(),
        json!({"id": "x", "a": 1, "b": 2})
    );
    let err = check(schema, json!({"id": "x", "a": "nope"})).unwrap_err();
    assert_eq!(err.issues[0].path, vec![PathSegment::from("a")]);
}

#[test]
fn allow_additional_keeps_unknown_keys() {
    let schema = validus::object().allow_additional();
    assert_eq!(
        check(schema, json!({"anything": [1, 2]})).unwrap(),
        json!({"anything": [1, 2]})
    );
}

#[test]
fn partial_validation_skips_missing_required() {
    let schema = validus::object()
        .property("a", validus::number())
        .property("b", validus::string());
    let options = ValidationOptions::new().partial_validation(true);
    assert_eq!(run(schema.clone(), &json!({"a": 1}), options).unwrap(), json!({"a": 1}));
    assert!(run(schema, &json!({"a": "x"}), options).is_err());
}

#[test]
fn input_is_not_mutated() {
    let schema = validus::object()
        .property("name", validus::string())
        .property("tags", validus::array(validus::string()));
    let options = ValidationOptions::new().strip_additional_properties(true);
    let input = json!({"name": "Alex", "tags": ["a"], "extra": 1});
    let before = input.clone();
    let output = run(schema, &input, options).unwrap();
    assert_eq!(input, before);
    assert_eq!(output, json!({"name": "Alex", "tags": ["a"]}));
}

#[test]
fn extend_merges_declarations() {
    let base = validus::object()
        .property("id", validus::string())
        .property("kind", "base");
    let extra = validus::object()
        .property("kind", "derived")
        .property("size", validus::number());
    let schema = base.extend(extra);
    assert_eq!(schema.keys(), vec!["id", "kind", "size"]);
    assert!(check(schema.clone(), json!({"id": "1", "kind": "derived", "size": 3})).is_ok());
    assert!(check(schema, json!({"id": "1", "kind": "base", "size": 3})).is_err());
}

#[test]
fn extend_property_lifts_forbidden_mark() {
    let base = validus::object().never("token");
    let schema = base.merge(validus::object().property("token", validus::string()));
    assert!(check(schema, json!({"token": "abc"})).is_ok());
}

#[test]
fn pick_and_omit() {
    let full = validus::object()
        .property("a", validus::string())
        .property("b", validus::number())
        .property("c", validus::boolean());
    let picked = full.clone().pick(&["a", "c"]);
    assert_eq!(picked.keys(), vec!["a", "c"]);
    assert!(check(picked, json!({"a": "x", "c": true})).is_ok());

    let omitted = full.omit("b");
    assert!(check(omitted.clone(), json!({"a": "x", "c": true})).is_ok());
    let err = check(omitted, json!({"a": "x", "b": 1, "c": true})).unwrap_err();
    assert_eq!(err.issues[0].message, "Unknown property");
}

#[test]
fn partial_makes_everything_optional() {
    let schema = validus::object()
        .property("a", validus::string())
        .property("b", validus::number())
        .partial();
    assert_eq!(check(schema.clone(), json!({})).unwrap(), json!({}));
    assert!(check(schema, json!({"b": "x"})).is_err());
}

#[test]
fn readonly_does_not_affect_validation() {
    let schema = validus::object().property("id", validus::readonly(validus::string()));
    assert!(check(schema.clone(), json!({"id": "x"})).is_ok());
    let v = validus::resolve(schema).unwrap();
    let o = v.downcast_ref::<ObjectValidator>().unwrap();
    assert!(o.properties()[0].readonly);
    assert!(!o.properties()[0].optional);
}

#[test]
fn converted_values_land_in_output() {
    let schema = validus::object()
        .property("count", validus::number().from_string())
        .property("when", validus::date());
    assert_eq!(
        check(schema, json!({"count": "12", "when": "2024-03-01"})).unwrap(),
        json!({"count": 12, "when": "2024-03-01T00:00:00.000Z"})
    );
}

#[test]
fn additional_rule_may_be_an_object_schema() {
    let points = validus::object().additional(
        validus::object()
            .property("x", validus::number())
            .property("y", validus::number()),
    );
    assert!(check(points.clone(), json!({"a": {"x": 1, "y": 2}})).is_ok());
    let err = check(points, json!({"a": {"x": 1}, "b": {"x": 1, "y": "2"}})).unwrap_err();
    assert_eq!(err.len(), 2);
    assert_eq!(err.issues[0].to_string(), "a.y: Required property missing");
    assert_eq!(err.issues[1].to_string(), "b.y: Value is not a number, received string");
}
