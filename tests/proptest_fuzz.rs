//! Property-based tests: validators never panic on arbitrary JSON, and a
//! value they accept is accepted again unchanged.

use proptest::prelude::*;
use serde_json::Value;
use validus::prelude::*;

// -----------------------------------------------------------------------
// Helpers: arbitrary JSON value generators
// -----------------------------------------------------------------------

fn arb_json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(|f| serde_json::json!(f)),
        any::<i64>().prop_map(|i| serde_json::json!(i)),
        ".*".prop_map(Value::String),
    ];
    leaf.prop_recursive(
        3,  // max depth
        64, // max nodes
        8,  // items per collection
        |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
                prop::collection::vec(("[a-z_]{1,8}", inner), 0..6)
                    .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
            ]
        },
    )
}

fn validators() -> Vec<Validator> {
    let descriptions: Vec<Description> = vec![
        validus::any().into(),
        validus::boolean().from_string().into(),
        validus::number().from_string().minimum(-100.0).multiple_of(0.5).into(),
        validus::string().min_length(1).max_length(10).into(),
        validus::date().into(),
        validus::array(validus::any()).unique_items().max_items(4).into(),
        validus::array(validus::date()).unique_items().into(),
        validus::array(validus::number().from_string()).unique_items().into(),
        validus::tuple([
            validus::rest(validus::string()),
            TupleMember::fixed(()),
            validus::rest(validus::number()),
        ])
        .into(),
        validus::object()
            .property("a", validus::optional(validus::number()))
            .property("b", validus::with_default(validus::string(), "b"))
            .never("c")
            .additional(validus::one_of([
                Description::from(validus::boolean()),
                validus::array(validus::any()).into(),
            ]))
            .into(),
        validus::all_of([
            Description::from(validus::number().from_string()),
            validus::number().integer().into(),
        ])
        .into(),
    ];
    descriptions
        .into_iter()
        .map(|d| validus::resolve(d).unwrap())
        .collect()
}

proptest! {
    #[test]
    fn validators_never_panic(val in arb_json_value()) {
        let options = ValidationOptions::default();
        for v in validators() {
            let _ = v.validate(&val, &options);
        }
    }

    #[test]
    fn stripping_options_never_panic(val in arb_json_value(), strip in any::<bool>()) {
        let options = ValidationOptions::new()
            .strip_additional_properties(strip)
            .strip_forbidden_properties(!strip)
            .strip_optional_nulls(strip)
            .partial_validation(!strip);
        for v in validators() {
            let _ = v.validate(&val, &options);
        }
    }

    #[test]
    fn accepted_values_are_stable(val in arb_json_value()) {
        let options = ValidationOptions::default();
        for v in validators() {
            if let Ok(once) = v.validate(&val, &options) {
                let twice = v.validate(&once, &options);
                prop_assert_eq!(twice, Ok(once));
            }
        }
    }

    #[test]
    fn errors_are_never_empty(val in arb_json_value()) {
        let options = ValidationOptions::default();
        for v in validators() {
            if let Err(e) = v.validate(&val, &options) {
                prop_assert!(!e.is_empty());
                prop_assert!(e.to_string().starts_with("Found "));
            }
        }
    }

    #[test]
    fn parsing_text_never_panics(s in ".*") {
        let _ = validus::validate_json(validus::any(), s.as_str(), ValidationOptions::default());
    }
}
