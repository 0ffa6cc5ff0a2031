//! JSON Schema generation from resolved validators.
//!
//! Built on the [`generate`](crate::generate) registry: one generator per
//! [`ValidatorKind`], references emitted as `$ref` into `$defs`.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use validus::json_schema::to_json_schema;
//!
//! let v = validus::resolve(validus::string().min_length(2)).unwrap();
//! assert_eq!(to_json_schema(&v).unwrap(), json!({"type": "string", "minLength": 2}));
//! ```

use serde_json::{json, Map, Value};

use crate::collections::{ArrayValidator, TupleValidator};
use crate::combinators::{AllOfValidator, OneOfValidator};
use crate::generate::{GenerateError, Generation, Generators, References};
use crate::modifiers::DefaultValidator;
use crate::object::ObjectValidator;
use crate::primitives::{BooleanValidator, ConstantValidator, DateValidator, NumberValidator, StringValidator};
use crate::schema::{Validate, Validator, ValidatorKind};

const DEFS_PREFIX: &str = "#/$defs/";

fn downcast<V: Validate>(validator: &Validator) -> Result<&V, GenerateError> {
    validator
        .downcast_ref::<V>()
        .ok_or_else(|| GenerateError::Unsupported {
            kind: validator.kind(),
            reason: "not a built-in validator".to_string(),
        })
}

fn number(v: f64) -> Value {
    serde_json::Number::from_f64(v)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

fn generate_number(validator: &Validator, _: &Generation<'_, Value>) -> Result<Value, GenerateError> {
    let n = downcast::<NumberValidator>(validator)?;
    let mut schema = Map::new();
    let ty = if n.is_integer() { "integer" } else { "number" };
    schema.insert("type".into(), json!(ty));
    let bounds = [
        ("minimum", n.get_minimum()),
        ("maximum", n.get_maximum()),
        ("exclusiveMinimum", n.get_exclusive_minimum()),
        ("exclusiveMaximum", n.get_exclusive_maximum()),
        ("multipleOf", n.get_multiple_of()),
    ];
    for (key, bound) in bounds {
        if let Some(b) = bound {
            schema.insert(key.into(), number(b));
        }
    }
    Ok(Value::Object(schema))
}

fn generate_string(validator: &Validator, _: &Generation<'_, Value>) -> Result<Value, GenerateError> {
    let s = downcast::<StringValidator>(validator)?;
    let mut schema = json!({"type": "string"});
    if let Some(min) = s.get_min_length() {
        schema["minLength"] = json!(min);
    }
    if let Some(max) = s.get_max_length() {
        schema["maxLength"] = json!(max);
    }
    if let Some(re) = s.get_pattern() {
        schema["pattern"] = json!(re.as_str());
    }
    Ok(schema)
}

/// String-accepting booleans also admit their string forms.
fn generate_boolean(validator: &Validator, _: &Generation<'_, Value>) -> Result<Value, GenerateError> {
    let b = downcast::<BooleanValidator>(validator)?;
    Ok(if b.accepts_strings() {
        json!({"type": ["boolean", "string"]})
    } else {
        json!({"type": "boolean"})
    })
}

fn generate_date(validator: &Validator, _: &Generation<'_, Value>) -> Result<Value, GenerateError> {
    let d = downcast::<DateValidator>(validator)?;
    let mut schema = json!({"type": "string", "format": "date-time"});
    if let Some(from) = d.get_from() {
        schema["formatMinimum"] = json!(from.to_rfc3339());
    }
    if let Some(until) = d.get_until() {
        schema["formatMaximum"] = json!(until.to_rfc3339());
    }
    Ok(schema)
}

fn generate_constant(validator: &Validator, _: &Generation<'_, Value>) -> Result<Value, GenerateError> {
    let c = downcast::<ConstantValidator>(validator)?;
    Ok(match c.constant() {
        Value::Null => json!({"type": "null"}),
        other => json!({"const": other}),
    })
}

fn generate_array(validator: &Validator, gen: &Generation<'_, Value>) -> Result<Value, GenerateError> {
    let a = downcast::<ArrayValidator>(validator)?;
    let mut schema = json!({
        "type": "array",
        "items": gen.generate(a.items())?,
    });
    if a.min_items() > 0 {
        schema["minItems"] = json!(a.min_items());
    }
    if a.max_items() != usize::MAX {
        schema["maxItems"] = json!(a.max_items());
    }
    if a.unique_items() {
        schema["uniqueItems"] = json!(true);
    }
    Ok(schema)
}

/// Only trailing rest runs have a JSON Schema equivalent (`items` after
/// `prefixItems`).
fn generate_tuple(validator: &Validator, gen: &Generation<'_, Value>) -> Result<Value, GenerateError> {
    let t = downcast::<TupleValidator>(validator)?;
    let slots = t.slots();
    let fixed = slots.iter().take_while(|s| !s.rest).count();
    let trailing = &slots[fixed..];
    if trailing.len() > 1 || trailing.iter().any(|s| !s.rest) {
        return Err(GenerateError::Unsupported {
            kind: ValidatorKind::Tuple,
            reason: "rest members are only expressible at the end of a tuple".to_string(),
        });
    }

    let prefix = slots[..fixed]
        .iter()
        .map(|s| gen.generate(&s.validator))
        .collect::<Result<Vec<_>, _>>()?;
    let mut schema = json!({"type": "array", "minItems": fixed});
    if !prefix.is_empty() {
        schema["prefixItems"] = Value::Array(prefix);
    }
    match trailing.first() {
        Some(rest) => schema["items"] = gen.generate(&rest.validator)?,
        None => {
            schema["items"] = json!(false);
            schema["maxItems"] = json!(fixed);
        }
    }
    Ok(schema)
}

fn generate_object(validator: &Validator, gen: &Generation<'_, Value>) -> Result<Value, GenerateError> {
    let o = downcast::<ObjectValidator>(validator)?;
    let mut properties = Map::new();
    let mut required = Vec::new();
    for property in o.properties() {
        let mut schema = gen.generate(&property.validator)?;
        if property.readonly {
            if let Value::Object(map) = &mut schema {
                map.insert("readOnly".into(), json!(true));
            }
        }
        properties.insert(property.name.clone(), schema);
        if !property.optional {
            required.push(json!(property.name));
        }
    }
    for key in o.forbidden() {
        properties.insert(key.clone(), json!(false));
    }

    let additional = match o.additional() {
        Some(additional) => gen.generate(additional)?,
        None => json!(false),
    };

    let mut schema = json!({
        "type": "object",
        "properties": Value::Object(properties),
        "additionalProperties": additional,
    });
    if !required.is_empty() {
        schema["required"] = Value::Array(required);
    }
    Ok(schema)
}

fn generate_members(members: &[Validator], gen: &Generation<'_, Value>) -> Result<Value, GenerateError> {
    members
        .iter()
        .map(|m| gen.generate(m))
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

fn generate_default(validator: &Validator, gen: &Generation<'_, Value>) -> Result<Value, GenerateError> {
    let d = downcast::<DefaultValidator>(validator)?;
    match gen.generate(d.inner())? {
        Value::Object(mut map) => {
            map.insert("default".into(), d.default_value().clone());
            Ok(Value::Object(map))
        }
        // boolean schema: wrap to attach the default
        other => Ok(json!({"allOf": [other], "default": d.default_value()})),
    }
}

/// Generators for every built-in kind, with `$ref` references into `$defs`.
pub fn json_schema_generators() -> Generators<Value> {
    let mut generators = Generators::new();
    generators
        .register(ValidatorKind::Any, |_, _| Ok(json!({})))
        .register(ValidatorKind::Boolean, generate_boolean)
        .register(ValidatorKind::Number, generate_number)
        .register(ValidatorKind::String, generate_string)
        .register(ValidatorKind::Date, generate_date)
        .register(ValidatorKind::Constant, generate_constant)
        .register(ValidatorKind::Array, generate_array)
        .register(ValidatorKind::Tuple, generate_tuple)
        .register(ValidatorKind::Object, generate_object)
        .register(ValidatorKind::OneOf, |v, gen| {
            let members = generate_members(downcast::<OneOfValidator>(v)?.members(), gen)?;
            // first match wins, so several members may match: `anyOf`
            Ok(json!({ "anyOf": members }))
        })
        .register(ValidatorKind::AllOf, |v, gen| {
            let members = generate_members(downcast::<AllOfValidator>(v)?.members(), gen)?;
            Ok(json!({ "allOf": members }))
        })
        .register(ValidatorKind::Default, generate_default)
        .with_reference(|name| json!({ "$ref": format!("{}{}", DEFS_PREFIX, name) }));
    generators
}

/// Generate a standalone JSON Schema for `validator`.
pub fn to_json_schema(validator: &Validator) -> Result<Value, GenerateError> {
    json_schema_generators().generate(validator, &References::new())
}

/// Generate a schema for `root` with every named validator emitted once
/// under `$defs` and referenced everywhere else.
///
/// ```
/// use serde_json::json;
/// use validus::generate::References;
/// use validus::json_schema::to_json_schema_document;
///
/// let name = validus::resolve(validus::string().min_length(1)).unwrap();
/// let root = validus::resolve(
///     validus::object().property("first", &name).property("last", &name),
/// ).unwrap();
///
/// let mut refs = References::new();
/// refs.insert("Name", name);
/// let doc = to_json_schema_document(&root, &refs).unwrap();
/// assert_eq!(doc["properties"]["first"], json!({"$ref": "#/$defs/Name"}));
/// assert_eq!(doc["$defs"]["Name"]["minLength"], 1);
/// ```
pub fn to_json_schema_document(
    root: &Validator,
    references: &References,
) -> Result<Value, GenerateError> {
    let generators = json_schema_generators();
    let schema = generators.generate(root, references)?;
    if references.is_empty() {
        return Ok(schema);
    }
    let mut defs = Map::new();
    for (name, validator) in references.iter() {
        defs.insert(name.to_string(), generators.generate(validator, references)?);
    }
    Ok(match schema {
        Value::Object(mut map) => {
            map.insert("$defs".into(), Value::Object(defs));
            Value::Object(map)
        }
        other => json!({"allOf": [other], "$defs": defs}),
    })
}
