//! Validation descriptions and the dispatch that turns them into validators.
//!
//! Anything accepted where a validator is expected is a [`Description`]:
//! a constant, a pre-built [`Validator`], a tuple or object literal, a
//! validator builder, or a factory. [`resolve`] is the single dispatch
//! point every compound validator goes through for its members.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::collections::TupleMember;
use crate::error::SchemaError;
use crate::object::ObjectSchema;
use crate::primitives::ConstantValidator;
use crate::schema::Validator;

/// A declaration that can be resolved into a [`Validator`].
///
/// Implemented by every builder (`string()`, `array(..)`, `object()`, ...).
/// Constraint consistency (e.g. minimum above maximum) is checked here.
pub trait Resolve: Send + Sync + 'static {
    fn resolve(&self) -> Result<Validator, SchemaError>;
}

/// Any value usable as shorthand for a validator.
#[derive(Clone)]
pub enum Description {
    /// `null`, boolean, number or string: matches exactly that value.
    Constant(Value),
    /// Already resolved; returned as-is.
    Validator(Validator),
    /// Array literal: a tuple of fixed and rest members.
    Tuple(Vec<TupleMember>),
    /// Object literal: property name to description.
    Object(ObjectSchema),
    /// Called at resolution time; its result is resolved in turn.
    Factory(Arc<dyn Fn() -> Description + Send + Sync>),
    /// A validator builder.
    Declared(Arc<dyn Resolve>),
    /// A shorthand that has no validator meaning.
    Invalid(SchemaError),
}

impl Description {
    /// Wrap a function producing a description.
    pub fn factory<F>(f: F) -> Self
    where
        F: Fn() -> Description + Send + Sync + 'static,
    {
        Description::Factory(Arc::new(f))
    }

    /// Resolve into a validator. See [`resolve`].
    pub fn resolve(&self) -> Result<Validator, SchemaError> {
        let resolved = match self {
            Description::Constant(value) => Ok(Validator::new(ConstantValidator::new(value.clone()))),
            Description::Validator(validator) => Ok(validator.clone()),
            Description::Tuple(members) => crate::collections::TupleSchema::new(members.clone()).resolve(),
            Description::Object(schema) => schema.resolve(),
            Description::Factory(factory) => factory().resolve(),
            Description::Declared(declared) => declared.resolve(),
            Description::Invalid(err) => Err(err.clone()),
        };
        crate::validus_event!(trace, ok = resolved.is_ok(), "resolved description");
        resolved
    }
}

impl fmt::Debug for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Description::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Description::Validator(validator) => f.debug_tuple("Validator").field(validator).finish(),
            Description::Tuple(members) => f.debug_tuple("Tuple").field(&members.len()).finish(),
            Description::Object(schema) => f.debug_tuple("Object").field(&schema.keys()).finish(),
            Description::Factory(_) => f.write_str("Factory"),
            Description::Declared(_) => f.write_str("Declared"),
            Description::Invalid(err) => f.debug_tuple("Invalid").field(err).finish(),
        }
    }
}

/// Resolve any description into a validator.
///
/// - `null` and literals become constant validators;
/// - a [`Validator`] is returned unchanged (same instance);
/// - arrays become tuples, objects become object validators;
/// - builders are checked and built; factories are called first.
///
/// ```
/// use serde_json::json;
/// use validus::prelude::*;
///
/// let v = validus::resolve(json!({"name": "admin", "level": 3})).unwrap();
/// assert_eq!(v.kind(), ValidatorKind::Object);
///
/// let same = validus::resolve(v.clone()).unwrap();
/// assert!(same.ptr_eq(&v));
/// ```
pub fn resolve(description: impl Into<Description>) -> Result<Validator, SchemaError> {
    description.into().resolve()
}

impl From<Validator> for Description {
    fn from(validator: Validator) -> Self {
        Description::Validator(validator)
    }
}

impl From<&Validator> for Description {
    fn from(validator: &Validator) -> Self {
        Description::Validator(validator.clone())
    }
}

impl From<()> for Description {
    fn from(_: ()) -> Self {
        Description::Constant(Value::Null)
    }
}

impl From<bool> for Description {
    fn from(b: bool) -> Self {
        Description::Constant(Value::Bool(b))
    }
}

impl From<&str> for Description {
    fn from(s: &str) -> Self {
        Description::Constant(Value::String(s.to_string()))
    }
}

impl From<String> for Description {
    fn from(s: String) -> Self {
        Description::Constant(Value::String(s))
    }
}

impl From<f64> for Description {
    fn from(n: f64) -> Self {
        match serde_json::Number::from_f64(n) {
            Some(n) => Description::Constant(Value::Number(n)),
            None => Description::Invalid(SchemaError::NonFiniteConstant(n)),
        }
    }
}

macro_rules! impl_integer_description {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Description {
                fn from(n: $t) -> Self {
                    Description::Constant(Value::from(n))
                }
            }
        )+
    };
}

impl_integer_description!(i32, i64, u32, u64, usize);

/// JSON shorthand: arrays are tuples of their elements, objects are schemas
/// whose every property is required, everything else is a constant.
impl From<Value> for Description {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => {
                Description::Tuple(items.into_iter().map(TupleMember::from).collect())
            }
            Value::Object(map) => Description::Object(ObjectSchema::from(map)),
            other => Description::Constant(other),
        }
    }
}

impl From<Map<String, Value>> for Description {
    fn from(map: Map<String, Value>) -> Self {
        Description::Object(ObjectSchema::from(map))
    }
}

impl From<Vec<TupleMember>> for Description {
    fn from(members: Vec<TupleMember>) -> Self {
        Description::Tuple(members)
    }
}

impl From<ObjectSchema> for Description {
    fn from(schema: ObjectSchema) -> Self {
        Description::Object(schema)
    }
}

crate::macros::impl_description_members!(
    Description,
    Validator,
    &Validator,
    (),
    bool,
    &str,
    String,
    f64,
    i32,
    i64,
    u32,
    u64,
    usize,
    Value,
    Map<String, Value>,
    Vec<TupleMember>,
    ObjectSchema,
);
