use serde_json::Value;

use crate::error::{SchemaError, ValidationError};
use crate::options::ValidationOptions;
use crate::schema::{Validate, Validator, ValidatorKind};

/// Validator matching one exact JSON value.
///
/// Created via [`validus::constant()`](crate::constant), or implicitly when a
/// `null`, boolean, number or string is used as a description.
///
/// Numbers compare numerically at any depth, so `1` matches `1.0`.
#[derive(Debug, Clone)]
pub struct ConstantValidator {
    constant: Value,
}

impl ConstantValidator {
    pub fn new(constant: impl Into<Value>) -> Self {
        Self {
            constant: constant.into(),
        }
    }

    /// The expected value.
    pub fn constant(&self) -> &Value {
        &self.constant
    }

}

/// Deep JSON equality where numbers compare by value, so `1` equals `1.0`.
pub(crate) fn json_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x == y || x.as_f64() == y.as_f64(),
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(a, b)| json_equal(a, b))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(key, a)| y.get(key).is_some_and(|b| json_equal(a, b)))
        }
        (a, b) => a == b,
    }
}

impl Validate for ConstantValidator {
    fn validate(&self, value: &Value, _: &ValidationOptions) -> Result<Value, ValidationError> {
        if json_equal(&self.constant, value) {
            Ok(self.constant.clone())
        } else {
            Err(ValidationError::single(format!(
                "Value does not match constant {}",
                self.constant
            )))
        }
    }

    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Constant
    }
}

impl crate::description::Resolve for ConstantValidator {
    fn resolve(&self) -> Result<Validator, SchemaError> {
        Ok(Validator::new(self.clone()))
    }
}
