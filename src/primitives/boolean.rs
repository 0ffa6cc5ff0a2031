use serde_json::Value;

use crate::error::{value_type_name, SchemaError, ValidationError};
use crate::options::ValidationOptions;
use crate::schema::{Validate, Validator, ValidatorKind};

/// Validator for booleans. Created via [`validus::boolean()`](crate::boolean).
#[derive(Debug, Clone, Default)]
pub struct BooleanValidator {
    from_string: bool,
}

impl BooleanValidator {
    pub fn new() -> Self {
        Self { from_string: false }
    }

    /// Also accept the strings `"true"` and `"false"` (case-insensitive),
    /// converting them to booleans.
    pub fn from_string(mut self) -> Self {
        self.from_string = true;
        self
    }

    pub fn accepts_strings(&self) -> bool {
        self.from_string
    }
}

impl Validate for BooleanValidator {
    fn validate(&self, value: &Value, _: &ValidationOptions) -> Result<Value, ValidationError> {
        match value {
            Value::Bool(_) => Ok(value.clone()),
            Value::String(s) if self.from_string => match s.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                _ => Err(ValidationError::single(
                    "Boolean can not be parsed from string",
                )),
            },
            _ => Err(ValidationError::single(format!(
                "Value is not a boolean, received {}",
                value_type_name(value)
            ))),
        }
    }

    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Boolean
    }
}

impl crate::description::Resolve for BooleanValidator {
    fn resolve(&self) -> Result<Validator, SchemaError> {
        Ok(Validator::new(self.clone()))
    }
}
