use serde_json::Value;

use crate::error::{SchemaError, ValidationError};
use crate::options::ValidationOptions;
use crate::schema::{Validate, Validator, ValidatorKind};

/// Validator that accepts any JSON value. Created via [`validus::any()`](crate::any).
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyValidator;

impl AnyValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validate for AnyValidator {
    fn validate(&self, value: &Value, _: &ValidationOptions) -> Result<Value, ValidationError> {
        Ok(value.clone())
    }

    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Any
    }
}

impl crate::description::Resolve for AnyValidator {
    fn resolve(&self) -> Result<Validator, SchemaError> {
        Ok(Validator::new(*self))
    }
}
