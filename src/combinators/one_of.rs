use serde_json::Value;

use crate::description::{Description, Resolve};
use crate::error::{ErrorBuilder, SchemaError, ValidationError};
use crate::options::ValidationOptions;
use crate::schema::{Validate, Validator, ValidatorKind};

/// Declaration of a "one of" union. Created via [`validus::one_of()`](crate::one_of).
#[derive(Clone, Debug)]
pub struct OneOfSchema {
    members: Vec<Description>,
}

impl OneOfSchema {
    pub fn new<I, D>(members: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Description>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}

impl Resolve for OneOfSchema {
    fn resolve(&self) -> Result<Validator, SchemaError> {
        let members = self
            .members
            .iter()
            .map(Description::resolve)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Validator::new(OneOfValidator { members }))
    }
}

/// Tries each member in order; the first success wins.
///
/// When every member fails, the failures of all of them are reported
/// together.
///
/// # Example
/// ```
/// use serde_json::json;
/// use validus::prelude::*;
///
/// let id = validus::one_of([Description::from(validus::string()), validus::number().into()]);
/// let options = ValidationOptions::default();
/// assert!(validus::validate(id.clone(), &json!("abc"), options).is_ok());
///
/// let err = validus::validate(id, &json!(true), options).unwrap_err();
/// assert_eq!(err.validation().unwrap().issues.len(), 2);
/// ```
pub struct OneOfValidator {
    members: Vec<Validator>,
}

impl OneOfValidator {
    pub fn members(&self) -> &[Validator] {
        &self.members
    }
}

impl Validate for OneOfValidator {
    fn validate(&self, value: &Value, options: &ValidationOptions) -> Result<Value, ValidationError> {
        let mut builder = ErrorBuilder::new();
        for member in &self.members {
            match member.validate(value, options) {
                Ok(v) => return Ok(v),
                Err(e) => {
                    builder.record(e);
                }
            }
        }
        if builder.is_empty() {
            builder.record("No validation matched");
        }
        builder.assert(Value::Null)
    }

    fn validate_missing(&self, options: &ValidationOptions) -> Result<Value, ValidationError> {
        let mut builder = ErrorBuilder::new();
        for member in &self.members {
            match member.validate_missing(options) {
                Ok(v) => return Ok(v),
                Err(e) => {
                    builder.record(e);
                }
            }
        }
        if builder.is_empty() {
            builder.record("Value is missing");
        }
        builder.assert(Value::Null)
    }

    fn kind(&self) -> ValidatorKind {
        ValidatorKind::OneOf
    }
}
