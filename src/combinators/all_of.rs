use serde_json::Value;

use crate::description::{Description, Resolve};
use crate::error::{SchemaError, ValidationError};
use crate::options::ValidationOptions;
use crate::schema::{Validate, Validator, ValidatorKind};

/// Declaration of an "all of" chain. Created via [`validus::all_of()`](crate::all_of).
#[derive(Clone, Debug)]
pub struct AllOfSchema {
    members: Vec<Description>,
}

impl AllOfSchema {
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

impl Resolve for AllOfSchema {
    fn resolve(&self) -> Result<Validator, SchemaError> {
        let members = self
            .members
            .iter()
            .map(Description::resolve)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Validator::new(AllOfValidator { members }))
    }
}

/// Threads the value through every member in order, each one receiving the
/// previous member's output.
///
/// The first failing member ends validation; its error is returned as-is.
///
/// # Example
/// ```
/// use serde_json::json;
/// use validus::prelude::*;
///
/// let code = validus::all_of([
///     validus::string().min_length(3),
///     validus::string().max_length(3),
/// ]);
/// let err = validus::validate(code, &json!(""), ValidationOptions::default()).unwrap_err();
/// assert_eq!(err.validation().unwrap().issues.len(), 1);
/// ```
pub struct AllOfValidator {
    members: Vec<Validator>,
}

impl AllOfValidator {
    pub fn members(&self) -> &[Validator] {
        &self.members
    }
}

impl Validate for AllOfValidator {
    fn validate(&self, value: &Value, options: &ValidationOptions) -> Result<Value, ValidationError> {
        let mut current = value.clone();
        for member in &self.members {
            current = member.validate(&current, options)?;
        }
        Ok(current)
    }

    /// The first member produces the value for an absent input; the rest
    /// validate it as usual.
    fn validate_missing(&self, options: &ValidationOptions) -> Result<Value, ValidationError> {
        let Some((first, rest)) = self.members.split_first() else {
            return Err(ValidationError::single("Value is missing"));
        };
        let mut current = first.validate_missing(options)?;
        for member in rest {
            current = member.validate(&current, options)?;
        }
        Ok(current)
    }

    fn kind(&self) -> ValidatorKind {
        ValidatorKind::AllOf
    }
}
