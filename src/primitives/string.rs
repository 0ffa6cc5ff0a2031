use regex_lite::Regex;
use serde_json::Value;

use crate::error::{value_type_name, SchemaError, ValidationError};
use crate::options::ValidationOptions;
use crate::schema::{Validate, Validator, ValidatorKind};

/// Validator for strings. Created via [`validus::string()`](crate::string).
///
/// Lengths are counted in characters, not bytes.
///
/// # Example
/// ```
/// use serde_json::json;
/// use validus::prelude::*;
///
/// let code = validus::string()
///     .min_length(3)
///     .max_length(3)
///     .pattern(regex_lite::Regex::new("^[A-Z]+$").unwrap());
/// let options = ValidationOptions::default();
/// assert!(validus::validate(code.clone(), &json!("EUR"), options).is_ok());
/// assert!(validus::validate(code, &json!("eur"), options).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringValidator {
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<Regex>,
}

impl StringValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    /// The string must match `re` (anchors are up to the caller).
    pub fn pattern(mut self, re: Regex) -> Self {
        self.pattern = Some(re);
        self
    }

    pub fn get_min_length(&self) -> Option<usize> {
        self.min_length
    }

    pub fn get_max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub fn get_pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }
}

impl Validate for StringValidator {
    fn validate(&self, value: &Value, _: &ValidationOptions) -> Result<Value, ValidationError> {
        let s = value.as_str().ok_or_else(|| {
            ValidationError::single(format!(
                "Value is not a string, received {}",
                value_type_name(value)
            ))
        })?;

        let len = s.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(ValidationError::single(format!(
                    "String must have a minimum length of {}",
                    min
                )));
            }
        }
        if let Some(max) = self.max_length {
            if len > max {
                return Err(ValidationError::single(format!(
                    "String must have a maximum length of {}",
                    max
                )));
            }
        }
        if let Some(re) = &self.pattern {
            if !re.is_match(s) {
                return Err(ValidationError::single(format!(
                    "String does not match required pattern /{}/",
                    re.as_str()
                )));
            }
        }
        Ok(value.clone())
    }

    fn kind(&self) -> ValidatorKind {
        ValidatorKind::String
    }
}

impl crate::description::Resolve for StringValidator {
    fn resolve(&self) -> Result<Validator, SchemaError> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(SchemaError::InvertedBounds {
                    min_name: "minLength",
                    max_name: "maxLength",
                    min: min.to_string(),
                    max: max.to_string(),
                });
            }
        }
        Ok(Validator::new(self.clone()))
    }
}
