use serde_json::Value;

use crate::description::{Description, Resolve};
use crate::error::{value_type_name, ErrorBuilder, SchemaError, ValidationError};
use crate::options::ValidationOptions;
use crate::primitives::{json_equal, AnyValidator};
use crate::schema::{Validate, Validator, ValidatorKind};

/// Declaration of an array validator. Created via [`validus::array()`](crate::array).
///
/// # Example
/// ```
/// use serde_json::json;
/// use validus::prelude::*;
///
/// let tags = validus::array(validus::string().min_length(1))
///     .min_items(1)
///     .max_items(10)
///     .unique_items();
/// let options = ValidationOptions::default();
/// assert!(validus::validate(tags.clone(), &json!(["a", "b"]), options).is_ok());
/// assert!(validus::validate(tags, &json!(["a", "a"]), options).is_err());
/// ```
#[derive(Clone)]
pub struct ArraySchema {
    items: Description,
    min_items: usize,
    max_items: usize,
    unique_items: bool,
}

impl ArraySchema {
    pub fn new(items: impl Into<Description>) -> Self {
        Self {
            items: items.into(),
            min_items: 0,
            max_items: usize::MAX,
            unique_items: false,
        }
    }

    /// Minimum number of elements.
    pub fn min_items(mut self, len: usize) -> Self {
        self.min_items = len;
        self
    }

    /// Maximum number of elements.
    pub fn max_items(mut self, len: usize) -> Self {
        self.max_items = len;
        self
    }

    /// Reject elements equal to an earlier element.
    pub fn unique_items(mut self) -> Self {
        self.unique_items = true;
        self
    }
}

impl Default for ArraySchema {
    fn default() -> Self {
        Self::new(AnyValidator)
    }
}

impl Resolve for ArraySchema {
    fn resolve(&self) -> Result<Validator, SchemaError> {
        if self.min_items > self.max_items {
            return Err(SchemaError::InvertedBounds {
                min_name: "minItems",
                max_name: "maxItems",
                min: self.min_items.to_string(),
                max: self.max_items.to_string(),
            });
        }
        Ok(Validator::new(ArrayValidator {
            items: self.items.resolve()?,
            min_items: self.min_items,
            max_items: self.max_items,
            unique_items: self.unique_items,
        }))
    }
}

/// Validates element count, every element, and optionally uniqueness.
///
/// Element failures are collected per index; the output is a new array.
/// Uniqueness is checked on validated elements, so two inputs converting to
/// the same value are duplicates.
pub struct ArrayValidator {
    items: Validator,
    min_items: usize,
    max_items: usize,
    unique_items: bool,
}

impl ArrayValidator {
    pub fn items(&self) -> &Validator {
        &self.items
    }

    pub fn min_items(&self) -> usize {
        self.min_items
    }

    /// `usize::MAX` when unbounded.
    pub fn max_items(&self) -> usize {
        self.max_items
    }

    pub fn unique_items(&self) -> bool {
        self.unique_items
    }
}

impl Validate for ArrayValidator {
    fn validate(&self, value: &Value, options: &ValidationOptions) -> Result<Value, ValidationError> {
        let arr = value.as_array().ok_or_else(|| {
            ValidationError::single(format!(
                "Value is not an array, received {}",
                value_type_name(value)
            ))
        })?;

        if arr.len() < self.min_items {
            return Err(ValidationError::single(format!(
                "Array must have a minimum length of {}",
                self.min_items
            )));
        }
        if arr.len() > self.max_items {
            return Err(ValidationError::single(format!(
                "Array must have a maximum length of {}",
                self.max_items
            )));
        }

        let mut builder = ErrorBuilder::new();
        let mut results: Vec<Value> = Vec::with_capacity(arr.len());
        // input index of each entry in `results`, for duplicate reports
        let mut origins: Vec<usize> = Vec::with_capacity(arr.len());

        for (i, item) in arr.iter().enumerate() {
            match self.items.validate(item, options) {
                Ok(v) => {
                    if self.unique_items {
                        if let Some(pos) = results.iter().position(|seen| json_equal(seen, &v)) {
                            builder.record_at(
                                format!("Duplicate of item at index {}", origins[pos]),
                                i,
                            );
                            continue;
                        }
                    }
                    results.push(v);
                    origins.push(i);
                }
                Err(e) => {
                    builder.record_at(e, i);
                }
            }
        }

        builder.assert(Value::Array(results))
    }

    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Array
    }
}
