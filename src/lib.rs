//! # validus: runtime validation of JSON values
//!
//! `validus` checks arbitrary [`serde_json::Value`]s against composable,
//! declarative descriptions and returns a validated copy, or one
//! [`ValidationError`] listing every failure with its exact path.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use validus::prelude::*;
//!
//! let user = validus::object()
//!     .property("name", validus::string().min_length(2))
//!     .property("roles", validus::array(validus::string()).unique_items())
//!     .property("nickname", validus::optional(validus::string()));
//!
//! let options = ValidationOptions::default();
//! let ok = validus::validate(user.clone(), &json!({"name": "Alex", "roles": ["admin"]}), options);
//! assert_eq!(ok.unwrap(), json!({"name": "Alex", "roles": ["admin"]}));
//!
//! let err = validus::validate(user, &json!({"roles": ["a", "a"]}), options).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Found 2 validation errors\n  name: Required property missing\n  roles[1]: Duplicate of item at index 0"
//! );
//! ```
//!
//! ## Descriptions
//!
//! Anywhere a validator is expected, a shorthand [`Description`] works too:
//! `()` and literals match exactly, JSON arrays are tuples, JSON objects are
//! object schemas, and resolved [`Validator`]s are reused as-is.

pub mod collections;
pub mod combinators;
pub mod description;
pub mod error;
pub mod format;
pub mod generate;
pub mod input;
#[cfg(feature = "json-schema")]
pub mod json_schema;
mod macros;
pub mod modifiers;
pub mod object;
pub mod options;
pub mod primitives;
pub mod schema;

use serde_json::Value;

pub use description::{resolve, Description, Resolve};
pub use error::{Error, SchemaError, ValidationError};
pub use options::ValidationOptions;
pub use schema::{Validate, Validator, ValidatorKind};

// Re-export serde_json and regex_lite for descriptions built by callers
#[doc(hidden)]
pub use serde_json;

pub use regex_lite;

macros::impl_into_description!(
    primitives::AnyValidator,
    primitives::BooleanValidator,
    primitives::ConstantValidator,
    primitives::DateValidator,
    primitives::NumberValidator,
    primitives::StringValidator,
    collections::ArraySchema,
    collections::TupleSchema,
    combinators::OneOfSchema,
    combinators::AllOfSchema,
    modifiers::DefaultSchema,
);

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Resolve `description` and validate `value` against it.
///
/// Returns the validated (possibly converted) copy of `value`. A malformed
/// description yields [`Error::Schema`], invalid data [`Error::Validation`].
pub fn validate(
    description: impl Into<Description>,
    value: &Value,
    options: ValidationOptions,
) -> Result<Value, Error> {
    let validator = resolve(description)?;
    crate::validus_event!(debug, kind = ?validator.kind(), "validating value");
    validator.validate(value, &options).map_err(|e| {
        crate::validus_event!(debug, issues = e.len(), "validation failed");
        Error::Validation(e)
    })
}

/// Parse `input` as JSON (text, bytes, file path or value) and validate it.
///
/// ```
/// use validus::prelude::*;
///
/// let point = validus::tuple([validus::number(), validus::number()]);
/// let options = ValidationOptions::default();
/// assert!(validus::validate_json(point.clone(), "[1, 2]", options).is_ok());
/// assert!(validus::validate_json(point, "[1, 2", options).is_err());
/// ```
pub fn validate_json<I: input::Input + ?Sized>(
    description: impl Into<Description>,
    input: &I,
    options: ValidationOptions,
) -> Result<Value, Error> {
    let validator = resolve(description)?;
    let value = input.to_json_value()?;
    Ok(validator.validate(&value, &options)?)
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Create a validator accepting any value.
pub fn any() -> primitives::AnyValidator {
    primitives::AnyValidator::new()
}

/// Create a boolean validator.
pub fn boolean() -> primitives::BooleanValidator {
    primitives::BooleanValidator::new()
}

/// Create a number validator.
pub fn number() -> primitives::NumberValidator {
    primitives::NumberValidator::new()
}

/// Create a string validator.
pub fn string() -> primitives::StringValidator {
    primitives::StringValidator::new()
}

/// Create a date validator.
pub fn date() -> primitives::DateValidator {
    primitives::DateValidator::new()
}

/// Create a validator matching exactly `value`.
pub fn constant(value: impl Into<Value>) -> primitives::ConstantValidator {
    primitives::ConstantValidator::new(value)
}

/// Create an array validator whose elements match `items`.
pub fn array(items: impl Into<Description>) -> collections::ArraySchema {
    collections::ArraySchema::new(items)
}

/// Create a tuple validator from fixed and [`rest`] members.
///
/// ```
/// use serde_json::json;
/// use validus::prelude::*;
///
/// let t = validus::tuple([TupleMember::from("id"), validus::rest(validus::number())]);
/// let options = ValidationOptions::default();
/// assert!(validus::validate(t.clone(), &json!(["id"]), options).is_ok());
/// assert!(validus::validate(t, &json!(["id", 1, 2, 3]), options).is_ok());
/// ```
pub fn tuple<I, M>(members: I) -> collections::TupleSchema
where
    I: IntoIterator<Item = M>,
    M: Into<collections::TupleMember>,
{
    collections::TupleSchema::new(members.into_iter().map(Into::into).collect())
}

/// A tuple member matching zero or more consecutive elements.
pub fn rest(description: impl Into<Description>) -> collections::TupleMember {
    collections::TupleMember::rest(description)
}

/// Create an empty object declaration.
pub fn object() -> object::ObjectSchema {
    object::ObjectSchema::new()
}

/// An object property that may be absent.
pub fn optional(description: impl Into<Description>) -> object::Property {
    object::Property::new(description).optional()
}

/// An object property marked read-only.
pub fn readonly(description: impl Into<Description>) -> object::Property {
    object::Property::new(description).readonly()
}

/// The first of `members` to accept the value wins.
pub fn one_of<I, D>(members: I) -> combinators::OneOfSchema
where
    I: IntoIterator<Item = D>,
    D: Into<Description>,
{
    combinators::OneOfSchema::new(members)
}

/// Every one of `members` must accept the value, in order.
pub fn all_of<I, D>(members: I) -> combinators::AllOfSchema
where
    I: IntoIterator<Item = D>,
    D: Into<Description>,
{
    combinators::AllOfSchema::new(members)
}

/// Use `default_value` when an object property is absent.
pub fn with_default(
    description: impl Into<Description>,
    default_value: impl Into<Value>,
) -> modifiers::DefaultSchema {
    modifiers::DefaultSchema::new(description, default_value)
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Common imports for working with `validus`.
pub mod prelude {
    pub use crate::collections::{
        ArraySchema, ArrayValidator, TupleMember, TupleSchema, TupleSlot, TupleValidator,
    };
    pub use crate::combinators::{AllOfSchema, AllOfValidator, OneOfSchema, OneOfValidator};
    pub use crate::description::{resolve, Description, Resolve};
    pub use crate::error::{
        Error, ErrorBuilder, PathSegment, SchemaError, ValidationError, ValidationIssue,
    };
    pub use crate::format::{flatten_error, prettify_error};
    pub use crate::input::Input;
    pub use crate::modifiers::{DefaultSchema, DefaultValidator};
    pub use crate::object::{ObjectProperty, ObjectSchema, ObjectValidator, Property};
    pub use crate::options::ValidationOptions;
    pub use crate::primitives::{
        AnyValidator, BooleanValidator, ConstantValidator, DateValidator, NumberValidator,
        StringValidator,
    };
    pub use crate::schema::{Validate, Validator, ValidatorKind};
}
