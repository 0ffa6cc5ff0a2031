use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::ValidationError;
use crate::options::ValidationOptions;

/// The kind of a validator, used to dispatch generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidatorKind {
    Any,
    Boolean,
    Number,
    String,
    Date,
    Constant,
    Array,
    Object,
    Tuple,
    OneOf,
    AllOf,
    Default,
    /// A user-defined validator, named by its implementor.
    Custom(&'static str),
}

#[doc(hidden)]
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Core validation trait.
///
/// Every validator implements this trait. Implementations hold no per-call
/// state, so one instance can be shared freely between threads.
///
/// # Example
/// ```
/// use serde_json::{json, Value};
/// use validus::prelude::*;
///
/// struct Even;
///
/// impl Validate for Even {
///     fn validate(&self, value: &Value, _: &ValidationOptions) -> Result<Value, ValidationError> {
///         match value.as_i64() {
///             Some(n) if n % 2 == 0 => Ok(value.clone()),
///             _ => Err(ValidationError::single("Value is not an even integer")),
///         }
///     }
///
///     fn kind(&self) -> ValidatorKind {
///         ValidatorKind::Custom("even")
///     }
/// }
///
/// let even = Validator::new(Even);
/// assert!(validus::validate(validus::array(even), &json!([2, 4]), ValidationOptions::default()).is_ok());
/// ```
pub trait Validate: AsAny + Send + Sync + 'static {
    /// Validate `value`, returning the accepted (possibly converted) copy.
    fn validate(&self, value: &Value, options: &ValidationOptions)
        -> Result<Value, ValidationError>;

    /// Produce a value when the input is absent (a missing object key).
    ///
    /// Most validators cannot, and fail.
    fn validate_missing(&self, _options: &ValidationOptions) -> Result<Value, ValidationError> {
        Err(ValidationError::single("Value is missing"))
    }

    fn kind(&self) -> ValidatorKind;
}

/// A resolved, shareable validator.
///
/// Cloning is cheap and keeps identity: clones compare equal under
/// [`ptr_eq`](Self::ptr_eq).
#[derive(Clone)]
pub struct Validator(Arc<dyn Validate>);

impl Validator {
    pub fn new<V: Validate>(validator: V) -> Self {
        Self(Arc::new(validator))
    }

    pub fn validate(
        &self,
        value: &Value,
        options: &ValidationOptions,
    ) -> Result<Value, ValidationError> {
        self.0.validate(value, options)
    }

    pub fn validate_missing(&self, options: &ValidationOptions) -> Result<Value, ValidationError> {
        self.0.validate_missing(options)
    }

    pub fn kind(&self) -> ValidatorKind {
        self.0.kind()
    }

    /// Access the concrete validator, e.g. to read its constraints.
    pub fn downcast_ref<T: Validate>(&self) -> Option<&T> {
        self.0.as_ref().as_any().downcast_ref::<T>()
    }

    /// Whether both handles point at the same validator instance.
    pub fn ptr_eq(&self, other: &Validator) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Validator").field(&self.kind()).finish()
    }
}
