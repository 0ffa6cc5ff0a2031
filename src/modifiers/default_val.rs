use serde_json::Value;

use crate::description::{Description, Resolve};
use crate::error::{SchemaError, ValidationError};
use crate::options::ValidationOptions;
use crate::schema::{Validate, Validator, ValidatorKind};

/// Declaration of a validator with a default value.
/// Created via [`validus::with_default()`](crate::with_default).
///
/// The default itself must satisfy the wrapped description; this is checked
/// once, when the declaration is resolved.
#[derive(Clone)]
pub struct DefaultSchema {
    inner: Description,
    default_value: Value,
}

impl DefaultSchema {
    pub fn new(inner: impl Into<Description>, default_value: impl Into<Value>) -> Self {
        Self {
            inner: inner.into(),
            default_value: default_value.into(),
        }
    }
}

impl Resolve for DefaultSchema {
    fn resolve(&self) -> Result<Validator, SchemaError> {
        let inner = self.inner.resolve()?;
        let default_value = inner
            .validate(&self.default_value, &ValidationOptions::default())
            .map_err(SchemaError::InvalidDefault)?;
        Ok(Validator::new(DefaultValidator {
            inner,
            default_value,
        }))
    }
}

/// Produces a default value when the input is absent, delegates otherwise.
///
/// - absent (missing object key) → the default value.
/// - present → whatever the wrapped validator returns, including its errors.
pub struct DefaultValidator {
    inner: Validator,
    default_value: Value,
}

impl DefaultValidator {
    /// Access the inner validator (for generators).
    pub fn inner(&self) -> &Validator {
        &self.inner
    }

    pub fn default_value(&self) -> &Value {
        &self.default_value
    }
}

impl Validate for DefaultValidator {
    fn validate(&self, value: &Value, options: &ValidationOptions) -> Result<Value, ValidationError> {
        self.inner.validate(value, options)
    }

    fn validate_missing(&self, _: &ValidationOptions) -> Result<Value, ValidationError> {
        Ok(self.default_value.clone())
    }

    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Default
    }
}
