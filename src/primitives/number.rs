use serde_json::{Number, Value};

use crate::error::{value_type_name, SchemaError, ValidationError};
use crate::options::ValidationOptions;
use crate::schema::{Validate, Validator, ValidatorKind};

/// Validator for numbers. Created via [`validus::number()`](crate::number).
///
/// Checks run in a fixed order (integer, multiple, minimum, maximum) and the
/// first failing one is reported.
///
/// # Example
/// ```
/// use serde_json::json;
/// use validus::prelude::*;
///
/// let percent = validus::number().minimum(0.0).maximum(100.0);
/// let options = ValidationOptions::default();
/// assert!(validus::validate(percent.clone(), &json!(42.5), options).is_ok());
/// assert!(validus::validate(percent, &json!(101), options).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NumberValidator {
    minimum: Option<f64>,
    maximum: Option<f64>,
    exclusive_minimum: Option<f64>,
    exclusive_maximum: Option<f64>,
    multiple_of: Option<f64>,
    integer: bool,
    from_string: bool,
}

impl NumberValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum value (inclusive).
    pub fn minimum(mut self, val: f64) -> Self {
        self.minimum = Some(val);
        self
    }

    /// Maximum value (inclusive).
    pub fn maximum(mut self, val: f64) -> Self {
        self.maximum = Some(val);
        self
    }

    /// Value must be strictly greater than `val`.
    pub fn exclusive_minimum(mut self, val: f64) -> Self {
        self.exclusive_minimum = Some(val);
        self
    }

    /// Value must be strictly less than `val`.
    pub fn exclusive_maximum(mut self, val: f64) -> Self {
        self.exclusive_maximum = Some(val);
        self
    }

    pub fn multiple_of(mut self, val: f64) -> Self {
        self.multiple_of = Some(val);
        self
    }

    /// Reject numbers with a fractional part.
    pub fn integer(mut self) -> Self {
        self.integer = true;
        self
    }

    /// Also accept numeric strings, converting them to numbers.
    pub fn from_string(mut self) -> Self {
        self.from_string = true;
        self
    }

    pub fn get_minimum(&self) -> Option<f64> {
        self.minimum
    }

    pub fn get_maximum(&self) -> Option<f64> {
        self.maximum
    }

    pub fn get_exclusive_minimum(&self) -> Option<f64> {
        self.exclusive_minimum
    }

    pub fn get_exclusive_maximum(&self) -> Option<f64> {
        self.exclusive_maximum
    }

    pub fn get_multiple_of(&self) -> Option<f64> {
        self.multiple_of
    }

    pub fn is_integer(&self) -> bool {
        self.integer
    }

    fn parse_string(s: &str) -> Option<Number> {
        let s = s.trim();
        if let Ok(i) = s.parse::<i64>() {
            return Some(i.into());
        }
        s.parse::<f64>().ok().and_then(Number::from_f64)
    }

    fn check(&self, n: f64) -> Result<(), String> {
        if self.integer && n.fract() != 0.0 {
            return Err(format!("Number {} is not an integer", n));
        }
        if let Some(m) = self.multiple_of {
            let q = n / m;
            if (q - q.round()).abs() > 1e-9 {
                return Err(format!("Number {} is not a multiple of {}", n, m));
            }
        }
        if let Some(min) = self.minimum {
            if n < min {
                return Err(format!("Number {} is less than {}", n, min));
            }
        }
        if let Some(min) = self.exclusive_minimum {
            if n <= min {
                return Err(format!("Number {} is less than or equal to {}", n, min));
            }
        }
        if let Some(max) = self.maximum {
            if n > max {
                return Err(format!("Number {} is greater than {}", n, max));
            }
        }
        if let Some(max) = self.exclusive_maximum {
            if n >= max {
                return Err(format!("Number {} is greater than or equal to {}", n, max));
            }
        }
        Ok(())
    }
}

impl Validate for NumberValidator {
    fn validate(&self, value: &Value, _: &ValidationOptions) -> Result<Value, ValidationError> {
        let number = match value {
            Value::Number(n) => n.clone(),
            Value::String(s) if self.from_string => Self::parse_string(s).ok_or_else(|| {
                ValidationError::single("Number can not be parsed from string")
            })?,
            _ => {
                return Err(ValidationError::single(format!(
                    "Value is not a number, received {}",
                    value_type_name(value)
                )))
            }
        };

        // serde_json numbers are always representable as f64
        let n = number.as_f64().unwrap_or(f64::NAN);
        self.check(n).map_err(ValidationError::single)?;
        Ok(Value::Number(number))
    }

    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Number
    }
}

impl crate::description::Resolve for NumberValidator {
    fn resolve(&self) -> Result<Validator, SchemaError> {
        let lower = self.minimum.into_iter().chain(self.exclusive_minimum);
        let upper: Vec<f64> = self
            .maximum
            .into_iter()
            .chain(self.exclusive_maximum)
            .collect();
        for min in lower {
            for &max in &upper {
                if min > max {
                    return Err(SchemaError::InvertedBounds {
                        min_name: "minimum",
                        max_name: "maximum",
                        min: min.to_string(),
                        max: max.to_string(),
                    });
                }
            }
        }
        if let Some(m) = self.multiple_of {
            if m <= 0.0 || !m.is_finite() {
                return Err(SchemaError::InvalidMultipleOf(m));
            }
        }
        Ok(Validator::new(self.clone()))
    }
}
