use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, TimeZone, Utc};
use serde_json::Value;

use crate::error::{value_type_name, SchemaError, ValidationError};
use crate::options::ValidationOptions;
use crate::schema::{Validate, Validator, ValidatorKind};

/// Validator for dates. Created via [`validus::date()`](crate::date).
///
/// Accepts RFC 3339 strings, plain `YYYY-MM-DD` dates (midnight UTC) and
/// integer milliseconds since the Unix epoch, for years 0 through 9999.
/// The output is always an RFC 3339
/// string in UTC with millisecond precision.
///
/// # Example
/// ```
/// use serde_json::json;
/// use validus::prelude::*;
///
/// let options = ValidationOptions::default();
/// let out = validus::validate(validus::date(), &json!(0), options).unwrap();
/// assert_eq!(out, json!("1970-01-01T00:00:00.000Z"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DateValidator {
    from: Option<DateTime<Utc>>,
    until: Option<DateTime<Utc>>,
}

impl DateValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Earliest accepted instant (inclusive).
    pub fn from(mut self, date: DateTime<Utc>) -> Self {
        self.from = Some(date);
        self
    }

    /// Latest accepted instant (inclusive).
    pub fn until(mut self, date: DateTime<Utc>) -> Self {
        self.until = Some(date);
        self
    }

    pub fn get_from(&self) -> Option<DateTime<Utc>> {
        self.from
    }

    pub fn get_until(&self) -> Option<DateTime<Utc>> {
        self.until
    }

    fn parse(value: &Value) -> Option<DateTime<Utc>> {
        let date = match value {
            Value::String(s) => DateTime::parse_from_rfc3339(s)
                .map(|d| d.with_timezone(&Utc))
                .ok()
                .or_else(|| {
                    NaiveDate::parse_from_str(s, "%Y-%m-%d")
                        .ok()
                        .and_then(|d| d.and_hms_opt(0, 0, 0))
                        .map(|d| d.and_utc())
                }),
            Value::Number(n) => n
                .as_i64()
                .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
            _ => None,
        }?;
        // RFC 3339 only has four-digit years
        (0..=9999).contains(&date.year()).then_some(date)
    }
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl Validate for DateValidator {
    fn validate(&self, value: &Value, _: &ValidationOptions) -> Result<Value, ValidationError> {
        let date = Self::parse(value).ok_or_else(|| {
            ValidationError::single(format!(
                "Value is not a valid date, received {}",
                value_type_name(value)
            ))
        })?;
        if let Some(from) = &self.from {
            if date < *from {
                return Err(ValidationError::single(format!(
                    "Date is before {}",
                    format_date(from)
                )));
            }
        }
        if let Some(until) = &self.until {
            if date > *until {
                return Err(ValidationError::single(format!(
                    "Date is after {}",
                    format_date(until)
                )));
            }
        }
        Ok(Value::String(format_date(&date)))
    }

    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Date
    }
}

impl crate::description::Resolve for DateValidator {
    fn resolve(&self) -> Result<Validator, SchemaError> {
        if let (Some(from), Some(until)) = (&self.from, &self.until) {
            if from > until {
                return Err(SchemaError::InvertedBounds {
                    min_name: "from",
                    max_name: "until",
                    min: format_date(from),
                    max: format_date(until),
                });
            }
        }
        Ok(Validator::new(self.clone()))
    }
}
