use serde_json::Value;

use crate::error::ValidationError;

/// Sources [`validate_json`](crate::validate_json) can read a value from.
///
/// Text and bytes are parsed as JSON; a `Value` is used as-is. With the
/// `std` feature a `Path` names a JSON file to read. Anything that does not
/// yield a value fails with one root issue, like any other invalid data.
pub trait Input {
    fn to_json_value(&self) -> Result<Value, ValidationError>;
}

fn invalid_json(err: serde_json::Error) -> ValidationError {
    ValidationError::single(format!("Invalid JSON: {}", err))
}

impl Input for Value {
    fn to_json_value(&self) -> Result<Value, ValidationError> {
        Ok(self.clone())
    }
}

impl Input for str {
    fn to_json_value(&self) -> Result<Value, ValidationError> {
        serde_json::from_str(self).map_err(invalid_json)
    }
}

impl Input for String {
    fn to_json_value(&self) -> Result<Value, ValidationError> {
        self.as_str().to_json_value()
    }
}

impl Input for [u8] {
    fn to_json_value(&self) -> Result<Value, ValidationError> {
        serde_json::from_slice(self).map_err(invalid_json)
    }
}

impl Input for Vec<u8> {
    fn to_json_value(&self) -> Result<Value, ValidationError> {
        self.as_slice().to_json_value()
    }
}

#[cfg(feature = "std")]
impl Input for std::path::Path {
    fn to_json_value(&self) -> Result<Value, ValidationError> {
        let bytes = std::fs::read(self).map_err(|e| {
            ValidationError::single(format!("Failed to read file {}: {}", self.display(), e))
        })?;
        bytes.as_slice().to_json_value()
    }
}

#[cfg(feature = "std")]
impl Input for std::path::PathBuf {
    fn to_json_value(&self) -> Result<Value, ValidationError> {
        self.as_path().to_json_value()
    }
}
