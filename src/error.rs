use std::fmt;

/// A segment in a validation error path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serialize", serde(untagged))]
pub enum PathSegment {
    /// Object property name.
    Key(String),
    /// Array or tuple position.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(name) => write!(f, ".{}", name),
            PathSegment::Index(idx) => write!(f, "[{}]", idx),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<&String> for PathSegment {
    fn from(key: &String) -> Self {
        PathSegment::Key(key.clone())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// Render a path the way error messages show it: keys joined with `.`,
/// indices as `[n]`, no leading dot.
///
/// ```
/// use validus::error::{path_to_string, PathSegment};
///
/// let path = vec![
///     PathSegment::from("users"),
///     PathSegment::from(2),
///     PathSegment::from("email"),
/// ];
/// assert_eq!(path_to_string(&path), "users[2].email");
/// ```
pub fn path_to_string(path: &[PathSegment]) -> String {
    let mut out = String::new();
    for (i, segment) in path.iter().enumerate() {
        match segment {
            PathSegment::Key(key) if i == 0 => out.push_str(key),
            other => out.push_str(&other.to_string()),
        }
    }
    out
}

/// A single failure located at `path` inside the validated value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct ValidationIssue {
    pub path: Vec<PathSegment>,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", path_to_string(&self.path), self.message)
        }
    }
}

/// The data error raised by a validation call.
///
/// One call produces at most one `ValidationError`, carrying every failure
/// found during the pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    /// Create an error with a single issue at the root path.
    pub fn single(message: impl Into<String>) -> Self {
        Self {
            issues: vec![ValidationIssue {
                path: vec![],
                message: message.into(),
            }],
        }
    }

    /// Prepend a path segment to all issues (used when a nested failure
    /// surfaces through an object key or array index).
    pub fn with_prefix(mut self, segment: impl Into<PathSegment>) -> Self {
        let segment = segment.into();
        for issue in &mut self.issues {
            issue.path.insert(0, segment.clone());
        }
        self
    }

    /// Number of individual issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Check if there are no issues.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Combined human-readable message (same as `Display`).
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        ValidationError::single(message)
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        ValidationError::single(message)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.issues.len();
        write!(
            f,
            "Found {} validation error{}",
            count,
            if count == 1 { "" } else { "s" }
        )?;
        for issue in &self.issues {
            write!(f, "\n  {}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Accumulates failures for one composite validation call.
///
/// Created at the start of an object/array/tuple `validate` call and
/// consumed by [`assert`](Self::assert) at the end of it.
///
/// # Example
/// ```
/// use validus::error::{ErrorBuilder, ValidationError};
///
/// let nested = ValidationError::single("Value is not a number").with_prefix("b");
///
/// let mut builder = ErrorBuilder::new();
/// builder.record_at(nested, "a");
/// builder.record("Something else");
///
/// let err = builder.assert(()).unwrap_err();
/// assert_eq!(err.issues.len(), 2);
/// assert_eq!(err.issues[0].to_string(), "a.b: Value is not a number");
/// ```
#[derive(Debug, Default)]
pub struct ErrorBuilder {
    issues: Vec<ValidationIssue>,
}

impl ErrorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure at the root path. A `ValidationError` keeps its
    /// own issue paths; a message becomes a single issue.
    pub fn record(&mut self, failure: impl Into<ValidationError>) -> &mut Self {
        self.issues.extend(failure.into().issues);
        self
    }

    /// Record a failure under `key`, prefixing every issue path with it.
    pub fn record_at(
        &mut self,
        failure: impl Into<ValidationError>,
        key: impl Into<PathSegment>,
    ) -> &mut Self {
        self.issues.extend(failure.into().with_prefix(key).issues);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Return `value` when nothing was recorded, otherwise one error with
    /// every recorded issue.
    pub fn assert<T>(self, value: T) -> Result<T, ValidationError> {
        if self.issues.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError {
                issues: self.issues,
            })
        }
    }
}

/// A malformed validation description. These are programmer errors raised
/// while resolving a description, never while checking data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    #[error("Constraint `{min_name}` ({min}) is greater than `{max_name}` ({max})")]
    InvertedBounds {
        min_name: &'static str,
        max_name: &'static str,
        min: String,
        max: String,
    },
    #[error("Constraint `multipleOf` must be greater than zero, got {0}")]
    InvalidMultipleOf(f64),
    #[error("Constant number {0} is not finite")]
    NonFiniteConstant(f64),
    #[error("Default value does not satisfy its validator: {0}")]
    InvalidDefault(ValidationError),
}

/// Error returned by the [`validate`](crate::validate) entry point, which
/// both resolves a description and validates a value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// The validation failure, if this is one.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(e) => Some(e),
            Error::Schema(_) => None,
        }
    }
}

/// Returns the JSON type name for a value.
#[doc(hidden)]
pub fn value_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
