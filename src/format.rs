use std::collections::BTreeMap;

use crate::error::{path_to_string, PathSegment, ValidationError};

/// Flat error structure, useful for form validation.
///
/// - `form_errors`: issues at the root path
/// - `field_errors`: issues grouped by their first path segment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct FlatError {
    pub form_errors: Vec<String>,
    pub field_errors: BTreeMap<String, Vec<String>>,
}

/// Flatten a `ValidationError` into a field-based structure. Messages of
/// nested issues keep the rest of their path as a prefix.
///
/// # Example
/// ```
/// use validus::error::ValidationError;
/// use validus::format::flatten_error;
///
/// let err = ValidationError::single("Value is not a number").with_prefix("b").with_prefix("a");
/// let flat = flatten_error(&err);
/// assert_eq!(flat.field_errors["a"], vec!["b: Value is not a number".to_string()]);
/// ```
pub fn flatten_error(error: &ValidationError) -> FlatError {
    let mut flat = FlatError::default();

    for issue in &error.issues {
        let Some((first, rest)) = issue.path.split_first() else {
            flat.form_errors.push(issue.message.clone());
            continue;
        };
        let key = match first {
            PathSegment::Key(key) => key.clone(),
            PathSegment::Index(idx) => idx.to_string(),
        };
        let message = if rest.is_empty() {
            issue.message.clone()
        } else {
            format!("{}: {}", path_to_string(rest), issue.message)
        };
        flat.field_errors.entry(key).or_default().push(message);
    }

    flat
}

/// Format a `ValidationError` into a bullet list.
///
/// # Example output
/// ```text
/// ✖ Required property missing
///   → at name
/// ✖ Duplicate of item at index 0
///   → at tags[2]
/// ```
pub fn prettify_error(error: &ValidationError) -> String {
    let mut lines = Vec::new();

    for issue in &error.issues {
        lines.push(format!("✖ {}", issue.message));
        if !issue.path.is_empty() {
            lines.push(format!("  → at {}", path_to_string(&issue.path)));
        }
    }

    lines.join("\n")
}
