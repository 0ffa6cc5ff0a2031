use serde::{Deserialize, Serialize};

/// Flags read (never mutated) during one validation call.
///
/// All flags default to `false`. The record deserializes from camelCase
/// keys, so it can be loaded straight from a configuration file:
///
/// ```
/// use validus::ValidationOptions;
///
/// let options: ValidationOptions =
///     serde_json::from_str(r#"{"stripAdditionalProperties": true}"#).unwrap();
/// assert!(options.strip_additional_properties);
/// assert!(!options.strip_forbidden_properties);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationOptions {
    /// Silently drop object keys matched by no declared property instead of
    /// reporting them as unknown.
    pub strip_additional_properties: bool,
    /// Silently drop forbidden object keys instead of reporting them.
    pub strip_forbidden_properties: bool,
    /// Drop optional properties whose value is `null` from the output.
    pub strip_optional_nulls: bool,
    /// Do not report required properties that are absent.
    pub partial_validation: bool,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strip_additional_properties(mut self, strip: bool) -> Self {
        self.strip_additional_properties = strip;
        self
    }

    pub fn strip_forbidden_properties(mut self, strip: bool) -> Self {
        self.strip_forbidden_properties = strip;
        self
    }

    pub fn strip_optional_nulls(mut self, strip: bool) -> Self {
        self.strip_optional_nulls = strip;
        self
    }

    pub fn partial_validation(mut self, partial: bool) -> Self {
        self.partial_validation = partial;
        self
    }
}
