use serde_json::{Map, Value};

use crate::description::{Description, Resolve};
use crate::error::{value_type_name, ErrorBuilder, SchemaError, ValidationError};
use crate::options::ValidationOptions;
use crate::primitives::AnyValidator;
use crate::schema::{Validate, Validator, ValidatorKind};

/// A declared object property: its description plus the optional and
/// readonly markers.
///
/// Anything convertible into a [`Description`] converts into a required,
/// writable property.
#[derive(Clone, Debug)]
pub struct Property {
    description: Description,
    optional: bool,
    readonly: bool,
}

impl Property {
    pub fn new(description: impl Into<Description>) -> Self {
        Self {
            description: description.into(),
            optional: false,
            readonly: false,
        }
    }

    /// The property may be absent.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Marks the property read-only. Validation is unaffected; generators
    /// read the flag.
    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }
}

/// Declaration of an object validator. Created via [`validus::object()`](crate::object)
/// or from a JSON object description.
///
/// Declarations compose structurally with [`extend`](Self::extend),
/// [`pick`](Self::pick), [`omit`](Self::omit) and [`partial`](Self::partial)
/// before anything is resolved.
///
/// # Unknown property handling
///
/// - no additional rule (default): unknown keys are reported, or dropped
///   with `strip_additional_properties`.
/// - [`additional(desc)`](Self::additional): unknown keys are validated by `desc`.
/// - [`never(key)`](Self::never): `key` is forbidden, reported or dropped
///   with `strip_forbidden_properties`.
///
/// # Example
/// ```
/// use serde_json::json;
/// use validus::prelude::*;
///
/// let user = validus::object()
///     .property("name", validus::string().min_length(1))
///     .property("age", validus::optional(validus::number().integer()))
///     .never("password");
///
/// let options = ValidationOptions::default();
/// assert!(validus::validate(user.clone(), &json!({"name": "Alex"}), options).is_ok());
///
/// let err = validus::validate(user, &json!({"name": "", "password": "x"}), options).unwrap_err();
/// assert_eq!(err.validation().unwrap().issues.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ObjectSchema {
    properties: Vec<(String, Property)>,
    forbidden: Vec<String>,
    additional: Option<Box<Description>>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare (or replace) a property. Clears a forbidden mark of the same name.
    pub fn property(mut self, name: impl Into<String>, property: impl Into<Property>) -> Self {
        let name = name.into();
        let property = property.into();
        self.forbidden.retain(|f| *f != name);
        match self.properties.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = property,
            None => self.properties.push((name, property)),
        }
        self
    }

    /// Forbid a key. Removes a declared property of the same name.
    pub fn never(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.properties.retain(|(n, _)| *n != name);
        if !self.forbidden.contains(&name) {
            self.forbidden.push(name);
        }
        self
    }

    /// Validate undeclared keys with `description` instead of rejecting them.
    pub fn additional(mut self, description: impl Into<Description>) -> Self {
        self.additional = Some(Box::new(description.into()));
        self
    }

    /// Accept any undeclared key as-is.
    pub fn allow_additional(self) -> Self {
        self.additional(AnyValidator)
    }

    /// Merge another declaration into this one.
    ///
    /// `other` wins on clashes, including property versus forbidden marks.
    /// Its additional rule replaces this one only when set.
    pub fn extend(mut self, other: ObjectSchema) -> Self {
        for (name, property) in other.properties {
            self = self.property(name, property);
        }
        for name in other.forbidden {
            self = self.never(name);
        }
        if other.additional.is_some() {
            self.additional = other.additional;
        }
        self
    }

    /// Alias for [`extend`](Self::extend).
    pub fn merge(self, other: ObjectSchema) -> Self {
        self.extend(other)
    }

    /// Keep only the listed properties.
    pub fn pick(mut self, names: &[&str]) -> Self {
        self.properties.retain(|(n, _)| names.contains(&n.as_str()));
        self
    }

    /// Remove a property declaration (the key becomes undeclared, not forbidden).
    pub fn omit(mut self, name: &str) -> Self {
        self.properties.retain(|(n, _)| n != name);
        self
    }

    /// Make every declared property optional.
    pub fn partial(mut self) -> Self {
        for (_, property) in &mut self.properties {
            property.optional = true;
        }
        self
    }

    /// Names of the declared properties, in declaration order.
    pub fn keys(&self) -> Vec<String> {
        self.properties.iter().map(|(n, _)| n.clone()).collect()
    }
}

/// Every key of a JSON object literal becomes a required property.
impl From<Map<String, Value>> for ObjectSchema {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter()
            .fold(ObjectSchema::new(), |schema, (name, value)| {
                schema.property(name, value)
            })
    }
}

impl Resolve for ObjectSchema {
    fn resolve(&self) -> Result<Validator, SchemaError> {
        let properties = self
            .properties
            .iter()
            .map(|(name, property)| {
                Ok(ObjectProperty {
                    name: name.clone(),
                    validator: property.description.resolve()?,
                    optional: property.optional,
                    readonly: property.readonly,
                })
            })
            .collect::<Result<Vec<_>, SchemaError>>()?;
        let additional = self.additional.as_ref().map(|d| d.resolve()).transpose()?;
        Ok(Validator::new(ObjectValidator {
            properties,
            forbidden: self.forbidden.clone(),
            additional,
        }))
    }
}

/// A resolved object property.
#[derive(Clone, Debug)]
pub struct ObjectProperty {
    pub name: String,
    pub validator: Validator,
    pub optional: bool,
    pub readonly: bool,
}

/// Reconciles an object's keys against declared, forbidden and additional
/// rules, collecting every failure by key.
///
/// The output is a new object holding only accepted keys; the input is
/// never modified.
pub struct ObjectValidator {
    properties: Vec<ObjectProperty>,
    forbidden: Vec<String>,
    additional: Option<Validator>,
}

impl ObjectValidator {
    pub fn properties(&self) -> &[ObjectProperty] {
        &self.properties
    }

    pub fn forbidden(&self) -> &[String] {
        &self.forbidden
    }

    pub fn additional(&self) -> Option<&Validator> {
        self.additional.as_ref()
    }

    fn is_declared(&self, key: &str) -> bool {
        self.properties.iter().any(|p| p.name == key) || self.forbidden.iter().any(|f| f == key)
    }
}

impl Validate for ObjectValidator {
    fn validate(&self, value: &Value, options: &ValidationOptions) -> Result<Value, ValidationError> {
        let obj = value.as_object().ok_or_else(|| {
            ValidationError::single(format!(
                "Value is not an object, received {}",
                value_type_name(value)
            ))
        })?;

        let mut result = Map::new();
        let mut builder = ErrorBuilder::new();

        for property in &self.properties {
            match obj.get(&property.name) {
                None => match property.validator.validate_missing(options) {
                    Ok(v) => {
                        result.insert(property.name.clone(), v);
                    }
                    Err(_) if property.optional || options.partial_validation => {}
                    Err(_) => {
                        builder.record_at("Required property missing", &property.name);
                    }
                },
                Some(Value::Null) if property.optional && options.strip_optional_nulls => {}
                Some(v) => match property.validator.validate(v, options) {
                    Ok(v) => {
                        result.insert(property.name.clone(), v);
                    }
                    Err(e) => {
                        builder.record_at(e, &property.name);
                    }
                },
            }
        }

        if !options.strip_forbidden_properties {
            for key in self.forbidden.iter().filter(|k| obj.contains_key(k.as_str())) {
                builder.record_at("Forbidden property", key);
            }
        }

        for (key, v) in obj.iter().filter(|(k, _)| !self.is_declared(k)) {
            match &self.additional {
                Some(additional) => match additional.validate(v, options) {
                    Ok(v) => {
                        result.insert(key.clone(), v);
                    }
                    Err(e) => {
                        builder.record_at(e, key);
                    }
                },
                None if options.strip_additional_properties => {}
                None => {
                    builder.record_at("Unknown property", key);
                }
            }
        }

        builder.assert(Value::Object(result))
    }

    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Object
    }
}
