//! Per-kind generator registry.
//!
//! Code generators (JSON Schema, type declarations, ...) project a validator
//! tree into another representation. A [`Generators`] table maps each
//! [`ValidatorKind`] to the function handling it; [`References`] names shared
//! validators so they are emitted once and referenced everywhere else.

use std::collections::HashMap;
use std::sync::Arc;

use crate::schema::{Validator, ValidatorKind};

/// Errors raised while generating.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerateError {
    #[error("No generator registered for validator kind {0:?}")]
    Unregistered(ValidatorKind),
    #[error("No reference generator registered, cannot reference \"{0}\"")]
    NoReferenceGenerator(String),
    #[error("Unable to generate {kind:?}: {reason}")]
    Unsupported { kind: ValidatorKind, reason: String },
}

/// Generator for one validator kind.
pub type GenerateFn<T> =
    Arc<dyn Fn(&Validator, &Generation<'_, T>) -> Result<T, GenerateError> + Send + Sync>;

/// Generator for a reference to a named validator.
pub type ReferenceFn<T> = Arc<dyn Fn(&str) -> T + Send + Sync>;

/// Named validators, compared by identity.
#[derive(Debug, Clone, Default)]
pub struct References {
    entries: Vec<(String, Validator)>,
}

impl References {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name a validator. A later entry for the same validator is ignored.
    pub fn insert(&mut self, name: impl Into<String>, validator: Validator) -> &mut Self {
        if self.name_of(&validator).is_none() {
            self.entries.push((name.into(), validator));
        }
        self
    }

    pub fn name_of(&self, validator: &Validator) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, v)| v.ptr_eq(validator))
            .map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Validator)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Registry of generators producing `T`.
///
/// # Example
/// ```
/// use validus::generate::{Generators, References};
/// use validus::prelude::*;
///
/// let mut names = Generators::<String>::new();
/// names.register(ValidatorKind::String, |_, _| Ok("string".to_string()));
/// names.register(ValidatorKind::Array, |v, gen| {
///     let array = v.downcast_ref::<ArrayValidator>().unwrap();
///     Ok(format!("{}[]", gen.generate(array.items())?))
/// });
///
/// let v = validus::resolve(validus::array(validus::string())).unwrap();
/// assert_eq!(names.generate(&v, &References::new()).unwrap(), "string[]");
/// ```
pub struct Generators<T> {
    by_kind: HashMap<ValidatorKind, GenerateFn<T>>,
    reference: Option<ReferenceFn<T>>,
}

impl<T> Default for Generators<T> {
    fn default() -> Self {
        Self {
            by_kind: HashMap::new(),
            reference: None,
        }
    }
}

impl<T> Generators<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the generator for `kind`.
    pub fn register<F>(&mut self, kind: ValidatorKind, generator: F) -> &mut Self
    where
        F: Fn(&Validator, &Generation<'_, T>) -> Result<T, GenerateError> + Send + Sync + 'static,
    {
        crate::validus_event!(trace, kind = ?kind, "registered generator");
        self.by_kind.insert(kind, Arc::new(generator));
        self
    }

    /// Set how references to named validators are emitted.
    pub fn with_reference<F>(&mut self, reference: F) -> &mut Self
    where
        F: Fn(&str) -> T + Send + Sync + 'static,
    {
        self.reference = Some(Arc::new(reference));
        self
    }

    pub fn is_registered(&self, kind: ValidatorKind) -> bool {
        self.by_kind.contains_key(&kind)
    }

    /// Expand `validator` with the generator registered for its kind.
    ///
    /// The root is always expanded, even when it is itself named in
    /// `references`; that is how the named definitions are emitted.
    pub fn generate(&self, validator: &Validator, references: &References) -> Result<T, GenerateError> {
        let generation = Generation {
            generators: self,
            references,
        };
        generation.expand(validator)
    }
}

/// State handed to a generator for nested generation.
pub struct Generation<'a, T> {
    generators: &'a Generators<T>,
    references: &'a References,
}

impl<'a, T> Generation<'a, T> {
    /// Generate a nested validator, emitting a reference when it is named.
    pub fn generate(&self, validator: &Validator) -> Result<T, GenerateError> {
        match self.references.name_of(validator) {
            Some(name) => match &self.generators.reference {
                Some(reference) => Ok(reference(name)),
                None => Err(GenerateError::NoReferenceGenerator(name.to_string())),
            },
            None => self.expand(validator),
        }
    }

    pub fn references(&self) -> &References {
        self.references
    }

    fn expand(&self, validator: &Validator) -> Result<T, GenerateError> {
        let kind = validator.kind();
        crate::validus_event!(trace, kind = ?kind, "generating");
        let generator = self
            .generators
            .by_kind
            .get(&kind)
            .ok_or(GenerateError::Unregistered(kind))?;
        generator(validator, self)
    }
}
