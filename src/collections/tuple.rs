use serde_json::Value;

use crate::description::{Description, Resolve};
use crate::error::{value_type_name, ErrorBuilder, SchemaError, ValidationError};
use crate::options::ValidationOptions;
use crate::schema::{Validate, Validator, ValidatorKind};

/// One member of a tuple declaration: a fixed position, or a rest run of
/// zero or more elements. Build rest members with [`validus::rest()`](crate::rest).
#[derive(Clone, Debug)]
pub struct TupleMember {
    description: Description,
    rest: bool,
}

impl TupleMember {
    pub fn fixed(description: impl Into<Description>) -> Self {
        Self {
            description: description.into(),
            rest: false,
        }
    }

    pub fn rest(description: impl Into<Description>) -> Self {
        Self {
            description: description.into(),
            rest: true,
        }
    }

    pub fn is_rest(&self) -> bool {
        self.rest
    }
}

/// Declaration of a tuple validator. Created via [`validus::tuple()`](crate::tuple)
/// or from a `Vec<TupleMember>` / JSON array description.
#[derive(Clone, Debug, Default)]
pub struct TupleSchema {
    members: Vec<TupleMember>,
}

impl TupleSchema {
    pub fn new(members: Vec<TupleMember>) -> Self {
        Self { members }
    }
}

impl Resolve for TupleSchema {
    fn resolve(&self) -> Result<Validator, SchemaError> {
        let slots = self
            .members
            .iter()
            .map(|m| {
                Ok(TupleSlot {
                    validator: m.description.resolve()?,
                    rest: m.rest,
                })
            })
            .collect::<Result<Vec<_>, SchemaError>>()?;
        Ok(Validator::new(TupleValidator { slots }))
    }
}

/// A resolved tuple member.
#[derive(Clone, Debug)]
pub struct TupleSlot {
    pub validator: Validator,
    pub rest: bool,
}

/// Matches an array against fixed and rest slots, left to right.
///
/// Matching is greedy and never backtracks: a rest slot consumes elements
/// while they validate, then hands the current element to the next slot.
/// A fixed slot that fails is fatal.
///
/// # Example
/// ```
/// use serde_json::json;
/// use validus::prelude::*;
///
/// // [...string, null, ...number]
/// let t = validus::tuple([
///     validus::rest(validus::string()),
///     TupleMember::fixed(()),
///     validus::rest(validus::number()),
/// ]);
/// let options = ValidationOptions::default();
/// assert!(validus::validate(t.clone(), &json!(["a", "b", null, 1, 2]), options).is_ok());
/// assert!(validus::validate(t.clone(), &json!([null]), options).is_ok());
/// assert!(validus::validate(t, &json!(["a", 1]), options).is_err());
/// ```
pub struct TupleValidator {
    slots: Vec<TupleSlot>,
}

impl TupleValidator {
    pub fn slots(&self) -> &[TupleSlot] {
        &self.slots
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

impl Validate for TupleValidator {
    fn validate(&self, value: &Value, options: &ValidationOptions) -> Result<Value, ValidationError> {
        let arr = value.as_array().ok_or_else(|| {
            ValidationError::single(format!(
                "Value is not an array, received {}",
                value_type_name(value)
            ))
        })?;

        if self.slots.is_empty() {
            return if arr.is_empty() {
                Ok(Value::Array(vec![]))
            } else {
                Err(ValidationError::single(format!(
                    "Found {} element{} validating empty tuple",
                    arr.len(),
                    plural(arr.len())
                )))
            };
        }

        let mut results = Vec::with_capacity(arr.len());
        let (mut slot, mut index) = (0, 0);

        while slot < self.slots.len() && index < arr.len() {
            let current = &self.slots[slot];
            match current.validator.validate(&arr[index], options) {
                Ok(v) => {
                    results.push(v);
                    index += 1;
                    if !current.rest {
                        slot += 1;
                    }
                }
                // the rest run ends here; retry the element on the next slot
                Err(_) if current.rest => slot += 1,
                Err(e) => return Err(e.with_prefix(index)),
            }
        }

        let mut builder = ErrorBuilder::new();

        let missing = self.slots[slot..].iter().filter(|s| !s.rest).count();
        if missing > 0 {
            builder.record(format!(
                "Tuple defines {} missing validation{}",
                missing,
                plural(missing)
            ));
        }

        let extra = arr.len() - index;
        if extra > 0 {
            builder.record(format!(
                "Found {} extra element{} in tuple",
                extra,
                plural(extra)
            ));
        }

        builder.assert(Value::Array(results))
    }

    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Tuple
    }
}
