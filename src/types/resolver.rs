use crate::Value;
use indexmap::IndexMap;
use std::rc::Rc;
use thiserror::Error;

/// Everything a field resolver gets handed by the execution engine for one
/// field of one parent value.
#[derive(Debug)]
pub struct FieldContext<'a> {
    pub arguments: &'a IndexMap<String, Value>,
    pub field_name: &'a str,
    pub parent: &'a Value,
}

/// A failure produced while resolving a single field's value.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct FieldError {
    pub message: String,
}

/// The executable value-producing behavior attached to a resolved field.
///
/// Built once at schema-build time from the field's resolver directive (or
/// the default property-access strategy) wrapped in its middleware chain;
/// invoked by the execution engine once per field per parent value.
#[derive(Clone)]
pub struct FieldResolverFn(
    Rc<dyn Fn(&FieldContext<'_>) -> Result<Value, FieldError>>,
);
impl FieldResolverFn {
    pub fn new(
        resolver: impl Fn(&FieldContext<'_>) -> Result<Value, FieldError> + 'static,
    ) -> Self {
        Self(Rc::new(resolver))
    }

    pub fn call(&self, ctx: &FieldContext<'_>) -> Result<Value, FieldError> {
        (self.0)(ctx)
    }
}
impl std::fmt::Debug for FieldResolverFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FieldResolverFn(..)")
    }
}

/// The fallback resolution strategy for fields with no resolver directive:
/// read the field's own name out of the parent object value, or produce
/// `Null` when the parent has no such entry.
pub(crate) fn default_field_resolver(field_name: String) -> FieldResolverFn {
    FieldResolverFn::new(move |ctx| {
        match ctx.parent {
            Value::Object(fields) => Ok(
                fields.get(field_name.as_str()).cloned().unwrap_or(Value::Null)
            ),
            _ => Ok(Value::Null),
        }
    })
}
