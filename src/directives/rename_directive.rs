use crate::directives::DirectiveAnnotation;
use crate::directives::DirectiveTarget;
use crate::directives::FieldResolverDirective;
use crate::directives::SchemaDirective;
use crate::types::FieldError;
use crate::types::FieldResolverFn;
use crate::Value;

/// Built-in `@rename(attribute: String!)` directive.
///
/// Resolves a field by reading a differently-named attribute off the parent
/// value, e.g. `createdAt: String @rename(attribute: "created_at")`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenameDirective {
    attribute: Option<String>,
    definition_node: Option<DirectiveTarget>,
}
impl RenameDirective {
    pub fn new() -> Self {
        Self::default()
    }

    /// The AST node this occurrence was attached to, once hydrated.
    pub fn definition_node(&self) -> Option<&DirectiveTarget> {
        self.definition_node.as_ref()
    }
}
impl SchemaDirective for RenameDirective {
    fn name(&self) -> &str {
        "rename"
    }

    fn bind_occurrence(
        &mut self,
        target: &DirectiveTarget,
        annotation: &DirectiveAnnotation,
    ) {
        self.attribute = annotation.arguments
            .get("attribute")
            .and_then(Value::as_str)
            .map(str::to_string);
        self.definition_node = Some(target.clone());
    }

    fn as_field_resolver(&self) -> Option<&dyn FieldResolverDirective> {
        Some(self)
    }
}
impl FieldResolverDirective for RenameDirective {
    fn field_resolver(&self) -> FieldResolverFn {
        let attribute = self.attribute.clone();
        FieldResolverFn::new(move |ctx| {
            let Some(attribute) = attribute.as_deref() else {
                return Err(FieldError {
                    message: format!(
                        "The @rename directive on `{}` requires an \
                        `attribute` argument",
                        ctx.field_name,
                    ),
                });
            };
            match ctx.parent {
                Value::Object(fields) => Ok(
                    fields.get(attribute).cloned().unwrap_or(Value::Null)
                ),
                _ => Ok(Value::Null),
            }
        })
    }
}
