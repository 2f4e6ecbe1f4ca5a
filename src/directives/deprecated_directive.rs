use crate::directives::DirectiveAnnotation;
use crate::directives::DirectiveTarget;
use crate::directives::SchemaDirective;
use crate::Value;

/// Built-in `@deprecated(reason: String)` directive.
///
/// Pure metadata: it declares no execution-time capability, so it never
/// participates in field resolution or middleware chains.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeprecatedDirective {
    reason: Option<String>,
}
impl DeprecatedDirective {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}
impl SchemaDirective for DeprecatedDirective {
    fn name(&self) -> &str {
        "deprecated"
    }

    fn bind_occurrence(
        &mut self,
        _target: &DirectiveTarget,
        annotation: &DirectiveAnnotation,
    ) {
        self.reason = annotation.arguments
            .get("reason")
            .and_then(Value::as_str)
            .map(str::to_string);
    }
}
