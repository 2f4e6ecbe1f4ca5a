mod capability;
mod deprecated_directive;
mod directive_annotation;
mod directive_locator;
mod directive_target;
mod rename_directive;
mod schema_directive;

pub use capability::DirectiveCapability;
pub use deprecated_directive::DeprecatedDirective;
pub use directive_annotation::DirectiveAnnotation;
pub use directive_locator::DirectiveError;
pub use directive_locator::DirectiveFactory;
pub use directive_locator::DirectiveLocator;
pub use directive_target::DirectiveTarget;
pub use rename_directive::RenameDirective;
pub use schema_directive::FieldMiddlewareDirective;
pub use schema_directive::FieldResolverDirective;
pub use schema_directive::SchemaDirective;
pub use schema_directive::TypeMiddlewareDirective;

#[cfg(test)]
mod tests;
