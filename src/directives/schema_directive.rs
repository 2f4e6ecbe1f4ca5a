use crate::directives::DirectiveAnnotation;
use crate::directives::DirectiveCapability;
use crate::directives::DirectiveTarget;
use crate::types::FieldResolverFn;
use crate::types::ResolvedType;
use crate::types::TypeRegistry;

/// A unit of schema behavior registered under a directive name.
///
/// One implementation instance is constructed per directive *occurrence* and
/// stays bound to that occurrence for its whole lifetime; instances are never
/// reused across occurrences because the resolved arguments and source
/// location differ per use.
///
/// Capabilities are declared by overriding the corresponding `as_*` accessor
/// to return `Some(self)`. [SchemaDirective::supports] and the
/// [DirectiveLocator](crate::directives::DirectiveLocator)'s capability
/// filters are derived from those accessors, so a directive can never claim a
/// capability it does not implement.
pub trait SchemaDirective: std::fmt::Debug {
    /// The name this directive appears under in SDL, without the `@`.
    fn name(&self) -> &str;

    /// Occurrence binding: called exactly once, right after construction,
    /// with the AST node this occurrence was attached to and the occurrence's
    /// resolved arguments.
    ///
    /// Directives that carry no per-occurrence state can leave the default
    /// no-op in place.
    fn bind_occurrence(
        &mut self,
        _target: &DirectiveTarget,
        _annotation: &DirectiveAnnotation,
    ) {
    }

    fn as_field_middleware(&self) -> Option<&dyn FieldMiddlewareDirective> {
        None
    }

    fn as_field_resolver(&self) -> Option<&dyn FieldResolverDirective> {
        None
    }

    fn as_type_middleware(&self) -> Option<&dyn TypeMiddlewareDirective> {
        None
    }

    fn supports(&self, capability: DirectiveCapability) -> bool {
        match capability {
            DirectiveCapability::FieldMiddleware =>
                self.as_field_middleware().is_some(),
            DirectiveCapability::FieldResolver =>
                self.as_field_resolver().is_some(),
            DirectiveCapability::TypeMiddleware =>
                self.as_type_middleware().is_some(),
        }
    }
}

/// Produces a field's value at execution time. Exclusive per field.
pub trait FieldResolverDirective {
    fn field_resolver(&self) -> FieldResolverFn;
}

/// Wraps a field's resolution, middleware-style. A field may carry any number
/// of these; the first-listed occurrence's wrapper runs outermost.
pub trait FieldMiddlewareDirective {
    fn wrap_field(&self, next: FieldResolverFn) -> FieldResolverFn;
}

/// Manipulates a type right after it is built, before it is cached.
///
/// `registry` allows the middleware to look up other types, which may build
/// them on the spot. A lookup for the type currently being handled yields a
/// deferred handle (its own build is still in progress); synchronously
/// resolving that handle is a contract violation and fails with
/// [ReentrantTypeResolution](
/// crate::schema::SchemaBuildError::ReentrantTypeResolution).
pub trait TypeMiddlewareDirective {
    fn handle_type(
        &self,
        registry: &TypeRegistry,
        resolved_type: &mut ResolvedType,
    );
}
