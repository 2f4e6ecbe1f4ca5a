use crate::schema::ClientDirective;
use crate::schema::SchemaBuildError;
use crate::types::ResolvedType;
use crate::types::TypeRegistry;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// An executable, introspectable schema.
///
/// Construction validates the document shape, converts client directives
/// eagerly, and resolves the root operation types; every other type is built
/// lazily through the shared [TypeRegistry] the first time something asks
/// for it. All lookups for a name funnel through that one registry, so
/// introspection and execution can never observe two instances of the same
/// type.
#[derive(Debug)]
pub struct Schema {
    directives: Vec<ClientDirective>,
    mutation_type_name: Option<String>,
    query_type_name: String,
    registry: TypeRegistry,
    subscription_type_name: Option<String>,
}
impl Schema {
    pub(super) fn new(
        directives: Vec<ClientDirective>,
        mutation_type_name: Option<String>,
        query_type_name: String,
        registry: TypeRegistry,
        subscription_type_name: Option<String>,
    ) -> Self {
        Self {
            directives,
            mutation_type_name,
            query_type_name,
            registry,
            subscription_type_name,
        }
    }

    /// Every type defined in the schema document, in document order.
    ///
    /// The iterator builds (or re-uses) each type through the registry as it
    /// is advanced, so consuming it fully materializes the whole schema.
    pub fn all_types(
        &self,
    ) -> impl Iterator<Item = Result<Arc<ResolvedType>>> + '_ {
        let type_names: Vec<String> = self.registry.document()
            .map(|document| document.types().keys().cloned().collect())
            .unwrap_or_default();
        type_names.into_iter()
            .map(move |type_name| self.type_by_name(type_name.as_str()))
    }

    /// The client-visible directive definitions, in document order.
    pub fn directives(&self) -> &[ClientDirective] {
        self.directives.as_slice()
    }

    /// The type serving the Mutation root operation, if the schema defines
    /// one.
    pub fn mutation_type(&self) -> Option<Result<Arc<ResolvedType>>> {
        self.mutation_type_name
            .as_deref()
            .map(|type_name| self.type_by_name(type_name))
    }

    /// The type serving the Query root operation.
    pub fn query_type(&self) -> Result<Arc<ResolvedType>> {
        self.type_by_name(self.query_type_name.as_str())
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// The type serving the Subscription root operation, if the schema
    /// defines one.
    pub fn subscription_type(&self) -> Option<Result<Arc<ResolvedType>>> {
        self.subscription_type_name
            .as_deref()
            .map(|type_name| self.type_by_name(type_name))
    }

    /// Look up a type by name, building it on first request.
    pub fn type_by_name(
        &self,
        type_name: &str,
    ) -> Result<Arc<ResolvedType>> {
        self.registry.get(type_name)?.resolve(&self.registry)
    }
}
