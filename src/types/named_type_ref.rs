use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::ResolvedType;
use crate::types::TypeRegistry;
use std::sync::Arc;

/// A by-name reference to a type, resolved on demand through a
/// [TypeRegistry].
///
/// Composite types always store their field types (and union member types)
/// as [NamedTypeRef]s rather than direct [ResolvedType] references. Deferring
/// the lookup until a consumer actually needs the concrete type is what
/// allows mutually-referential types to build without recursing forever.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedTypeRef {
    name: String,
    ref_location: loc::FilePosition,
}
impl NamedTypeRef {
    pub fn new(
        name: impl AsRef<str>,
        ref_location: loc::FilePosition,
    ) -> Self {
        Self {
            name: name.as_ref().to_string(),
            ref_location,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn ref_location(&self) -> &loc::FilePosition {
        &self.ref_location
    }

    /// Resolve this reference to the concrete type it names.
    ///
    /// Because resolution is lazy, a dangling name surfaces here as
    /// [SchemaBuildError::TypeNotFound] at first dereference rather than at
    /// schema-build time.
    pub fn deref(
        &self,
        registry: &TypeRegistry,
    ) -> Result<Arc<ResolvedType>, SchemaBuildError> {
        registry.get(self.name.as_str())?.resolve(registry)
    }
}
