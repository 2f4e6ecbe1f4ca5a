use crate::schema::SchemaBuildError;
use crate::types::NamedTypeRef;
use crate::types::ResolvedType;
use crate::types::TypeRegistry;
use std::sync::Arc;

/// The result of a [TypeRegistry::get] lookup.
///
/// A lookup for a finished type yields [TypeHandle::Ready]. A lookup for a
/// type whose own build is currently active further up the call stack yields
/// [TypeHandle::Deferred]: a thunk that calls back into the registry when a
/// consumer actually dereferences it, by which time the in-progress build
/// will have completed and the cache will hold the finished type.
#[derive(Clone, Debug)]
pub enum TypeHandle {
    Deferred(NamedTypeRef),
    Ready(Arc<ResolvedType>),
}
impl TypeHandle {
    pub fn resolve(
        &self,
        registry: &TypeRegistry,
    ) -> Result<Arc<ResolvedType>, SchemaBuildError> {
        match self {
            Self::Ready(resolved_type) => Ok(Arc::clone(resolved_type)),

            Self::Deferred(type_ref) => match registry.get(type_ref.name())? {
                Self::Ready(resolved_type) => Ok(resolved_type),

                // Dereferencing a handle to a type whose own build is still
                // active is a contract violation (a directive re-entered the
                // registry during construction instead of deferring).
                Self::Deferred(_) => Err(
                    SchemaBuildError::ReentrantTypeResolution {
                        type_name: type_ref.name().to_string(),
                    },
                ),
            },
        }
    }
}
