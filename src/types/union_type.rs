use crate::directives::DirectiveAnnotation;
use crate::loc;
use crate::types::NamedTypeRef;
use indexmap::IndexMap;

/// Information associated with [ResolvedType::Union](
/// crate::types::ResolvedType::Union).
///
/// Members are held as [NamedTypeRef]s rather than resolved types so that
/// mutually-referential unions and objects never force an eager build.
#[derive(Clone, Debug)]
pub struct UnionType {
    pub def_location: loc::FilePosition,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub members: IndexMap<String, NamedTypeRef>,
    pub name: String,
}
