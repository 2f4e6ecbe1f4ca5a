use crate::directives::DirectiveAnnotation;
use crate::loc;

/// Information associated with [ResolvedType::Scalar](
/// crate::types::ResolvedType::Scalar): a custom scalar declared in the
/// schema document. The 5 built-in scalars are distinct
/// [ResolvedType](crate::types::ResolvedType) variants.
#[derive(Clone, Debug)]
pub struct ScalarType {
    pub def_location: loc::SchemaDefLocation,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub name: String,
}
