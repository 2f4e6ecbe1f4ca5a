use crate::directives::DirectiveAnnotation;
use crate::loc;
use indexmap::IndexMap;

/// Information associated with [ResolvedType::Enum](
/// crate::types::ResolvedType::Enum).
#[derive(Clone, Debug)]
pub struct EnumType {
    pub def_location: loc::FilePosition,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub name: String,
    pub variants: IndexMap<String, EnumVariant>,
}

/// A single variant declared on an [EnumType].
#[derive(Clone, Debug)]
pub struct EnumVariant {
    pub def_location: loc::FilePosition,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub name: String,
}
