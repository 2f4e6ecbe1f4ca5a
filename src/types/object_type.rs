use crate::directives::DirectiveAnnotation;
use crate::loc;
use crate::types::Field;
use indexmap::IndexMap;

/// Information associated with [ResolvedType::Object](
/// crate::types::ResolvedType::Object).
#[derive(Clone, Debug)]
pub struct ObjectType {
    pub def_location: loc::FilePosition,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: IndexMap<String, Field>,
    pub name: String,
}
