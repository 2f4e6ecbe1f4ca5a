use crate::directives::DirectiveAnnotation;
use crate::loc;
use crate::types::Field;
use indexmap::IndexMap;

/// Information associated with [ResolvedType::Interface](
/// crate::types::ResolvedType::Interface).
#[derive(Clone, Debug)]
pub struct InterfaceType {
    pub def_location: loc::FilePosition,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: IndexMap<String, Field>,
    pub name: String,
}
