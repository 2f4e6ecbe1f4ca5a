use crate::directives::DirectiveAnnotation;
use crate::loc;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;

/// Information associated with [ResolvedType::InputObject](
/// crate::types::ResolvedType::InputObject).
#[derive(Clone, Debug)]
pub struct InputObjectType {
    pub def_location: loc::FilePosition,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: IndexMap<String, InputField>,
    pub name: String,
}

/// A single field declared on an [InputObjectType]. Unlike
/// [Field](crate::types::Field), input fields carry no resolver.
#[derive(Clone, Debug)]
pub struct InputField {
    pub def_location: loc::FilePosition,
    pub default_value: Option<Value>,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub name: String,
    pub type_annotation: TypeAnnotation,
}
