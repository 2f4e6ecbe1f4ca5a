use crate::directives::DirectiveAnnotation;
use crate::loc;
use crate::types::FieldResolverFn;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// A resolved field on an [ObjectType](crate::types::ObjectType) or
/// [InterfaceType](crate::types::InterfaceType).
///
/// The declared type is stored as a [TypeAnnotation] whose innermost
/// reference is resolved by name on demand, never as a direct type object;
/// see [NamedTypeRef](crate::types::NamedTypeRef) for why.
#[derive(Clone, Debug)]
pub struct Field {
    pub def_location: loc::FilePosition,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub name: String,
    pub parameters: IndexMap<String, Parameter>,
    pub resolver: FieldResolverFn,
    pub type_annotation: TypeAnnotation,
}
