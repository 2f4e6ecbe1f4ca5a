use crate::loc;
use crate::types::EnumType;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

/// A fully-built type as produced by
/// [TypeRegistry::get](crate::types::TypeRegistry::get).
///
/// The 5 built-in scalars are represented as dedicated variants since they
/// have no position in any schema document.
#[derive(Clone, Debug)]
pub enum ResolvedType {
    Bool,
    Enum(EnumType),
    Float,
    Id,
    InputObject(InputObjectType),
    Int,
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}
impl ResolvedType {
    pub fn def_location(&self) -> loc::SchemaDefLocation {
        match self {
            Self::Bool
                | Self::Float
                | Self::Id
                | Self::Int
                | Self::String =>
                loc::SchemaDefLocation::GraphQLBuiltIn,

            Self::Enum(t) => t.def_location.clone().into(),
            Self::InputObject(t) => t.def_location.clone().into(),
            Self::Interface(t) => t.def_location.clone().into(),
            Self::Object(t) => t.def_location.clone().into(),
            Self::Scalar(t) => t.def_location.clone(),
            Self::Union(t) => t.def_location.clone().into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Float => "Float",
            Self::Id => "ID",
            Self::Int => "Int",
            Self::String => "String",

            Self::Enum(t) => t.name.as_str(),
            Self::InputObject(t) => t.name.as_str(),
            Self::Interface(t) => t.name.as_str(),
            Self::Object(t) => t.name.as_str(),
            Self::Scalar(t) => t.name.as_str(),
            Self::Union(t) => t.name.as_str(),
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        match self {
            Self::Enum(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        match self {
            Self::InputObject(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        match self {
            Self::Interface(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            Self::Object(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        match self {
            Self::Union(t) => Some(t),
            _ => None,
        }
    }
}
