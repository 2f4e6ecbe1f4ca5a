use crate::ast;
use crate::document;

/// An AST node that directive occurrences can be attached to.
///
/// Owned (rather than borrowed) so a hydrating directive can retain its
/// defining node for the lifetime of the resolved type graph.
#[derive(Clone, Debug, PartialEq)]
pub enum DirectiveTarget {
    Field(ast::schema::Field),
    Type(ast::schema::TypeDefinition),
}
impl DirectiveTarget {
    /// The directive occurrences attached to this node, in source order.
    pub fn directives(&self) -> &[ast::schema::Directive] {
        use ast::schema::TypeDefinition;
        match self {
            Self::Field(field) => field.directives.as_slice(),
            Self::Type(TypeDefinition::Enum(def)) => def.directives.as_slice(),
            Self::Type(TypeDefinition::InputObject(def)) => def.directives.as_slice(),
            Self::Type(TypeDefinition::Interface(def)) => def.directives.as_slice(),
            Self::Type(TypeDefinition::Object(def)) => def.directives.as_slice(),
            Self::Type(TypeDefinition::Scalar(def)) => def.directives.as_slice(),
            Self::Type(TypeDefinition::Union(def)) => def.directives.as_slice(),
        }
    }

    /// The identifying name of the node itself (field name or type name),
    /// used in diagnostics.
    pub fn node_name(&self) -> &str {
        match self {
            Self::Field(field) => field.name.as_str(),
            Self::Type(type_def) => document::type_definition_name(type_def),
        }
    }

    pub fn position(&self) -> graphql_parser::Pos {
        match self {
            Self::Field(field) => field.position,
            Self::Type(type_def) => document::type_definition_position(type_def),
        }
    }
}
