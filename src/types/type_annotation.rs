use crate::ast;
use crate::loc;
use crate::types::NamedTypeRef;

/// The annotated type of a [Field](crate::types::Field),
/// [Parameter](crate::types::Parameter), or
/// [InputField](crate::types::InputField): a named type reference with list
/// and nullability wrapping.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List {
        inner: Box<TypeAnnotation>,
        nullable: bool,
    },
    Named {
        nullable: bool,
        type_ref: NamedTypeRef,
    },
}
impl TypeAnnotation {
    pub(crate) fn from_ast_type(
        ref_location: &loc::FilePosition,
        ast_type: &ast::schema::Type,
    ) -> Self {
        Self::from_ast_type_impl(ref_location, ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(
        ref_location: &loc::FilePosition,
        ast_type: &ast::schema::Type,
        nullable: bool,
    ) -> Self {
        match ast_type {
            ast::schema::Type::ListType(inner) =>
                Self::List {
                    inner: Box::new(Self::from_ast_type_impl(
                        ref_location,
                        inner,
                        true,
                    )),
                    nullable,
                },

            ast::schema::Type::NamedType(name) =>
                Self::Named {
                    nullable,
                    type_ref: NamedTypeRef::new(name, ref_location.clone()),
                },

            ast::schema::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(ref_location, inner, false),
        }
    }

    /// Recursively unwrap list nesting and return the innermost named type
    /// reference.
    pub fn innermost_named_ref(&self) -> &NamedTypeRef {
        match self {
            Self::List { inner, .. } => inner.innermost_named_ref(),
            Self::Named { type_ref, .. } => type_ref,
        }
    }

    pub fn nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. } => *nullable,
            Self::Named { nullable, .. } => *nullable,
        }
    }

    pub fn to_graphql_string(&self) -> String {
        match self {
            Self::List { inner, nullable } => format!(
                "[{}]{}",
                inner.to_graphql_string(),
                if *nullable { "" } else { "!" },
            ),
            Self::Named { nullable, type_ref } => format!(
                "{}{}",
                type_ref.name(),
                if *nullable { "" } else { "!" },
            ),
        }
    }
}
