use crate::ast;
use crate::loc;
use crate::Value;
use indexmap::IndexMap;
use std::path::Path;

/// A single directive *occurrence*: one use of a directive on one AST node,
/// with its argument values resolved.
///
/// Distinct from a directive *definition* (declared once per name at the
/// document level) and from a directive *implementation* (constructed per
/// occurrence by the [DirectiveLocator](crate::directives::DirectiveLocator)).
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub arguments: IndexMap<String, Value>,
    pub location: loc::FilePosition,
    pub name: String,
}
impl DirectiveAnnotation {
    pub(crate) fn from_ast(
        file: Option<&Path>,
        ast_annot: &ast::schema::Directive,
    ) -> Self {
        let mut arguments = IndexMap::new();
        for (arg_name, ast_arg) in ast_annot.arguments.iter() {
            arguments.insert(arg_name.to_string(), Value::from_ast(ast_arg));
        }
        Self {
            arguments,
            location: loc::FilePosition::from_pos(file, ast_annot.position),
            name: ast_annot.name.to_string(),
        }
    }

    pub(crate) fn list_from_ast(
        file: Option<&Path>,
        ast_annots: &[ast::schema::Directive],
    ) -> Vec<Self> {
        ast_annots.iter()
            .map(|ast_annot| Self::from_ast(file, ast_annot))
            .collect()
    }
}
