use crate::ast;
use crate::loc;
use crate::schema::ClientDirective;
use crate::types::Parameter;
use indexmap::IndexMap;
use std::path::Path;

/// Converts directive *definitions* into client-visible [ClientDirective]
/// metadata.
///
/// Stateless: [ClientDirectiveFactory::handle] is a pure projection of one
/// AST definition, so mapping it over
/// [DocumentAst::directives](crate::DocumentAst::directives) preserves
/// document order.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClientDirectiveFactory;
impl ClientDirectiveFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        file: Option<&Path>,
        definition: &ast::schema::DirectiveDefinition,
    ) -> ClientDirective {
        let mut arguments = IndexMap::new();
        for ast_arg in definition.arguments.iter() {
            let parameter = Parameter::from_ast(file, ast_arg);
            arguments.insert(parameter.name.to_string(), parameter);
        }
        ClientDirective {
            arguments,
            def_location: loc::FilePosition::from_pos(
                file,
                definition.position,
            ),
            description: definition.description.to_owned(),
            locations: definition.locations.to_owned(),
            name: definition.name.to_string(),
            repeatable: definition.repeatable,
        }
    }
}
