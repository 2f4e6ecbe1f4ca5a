use crate::ast;
use crate::loc;
use crate::types::Parameter;
use indexmap::IndexMap;

/// The client-visible description of one directive *definition*: the shape
/// introspection reports for it.
///
/// Carries no behavior. Execution-time behavior lives in
/// [SchemaDirective](crate::directives::SchemaDirective) implementations
/// resolved by name through the
/// [DirectiveLocator](crate::directives::DirectiveLocator).
#[derive(Clone, Debug, PartialEq)]
pub struct ClientDirective {
    pub arguments: IndexMap<String, Parameter>,
    pub def_location: loc::FilePosition,
    pub description: Option<String>,
    pub locations: Vec<ast::schema::DirectiveLocation>,
    pub name: String,
    pub repeatable: bool,
}
