use crate::ast;
use crate::loc;
use crate::types::TypeAnnotation;
use crate::Value;
use std::path::Path;

/// A named argument accepted by a [Field](crate::types::Field) or declared by
/// a directive definition.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub def_location: loc::FilePosition,
    pub default_value: Option<Value>,
    pub description: Option<String>,
    pub name: String,
    pub type_annotation: TypeAnnotation,
}
impl Parameter {
    pub(crate) fn from_ast(
        file: Option<&Path>,
        input_value: &ast::schema::InputValue,
    ) -> Self {
        let def_location = loc::FilePosition::from_pos(
            file,
            input_value.position,
        );
        Self {
            default_value: input_value.default_value
                .as_ref()
                .map(Value::from_ast),
            description: input_value.description.to_owned(),
            name: input_value.name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(
                &def_location,
                &input_value.value_type,
            ),
            def_location,
        }
    }
}
