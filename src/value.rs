use crate::ast;
use indexmap::IndexMap;

/// An argument or runtime value.
///
/// Used both for directive-occurrence arguments taken from the schema
/// document and for the values a field resolver produces or consumes at
/// execution time.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Enum(String),
    Float(f64),
    Int(ast::Number),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
    Variable(String),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub(crate) fn from_ast(ast_value: &ast::schema::Value) -> Self {
        match ast_value {
            ast::schema::Value::Variable(var_name) =>
                Value::Variable(var_name.clone()),

            ast::schema::Value::Int(value) =>
                Value::Int(value.clone()),

            ast::schema::Value::Float(value) =>
                Value::Float(*value),

            ast::schema::Value::String(value) =>
                Value::String(value.clone()),

            ast::schema::Value::Boolean(value) =>
                Value::Bool(*value),

            ast::schema::Value::Null =>
                Value::Null,

            ast::schema::Value::Enum(value) =>
                Value::Enum(value.clone()),

            ast::schema::Value::List(values) =>
                Value::List(values.iter().map(Value::from_ast).collect()),

            ast::schema::Value::Object(entries) =>
                Value::Object(entries.iter().map(|(key, ast_value)|
                    (key.clone(), Value::from_ast(ast_value))
                ).collect()),
        }
    }
}
