//! Shared fixtures for the in-crate test suites.

use crate::ast;
use crate::directives::DirectiveAnnotation;
use crate::directives::DirectiveTarget;
use crate::directives::FieldMiddlewareDirective;
use crate::directives::FieldResolverDirective;
use crate::directives::SchemaDirective;
use crate::directives::TypeMiddlewareDirective;
use crate::schema::SchemaBuildError;
use crate::types::FieldResolverFn;
use crate::types::ResolvedType;
use crate::types::TypeRegistry;
use crate::DocumentAst;
use crate::Value;

pub(crate) fn parse_document(
    sdl: &str,
) -> Result<DocumentAst, SchemaBuildError> {
    DocumentAst::from_str(None, sdl)
}

pub(crate) fn parse_field_def(
    type_name: &str,
    field_name: &str,
    sdl: &str,
) -> Result<ast::schema::Field, SchemaBuildError> {
    let document = parse_document(sdl)?;
    Ok(field_def_from_document(&document, type_name, field_name))
}

pub(crate) fn field_def_from_document(
    document: &DocumentAst,
    type_name: &str,
    field_name: &str,
) -> ast::schema::Field {
    let object_def = match document.type_def(type_name) {
        Some(ast::schema::TypeDefinition::Object(object_def)) => object_def,
        _ => panic!("no object type named `{type_name}` in test sdl"),
    };
    object_def.fields.iter()
        .find(|field| field.name == field_name)
        .unwrap_or_else(|| panic!(
            "no field named `{field_name}` on `{type_name}` in test sdl"
        ))
        .to_owned()
}

/// A resolver-capability directive that produces a fixed value, registerable
/// under any name.
#[derive(Clone, Debug)]
pub(crate) struct StaticValueDirective {
    name: &'static str,
    value: Value,
}
impl StaticValueDirective {
    pub(crate) fn new(name: &'static str, value: Value) -> Self {
        Self { name, value }
    }
}
impl SchemaDirective for StaticValueDirective {
    fn name(&self) -> &str {
        self.name
    }

    fn as_field_resolver(&self) -> Option<&dyn FieldResolverDirective> {
        Some(self)
    }
}
impl FieldResolverDirective for StaticValueDirective {
    fn field_resolver(&self) -> FieldResolverFn {
        let value = self.value.clone();
        FieldResolverFn::new(move |_ctx| Ok(value.clone()))
    }
}

/// A middleware-capability directive that wraps string results in
/// `name(...)`, making composition order observable.
#[derive(Clone, Debug)]
pub(crate) struct TagDirective {
    name: &'static str,
}
impl TagDirective {
    pub(crate) fn new(name: &'static str) -> Self {
        Self { name }
    }
}
impl SchemaDirective for TagDirective {
    fn name(&self) -> &str {
        self.name
    }

    fn as_field_middleware(&self) -> Option<&dyn FieldMiddlewareDirective> {
        Some(self)
    }
}
impl FieldMiddlewareDirective for TagDirective {
    fn wrap_field(&self, next: FieldResolverFn) -> FieldResolverFn {
        let tag = self.name;
        FieldResolverFn::new(move |ctx| {
            match next.call(ctx)? {
                Value::String(inner) => Ok(Value::String(
                    format!("{tag}({inner})"),
                )),
                other => Ok(other),
            }
        })
    }
}

/// A type-middleware-capability directive that overwrites the built type's
/// description with the value of its `text` argument.
#[derive(Clone, Debug, Default)]
pub(crate) struct DescribeDirective {
    text: Option<String>,
}
impl DescribeDirective {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}
impl SchemaDirective for DescribeDirective {
    fn name(&self) -> &str {
        "describe"
    }

    fn bind_occurrence(
        &mut self,
        _target: &DirectiveTarget,
        annotation: &DirectiveAnnotation,
    ) {
        self.text = annotation.arguments
            .get("text")
            .and_then(Value::as_str)
            .map(str::to_string);
    }

    fn as_type_middleware(&self) -> Option<&dyn TypeMiddlewareDirective> {
        Some(self)
    }
}
impl TypeMiddlewareDirective for DescribeDirective {
    fn handle_type(
        &self,
        _registry: &TypeRegistry,
        resolved_type: &mut ResolvedType,
    ) {
        let text = self.text.clone();
        match resolved_type {
            ResolvedType::Enum(t) => t.description = text,
            ResolvedType::InputObject(t) => t.description = text,
            ResolvedType::Interface(t) => t.description = text,
            ResolvedType::Object(t) => t.description = text,
            ResolvedType::Scalar(t) => t.description = text,
            ResolvedType::Union(t) => t.description = text,
            _ => (),
        }
    }
}
