use crate::ast;
use crate::loc;
use crate::schema::OperationType;
use crate::schema::SchemaBuildError;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// The parsed schema document the rest of the crate operates over.
///
/// Holds a name-keyed map of type definitions (insertion-ordered, so
/// introspection listings match the source document), the ordered sequence of
/// document-level directive definitions, and any root-operation-type
/// overrides declared via a `schema { ... }` block.
///
/// A [DocumentAst] is immutable once produced. Resolving a type name to a
/// built type is *not* this struct's job; that belongs exclusively to
/// [TypeRegistry](crate::types::TypeRegistry).
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentAst {
    directives: Vec<ast::schema::DirectiveDefinition>,
    file: Option<PathBuf>,
    mutation_operation: Option<NamedTypeDefLocation>,
    query_operation: Option<NamedTypeDefLocation>,
    subscription_operation: Option<NamedTypeDefLocation>,
    types: IndexMap<String, ast::schema::TypeDefinition>,
}
impl DocumentAst {
    /// Parse SDL content into a [DocumentAst].
    ///
    /// `file` is only used for error reporting and source locations.
    pub fn from_str(
        file: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file.to_owned(),
                    err: err.to_string(),
                })?.into_static();
        Self::from_document(file, ast_doc)
    }

    /// Build a [DocumentAst] from an already-parsed document.
    pub fn from_document(
        file: Option<PathBuf>,
        ast_doc: ast::schema::Document,
    ) -> Result<Self> {
        let mut document = Self {
            directives: vec![],
            file,
            mutation_operation: None,
            query_operation: None,
            subscription_operation: None,
            types: IndexMap::new(),
        };
        for def in ast_doc.definitions {
            document.visit_definition(def)?;
        }
        Ok(document)
    }

    pub fn directives(&self) -> &[ast::schema::DirectiveDefinition] {
        self.directives.as_slice()
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// The name of the type serving the Mutation root operation.
    pub fn mutation_type_name(&self) -> &str {
        self.mutation_operation
            .as_ref()
            .map_or("Mutation", |op| op.type_name.as_str())
    }

    /// The name of the type serving the Query root operation.
    pub fn query_type_name(&self) -> &str {
        self.query_operation
            .as_ref()
            .map_or("Query", |op| op.type_name.as_str())
    }

    /// The name of the type serving the Subscription root operation.
    pub fn subscription_type_name(&self) -> &str {
        self.subscription_operation
            .as_ref()
            .map_or("Subscription", |op| op.type_name.as_str())
    }

    pub fn type_def(&self, type_name: &str) -> Option<&ast::schema::TypeDefinition> {
        self.types.get(type_name)
    }

    pub fn types(&self) -> &IndexMap<String, ast::schema::TypeDefinition> {
        &self.types
    }

    fn visit_definition(
        &mut self,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_schemablock_definition(schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_type_definition(type_def),
            Definition::TypeExtension(type_ext) =>
                Err(SchemaBuildError::TypeExtensionUnsupported {
                    type_name: type_extension_name(&type_ext).to_string(),
                }),
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_directive_definition(directive_def),
        }
    }

    fn visit_directive_definition(
        &mut self,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let file_position = loc::FilePosition::from_pos(
            self.file.as_deref(),
            def.position,
        );

        if let Some(existing_def) =
            self.directives.iter().find(|d| d.name == def.name)
        {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name.clone(),
                location1: loc::FilePosition::from_pos(
                    self.file.as_deref(),
                    existing_def.position,
                ),
                location2: file_position,
            });
        }

        self.directives.push(def);
        Ok(())
    }

    fn visit_schemablock_definition(
        &mut self,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let file = self.file.to_owned();
        for (type_name, operation, slot) in [
            (&schema_def.query, OperationType::Query, &mut self.query_operation),
            (&schema_def.mutation, OperationType::Mutation, &mut self.mutation_operation),
            (&schema_def.subscription, OperationType::Subscription, &mut self.subscription_operation),
        ] {
            let Some(type_name) = type_name else {
                continue;
            };
            let typedef_loc = NamedTypeDefLocation {
                def_location: loc::FilePosition::from_pos(
                    file.as_deref(),
                    schema_def.position,
                ),
                type_name: type_name.to_string(),
            };
            if let Some(existing_typedef_loc) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location1: existing_typedef_loc.clone(),
                    location2: typedef_loc,
                });
            }
            *slot = Some(typedef_loc);
        }
        Ok(())
    }

    fn visit_type_definition(
        &mut self,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        let type_name = type_definition_name(&type_def).to_string();
        let file_position = loc::FilePosition::from_pos(
            self.file.as_deref(),
            type_definition_position(&type_def),
        );

        // https://spec.graphql.org/October2021/#sel-GAHXJHABAB_D4G
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: file_position,
                type_name,
            });
        }

        if let Some(conflicting_def) = self.types.get(type_name.as_str()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name,
                def1: loc::FilePosition::from_pos(
                    self.file.as_deref(),
                    type_definition_position(conflicting_def),
                ),
                def2: file_position,
            });
        }

        self.types.insert(type_name, type_def);
        Ok(())
    }
}

/// Represents the location of a named type's definition in the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::FilePosition,
    pub type_name: String,
}

pub(crate) fn type_definition_name(
    type_def: &ast::schema::TypeDefinition,
) -> &str {
    use ast::schema::TypeDefinition;
    match type_def {
        TypeDefinition::Enum(def) => def.name.as_str(),
        TypeDefinition::InputObject(def) => def.name.as_str(),
        TypeDefinition::Interface(def) => def.name.as_str(),
        TypeDefinition::Object(def) => def.name.as_str(),
        TypeDefinition::Scalar(def) => def.name.as_str(),
        TypeDefinition::Union(def) => def.name.as_str(),
    }
}

pub(crate) fn type_definition_position(
    type_def: &ast::schema::TypeDefinition,
) -> graphql_parser::Pos {
    use ast::schema::TypeDefinition;
    match type_def {
        TypeDefinition::Enum(def) => def.position,
        TypeDefinition::InputObject(def) => def.position,
        TypeDefinition::Interface(def) => def.position,
        TypeDefinition::Object(def) => def.position,
        TypeDefinition::Scalar(def) => def.position,
        TypeDefinition::Union(def) => def.position,
    }
}

fn type_extension_name<'a>(
    type_ext: &'a graphql_parser::schema::TypeExtension<'static, String>,
) -> &'a str {
    use graphql_parser::schema::TypeExtension;
    match type_ext {
        TypeExtension::Enum(ext) => ext.name.as_str(),
        TypeExtension::InputObject(ext) => ext.name.as_str(),
        TypeExtension::Interface(ext) => ext.name.as_str(),
        TypeExtension::Object(ext) => ext.name.as_str(),
        TypeExtension::Scalar(ext) => ext.name.as_str(),
        TypeExtension::Union(ext) => ext.name.as_str(),
    }
}
