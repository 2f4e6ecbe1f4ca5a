use crate::directives::DirectiveError;
use crate::directives::DirectiveLocator;
use crate::directives::SchemaDirective;
use crate::document::NamedTypeDefLocation;
use crate::loc;
use crate::schema::ClientDirectiveFactory;
use crate::schema::Schema;
use crate::types::TypeRegistry;
use crate::DocumentAst;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Assembles a [Schema] from a [DocumentAst].
///
/// The builder owns the [DirectiveLocator] until
/// [SchemaBuilder::build] hands it to the schema's
/// [TypeRegistry](crate::types::TypeRegistry), so all directive registration
/// happens before any type is built.
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_locator: DirectiveLocator,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        Self {
            directive_locator: DirectiveLocator::new(),
        }
    }

    /// Register or override the implementation bound to `directive_name` on
    /// the eventual schema's locator.
    pub fn set_resolved<TFactory>(
        mut self,
        directive_name: impl Into<String>,
        factory: TFactory,
    ) -> Self
    where
        TFactory: Fn() -> Box<dyn SchemaDirective> + 'static,
    {
        self.directive_locator.set_resolved(directive_name, factory);
        self
    }

    /// Assemble the schema.
    ///
    /// The Query root operation type is mandatory, and all declared root
    /// types are resolved here: unlike field types, root types are always
    /// needed, so a schema with an unbuildable root fails at construction
    /// rather than on first use. Every other type stays lazy.
    pub fn build(self, document: DocumentAst) -> Result<Schema> {
        let query_type_name = document.query_type_name().to_string();
        if !document.has_type(query_type_name.as_str()) {
            return Err(SchemaBuildError::NoQueryOperationTypeDefined);
        }

        let mutation_type_name = Some(document.mutation_type_name())
            .filter(|name| document.has_type(name))
            .map(str::to_string);
        let subscription_type_name = Some(document.subscription_type_name())
            .filter(|name| document.has_type(name))
            .map(str::to_string);

        let client_directive_factory = ClientDirectiveFactory::new();
        let directives = document.directives().iter()
            .map(|def| client_directive_factory.handle(document.file(), def))
            .collect();

        let mut registry = TypeRegistry::new(self.directive_locator);
        registry.set_document_ast(document);

        registry.get(query_type_name.as_str())?;
        if let Some(type_name) = mutation_type_name.as_deref() {
            registry.get(type_name)?;
        }
        if let Some(type_name) = subscription_type_name.as_deref() {
            registry.get(type_name)?;
        }

        Ok(Schema::new(
            directives,
            mutation_type_name,
            query_type_name,
            registry,
            subscription_type_name,
        ))
    }

    pub fn directive_locator_mut(&mut self) -> &mut DirectiveLocator {
        &mut self.directive_locator
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A named root operation of a schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum OperationType {
    Mutation,
    Query,
    Subscription,
}
impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error(transparent)]
    Directive(#[from] DirectiveError),

    #[error("Multiple directive definitions named `{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::FilePosition,
        location2: loc::FilePosition,
    },

    #[error(
        "Multiple `schema` blocks declare a type for the {operation} root \
        operation"
    )]
    DuplicateOperationDefinition {
        operation: OperationType,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple definitions of the `{type_name}` type")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::FilePosition,
        def2: loc::FilePosition,
    },

    #[error(
        "Type names beginning with `__` are reserved for introspection: \
        `{type_name}`"
    )]
    InvalidDunderPrefixedTypeName {
        def_location: loc::FilePosition,
        type_name: String,
    },

    #[error("No schema document has been installed in the type registry")]
    NoDocumentAst,

    #[error("The schema defines no type for the Query root operation")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema content: {err}")]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error(
        "Type `{type_name}` was dereferenced while its own build was still \
        in progress"
    )]
    ReentrantTypeResolution {
        type_name: String,
    },

    #[error("Type extensions are not supported: `extend type {type_name}`")]
    TypeExtensionUnsupported {
        type_name: String,
    },

    #[error("No type named `{type_name}` is defined in the schema")]
    TypeNotFound {
        type_name: String,
    },
}
