use crate::ast;
use crate::directives::DirectiveAnnotation;
use crate::directives::DirectiveCapability;
use crate::directives::DirectiveError;
use crate::directives::DirectiveLocator;
use crate::directives::DirectiveTarget;
use crate::document;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::resolver::default_field_resolver;
use crate::types::EnumType;
use crate::types::EnumVariant;
use crate::types::Field;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedTypeRef;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ResolvedType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::TypeHandle;
use crate::types::UnionType;
use crate::DocumentAst;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

enum CacheEntry {
    /// The type's build is active somewhere up the current call stack.
    InProgress,
    Ready(Arc<ResolvedType>),
}

/// Lazily builds and memoizes executable types from a [DocumentAst].
///
/// Every lookup for a given name after the first returns a handle to the very
/// same `Arc<ResolvedType>`; consumers may rely on `Arc::ptr_eq` to compare
/// types by identity.
///
/// The cache tracks three states per name: absent (never requested),
/// in-progress (build active up the call stack), and ready. A lookup that
/// lands on an in-progress entry yields [TypeHandle::Deferred] instead of
/// recursing, which is what keeps mutually-referential type definitions from
/// looping forever.
///
/// Interior mutability over a shared-reference API keeps lookups usable from
/// within [NamedTypeRef::deref]; the registry is single-threaded by
/// construction and hosts serialize schema builds.
#[derive(Debug)]
pub struct TypeRegistry {
    cache: RefCell<HashMap<String, CacheEntry>>,
    directive_locator: DirectiveLocator,
    document: Option<DocumentAst>,
}
impl TypeRegistry {
    pub fn new(directive_locator: DirectiveLocator) -> Self {
        let registry = Self {
            cache: RefCell::new(HashMap::new()),
            directive_locator,
            document: None,
        };
        registry.seed_builtin_scalars();
        registry
    }

    pub fn directive_locator(&self) -> &DirectiveLocator {
        &self.directive_locator
    }

    pub fn directive_locator_mut(&mut self) -> &mut DirectiveLocator {
        &mut self.directive_locator
    }

    pub fn document(&self) -> Option<&DocumentAst> {
        self.document.as_ref()
    }

    /// Look up `type_name`, building and caching the type on first request.
    ///
    /// When the requested type's own build is already active up the call
    /// stack, this returns [TypeHandle::Deferred] immediately rather than
    /// recursing into the definition a second time.
    pub fn get(&self, type_name: &str) -> Result<TypeHandle> {
        {
            let cache = self.cache.borrow();
            match cache.get(type_name) {
                Some(CacheEntry::Ready(resolved_type)) =>
                    return Ok(TypeHandle::Ready(Arc::clone(resolved_type))),

                Some(CacheEntry::InProgress) =>
                    return Ok(TypeHandle::Deferred(
                        self.in_progress_ref(type_name),
                    )),

                None => (),
            }
        }

        let document = self.document.as_ref()
            .ok_or(SchemaBuildError::NoDocumentAst)?;
        let type_def = document.type_def(type_name).ok_or_else(
            || SchemaBuildError::TypeNotFound {
                type_name: type_name.to_string(),
            },
        )?.to_owned();

        self.cache.borrow_mut().insert(
            type_name.to_string(),
            CacheEntry::InProgress,
        );

        let built = self.build_type(document.file(), &type_def)
            .and_then(|resolved_type| {
                self.apply_type_middleware(
                    document.file(),
                    &type_def,
                    resolved_type,
                )
            });
        let resolved_type = match built {
            Ok(resolved_type) => Arc::new(resolved_type),
            Err(err) => {
                // A failed build must not leave a stale in-progress marker
                // behind.
                self.cache.borrow_mut().remove(type_name);
                return Err(err);
            },
        };

        self.cache.borrow_mut().insert(
            type_name.to_string(),
            CacheEntry::Ready(Arc::clone(&resolved_type)),
        );
        Ok(TypeHandle::Ready(resolved_type))
    }

    /// Whether `type_name` has been fully built and cached.
    ///
    /// Never triggers a build; useful for hosts that want to introspect how
    /// much of a schema a workload actually touched.
    pub fn is_resolved(&self, type_name: &str) -> bool {
        matches!(
            self.cache.borrow().get(type_name),
            Some(CacheEntry::Ready(_)),
        )
    }

    /// Install the document all subsequent lookups resolve against.
    ///
    /// Drops every previously cached type (they were built from the old
    /// document) and re-seeds the built-in scalars.
    pub fn set_document_ast(&mut self, document: DocumentAst) {
        self.cache.borrow_mut().clear();
        self.seed_builtin_scalars();
        self.document = Some(document);
    }

    fn apply_type_middleware(
        &self,
        file: Option<&Path>,
        type_def: &ast::schema::TypeDefinition,
        mut resolved_type: ResolvedType,
    ) -> Result<ResolvedType> {
        let target = DirectiveTarget::Type(type_def.to_owned());
        let middleware = self.directive_locator.associated_of_type(
            file,
            &target,
            DirectiveCapability::TypeMiddleware,
        )?;
        for directive in middleware.iter() {
            if let Some(type_middleware) = directive.as_type_middleware() {
                type_middleware.handle_type(self, &mut resolved_type);
            }
        }
        Ok(resolved_type)
    }

    fn build_field(
        &self,
        file: Option<&Path>,
        ast_field: &ast::schema::Field,
    ) -> Result<Field> {
        let def_location = loc::FilePosition::from_pos(file, ast_field.position);
        let target = DirectiveTarget::Field(ast_field.to_owned());

        let base_resolver = match self.directive_locator.exclusive_of_type(
            file,
            &target,
            DirectiveCapability::FieldResolver,
        ) {
            Ok(directive) => match directive.as_field_resolver() {
                Some(resolver_directive) =>
                    resolver_directive.field_resolver(),
                None => default_field_resolver(ast_field.name.to_string()),
            },

            // No resolver directive on the field: fall back to the default
            // property-access strategy.
            Err(DirectiveError::MissingExclusiveDirective { .. }) =>
                default_field_resolver(ast_field.name.to_string()),

            Err(err) => return Err(err.into()),
        };

        let resolver = self.directive_locator.associated_of_type(
            file,
            &target,
            DirectiveCapability::FieldMiddleware,
        )?.iter().rev().fold(base_resolver, |next, directive| {
            match directive.as_field_middleware() {
                Some(middleware) => middleware.wrap_field(next),
                None => next,
            }
        });

        let mut parameters = IndexMap::new();
        for ast_param in ast_field.arguments.iter() {
            let parameter = Parameter::from_ast(file, ast_param);
            parameters.insert(parameter.name.to_string(), parameter);
        }

        Ok(Field {
            description: ast_field.description.to_owned(),
            directives: DirectiveAnnotation::list_from_ast(
                file,
                &ast_field.directives,
            ),
            name: ast_field.name.to_string(),
            parameters,
            resolver,
            type_annotation: TypeAnnotation::from_ast_type(
                &def_location,
                &ast_field.field_type,
            ),
            def_location,
        })
    }

    fn build_fields(
        &self,
        file: Option<&Path>,
        ast_fields: &[ast::schema::Field],
    ) -> Result<IndexMap<String, Field>> {
        let mut fields = IndexMap::new();
        for ast_field in ast_fields.iter() {
            let field = self.build_field(file, ast_field)?;
            fields.insert(field.name.to_string(), field);
        }
        Ok(fields)
    }

    fn build_type(
        &self,
        file: Option<&Path>,
        type_def: &ast::schema::TypeDefinition,
    ) -> Result<ResolvedType> {
        use ast::schema::TypeDefinition;
        match type_def {
            TypeDefinition::Enum(def) =>
                Ok(ResolvedType::Enum(EnumType {
                    def_location: loc::FilePosition::from_pos(
                        file,
                        def.position,
                    ),
                    description: def.description.to_owned(),
                    directives: DirectiveAnnotation::list_from_ast(
                        file,
                        &def.directives,
                    ),
                    name: def.name.to_string(),
                    variants: def.values.iter().map(|value| (
                        value.name.to_string(),
                        EnumVariant {
                            def_location: loc::FilePosition::from_pos(
                                file,
                                value.position,
                            ),
                            description: value.description.to_owned(),
                            directives: DirectiveAnnotation::list_from_ast(
                                file,
                                &value.directives,
                            ),
                            name: value.name.to_string(),
                        },
                    )).collect(),
                })),

            TypeDefinition::InputObject(def) =>
                Ok(ResolvedType::InputObject(InputObjectType {
                    def_location: loc::FilePosition::from_pos(
                        file,
                        def.position,
                    ),
                    description: def.description.to_owned(),
                    directives: DirectiveAnnotation::list_from_ast(
                        file,
                        &def.directives,
                    ),
                    fields: def.fields.iter().map(|ast_input_value| {
                        let input_field =
                            build_input_field(file, ast_input_value);
                        (input_field.name.to_string(), input_field)
                    }).collect(),
                    name: def.name.to_string(),
                })),

            TypeDefinition::Interface(def) =>
                Ok(ResolvedType::Interface(InterfaceType {
                    def_location: loc::FilePosition::from_pos(
                        file,
                        def.position,
                    ),
                    description: def.description.to_owned(),
                    directives: DirectiveAnnotation::list_from_ast(
                        file,
                        &def.directives,
                    ),
                    fields: self.build_fields(file, &def.fields)?,
                    name: def.name.to_string(),
                })),

            TypeDefinition::Object(def) =>
                Ok(ResolvedType::Object(ObjectType {
                    def_location: loc::FilePosition::from_pos(
                        file,
                        def.position,
                    ),
                    description: def.description.to_owned(),
                    directives: DirectiveAnnotation::list_from_ast(
                        file,
                        &def.directives,
                    ),
                    fields: self.build_fields(file, &def.fields)?,
                    name: def.name.to_string(),
                })),

            TypeDefinition::Scalar(def) =>
                Ok(ResolvedType::Scalar(ScalarType {
                    def_location: loc::FilePosition::from_pos(
                        file,
                        def.position,
                    ).into(),
                    description: def.description.to_owned(),
                    directives: DirectiveAnnotation::list_from_ast(
                        file,
                        &def.directives,
                    ),
                    name: def.name.to_string(),
                })),

            TypeDefinition::Union(def) => {
                let union_position = loc::FilePosition::from_pos(
                    file,
                    def.position,
                );
                Ok(ResolvedType::Union(UnionType {
                    description: def.description.to_owned(),
                    directives: DirectiveAnnotation::list_from_ast(
                        file,
                        &def.directives,
                    ),
                    members: def.types.iter().map(|member_name| (
                        member_name.to_string(),
                        NamedTypeRef::new(
                            member_name,
                            union_position.clone(),
                        ),
                    )).collect(),
                    name: def.name.to_string(),
                    def_location: union_position,
                }))
            },
        }
    }

    /// The [NamedTypeRef] handed back inside a [TypeHandle::Deferred] when
    /// `type_name`'s own build is active up the call stack.
    fn in_progress_ref(&self, type_name: &str) -> NamedTypeRef {
        let ref_location = self.document.as_ref()
            .and_then(|document| {
                let type_def = document.type_def(type_name)?;
                Some(loc::FilePosition::from_pos(
                    document.file(),
                    document::type_definition_position(type_def),
                ))
            })
            .unwrap_or_else(|| loc::FilePosition {
                col: 0,
                file: None,
                line: 0,
            });
        NamedTypeRef::new(type_name, ref_location)
    }

    fn seed_builtin_scalars(&self) {
        let mut cache = self.cache.borrow_mut();
        for builtin in [
            ResolvedType::Bool,
            ResolvedType::Float,
            ResolvedType::Id,
            ResolvedType::Int,
            ResolvedType::String,
        ] {
            cache.insert(
                builtin.name().to_string(),
                CacheEntry::Ready(Arc::new(builtin)),
            );
        }
    }
}
impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new(DirectiveLocator::new())
    }
}
impl std::fmt::Debug for CacheEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InProgress => f.write_str("InProgress"),
            Self::Ready(resolved_type) =>
                f.debug_tuple("Ready").field(&resolved_type.name()).finish(),
        }
    }
}

fn build_input_field(
    file: Option<&Path>,
    ast_input_value: &ast::schema::InputValue,
) -> InputField {
    let def_location = loc::FilePosition::from_pos(
        file,
        ast_input_value.position,
    );
    InputField {
        default_value: ast_input_value.default_value
            .as_ref()
            .map(crate::Value::from_ast),
        description: ast_input_value.description.to_owned(),
        directives: DirectiveAnnotation::list_from_ast(
            file,
            &ast_input_value.directives,
        ),
        name: ast_input_value.name.to_string(),
        type_annotation: TypeAnnotation::from_ast_type(
            &def_location,
            &ast_input_value.value_type,
        ),
        def_location,
    }
}
