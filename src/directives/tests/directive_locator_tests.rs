use crate::directives::DirectiveAnnotation;
use crate::directives::DirectiveCapability;
use crate::directives::DirectiveError;
use crate::directives::DirectiveLocator;
use crate::directives::DirectiveTarget;
use crate::directives::SchemaDirective;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::test_helpers;
use crate::test_helpers::StaticValueDirective;
use crate::test_helpers::TagDirective;
use crate::types::FieldContext;
use crate::DocumentAst;
use crate::Value;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::path::Path;
use std::path::PathBuf;
use std::rc::Rc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn field_target(sdl: &str) -> Result<DirectiveTarget> {
    Ok(DirectiveTarget::Field(
        test_helpers::parse_field_def("Query", "bar", sdl)?,
    ))
}

#[test]
fn create_builtin_directive() -> Result<()> {
    let locator = DirectiveLocator::new();
    let directive = locator.create("rename")?;
    assert_eq!(directive.name(), "rename");
    assert!(directive.supports(DirectiveCapability::FieldResolver));
    assert!(!directive.supports(DirectiveCapability::FieldMiddleware));
    Ok(())
}

#[test]
fn create_unknown_directive() {
    let locator = DirectiveLocator::new();
    let err = locator.create("nonexistent").unwrap_err();
    assert_eq!(err, DirectiveError::UnknownDirective {
        directive_name: "nonexistent".to_string(),
    });
    assert_eq!(
        err.to_string(),
        "No directive implementation is registered for `@nonexistent`",
    );
}

#[test]
fn set_resolved_overrides_builtin() -> Result<()> {
    let mut locator = DirectiveLocator::new();
    locator.set_resolved("deprecated", || {
        Box::new(StaticValueDirective::new("deprecated", Value::Null))
    });
    let directive = locator.create("deprecated")?;
    assert!(directive.supports(DirectiveCapability::FieldResolver));
    Ok(())
}

#[test]
fn associated_constructs_instances_in_source_order() -> Result<()> {
    let mut locator = DirectiveLocator::new();
    locator.set_resolved("hasMany", || {
        Box::new(StaticValueDirective::new("hasMany", Value::Null))
    });

    let target = field_target(
        "type Query { bar: String @deprecated @hasMany @rename(attribute: \"b\") }",
    )?;
    let directives = locator.associated(None, &target)?;
    let names: Vec<&str> =
        directives.iter().map(|directive| directive.name()).collect();
    assert_eq!(names, vec!["deprecated", "hasMany", "rename"]);
    Ok(())
}

#[test]
fn associated_errors_on_unregistered_occurrence() -> Result<()> {
    let locator = DirectiveLocator::new();
    let target = field_target("type Query { bar: String @mystery }")?;
    let err = locator.associated(None, &target).unwrap_err();
    assert_eq!(err, DirectiveError::UnknownDirective {
        directive_name: "mystery".to_string(),
    });
    Ok(())
}

#[test]
fn associated_of_type_filters_by_capability() -> Result<()> {
    let mut locator = DirectiveLocator::new();
    locator.set_resolved("audit", || Box::new(TagDirective::new("audit")));

    let target = field_target(
        "type Query { bar: String @deprecated @audit @rename(attribute: \"b\") }",
    )?;

    let middleware = locator.associated_of_type(
        None,
        &target,
        DirectiveCapability::FieldMiddleware,
    )?;
    assert_eq!(middleware.len(), 1);
    assert_eq!(middleware[0].name(), "audit");

    let resolvers = locator.associated_of_type(
        None,
        &target,
        DirectiveCapability::FieldResolver,
    )?;
    assert_eq!(resolvers.len(), 1);
    assert_eq!(resolvers[0].name(), "rename");
    Ok(())
}

#[test]
fn exclusive_of_type_returns_single_match() -> Result<()> {
    let locator = DirectiveLocator::new();
    let target = field_target(
        "type Query { bar: String @rename(attribute: \"renamed_bar\") }",
    )?;

    let directive = locator.exclusive_of_type(
        None,
        &target,
        DirectiveCapability::FieldResolver,
    )?;
    assert_eq!(directive.name(), "rename");

    // The instance was hydrated from this occurrence: its resolver reads the
    // renamed attribute off the parent value.
    let resolver = directive.as_field_resolver()
        .expect("rename declares the resolver capability")
        .field_resolver();
    let arguments = IndexMap::new();
    let parent = Value::Object(IndexMap::from([
        ("renamed_bar".to_string(), Value::String("hello".to_string())),
    ]));
    let resolved = resolver.call(&FieldContext {
        arguments: &arguments,
        field_name: "bar",
        parent: &parent,
    });
    assert_eq!(resolved, Ok(Value::String("hello".to_string())));
    Ok(())
}

#[test]
fn exclusive_of_type_zero_matches() -> Result<()> {
    let locator = DirectiveLocator::new();
    let target = field_target("type Query { bar: String @deprecated }")?;
    let err = locator.exclusive_of_type(
        None,
        &target,
        DirectiveCapability::FieldResolver,
    ).unwrap_err();
    assert_eq!(err, DirectiveError::MissingExclusiveDirective {
        capability: DirectiveCapability::FieldResolver,
        node_name: "bar".to_string(),
    });
    Ok(())
}

#[test]
fn exclusive_of_type_two_matches() -> Result<()> {
    let mut locator = DirectiveLocator::new();
    locator.set_resolved("hasMany", || {
        Box::new(StaticValueDirective::new("hasMany", Value::Null))
    });
    locator.set_resolved("belongsTo", || {
        Box::new(StaticValueDirective::new("belongsTo", Value::Null))
    });

    let target = field_target("type Query { bar: String @hasMany @belongsTo }")?;
    let err = locator.exclusive_of_type(
        None,
        &target,
        DirectiveCapability::FieldResolver,
    ).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Node bar can only have one directive of type FieldResolver but \
        found [@hasMany, @belongsTo].",
    );
    Ok(())
}

#[test]
fn exclusivity_violation_enumerates_occurrence_names() -> Result<()> {
    // Both names map to an implementation that reports a different name for
    // itself; the diagnostic must use the names from the source document.
    let mut locator = DirectiveLocator::new();
    for name in ["alpha", "beta"] {
        locator.set_resolved(name, || {
            Box::new(StaticValueDirective::new("sharedImpl", Value::Null))
        });
    }

    let target = field_target("type Query { bar: String @alpha @beta }")?;
    let err = locator.exclusive_of_type(
        None,
        &target,
        DirectiveCapability::FieldResolver,
    ).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Node bar can only have one directive of type FieldResolver but \
        found [@alpha, @beta].",
    );
    Ok(())
}

#[derive(Debug)]
struct LocationRecordingDirective {
    location: Rc<RefCell<Option<loc::FilePosition>>>,
}
impl SchemaDirective for LocationRecordingDirective {
    fn name(&self) -> &str {
        "recordLocation"
    }

    fn bind_occurrence(
        &mut self,
        _target: &DirectiveTarget,
        annotation: &DirectiveAnnotation,
    ) {
        *self.location.borrow_mut() = Some(annotation.location.clone());
    }
}

#[test]
fn associated_threads_the_document_file_into_annotations() -> Result<()> {
    let document = DocumentAst::from_str(
        Some(PathBuf::from("schema.graphql")),
        "type Query { bar: String @recordLocation }",
    )?;
    let field = test_helpers::field_def_from_document(
        &document,
        "Query",
        "bar",
    );
    let target = DirectiveTarget::Field(field);

    let recorded = Rc::new(RefCell::new(None));
    let mut locator = DirectiveLocator::new();
    let cell = Rc::clone(&recorded);
    locator.set_resolved("recordLocation", move || {
        Box::new(LocationRecordingDirective {
            location: Rc::clone(&cell),
        })
    });

    locator.associated(document.file(), &target)?;
    let location = recorded.borrow_mut().take()
        .expect("directive was hydrated");
    assert_eq!(location.file.as_deref(), Some(Path::new("schema.graphql")));
    Ok(())
}
