use crate::ast;
use crate::schema::ClientDirectiveFactory;
use crate::schema::SchemaBuildError;
use crate::test_helpers;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[test]
fn handle_maps_definition_shape() -> Result<()> {
    let document = test_helpers::parse_document(
        "\"Marks a field as cached.\"
         directive @cached(ttl: Int = 60, private: Boolean) on FIELD_DEFINITION | OBJECT
         type Query { ping: String }",
    )?;
    let definition = document.directives().first().expect("directive def");

    let client_directive =
        ClientDirectiveFactory::new().handle(document.file(), definition);

    assert_eq!(client_directive.name, "cached");
    assert_eq!(
        client_directive.description.as_deref(),
        Some("Marks a field as cached."),
    );
    assert!(!client_directive.repeatable);
    assert_eq!(client_directive.locations, vec![
        ast::schema::DirectiveLocation::FieldDefinition,
        ast::schema::DirectiveLocation::Object,
    ]);

    let argument_names: Vec<&String> =
        client_directive.arguments.keys().collect();
    assert_eq!(argument_names, vec!["ttl", "private"]);

    let ttl = client_directive.arguments.get("ttl").expect("ttl arg");
    assert_eq!(ttl.type_annotation.to_graphql_string(), "Int");
    assert!(ttl.default_value.is_some());
    Ok(())
}

#[test]
fn handle_maps_repeatable_definitions() -> Result<()> {
    let document = test_helpers::parse_document(
        "directive @tag(name: String!) repeatable on OBJECT
         type Query { ping: String }",
    )?;
    let definition = document.directives().first().expect("directive def");

    let client_directive =
        ClientDirectiveFactory::new().handle(document.file(), definition);
    assert!(client_directive.repeatable);
    Ok(())
}

#[test]
fn conversion_preserves_document_order() -> Result<()> {
    let document = test_helpers::parse_document(
        "directive @zeta on OBJECT
         directive @alpha on OBJECT
         directive @mu on FIELD_DEFINITION
         type Query { ping: String }",
    )?;

    let factory = ClientDirectiveFactory::new();
    let names: Vec<String> = document.directives().iter()
        .map(|def| factory.handle(document.file(), def).name)
        .collect();
    assert_eq!(names, vec!["zeta", "alpha", "mu"]);
    Ok(())
}
