use crate::schema::OperationType;
use crate::schema::SchemaBuildError;
use crate::test_helpers;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[test]
fn unparseable_sdl() {
    let err = test_helpers::parse_document("type Query {").unwrap_err();
    assert!(matches!(err, SchemaBuildError::ParseError { .. }));
}

#[test]
fn default_root_operation_type_names() -> Result<()> {
    let document = test_helpers::parse_document(
        "type Query { ping: String }",
    )?;
    assert_eq!(document.query_type_name(), "Query");
    assert_eq!(document.mutation_type_name(), "Mutation");
    assert_eq!(document.subscription_type_name(), "Subscription");
    Ok(())
}

#[test]
fn schema_block_overrides_root_operation_type_names() -> Result<()> {
    let document = test_helpers::parse_document(
        "schema { query: RootQ, mutation: RootM }
         type RootQ { ping: String }
         type RootM { poke: String }",
    )?;
    assert_eq!(document.query_type_name(), "RootQ");
    assert_eq!(document.mutation_type_name(), "RootM");
    assert_eq!(document.subscription_type_name(), "Subscription");
    Ok(())
}

#[test]
fn duplicate_root_operation_declaration() {
    let err = test_helpers::parse_document(
        "schema { query: RootA }
         schema { query: RootB }
         type RootA { ping: String }
         type RootB { ping: String }",
    ).unwrap_err();
    assert!(matches!(
        err,
        SchemaBuildError::DuplicateOperationDefinition {
            operation: OperationType::Query,
            ..
        },
    ));
}

#[test]
fn duplicate_type_definition() {
    let err = test_helpers::parse_document(
        "type Query { ping: String }
         type Widget { id: ID }
         type Widget { id: ID }",
    ).unwrap_err();
    match err {
        SchemaBuildError::DuplicateTypeDefinition { type_name, def1, def2 } => {
            assert_eq!(type_name, "Widget");
            assert_eq!(def1.line, 2);
            assert_eq!(def2.line, 3);
        },
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn duplicate_directive_definition() {
    let err = test_helpers::parse_document(
        "directive @tag on FIELD_DEFINITION
         directive @tag on OBJECT
         type Query { ping: String }",
    ).unwrap_err();
    assert!(matches!(
        err,
        SchemaBuildError::DuplicateDirectiveDefinition { directive_name, .. }
            if directive_name == "tag",
    ));
}

#[test]
fn dunder_prefixed_type_name() {
    let err = test_helpers::parse_document(
        "type Query { ping: String }
         type __Secret { id: ID }",
    ).unwrap_err();
    assert!(matches!(
        err,
        SchemaBuildError::InvalidDunderPrefixedTypeName { type_name, .. }
            if type_name == "__Secret",
    ));
}

#[test]
fn type_extensions_are_rejected() {
    let err = test_helpers::parse_document(
        "type Query { ping: String }
         extend type Query { pong: String }",
    ).unwrap_err();
    assert_eq!(err, SchemaBuildError::TypeExtensionUnsupported {
        type_name: "Query".to_string(),
    });
}

#[test]
fn types_preserve_document_order() -> Result<()> {
    let document = test_helpers::parse_document(
        "type Zebra { id: ID }
         type Query { ping: String }
         type Aardvark { id: ID }",
    )?;
    let type_names: Vec<&String> = document.types().keys().collect();
    assert_eq!(type_names, vec!["Zebra", "Query", "Aardvark"]);
    Ok(())
}
