mod client_directive;
mod client_directive_factory;
mod schema;
mod schema_builder;

pub use client_directive::ClientDirective;
pub use client_directive_factory::ClientDirectiveFactory;
pub use schema::Schema;
pub use schema_builder::OperationType;
pub use schema_builder::SchemaBuildError;
pub use schema_builder::SchemaBuilder;

#[cfg(test)]
mod tests;
