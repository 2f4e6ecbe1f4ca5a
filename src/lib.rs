pub mod ast;
pub mod directives;
mod document;
pub mod loc;
pub mod schema;
pub mod types;
mod value;

pub use document::DocumentAst;
pub use document::NamedTypeDefLocation;
pub use value::Value;

#[cfg(test)]
pub(crate) mod test_helpers;
