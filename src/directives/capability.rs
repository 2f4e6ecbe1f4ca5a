/// The closed set of behavioral roles a [SchemaDirective](
/// crate::directives::SchemaDirective) may declare.
///
/// [DirectiveCapability::FieldResolver] is *exclusive*: a single AST node may
/// carry at most one directive declaring it. The middleware capabilities are
/// additive and compose in source order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DirectiveCapability {
    FieldMiddleware,
    FieldResolver,
    TypeMiddleware,
}
impl DirectiveCapability {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FieldMiddleware => "FieldMiddleware",
            Self::FieldResolver => "FieldResolver",
            Self::TypeMiddleware => "TypeMiddleware",
        }
    }
}
impl std::fmt::Display for DirectiveCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
