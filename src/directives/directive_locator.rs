use crate::directives::DeprecatedDirective;
use crate::directives::DirectiveAnnotation;
use crate::directives::DirectiveCapability;
use crate::directives::DirectiveTarget;
use crate::directives::RenameDirective;
use crate::directives::SchemaDirective;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;
use thiserror::Error;

type Result<T> = std::result::Result<T, DirectiveError>;

/// Constructs a fresh, unhydrated [SchemaDirective] instance.
pub type DirectiveFactory = Rc<dyn Fn() -> Box<dyn SchemaDirective>>;

/// Maps directive names found in the AST to [SchemaDirective]
/// implementations, constructs one instance per occurrence, hydrates it with
/// the occurrence it was attached to, and enforces capability-exclusivity
/// rules.
///
/// Built-in directives are registered up front in [DirectiveLocator::new];
/// hosts add or override bindings through [DirectiveLocator::set_resolved] at
/// any point before resolution is attempted. The last registration for a
/// given name always wins.
pub struct DirectiveLocator {
    resolved: HashMap<String, DirectiveFactory>,
}
impl DirectiveLocator {
    pub fn new() -> Self {
        let mut locator = Self {
            resolved: HashMap::new(),
        };
        locator.set_resolved("deprecated", || {
            Box::new(DeprecatedDirective::new())
        });
        locator.set_resolved("rename", || {
            Box::new(RenameDirective::new())
        });
        locator
    }

    /// Construct a fresh implementation instance for the directive registered
    /// under `directive_name`.
    pub fn create(&self, directive_name: &str) -> Result<Box<dyn SchemaDirective>> {
        let factory = self.resolved.get(directive_name).ok_or_else(
            || DirectiveError::UnknownDirective {
                directive_name: directive_name.to_string(),
            },
        )?;
        Ok(factory())
    }

    /// Resolve, construct, and hydrate one implementation per directive
    /// occurrence attached to `target`, in source order.
    ///
    /// `file` is the path of the document the occurrences came from, so
    /// hydrated directives see the same source locations as every other
    /// consumer of the document.
    ///
    /// Source order is semantically significant: middleware-capability
    /// directives compose in this order, first-listed outermost.
    pub fn associated(
        &self,
        file: Option<&Path>,
        target: &DirectiveTarget,
    ) -> Result<Vec<Box<dyn SchemaDirective>>> {
        let mut directives = vec![];
        for ast_annot in target.directives() {
            let mut directive = self.create(ast_annot.name.as_str())?;
            let annotation = DirectiveAnnotation::from_ast(file, ast_annot);
            directive.bind_occurrence(target, &annotation);
            directives.push(directive);
        }
        Ok(directives)
    }

    /// [DirectiveLocator::associated], filtered to implementations declaring
    /// `capability`.
    pub fn associated_of_type(
        &self,
        file: Option<&Path>,
        target: &DirectiveTarget,
        capability: DirectiveCapability,
    ) -> Result<Vec<Box<dyn SchemaDirective>>> {
        Ok(self.associated(file, target)?
            .into_iter()
            .filter(|directive| directive.supports(capability))
            .collect())
    }

    /// Assert that exactly one directive on `target` declares `capability`
    /// and return it.
    ///
    /// Zero matches is a caller-level condition
    /// ([DirectiveError::MissingExclusiveDirective]); the caller decides
    /// whether to treat it as fatal or fall back to a default.
    ///
    /// A violation enumerates the conflicting occurrences by the names they
    /// appear under in the source document, which may differ from the names
    /// the registered implementations report for themselves.
    pub fn exclusive_of_type(
        &self,
        file: Option<&Path>,
        target: &DirectiveTarget,
        capability: DirectiveCapability,
    ) -> Result<Box<dyn SchemaDirective>> {
        let mut matches: Vec<(&str, Box<dyn SchemaDirective>)> =
            self.associated(file, target)?
                .into_iter()
                .zip(target.directives())
                .filter(|(directive, _)| directive.supports(capability))
                .map(|(directive, ast_annot)| {
                    (ast_annot.name.as_str(), directive)
                })
                .collect();
        match matches.len() {
            1 => Ok(matches.remove(0).1),
            0 => Err(DirectiveError::MissingExclusiveDirective {
                capability,
                node_name: target.node_name().to_string(),
            }),
            _ => Err(DirectiveError::ExclusivityViolation {
                capability,
                directive_names: matches.iter()
                    .map(|(occurrence_name, _)| occurrence_name.to_string())
                    .collect(),
                node_name: target.node_name().to_string(),
            }),
        }
    }

    /// Register or override the implementation bound to `directive_name`.
    ///
    /// An explicit binding made here always takes precedence over whatever
    /// was registered before it, built-ins included.
    pub fn set_resolved<TFactory>(
        &mut self,
        directive_name: impl Into<String>,
        factory: TFactory,
    )
    where
        TFactory: Fn() -> Box<dyn SchemaDirective> + 'static,
    {
        self.resolved.insert(directive_name.into(), Rc::new(factory));
    }
}
impl Default for DirectiveLocator {
    fn default() -> Self {
        Self::new()
    }
}
impl std::fmt::Debug for DirectiveLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectiveLocator")
            .field("resolved", &self.resolved.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DirectiveError {
    #[error(
        "Node {node_name} can only have one directive of type {capability} \
        but found [{}].",
        directive_names.iter()
            .map(|name| format!("@{name}"))
            .collect::<Vec<_>>()
            .join(", "),
    )]
    ExclusivityViolation {
        capability: DirectiveCapability,
        directive_names: Vec<String>,
        node_name: String,
    },

    #[error(
        "Node {node_name} has no directive of type {capability} attached to it"
    )]
    MissingExclusiveDirective {
        capability: DirectiveCapability,
        node_name: String,
    },

    #[error("No directive implementation is registered for `@{directive_name}`")]
    UnknownDirective {
        directive_name: String,
    },
}
