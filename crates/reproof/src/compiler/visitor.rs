//! The message compiler: a depth-first walk of the error AST.
//!
//! Each leaf is compiled independently: template resolution, argument
//! normalization and interpolation all degrade locally, so one unprintable
//! failure never suppresses its siblings.

use crate::compiler::bindings::Bindings;
use crate::compiler::registry::{DeclaredShape, PredicateRegistry};
use crate::store::{ResolveHints, TemplateStore, humanize};
use crate::types::{ArgShape, Config, ErrorNode, Message, MessageSet, PredicateApplication, Value};

/// Compiles error ASTs into grouped, localized message sets.
///
/// Borrows the process-lifetime [`TemplateStore`]; the compiler itself is
/// cheap to construct per validation run and holds no mutable state while
/// compiling, so identical inputs always produce identical output.
///
/// # Example
///
/// ```
/// use reproof::{
///     Config, Dictionary, ErrorNode, MessageCompiler, PredicateApplication, TemplateStore, Value,
/// };
///
/// let dict: Dictionary = serde_json::from_value(serde_json::json!({
///     "en": { "errors": { "int?": "must be an integer" } }
/// })).unwrap();
/// let mut store = TemplateStore::new();
/// store.load(dict).unwrap();
///
/// let ast = vec![ErrorNode::failure(
///     "age",
///     ErrorNode::predicate(PredicateApplication::new("int?", vec![], Value::Str("x".into()))),
/// )];
///
/// let compiler = MessageCompiler::new(&store);
/// let messages = compiler.compile(&ast, &Config::default());
/// assert_eq!(messages.get("age"), Some(&["must be an integer".to_string()][..]));
/// ```
pub struct MessageCompiler<'a> {
    store: &'a TemplateStore,
    predicates: PredicateRegistry,
}

impl<'a> MessageCompiler<'a> {
    /// Compiler with the built-in predicate registry.
    pub fn new(store: &'a TemplateStore) -> Self {
        Self {
            store,
            predicates: PredicateRegistry::default(),
        }
    }

    /// Compiler with a caller-supplied predicate registry.
    pub fn with_registry(store: &'a TemplateStore, predicates: PredicateRegistry) -> Self {
        Self { store, predicates }
    }

    /// The predicate registry, for declaring custom predicates.
    pub fn predicates_mut(&mut self) -> &mut PredicateRegistry {
        &mut self.predicates
    }

    /// Compile a top-level AST into a message set grouped by first path
    /// segment, preserving traversal order across and within keys.
    pub fn compile(&self, ast: &[ErrorNode], config: &Config) -> MessageSet {
        let mut messages = MessageSet::new();
        for node in ast {
            let message = self.visit(node, config);
            let key = message.path().first().cloned().unwrap_or_default();
            messages.append(key, message.into_text());
        }
        messages
    }

    /// Compile a single node, returning its message with the full key path.
    pub fn visit(&self, node: &ErrorNode, config: &Config) -> Message {
        self.visit_nested(node, None, config)
    }

    fn visit_nested(&self, node: &ErrorNode, rule: Option<&str>, config: &Config) -> Message {
        match node {
            ErrorNode::Failure { key, child } | ErrorNode::Key { key, child } => {
                self.visit_nested(child, Some(key), config).under(key)
            }
            ErrorNode::Predicate(application) => self.render_leaf(application, rule, config),
        }
    }

    fn render_leaf(
        &self,
        application: &PredicateApplication,
        rule: Option<&str>,
        config: &Config,
    ) -> Message {
        // The innermost enclosing key doubles as the display role for
        // rule-specific template overrides.
        let rule = rule.unwrap_or("");
        let info = self.predicates.get(application.name());

        let value_shape = if info.is_some_and(|i| i.value_shape_sensitive) {
            application.value().shape().branch_key()
        } else {
            None
        };
        // The range variant only applies to predicates declared to accept
        // one; undeclared predicates follow the arguments they were given.
        let range_capable = info.is_none_or(|i| i.shape == DeclaredShape::ScalarOrRange);
        let hints = ResolveHints {
            range: range_capable && application.arg_shape() == ArgShape::Range,
            value_shape,
        };

        let mut bindings = Bindings::from_application(application);
        if info.is_some_and(|i| i.binds_key_name) {
            // key? carries the missing key as its argument; fall back to
            // the enclosing key when the engine omitted it.
            let identifier = application.arg().and_then(Value::as_str).unwrap_or(rule);
            bindings.bind("name", self.store.rule_name(config.locale(), identifier));
        }

        let text = match self
            .store
            .resolve(config.locale(), rule, application.name(), hints)
        {
            Some(template) => bindings.render(template),
            None => humanize(application.name()),
        };

        let text = if config.full() && !rule.is_empty() {
            format!("{} {}", self.store.rule_name(config.locale(), rule), text)
        } else {
            text
        };

        Message::new(Vec::new(), text)
    }
}
