use super::PredicateApplication;

/// A node of the error AST handed over by the rule-evaluation engine.
///
/// A top-level AST is an ordered sequence of `Failure` nodes. `Key` nodes
/// annotate nesting (hash values, array elements) so a failure can bottom
/// out at a leaf [`PredicateApplication`] at arbitrary depth. Nodes are
/// built once per validation run and never mutated here.
///
/// # Example
///
/// ```
/// use reproof::{ErrorNode, PredicateApplication, Value};
///
/// // { address: { city: "must be filled" } }
/// let ast = ErrorNode::failure(
///     "address",
///     ErrorNode::nested(
///         "city",
///         ErrorNode::predicate(PredicateApplication::new("filled?", vec![], Value::Str(String::new()))),
///     ),
/// );
/// assert_eq!(ast.key(), Some("address"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorNode {
    /// A failing rule for `key`, wrapping a nested node or a leaf.
    Failure {
        key: String,
        child: Box<ErrorNode>,
    },
    /// Path annotation for a failure nested under a named attribute.
    Key {
        key: String,
        child: Box<ErrorNode>,
    },
    /// A leaf predicate failure.
    Predicate(PredicateApplication),
}

impl ErrorNode {
    /// Build a top-level failure node.
    pub fn failure(key: impl Into<String>, child: ErrorNode) -> Self {
        ErrorNode::Failure {
            key: key.into(),
            child: Box::new(child),
        }
    }

    /// Build a nested path-annotation node.
    pub fn nested(key: impl Into<String>, child: ErrorNode) -> Self {
        ErrorNode::Key {
            key: key.into(),
            child: Box::new(child),
        }
    }

    /// Build a leaf node.
    pub fn predicate(application: PredicateApplication) -> Self {
        ErrorNode::Predicate(application)
    }

    /// The key this node is annotated with, if it is not a leaf.
    pub fn key(&self) -> Option<&str> {
        match self {
            ErrorNode::Failure { key, .. } | ErrorNode::Key { key, .. } => Some(key),
            ErrorNode::Predicate(_) => None,
        }
    }

    /// The leaf predicate application this node bottoms out at.
    pub fn leaf(&self) -> &PredicateApplication {
        match self {
            ErrorNode::Failure { child, .. } | ErrorNode::Key { child, .. } => child.leaf(),
            ErrorNode::Predicate(application) => application,
        }
    }
}
