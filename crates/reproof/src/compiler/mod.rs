//! Message compilation: the AST visitor, the predicate registry and the
//! argument normalizer.

mod bindings;
mod registry;
mod visitor;

pub use bindings::{Bindings, KNOWN_TOKENS};
pub use registry::{DeclaredShape, PredicateInfo, PredicateRegistry};
pub use visitor::MessageCompiler;
