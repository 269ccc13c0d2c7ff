pub mod compiler;
pub mod parser;
pub mod store;
pub mod types;

pub use compiler::{
    Bindings, DeclaredShape, KNOWN_TOKENS, MessageCompiler, PredicateInfo, PredicateRegistry,
};
pub use parser::{Segment, Template, parse_template};
pub use store::{
    DictNode, Dictionary, LoadError, LoadWarning, LocaleDictionary, ResolveHints, TemplateStore,
    humanize,
};
pub use types::{
    ArgShape, Config, ErrorNode, Message, MessageSet, PredicateApplication, Value, ValueShape,
    ValueType,
};

/// Creates a `Vec<Value>` of predicate arguments from expressions.
///
/// Values are converted via `Into<Value>`, so integers, floats, strings,
/// ranges and nested lists can be passed directly.
///
/// # Example
///
/// ```
/// use reproof::{args, Value};
///
/// let a = args![18];
/// assert_eq!(a[0].as_int(), Some(18));
///
/// let r = args![2..=4];
/// assert_eq!(r[0].as_range(), Some((2, 4)));
/// ```
#[macro_export]
macro_rules! args {
    [] => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    [ $($value:expr),+ $(,)? ] => {
        ::std::vec![ $(::std::convert::Into::<$crate::Value>::into($value)),+ ]
    };
}
