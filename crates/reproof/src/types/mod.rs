mod config;
mod message;
mod node;
mod predicate;
mod value;

pub use config::Config;
pub use message::{Message, MessageSet};
pub use node::ErrorNode;
pub use predicate::{ArgShape, PredicateApplication};
pub use value::{Value, ValueShape, ValueType};
