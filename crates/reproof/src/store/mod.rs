//! Locale dictionaries and layered template resolution.

mod dictionary;
mod error;
mod resolver;

pub use dictionary::{DictNode, Dictionary, LocaleDictionary};
pub use error::{LoadError, LoadWarning};
pub use resolver::{ResolveHints, TemplateStore, humanize};
