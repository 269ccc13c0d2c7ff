//! Message template parser.
//!
//! Produces a small AST consumed by interpolation and by the translation
//! lint. Parsing is total; there is no parse error type.

pub mod ast;
mod template;

pub use ast::{Segment, Template};
pub use template::parse_template;
