//! Public AST types for message templates.
//!
//! These types are public to enable external tooling (linters, authoring aids).

/// A parsed message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    /// Iterate the placeholder tokens this template references.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(token) => Some(token.as_str()),
            Segment::Literal(_) => None,
        })
    }
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text (copied verbatim into the output).
    Literal(String),
    /// A `%{token}` placeholder, stored without the delimiters.
    Placeholder(String),
}
