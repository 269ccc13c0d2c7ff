//! Argument normalization and placeholder interpolation.
//!
//! Locale templates refer to the same comparator argument under whatever
//! alias their author chose (`%{num}`, `%{size}`, `%{arg}`, ...), so every
//! argument is exposed under the full alias set for its shape. Substitution
//! is literal token replacement; a token with no binding renders verbatim.

use std::collections::HashMap;

use crate::parser::{Segment, Template};
use crate::types::{ArgShape, PredicateApplication, Value};

/// Every placeholder token the normalizer can supply. Templates referencing
/// anything else are flagged by the translation lint.
pub const KNOWN_TOKENS: &[&str] = &[
    "num",
    "size",
    "arg",
    "list",
    "type",
    "name",
    "left",
    "right",
    "num_left",
    "num_right",
    "size_left",
    "size_right",
];

/// The placeholder dictionary for one leaf, values already rendered.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    map: HashMap<String, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the alias table for a predicate application.
    ///
    /// - a scalar comparator is exposed as `num`, `size` and `arg`;
    /// - a range is decomposed into left/right bounds under every naming
    ///   convention (`num_left`/`left`/`size_left`, `num_right`/`right`/
    ///   `size_right`), with `num` doubling for the left bound;
    /// - a list comparator is comma-joined and additionally exposed as
    ///   `list`;
    /// - a type comparator renders its short name, additionally as `type`.
    pub fn from_application(application: &PredicateApplication) -> Self {
        let mut bindings = Bindings::new();

        match application.arg_shape() {
            ArgShape::None => {}
            ArgShape::Scalar => {
                let Some(arg) = application.arg() else {
                    return bindings;
                };
                let rendered = arg.to_string();
                bindings.bind_all(&["num", "size", "arg"], &rendered);
                if let Value::Type(_) = arg {
                    bindings.bind("type", &rendered);
                }
            }
            ArgShape::Range => {
                let Some((low, high)) = application.arg().and_then(Value::as_range) else {
                    return bindings;
                };
                let low = low.to_string();
                let high = high.to_string();
                bindings.bind_all(&["num", "left", "num_left", "size_left"], &low);
                bindings.bind_all(&["right", "num_right", "size_right"], &high);
            }
            ArgShape::List => {
                let Some(arg) = application.arg() else {
                    return bindings;
                };
                let rendered = arg.to_string();
                bindings.bind_all(&["num", "size", "arg", "list"], &rendered);
            }
        }

        bindings
    }

    /// Bind one token.
    pub fn bind(&mut self, token: impl Into<String>, text: impl Into<String>) {
        self.map.insert(token.into(), text.into());
    }

    fn bind_all(&mut self, tokens: &[&str], text: &str) {
        for token in tokens {
            self.bind(*token, text);
        }
    }

    /// The rendered text bound to `token`, if any.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.map.get(token).map(String::as_str)
    }

    /// Substitute this binding set into a template.
    ///
    /// Unknown tokens are left in place as `%{token}` so a mismatched
    /// template degrades visibly instead of failing.
    pub fn render(&self, template: &Template) -> String {
        let mut output = String::new();
        for segment in &template.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder(token) => match self.get(token) {
                    Some(text) => output.push_str(text),
                    None => {
                        output.push_str("%{");
                        output.push_str(token);
                        output.push('}');
                    }
                },
            }
        }
        output
    }
}
