//! Closed registry of known predicates.
//!
//! Each predicate declares its comparator-argument shape and whether its
//! wording depends on the validated value's runtime shape. Adding a
//! predicate means adding one entry here (or calling
//! [`PredicateRegistry::register`]), not branching inside the visitor.

use std::collections::HashMap;

/// Declared comparator-argument shape of a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredShape {
    /// No comparator arguments (`filled?`, `odd?`).
    None,
    /// One scalar comparator (`gt?`, `eql?`, `format?`).
    Scalar,
    /// One comparator that may be a scalar or a range (`size?`).
    ScalarOrRange,
    /// A list comparator (`included_in?`).
    List,
    /// A primitive type name (`type?`).
    Type,
}

/// What the compiler needs to know about one predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredicateInfo {
    pub shape: DeclaredShape,
    /// Template wording branches on the validated value's shape
    /// ("size" for sequences vs "length" for strings).
    pub value_shape_sensitive: bool,
    /// The template interpolates `%{name}`, the translated identifier of
    /// the failing key (`key?`-family predicates).
    pub binds_key_name: bool,
}

impl PredicateInfo {
    const fn plain(shape: DeclaredShape) -> Self {
        Self {
            shape,
            value_shape_sensitive: false,
            binds_key_name: false,
        }
    }

    const fn sized() -> Self {
        Self {
            shape: DeclaredShape::ScalarOrRange,
            value_shape_sensitive: true,
            binds_key_name: false,
        }
    }

    const fn key_presence() -> Self {
        Self {
            shape: DeclaredShape::Scalar,
            value_shape_sensitive: false,
            binds_key_name: true,
        }
    }
}

const BUILTINS: &[(&str, PredicateInfo)] = &[
    ("key?", PredicateInfo::key_presence()),
    ("attr?", PredicateInfo::key_presence()),
    ("nil?", PredicateInfo::plain(DeclaredShape::None)),
    ("none?", PredicateInfo::plain(DeclaredShape::None)),
    ("filled?", PredicateInfo::plain(DeclaredShape::None)),
    ("empty?", PredicateInfo::plain(DeclaredShape::None)),
    ("bool?", PredicateInfo::plain(DeclaredShape::None)),
    ("int?", PredicateInfo::plain(DeclaredShape::None)),
    ("float?", PredicateInfo::plain(DeclaredShape::None)),
    ("decimal?", PredicateInfo::plain(DeclaredShape::None)),
    ("str?", PredicateInfo::plain(DeclaredShape::None)),
    ("date?", PredicateInfo::plain(DeclaredShape::None)),
    ("date_time?", PredicateInfo::plain(DeclaredShape::None)),
    ("time?", PredicateInfo::plain(DeclaredShape::None)),
    ("array?", PredicateInfo::plain(DeclaredShape::None)),
    ("hash?", PredicateInfo::plain(DeclaredShape::None)),
    ("odd?", PredicateInfo::plain(DeclaredShape::None)),
    ("even?", PredicateInfo::plain(DeclaredShape::None)),
    ("true?", PredicateInfo::plain(DeclaredShape::None)),
    ("false?", PredicateInfo::plain(DeclaredShape::None)),
    ("type?", PredicateInfo::plain(DeclaredShape::Type)),
    ("eql?", PredicateInfo::plain(DeclaredShape::Scalar)),
    ("not_eql?", PredicateInfo::plain(DeclaredShape::Scalar)),
    ("gt?", PredicateInfo::plain(DeclaredShape::Scalar)),
    ("gteq?", PredicateInfo::plain(DeclaredShape::Scalar)),
    ("lt?", PredicateInfo::plain(DeclaredShape::Scalar)),
    ("lteq?", PredicateInfo::plain(DeclaredShape::Scalar)),
    ("format?", PredicateInfo::plain(DeclaredShape::Scalar)),
    ("size?", PredicateInfo::sized()),
    ("min_size?", PredicateInfo::sized()),
    ("max_size?", PredicateInfo::sized()),
    ("bytesize?", PredicateInfo::sized()),
    ("included_in?", PredicateInfo::plain(DeclaredShape::List)),
    ("excluded_from?", PredicateInfo::plain(DeclaredShape::List)),
    ("includes?", PredicateInfo::plain(DeclaredShape::List)),
    ("excludes?", PredicateInfo::plain(DeclaredShape::List)),
];

/// Registry mapping predicate names to their declared behavior.
///
/// Unknown predicates are not an error: the compiler infers their shape
/// from the arguments actually supplied and renders a degraded message.
#[derive(Debug, Clone)]
pub struct PredicateRegistry {
    entries: HashMap<String, PredicateInfo>,
}

impl Default for PredicateRegistry {
    fn default() -> Self {
        let entries = BUILTINS
            .iter()
            .map(|(name, info)| ((*name).to_string(), *info))
            .collect();
        Self { entries }
    }
}

impl PredicateRegistry {
    /// Registry with the built-in predicate set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with no entries at all (every predicate degrades).
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Declare a predicate, replacing any previous declaration.
    pub fn register(&mut self, name: impl Into<String>, info: PredicateInfo) {
        self.entries.insert(name.into(), info);
    }

    /// Look up a predicate's declaration.
    pub fn get(&self, name: &str) -> Option<PredicateInfo> {
        self.entries.get(name).copied()
    }
}
