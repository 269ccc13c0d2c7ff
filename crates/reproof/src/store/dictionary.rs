//! Locale dictionaries as handed over by the loader collaborator.
//!
//! The loader parses whatever on-disk format it supports (YAML, JSON, ...)
//! and deserializes into [`Dictionary`]: a mapping from locale code to an
//! `errors` template tree and a `rules` display-name table. Insertion order
//! is preserved so merged dictionaries stay deterministic.

use indexmap::IndexMap;
use serde::Deserialize;

/// One node of the `errors` template tree.
///
/// Leaves are raw template strings; interior nodes are string-keyed maps
/// following the resolution hierarchy (`rules`, `value`, `arg`, predicate
/// and variant names).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DictNode {
    /// A template string.
    Text(String),
    /// A nested mapping.
    Map(IndexMap<String, DictNode>),
}

impl DictNode {
    /// An empty mapping node.
    pub fn empty() -> Self {
        DictNode::Map(IndexMap::new())
    }

    /// Deep-merge `other` into `self`: maps merge recursively, anything
    /// else is overwritten by the later value.
    pub fn merge(&mut self, other: DictNode) {
        match (self, other) {
            (DictNode::Map(ours), DictNode::Map(theirs)) => {
                for (key, incoming) in theirs {
                    match ours.get_mut(&key) {
                        Some(existing) => existing.merge(incoming),
                        None => {
                            ours.insert(key, incoming);
                        }
                    }
                }
            }
            (this, other) => *this = other,
        }
    }
}

impl Default for DictNode {
    fn default() -> Self {
        DictNode::empty()
    }
}

/// The two branches a locale contributes: message templates and key
/// display names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LocaleDictionary {
    /// Predicate and rule message templates, organized by the resolution
    /// hierarchy.
    #[serde(default)]
    pub errors: DictNode,

    /// Key identifier to human-readable display name.
    #[serde(default)]
    pub rules: IndexMap<String, String>,
}

impl LocaleDictionary {
    fn merge(&mut self, other: LocaleDictionary) {
        self.errors.merge(other.errors);
        self.rules.extend(other.rules);
    }
}

/// A parsed locale dictionary: locale code to templates and display names.
///
/// Multiple dictionaries may be supplied to the store; they are deep-merged
/// in load order, later ones winning on key collision.
///
/// # Example
///
/// ```
/// use reproof::Dictionary;
///
/// let dict: Dictionary = serde_json::from_value(serde_json::json!({
///     "en": {
///         "errors": { "filled?": "must be filled" },
///         "rules": { "email": "e-mail address" }
///     }
/// })).unwrap();
/// assert_eq!(dict.locales().count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: IndexMap<String, LocaleDictionary>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate `(locale, contents)` pairs in definition order.
    pub fn locales(&self) -> impl Iterator<Item = (&str, &LocaleDictionary)> {
        self.entries
            .iter()
            .map(|(locale, contents)| (locale.as_str(), contents))
    }

    /// Deep-merge `other` into `self`, later values winning.
    pub fn merge(&mut self, other: Dictionary) {
        for (locale, contents) in other.entries {
            match self.entries.get_mut(&locale) {
                Some(existing) => existing.merge(contents),
                None => {
                    self.entries.insert(locale, contents);
                }
            }
        }
    }

    pub(crate) fn into_entries(self) -> IndexMap<String, LocaleDictionary> {
        self.entries
    }
}
