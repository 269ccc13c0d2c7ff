//! Layered, locale-aware template resolution.
//!
//! The store is built once from one or more locale dictionaries and is
//! read-only afterwards: templates are parsed at load time, so `resolve`
//! never allocates or writes and the store can be shared across threads
//! without coordination.

use std::collections::HashMap;

use bon::Builder;
use indexmap::IndexMap;

use crate::compiler::KNOWN_TOKENS;
use crate::parser::{Template, parse_template};
use crate::store::dictionary::{DictNode, Dictionary, LocaleDictionary};
use crate::store::error::{LoadError, LoadWarning};

/// The `errors` tree of one locale with every template leaf pre-parsed.
#[derive(Debug, Clone)]
enum TemplateNode {
    Leaf(Template),
    Map(IndexMap<String, TemplateNode>),
}

impl TemplateNode {
    fn child(&self, key: &str) -> Option<&TemplateNode> {
        match self {
            TemplateNode::Map(children) => children.get(key),
            TemplateNode::Leaf(_) => None,
        }
    }

    fn at(&self, path: &[&str]) -> Option<&TemplateNode> {
        path.iter()
            .try_fold(self, |node, segment| node.child(segment))
    }

    fn leaf(&self) -> Option<&Template> {
        match self {
            TemplateNode::Leaf(template) => Some(template),
            TemplateNode::Map(_) => None,
        }
    }

    fn merge(&mut self, other: TemplateNode) {
        match (self, other) {
            (TemplateNode::Map(ours), TemplateNode::Map(theirs)) => {
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

    /// Build from a raw dictionary node, parsing every leaf. Returns the
    /// node and the number of leaves it contains.
    fn from_dict(node: DictNode) -> (TemplateNode, usize) {
        match node {
            DictNode::Text(text) => (TemplateNode::Leaf(parse_template(&text)), 1),
            DictNode::Map(children) => {
                let mut parsed = IndexMap::with_capacity(children.len());
                let mut count = 0;
                for (key, child) in children {
                    let (child, leaves) = TemplateNode::from_dict(child);
                    count += leaves;
                    parsed.insert(key, child);
                }
                (TemplateNode::Map(parsed), count)
            }
        }
    }
}

#[derive(Debug, Clone)]
struct LocaleEntry {
    errors: TemplateNode,
    rules: IndexMap<String, String>,
}

/// Hints that steer variant selection during resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveHints {
    /// The predicate's comparator argument is a range rather than a scalar.
    pub range: bool,
    /// Dictionary key for the validated value's shape branch (`"string"`,
    /// `"array"`, `"hash"`), when the predicate's wording depends on it.
    pub value_shape: Option<&'static str>,
}

/// Layered template store: `locale → errors tree + rules table`.
///
/// # Example
///
/// ```
/// use reproof::{Dictionary, ResolveHints, TemplateStore};
///
/// let dict: Dictionary = serde_json::from_value(serde_json::json!({
///     "en": { "errors": { "filled?": "must be filled" } }
/// })).unwrap();
///
/// let mut store = TemplateStore::new();
/// store.load(dict).unwrap();
///
/// let template = store.resolve("en", "name", "filled?", ResolveHints::default());
/// assert!(template.is_some());
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct TemplateStore {
    /// Locale tried when the requested locale yields nothing.
    #[builder(default = "en".to_string())]
    fallback_locale: String,

    /// Per-locale template trees and display-name tables.
    #[builder(skip)]
    locales: HashMap<String, LocaleEntry>,
}

impl Default for TemplateStore {
    fn default() -> Self {
        TemplateStore::builder().build()
    }
}

impl TemplateStore {
    /// Create a store with the default fallback locale (English).
    pub fn new() -> Self {
        Self::default()
    }

    /// The locale used as the last resolution step.
    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    /// Whether any templates are loaded for `locale`.
    pub fn contains_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Load a dictionary, deep-merging it over anything already loaded.
    ///
    /// Returns the number of template leaves the dictionary contributed.
    /// Later loads win leaf-wise at the same path; display-name tables
    /// extend likewise. On error nothing is merged: the store stays as it
    /// was before the call.
    pub fn load(&mut self, dictionary: Dictionary) -> Result<usize, LoadError> {
        let mut staged = Vec::new();
        let mut count = 0;

        for (locale, contents) in dictionary.into_entries() {
            if locale.is_empty() {
                return Err(LoadError::EmptyLocale);
            }
            let LocaleDictionary { errors, rules } = contents;
            if matches!(errors, DictNode::Text(_)) {
                return Err(LoadError::ErrorsNotAMapping { locale });
            }

            let (errors, leaves) = TemplateNode::from_dict(errors);
            count += leaves;
            staged.push((locale, LocaleEntry { errors, rules }));
        }

        // Commit only once the whole dictionary is known good; a failed
        // load must leave the store exactly as it was.
        for (locale, entry) in staged {
            match self.locales.get_mut(&locale) {
                Some(existing) => {
                    existing.errors.merge(entry.errors);
                    existing.rules.extend(entry.rules);
                }
                None => {
                    self.locales.insert(locale, entry);
                }
            }
        }

        Ok(count)
    }

    /// Resolve the most specific template for a predicate failure.
    ///
    /// Ladder, most to least specific, short-circuiting on first hit:
    /// 1. `errors.rules.<rule>.<predicate>`
    /// 2. `errors.<predicate>.value.<rule>`
    /// 3. `errors.<predicate>.value.<value-shape>` (when hinted)
    /// 4. `errors.<predicate>.arg.<variant>` with variant `default`/`range`
    /// 5. `errors.<predicate>` as a flat string
    /// 6. steps 1–5 against the fallback locale
    ///
    /// Returns `None` only when every level misses; callers degrade to
    /// [`humanize`] rather than failing.
    pub fn resolve(
        &self,
        locale: &str,
        rule: &str,
        predicate: &str,
        hints: ResolveHints,
    ) -> Option<&Template> {
        if let Some(found) = self
            .locales
            .get(locale)
            .and_then(|entry| Self::resolve_in(entry, rule, predicate, hints))
        {
            return Some(found);
        }

        if locale != self.fallback_locale {
            return self
                .locales
                .get(&self.fallback_locale)
                .and_then(|entry| Self::resolve_in(entry, rule, predicate, hints));
        }

        None
    }

    fn resolve_in<'a>(
        entry: &'a LocaleEntry,
        rule: &str,
        predicate: &str,
        hints: ResolveHints,
    ) -> Option<&'a Template> {
        let variant = if hints.range { "range" } else { "default" };

        if let Some(node) = entry.errors.at(&["rules", rule, predicate]) {
            if let Some(template) = Self::select(node, variant) {
                return Some(template);
            }
        }

        let pred = entry.errors.child(predicate)?;

        if let Some(node) = pred.at(&["value", rule]) {
            if let Some(template) = Self::select(node, variant) {
                return Some(template);
            }
        }

        if let Some(shape) = hints.value_shape {
            if let Some(node) = pred.at(&["value", shape]) {
                if let Some(template) = Self::select(node, variant) {
                    return Some(template);
                }
            }
        }

        Self::select(pred, variant)
    }

    /// Resolve a subtree down to a template: either the node is already a
    /// leaf, or it branches on argument shape under `arg`.
    fn select<'a>(node: &'a TemplateNode, variant: &str) -> Option<&'a Template> {
        match node {
            TemplateNode::Leaf(template) => Some(template),
            TemplateNode::Map(_) => node.at(&["arg", variant])?.leaf(),
        }
    }

    /// The display name for a schema key: `rules.<key>` in the requested
    /// locale, then in the fallback locale, then the raw key itself.
    pub fn rule_name<'a>(&'a self, locale: &str, key: &'a str) -> &'a str {
        if let Some(name) = self
            .locales
            .get(locale)
            .and_then(|entry| entry.rules.get(key))
        {
            return name;
        }
        if locale != self.fallback_locale {
            if let Some(name) = self
                .locales
                .get(&self.fallback_locale)
                .and_then(|entry| entry.rules.get(key))
            {
                return name;
            }
        }
        key
    }

    /// Check a target locale's templates against a source locale.
    ///
    /// Reports template paths the source locale does not define, and
    /// placeholders outside the vocabulary the argument normalizer
    /// supplies. Returns an empty vector when either locale is not loaded.
    pub fn validate(&self, source_locale: &str, target_locale: &str) -> Vec<LoadWarning> {
        let mut warnings = Vec::new();

        let Some(source) = self.locales.get(source_locale) else {
            return warnings;
        };
        let Some(target) = self.locales.get(target_locale) else {
            return warnings;
        };

        let mut path = Vec::new();
        Self::validate_node(
            &target.errors,
            &source.errors,
            target_locale,
            &mut path,
            &mut warnings,
        );
        warnings
    }

    fn validate_node(
        node: &TemplateNode,
        source_root: &TemplateNode,
        locale: &str,
        path: &mut Vec<String>,
        warnings: &mut Vec<LoadWarning>,
    ) {
        match node {
            TemplateNode::Leaf(template) => {
                let dotted = path.join(".");
                let segments: Vec<&str> = path.iter().map(String::as_str).collect();
                if source_root.at(&segments).is_none() {
                    warnings.push(LoadWarning::UnknownTemplate {
                        locale: locale.to_string(),
                        path: dotted.clone(),
                    });
                }
                for token in template.placeholders() {
                    if !KNOWN_TOKENS.contains(&token) {
                        warnings.push(LoadWarning::UnknownPlaceholder {
                            locale: locale.to_string(),
                            path: dotted.clone(),
                            token: token.to_string(),
                        });
                    }
                }
            }
            TemplateNode::Map(children) => {
                for (key, child) in children {
                    path.push(key.clone());
                    Self::validate_node(child, source_root, locale, path, warnings);
                    path.pop();
                }
            }
        }
    }
}

/// Last-resort rendering for a predicate with no template anywhere: strip
/// the trailing `?` and turn underscores into spaces (`min_size?` → `min
/// size`). Degraded output is preferred over failure.
pub fn humanize(predicate: &str) -> String {
    predicate.trim_end_matches('?').replace('_', " ")
}
