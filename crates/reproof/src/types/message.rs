use indexmap::IndexMap;

/// A single compiled leaf result: the key path it belongs to and the
/// rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    path: Vec<String>,
    text: String,
}

impl Message {
    pub fn new(path: Vec<String>, text: impl Into<String>) -> Self {
        Self {
            path,
            text: text.into(),
        }
    }

    /// Key path from the outermost failure down to the leaf.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// The rendered message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Prefix `key` onto the front of the path, consuming the message.
    pub(crate) fn under(mut self, key: &str) -> Self {
        self.path.insert(0, key.to_string());
        self
    }

    pub(crate) fn into_text(self) -> String {
        self.text
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// The final output of one compilation run: an ordered mapping from
/// top-level key to the rendered texts for that key.
///
/// Append-only while `compile` runs, a snapshot afterwards. Two failures
/// sharing a top-level key append in traversal order, never overwrite.
///
/// # Example
///
/// ```
/// use reproof::MessageSet;
///
/// let mut set = MessageSet::new();
/// set.append("age", "must be greater than 18");
/// set.append("age", "must be an integer");
/// assert_eq!(set.get("age"), Some(&["must be greater than 18".to_string(),
///                                   "must be an integer".to_string()][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageSet {
    messages: IndexMap<String, Vec<String>>,
}

impl MessageSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rendered text under `key`, preserving arrival order.
    pub fn append(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.messages.entry(key.into()).or_default().push(text.into());
    }

    /// The texts recorded for `key`, in arrival order.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.messages.get(key).map(Vec::as_slice)
    }

    /// Number of distinct top-level keys.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterate keys in arrival order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    /// Iterate `(key, texts)` pairs in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.messages
            .iter()
            .map(|(key, texts)| (key.as_str(), texts.as_slice()))
    }

    /// Expose the set as a plain ordered mapping for the embedding API.
    pub fn to_mapping(&self) -> IndexMap<String, Vec<String>> {
        self.messages.clone()
    }
}
