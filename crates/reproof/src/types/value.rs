use indexmap::IndexMap;

/// A primitive type name, as carried by `type?`-family predicate arguments.
///
/// Rendered into templates via [`ValueType::short_name`], never as a Rust
/// type path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Nil,
    Bool,
    Int,
    Float,
    Decimal,
    Str,
    Array,
    Hash,
    Date,
    Time,
    DateTime,
}

impl ValueType {
    /// The conventional human-readable name used inside error messages.
    pub fn short_name(self) -> &'static str {
        match self {
            ValueType::Nil => "nil",
            ValueType::Bool => "boolean",
            ValueType::Int => "integer",
            ValueType::Float => "float",
            ValueType::Decimal => "decimal",
            ValueType::Str => "string",
            ValueType::Array => "array",
            ValueType::Hash => "hash",
            ValueType::Date => "date",
            ValueType::Time => "time",
            ValueType::DateTime => "date time",
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// A runtime value flowing through message compilation.
///
/// Covers both the data that was validated and the comparator arguments a
/// predicate was applied with (thresholds, sets, ranges, type names).
///
/// # Example
///
/// ```
/// use reproof::Value;
///
/// let threshold: Value = 18.into();
/// assert_eq!(threshold.as_int(), Some(18));
///
/// let list: Value = vec![Value::from("draft"), Value::from("published")].into();
/// assert_eq!(list.to_string(), "draft, published");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absent value.
    Nil,

    /// A boolean.
    Bool(bool),

    /// An integer.
    Int(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value.
    Str(String),

    /// An ordered sequence of values.
    List(Vec<Value>),

    /// A string-keyed mapping, preserving insertion order.
    Map(IndexMap<String, Value>),

    /// An inclusive integer range, as used by `size?` and friends.
    Range(i64, i64),

    /// A primitive type name (argument of `type?`-family predicates).
    Type(ValueType),
}

/// The runtime shape of a validated value, used to pick between
/// "size"-worded and "length"-worded template branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    Str,
    List,
    Map,
    Other,
}

impl ValueShape {
    /// Dictionary key for the value-shape branch of a template tree.
    pub fn branch_key(self) -> Option<&'static str> {
        match self {
            ValueShape::Str => Some("string"),
            ValueShape::List => Some("array"),
            ValueShape::Map => Some("hash"),
            ValueShape::Other => None,
        }
    }
}

impl Value {
    /// Get this value as an integer, if it is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a string slice, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a range's bounds, if it is one.
    pub fn as_range(&self) -> Option<(i64, i64)> {
        match self {
            Value::Range(low, high) => Some((*low, *high)),
            _ => None,
        }
    }

    /// Get this value as a list of values, if it is one.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// The runtime shape of this value.
    pub fn shape(&self) -> ValueShape {
        match self {
            Value::Str(_) => ValueShape::Str,
            Value::List(_) => ValueShape::List,
            Value::Map(_) => ValueShape::Map,
            Value::Nil
            | Value::Bool(_)
            | Value::Int(_)
            | Value::Float(_)
            | Value::Range(..)
            | Value::Type(_) => ValueShape::Other,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Nil => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::List(items) => {
                let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "{}", rendered.join(", "))
            }
            Value::Map(entries) => {
                let rendered: Vec<String> =
                    entries.iter().map(|(k, v)| format!("{k}: {v}")).collect();
                write!(f, "{}", rendered.join(", "))
            }
            Value::Range(low, high) => write!(f, "{low} - {high}"),
            Value::Type(t) => write!(f, "{t}"),
        }
    }
}

// From implementations for common types

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<std::ops::RangeInclusive<i64>> for Value {
    fn from(range: std::ops::RangeInclusive<i64>) -> Self {
        Value::Range(*range.start(), *range.end())
    }
}

impl From<ValueType> for Value {
    fn from(t: ValueType) -> Self {
        Value::Type(t)
    }
}
