use super::Value;

/// The shape of a predicate's comparator arguments, derived from the
/// arguments actually supplied. Drives template variant selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgShape {
    /// Zero-arity predicate (`filled?`, `odd?`).
    None,
    /// A single scalar comparator (`gt? 18`).
    Scalar,
    /// A single range comparator (`size? 2..4`).
    Range,
    /// A list comparator (`included_in? [a, b, c]`).
    List,
}

/// A single predicate failure as produced by the rule-evaluation engine.
///
/// `name` identifies the predicate (`gt?`, `size?`, `type?`), `args` holds
/// its comparator values in declaration order, and `value` is the data that
/// was validated. Immutable once constructed.
///
/// # Example
///
/// ```
/// use reproof::{ArgShape, PredicateApplication, Value};
///
/// let failure = PredicateApplication::new("gt?", vec![18.into()], Value::Int(12));
/// assert_eq!(failure.arg_shape(), ArgShape::Scalar);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PredicateApplication {
    name: String,
    args: Vec<Value>,
    value: Value,
}

impl PredicateApplication {
    pub fn new(name: impl Into<String>, args: Vec<Value>, value: Value) -> Self {
        Self {
            name: name.into(),
            args,
            value,
        }
    }

    /// The predicate identifier, e.g. `gt?`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Comparator arguments in declaration order. May be empty.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// The first comparator argument, if any.
    pub fn arg(&self) -> Option<&Value> {
        self.args.first()
    }

    /// The data that was validated.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Derive the argument shape from the supplied arguments.
    ///
    /// A single `Range` argument selects the range template variant; any
    /// single `List` argument the list rendering; everything else with at
    /// least one argument is scalar.
    pub fn arg_shape(&self) -> ArgShape {
        match self.args.as_slice() {
            [] => ArgShape::None,
            [Value::Range(..)] => ArgShape::Range,
            [Value::List(_)] => ArgShape::List,
            _ => ArgShape::Scalar,
        }
    }
}
