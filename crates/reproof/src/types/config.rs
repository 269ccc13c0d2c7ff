use bon::Builder;

/// Per-compilation configuration.
///
/// Immutable value type; the `with_*` overrides return a new `Config` and
/// never touch the original.
///
/// # Example
///
/// ```
/// use reproof::Config;
///
/// let base = Config::default();
/// assert_eq!(base.locale(), "en");
/// assert!(!base.full());
///
/// let polish = base.with_locale("pl").with_full(true);
/// assert_eq!(polish.locale(), "pl");
/// assert_eq!(base.locale(), "en");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct Config {
    /// Locale the messages are rendered in.
    #[builder(default = "en".to_string())]
    locale: String,

    /// When set, each message is prefixed with the translated key name.
    #[builder(default = false)]
    full: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

impl Config {
    /// The configured locale code.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Whether messages carry the translated key-name prefix.
    pub fn full(&self) -> bool {
        self.full
    }

    /// A copy of this configuration with a different locale.
    pub fn with_locale(&self, locale: impl Into<String>) -> Self {
        Config {
            locale: locale.into(),
            full: self.full,
        }
    }

    /// A copy of this configuration with the full-message flag overridden.
    pub fn with_full(&self, full: bool) -> Self {
        Config {
            locale: self.locale.clone(),
            full,
        }
    }
}
