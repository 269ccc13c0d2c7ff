//! Error and warning types for template-store loading.

use thiserror::Error;

/// Errors that occur while loading a locale dictionary into the store.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A locale code was empty.
    #[error("dictionary contains an empty locale code")]
    EmptyLocale,

    /// The `errors` branch of a locale was a bare string instead of a
    /// mapping of predicate names.
    #[error("locale '{locale}': `errors` must be a mapping, not a template string")]
    ErrorsNotAMapping { locale: String },
}

/// Non-fatal findings from [`validate`](crate::TemplateStore::validate).
///
/// Warnings point at template paths in dotted form, e.g. `size?.arg.range`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// The target locale defines a template the source locale does not.
    UnknownTemplate { locale: String, path: String },

    /// A template references a placeholder outside the vocabulary the
    /// argument normalizer ever supplies.
    UnknownPlaceholder {
        locale: String,
        path: String,
        token: String,
    },
}

impl std::fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadWarning::UnknownTemplate { locale, path } => {
                write!(f, "locale '{locale}': template '{path}' not present in source locale")
            }
            LoadWarning::UnknownPlaceholder {
                locale,
                path,
                token,
            } => {
                write!(
                    f,
                    "locale '{locale}': template '{path}' references unknown placeholder '%{{{token}}}'"
                )
            }
        }
    }
}
