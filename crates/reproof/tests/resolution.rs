//! Tests for the template-resolution ladder and rule-name translation.

use reproof::{Dictionary, LoadError, LoadWarning, ResolveHints, TemplateStore, humanize};
use serde_json::json;

fn store(value: serde_json::Value) -> TemplateStore {
    let dictionary: Dictionary = serde_json::from_value(value).expect("dictionary");
    let mut store = TemplateStore::new();
    store.load(dictionary).expect("load");
    store
}

fn resolved(store: &TemplateStore, locale: &str, rule: &str, predicate: &str) -> Option<String> {
    store
        .resolve(locale, rule, predicate, ResolveHints::default())
        .map(|template| reproof::Bindings::new().render(template))
}

// =========================================================================
// Ladder ordering
// =========================================================================

#[test]
fn flat_predicate_string_resolves() {
    let store = store(json!({ "en": { "errors": { "filled?": "must be filled" } } }));
    assert_eq!(
        resolved(&store, "en", "name", "filled?").as_deref(),
        Some("must be filled")
    );
}

#[test]
fn rule_specific_override_wins_over_everything() {
    let store = store(json!({
        "en": {
            "errors": {
                "rules": { "age": { "int?": "age must be a number" } },
                "int?": "must be an integer"
            }
        }
    }));
    assert_eq!(
        resolved(&store, "en", "age", "int?").as_deref(),
        Some("age must be a number")
    );
    assert_eq!(
        resolved(&store, "en", "height", "int?").as_deref(),
        Some("must be an integer")
    );
}

#[test]
fn value_branch_keyed_by_rule_beats_generic_message() {
    let store = store(json!({
        "en": {
            "errors": {
                "key?": {
                    "value": { "gender": "Please provide your gender" },
                    "arg": { "default": "%{name} key is missing" }
                }
            }
        }
    }));
    assert_eq!(
        resolved(&store, "en", "gender", "key?").as_deref(),
        Some("Please provide your gender")
    );
    assert_eq!(
        resolved(&store, "en", "city", "key?").as_deref(),
        Some("%{name} key is missing")
    );
}

#[test]
fn arg_variant_selected_by_range_hint() {
    let store = store(json!({
        "en": {
            "errors": {
                "size?": {
                    "arg": {
                        "default": "size must be %{size}",
                        "range": "size must be within %{size_left} - %{size_right}"
                    }
                }
            }
        }
    }));

    let scalar = store.resolve("en", "tags", "size?", ResolveHints::default());
    let range = store.resolve(
        "en",
        "tags",
        "size?",
        ResolveHints {
            range: true,
            value_shape: None,
        },
    );
    assert_ne!(scalar.unwrap(), range.unwrap());
}

#[test]
fn value_shape_branch_beats_arg_branch() {
    let store = store(json!({
        "en": {
            "errors": {
                "size?": {
                    "arg": { "default": "size must be %{size}" },
                    "value": {
                        "string": { "arg": { "default": "length must be %{size}" } }
                    }
                }
            }
        }
    }));

    let hinted = store.resolve(
        "en",
        "nick",
        "size?",
        ResolveHints {
            range: false,
            value_shape: Some("string"),
        },
    );
    let plain = store.resolve("en", "nick", "size?", ResolveHints::default());
    assert_ne!(hinted.unwrap(), plain.unwrap());
}

// =========================================================================
// Locale fallback
// =========================================================================

#[test]
fn missing_locale_falls_back_to_default() {
    let store = store(json!({ "en": { "errors": { "filled?": "must be filled" } } }));
    assert_eq!(
        resolved(&store, "pl", "name", "filled?").as_deref(),
        Some("must be filled")
    );
}

#[test]
fn partially_translated_locale_falls_back_per_predicate() {
    let store = store(json!({
        "en": {
            "errors": { "filled?": "must be filled", "int?": "must be an integer" }
        },
        "pl": {
            "errors": { "filled?": "musi być wypełnione" }
        }
    }));
    assert_eq!(
        resolved(&store, "pl", "name", "filled?").as_deref(),
        Some("musi być wypełnione")
    );
    assert_eq!(
        resolved(&store, "pl", "age", "int?").as_deref(),
        Some("must be an integer")
    );
}

#[test]
fn unresolvable_predicate_returns_none() {
    let store = store(json!({ "en": { "errors": {} } }));
    assert!(resolved(&store, "en", "name", "mystery?").is_none());
}

#[test]
fn custom_fallback_locale() {
    let dictionary: Dictionary = serde_json::from_value(json!({
        "de": { "errors": { "filled?": "muss ausgefüllt sein" } }
    }))
    .unwrap();
    let mut store = TemplateStore::builder().fallback_locale("de").build();
    store.load(dictionary).unwrap();
    assert!(store.contains_locale("de"));
    assert!(!store.contains_locale("fr"));
    assert_eq!(
        resolved(&store, "fr", "name", "filled?").as_deref(),
        Some("muss ausgefüllt sein")
    );
}

// =========================================================================
// Rule names and humanization
// =========================================================================

#[test]
fn rule_name_translates_and_falls_back() {
    let store = store(json!({
        "en": { "rules": { "email": "e-mail address" } },
        "pl": { "rules": { "email": "adres email" } }
    }));
    assert_eq!(store.rule_name("pl", "email"), "adres email");
    assert_eq!(store.rule_name("fr", "email"), "e-mail address");
    assert_eq!(store.rule_name("en", "city"), "city");
}

#[test]
fn humanize_strips_question_mark_and_underscores() {
    assert_eq!(humanize("int?"), "int");
    assert_eq!(humanize("min_size?"), "min size");
    assert_eq!(humanize("custom_check"), "custom check");
}

// =========================================================================
// Loading and linting
// =========================================================================

#[test]
fn later_dictionary_overrides_earlier_template() {
    let mut store = TemplateStore::new();
    store
        .load(serde_json::from_value(json!({ "en": { "errors": { "filled?": "must be filled" } } })).unwrap())
        .unwrap();
    store
        .load(serde_json::from_value(json!({ "en": { "errors": { "filled?": "is required" } } })).unwrap())
        .unwrap();
    assert_eq!(
        resolved(&store, "en", "name", "filled?").as_deref(),
        Some("is required")
    );
}

#[test]
fn load_counts_template_leaves() {
    let dictionary: Dictionary = serde_json::from_value(json!({
        "en": {
            "errors": {
                "filled?": "must be filled",
                "size?": { "arg": { "default": "size must be %{size}", "range": "r" } }
            }
        }
    }))
    .unwrap();
    let mut store = TemplateStore::new();
    assert_eq!(store.load(dictionary).unwrap(), 3);
}

#[test]
fn errors_branch_must_be_a_mapping() {
    let dictionary: Dictionary =
        serde_json::from_value(json!({ "en": { "errors": "oops" } })).unwrap();
    let mut store = TemplateStore::new();
    let error = store.load(dictionary).unwrap_err();
    assert!(matches!(error, LoadError::ErrorsNotAMapping { .. }));
}

#[test]
fn failed_load_merges_nothing() {
    let mut store = TemplateStore::new();
    let dictionary: Dictionary = serde_json::from_value(json!({
        "en": { "errors": { "filled?": "must be filled" } },
        "zz": { "errors": "not a mapping" }
    }))
    .unwrap();

    let error = store.load(dictionary).unwrap_err();
    assert!(matches!(error, LoadError::ErrorsNotAMapping { .. }));

    // The valid locale listed before the broken one must not have been
    // merged either.
    assert!(!store.contains_locale("en"));
    assert!(resolved(&store, "en", "name", "filled?").is_none());
}

#[test]
fn failed_load_preserves_previous_contents() {
    let mut store = TemplateStore::new();
    store
        .load(serde_json::from_value(json!({ "en": { "errors": { "filled?": "must be filled" } } })).unwrap())
        .unwrap();

    let broken: Dictionary =
        serde_json::from_value(json!({ "en": { "errors": "oops" } })).unwrap();
    assert!(store.load(broken).is_err());

    assert_eq!(
        resolved(&store, "en", "name", "filled?").as_deref(),
        Some("must be filled")
    );
}

#[test]
fn empty_locale_code_is_rejected() {
    let dictionary: Dictionary =
        serde_json::from_value(json!({ "": { "errors": { "filled?": "must be filled" } } }))
            .unwrap();
    let mut store = TemplateStore::new();
    assert!(matches!(store.load(dictionary).unwrap_err(), LoadError::EmptyLocale));
}

#[test]
fn validate_reports_templates_unknown_to_source() {
    let store = store(json!({
        "en": { "errors": { "filled?": "must be filled" } },
        "pl": { "errors": { "filled?": "musi być wypełnione", "extra?": "coś" } }
    }));
    let warnings = store.validate("en", "pl");
    assert_eq!(
        warnings,
        vec![LoadWarning::UnknownTemplate {
            locale: "pl".to_string(),
            path: "extra?".to_string(),
        }]
    );
}

#[test]
fn validate_reports_unknown_placeholders() {
    let store = store(json!({
        "en": { "errors": { "gt?": "must be greater than %{num}" } },
        "pl": { "errors": { "gt?": "musi być większe niż %{threshold}" } }
    }));
    let warnings = store.validate("en", "pl");
    assert_eq!(
        warnings,
        vec![LoadWarning::UnknownPlaceholder {
            locale: "pl".to_string(),
            path: "gt?".to_string(),
            token: "threshold".to_string(),
        }]
    );
}

#[test]
fn validate_with_unloaded_locale_is_empty() {
    let store = store(json!({ "en": { "errors": {} } }));
    assert!(store.validate("en", "pl").is_empty());
}
