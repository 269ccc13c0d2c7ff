//! Tests for locale-dictionary deserialization and deep merging.

use reproof::{DictNode, Dictionary};
use serde_json::json;

fn dict(value: serde_json::Value) -> Dictionary {
    serde_json::from_value(value).expect("dictionary should deserialize")
}

#[test]
fn deserializes_errors_and_rules() {
    let dictionary = dict(json!({
        "en": {
            "errors": {
                "filled?": "must be filled",
                "size?": {
                    "arg": {
                        "default": "size must be %{size}",
                        "range": "size must be within %{size_left} - %{size_right}"
                    }
                }
            },
            "rules": { "email": "e-mail address" }
        }
    }));

    let (locale, contents) = dictionary.locales().next().unwrap();
    assert_eq!(locale, "en");
    assert_eq!(contents.rules.get("email").map(String::as_str), Some("e-mail address"));
    assert!(matches!(contents.errors, DictNode::Map(_)));
}

#[test]
fn missing_branches_default_to_empty() {
    let dictionary = dict(json!({ "pl": {} }));
    let (_, contents) = dictionary.locales().next().unwrap();
    assert_eq!(contents.errors, DictNode::empty());
    assert!(contents.rules.is_empty());
}

#[test]
fn merge_adds_new_locales() {
    let mut base = dict(json!({ "en": { "errors": { "filled?": "must be filled" } } }));
    base.merge(dict(json!({ "pl": { "errors": { "filled?": "musi być wypełnione" } } })));
    let locales: Vec<&str> = base.locales().map(|(locale, _)| locale).collect();
    assert_eq!(locales, vec!["en", "pl"]);
}

#[test]
fn merge_is_recursive_and_later_wins() {
    let mut base = dict(json!({
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

    base.merge(dict(json!({
        "en": {
            "errors": {
                "size?": { "arg": { "default": "exact size %{size} expected" } }
            }
        }
    })));

    let (_, contents) = base.locales().next().unwrap();
    let DictNode::Map(errors) = &contents.errors else {
        panic!("errors should be a map");
    };
    let DictNode::Map(size) = &errors["size?"] else {
        panic!("size? should be a map");
    };
    let DictNode::Map(arg) = &size["arg"] else {
        panic!("arg should be a map");
    };
    // Overridden leaf takes the later value.
    assert_eq!(arg["default"], DictNode::Text("exact size %{size} expected".to_string()));
    // Sibling leaf from the earlier dictionary survives.
    assert_eq!(
        arg["range"],
        DictNode::Text("size must be within %{size_left} - %{size_right}".to_string())
    );
}

#[test]
fn merge_replaces_leaf_with_subtree() {
    let mut base = dict(json!({ "en": { "errors": { "size?": "wrong size" } } }));
    base.merge(dict(json!({
        "en": { "errors": { "size?": { "arg": { "default": "size must be %{size}" } } } }
    })));

    let (_, contents) = base.locales().next().unwrap();
    let DictNode::Map(errors) = &contents.errors else {
        panic!("errors should be a map");
    };
    assert!(matches!(errors["size?"], DictNode::Map(_)));
}

#[test]
fn rules_merge_extends_and_overrides() {
    let mut base = dict(json!({ "en": { "rules": { "email": "e-mail", "age": "age" } } }));
    base.merge(dict(json!({ "en": { "rules": { "email": "e-mail address" } } })));

    let (_, contents) = base.locales().next().unwrap();
    assert_eq!(contents.rules.get("email").map(String::as_str), Some("e-mail address"));
    assert_eq!(contents.rules.get("age").map(String::as_str), Some("age"));
}
