//! Tests for the `%{token}` template parser.

use reproof::{Segment, parse_template};

fn literal(text: &str) -> Segment {
    Segment::Literal(text.to_string())
}

fn placeholder(token: &str) -> Segment {
    Segment::Placeholder(token.to_string())
}

#[test]
fn plain_text_is_one_literal() {
    let template = parse_template("must be filled");
    assert_eq!(template.segments, vec![literal("must be filled")]);
}

#[test]
fn empty_input_has_no_segments() {
    let template = parse_template("");
    assert!(template.segments.is_empty());
}

#[test]
fn single_placeholder() {
    let template = parse_template("%{num}");
    assert_eq!(template.segments, vec![placeholder("num")]);
}

#[test]
fn placeholder_between_literals() {
    let template = parse_template("size must be %{size}!");
    assert_eq!(
        template.segments,
        vec![literal("size must be "), placeholder("size"), literal("!")]
    );
}

#[test]
fn multiple_placeholders() {
    let template = parse_template("within %{size_left} - %{size_right}");
    assert_eq!(
        template.segments,
        vec![
            literal("within "),
            placeholder("size_left"),
            literal(" - "),
            placeholder("size_right"),
        ]
    );
}

#[test]
fn adjacent_literal_chars_are_merged() {
    let template = parse_template("abc");
    assert_eq!(template.segments.len(), 1);
}

#[test]
fn underscores_and_digits_in_tokens() {
    let template = parse_template("%{num_left2}");
    assert_eq!(template.segments, vec![placeholder("num_left2")]);
}

#[test]
fn lone_percent_is_literal() {
    let template = parse_template("100% sure");
    assert_eq!(template.segments, vec![literal("100% sure")]);
}

#[test]
fn unterminated_placeholder_is_literal() {
    let template = parse_template("must be %{num");
    assert_eq!(template.segments, vec![literal("must be %{num")]);
}

#[test]
fn empty_braces_are_literal() {
    let template = parse_template("%{}");
    assert_eq!(template.segments, vec![literal("%{}")]);
}

#[test]
fn placeholder_with_invalid_char_is_literal() {
    let template = parse_template("%{a-b}");
    assert_eq!(template.segments, vec![literal("%{a-b}")]);
}

#[test]
fn placeholders_iterator_lists_tokens() {
    let template = parse_template("%{left} and %{right}");
    let tokens: Vec<&str> = template.placeholders().collect();
    assert_eq!(tokens, vec!["left", "right"]);
}
