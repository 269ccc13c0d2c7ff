//! Template string parser using winnow.
//!
//! Templates interleave literal text with `%{token}` placeholders. Parsing
//! is total: a `%` that does not open a well-formed placeholder (including a
//! `%{` that never closes) is consumed as literal text, so any input string
//! is a valid template.

use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use super::ast::{Segment, Template};

/// Parse a template string into segments.
pub fn parse_template(input: &str) -> Template {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(parsed) if remaining.is_empty() => parsed,
        // Invariant: `segment` always consumes at least one character, so
        // the parse only ends at end of input. If it ever stops early the
        // whole string is one literal.
        _ => Template {
            segments: vec![Segment::Literal(input.to_string())],
        },
    }
}

fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result: Vec<Segment> = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            Segment::Placeholder(_) => result.push(segment),
        }
    }

    result
}

fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((placeholder, literal_char)).parse_next(input)
}

/// Parse a `%{token}` placeholder. Backtracks on anything malformed so the
/// leading `%` falls through to the literal branch.
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited("%{", token, '}')
        .map(|name: &str| Segment::Placeholder(name.to_string()))
        .parse_next(input)
}

fn token<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)
}

fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}
