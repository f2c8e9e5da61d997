//! Description parsing and inline example extraction.
//!
//! A description may end with an inline example, written as
//! `The user's age. Example: 42`. The example is cut from the description
//! and cast to the parameter's type.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value as JsonValue};

use crate::types::SemanticType;

static INLINE_EXAMPLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(.*)\bExample:\s*(.+)\s*").expect("inline example pattern is valid")
});

/// Split a raw description into the clean description and an inline example.
///
/// Returns `None` for the example when the description carries none; the
/// caller decides whether to synthesize one.
pub fn parse_description(raw: &str, semantic_type: &SemanticType) -> (String, Option<JsonValue>) {
    match INLINE_EXAMPLE.captures(raw) {
        Some(caps) => {
            let description = caps.get(1).map_or("", |m| m.as_str()).trim().to_string();
            let example = caps.get(2).map_or("", |m| m.as_str()).trim();
            (description, Some(cast_to_type(example, semantic_type)))
        }
        None => (raw.trim().to_string(), None),
    }
}

/// Cast an example literal to the JSON value matching the parameter type
pub fn cast_to_type(literal: &str, semantic_type: &SemanticType) -> JsonValue {
    match semantic_type {
        SemanticType::Integer => json!(leading_integer(literal)),
        SemanticType::Number => json!(leading_float(literal)),
        SemanticType::Boolean => json!(!matches!(literal, "" | "0" | "false")),
        _ => json!(literal),
    }
}

fn leading_integer(literal: &str) -> i64 {
    let literal = literal.trim_start();
    let end = literal
        .char_indices()
        .take_while(|(i, c)| c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+')))
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);
    literal[..end].parse().unwrap_or(0)
}

fn leading_float(literal: &str) -> f64 {
    let literal = literal.trim_start();
    // Longest prefix that still parses
    (1..=literal.len())
        .rev()
        .filter(|end| literal.is_char_boundary(*end))
        .find_map(|end| literal[..end].parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
