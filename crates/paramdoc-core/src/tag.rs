//! Parameter tag grammar.
//!
//! ```text
//! @bodyParam <name> <type> [required] <description...>
//! @urlParam  <name> [<type> required] <description...>
//! ```
//!
//! Each field before the description is exactly one whitespace-delimited
//! token, so a name or type never swallows the words that follow it. The
//! `required` keyword is case-sensitive and only recognized as the token
//! directly after the name (and type). Whatever remains is the description.
//!
//! A url parameter type is only recognized in its canonical spelling and
//! only when `required` follows it; `@urlParam n number of results` keeps
//! `number of results` as the description.

use crate::description::parse_description;
use crate::docblock::DocBlock;
use crate::example::ExampleGenerator;
use crate::types::{ParameterMap, ParameterRecord, SemanticType, TagKind};

/// Marker that disables example synthesis for a tag
pub const NO_EXAMPLE_MARKER: &str = "No-example";

const REQUIRED_KEYWORD: &str = "required";

/// Keywords in a url parameter description that suggest an integer example
const INTEGER_HINTS: &[&str] = &["number", "count", "page"];

/// Positional fields of a tag before any type normalization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFields<'a> {
    pub name: &'a str,
    pub type_token: Option<&'a str>,
    pub required: bool,
    pub description: &'a str,
}

/// Split tag content into its positional fields.
///
/// `content` is expected to have had the `No-example` marker removed
/// already (see [`strip_no_example`]). Returns `None` for blank content.
pub fn tokenize(kind: TagKind, content: &str) -> Option<TagFields<'_>> {
    let mut cursor = Cursor::new(content);
    let name = cursor.next_token()?;

    let type_token = match kind {
        TagKind::BodyParam => cursor.next_token(),
        TagKind::UrlParam => {
            let mut lookahead = cursor.clone();
            match (lookahead.next_token(), lookahead.next_token()) {
                (Some(token), Some(REQUIRED_KEYWORD)) if SemanticType::is_canonical(token) => {
                    cursor.next_token()
                }
                _ => None,
            }
        }
    };

    // `required` as the last token is the required marker, not a description
    let required = cursor.next_token_if(|token| token == REQUIRED_KEYWORD).is_some();

    Some(TagFields {
        name,
        type_token,
        required,
        description: cursor.rest(),
    })
}

/// Remove every `No-example` marker, together with one preceding whitespace
/// character and one trailing character.
pub fn strip_no_example(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(pos) = rest.find(NO_EXAMPLE_MARKER) {
        let before = &rest[..pos];
        let before = match before.chars().next_back() {
            Some(c) if c.is_whitespace() => &before[..before.len() - c.len_utf8()],
            _ => before,
        };
        out.push_str(before);

        let after = &rest[pos + NO_EXAMPLE_MARKER.len()..];
        let mut chars = after.chars();
        chars.next();
        rest = chars.as_str();
    }

    out.push_str(rest);
    out
}

/// Returns true if the raw tag content disables example synthesis
pub fn suppresses_example(raw_content: &str) -> bool {
    raw_content.contains(NO_EXAMPLE_MARKER)
}

/// Parse one parameter tag into a record.
///
/// Returns `None` only when the tag has no name at all.
pub fn parse_tag(
    kind: TagKind,
    raw_content: &str,
    examples: &mut ExampleGenerator,
) -> Option<ParameterRecord> {
    let stripped = strip_no_example(raw_content);
    let fields = tokenize(kind, &stripped)?;
    let suppressed = suppresses_example(raw_content);

    let record = match kind {
        TagKind::BodyParam => {
            let param_type = SemanticType::normalize(fields.type_token.unwrap_or_default());
            let (description, example) = parse_description(fields.description, &param_type);
            let value = if suppressed {
                None
            } else {
                example.or_else(|| Some(examples.generate(&param_type)))
            };
            ParameterRecord {
                name: fields.name.to_string(),
                param_type: Some(param_type),
                required: fields.required,
                description,
                value,
            }
        }
        TagKind::UrlParam => {
            let (description, example) =
                parse_description(fields.description, &SemanticType::String);
            let value = if suppressed {
                None
            } else {
                example.or_else(|| Some(examples.generate(&url_example_type(&description))))
            };
            ParameterRecord {
                name: fields.name.to_string(),
                param_type: None,
                required: fields.required,
                description,
                value,
            }
        }
    };

    Some(record)
}

/// Parse every tag of `kind` in `block` into a map keyed by parameter name
pub fn parse_tags(kind: TagKind, block: &DocBlock, examples: &mut ExampleGenerator) -> ParameterMap {
    let mut parameters = ParameterMap::new();
    for tag in block.tags_of(kind) {
        match parse_tag(kind, &tag.content, examples) {
            Some(record) => {
                parameters.insert(record.name.clone(), record);
            }
            None => log::trace!("ignoring empty @{} tag", kind),
        }
    }
    parameters
}

fn url_example_type(description: &str) -> SemanticType {
    if INTEGER_HINTS.iter().any(|hint| description.contains(hint)) {
        SemanticType::Integer
    } else {
        SemanticType::String
    }
}

/// Whitespace tokenizer that keeps the untouched remainder available
#[derive(Clone)]
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            rest: input.trim_start(),
        }
    }

    fn peek(&self) -> Option<&'a str> {
        let end = self.rest.find(char::is_whitespace).unwrap_or(self.rest.len());
        let token = &self.rest[..end];
        (!token.is_empty()).then_some(token)
    }

    fn next_token(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.rest = self.rest[token.len()..].trim_start();
        Some(token)
    }

    fn next_token_if(&mut self, accept: impl Fn(&str) -> bool) -> Option<&'a str> {
        match self.peek() {
            Some(token) if accept(token) => self.next_token(),
            _ => None,
        }
    }

    fn rest(&self) -> &'a str {
        self.rest.trim_end()
    }
}
