//! Documentation comment blocks.
//!
//! Parses `/** ... */` style comments into a free-text summary and a list of
//! `@tag content` entries. Lines that follow a tag without starting a new one
//! are joined onto that tag's content with a single space.

use serde::{Deserialize, Serialize};

use crate::types::TagKind;

/// A single `@name content` annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name without the leading `@`
    pub name: String,
    /// Everything after the tag name, whitespace-trimmed
    pub content: String,
}

/// A parsed documentation block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocBlock {
    /// Text before the first tag
    pub summary: String,
    /// Tags in declaration order
    pub tags: Vec<Tag>,
}

impl DocBlock {
    /// Parse raw comment text.
    ///
    /// ```
    /// use paramdoc_core::docblock::DocBlock;
    ///
    /// let block = DocBlock::parse("/**\n * Create a post.\n *\n * @bodyParam title string required\n */");
    /// assert_eq!(block.summary, "Create a post.");
    /// assert_eq!(block.tags[0].name, "bodyParam");
    /// assert_eq!(block.tags[0].content, "title string required");
    /// ```
    pub fn parse(comment: &str) -> Self {
        let mut summary: Vec<&str> = Vec::new();
        let mut tags: Vec<Tag> = Vec::new();

        for line in comment_lines(comment) {
            if let Some(rest) = line.strip_prefix('@') {
                let (name, content) = rest
                    .split_once(char::is_whitespace)
                    .unwrap_or((rest, ""));
                if !name.is_empty() {
                    tags.push(Tag {
                        name: name.to_string(),
                        content: content.trim().to_string(),
                    });
                    continue;
                }
            }

            match tags.last_mut() {
                Some(tag) if !line.is_empty() => {
                    if !tag.content.is_empty() {
                        tag.content.push(' ');
                    }
                    tag.content.push_str(line);
                }
                Some(_) => {}
                None => summary.push(line),
            }
        }

        Self {
            summary: summary.join("\n").trim().to_string(),
            tags,
        }
    }

    /// Iterate over the tags of a parameter tag kind
    pub fn tags_of(&self, kind: TagKind) -> impl Iterator<Item = &Tag> + '_ {
        self.tags.iter().filter(move |tag| tag.name == kind.as_str())
    }
}

/// Strip comment delimiters and leading `*` gutters
fn comment_lines(comment: &str) -> impl Iterator<Item = &str> {
    let body = comment.trim();
    let body = body.strip_prefix("/**").unwrap_or(body);
    let body = body.strip_suffix("*/").unwrap_or(body);

    body.lines().map(|line| {
        let line = line.trim();
        line.strip_prefix('*').map_or(line, str::trim)
    })
}
