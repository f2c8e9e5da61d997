//! Common parameter types

// Internal imports (std, crate)
use std::fmt;
use std::str::FromStr;

// External imports (alphabetized)
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;

/// Example value attached to a parameter
pub type ExampleValue = JsonValue;

/// Parameters of one tag kind, keyed by name in declaration order.
///
/// A later tag with the same name replaces the earlier record but keeps its
/// position.
pub type ParameterMap = IndexMap<String, ParameterRecord>;

/// Documentation tag kinds that describe parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `@bodyParam <name> <type> [required] <description>`
    BodyParam,
    /// `@urlParam <name> [required] <description>`
    UrlParam,
}

impl TagKind {
    /// Returns the tag name as written after `@`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BodyParam => "bodyParam",
            Self::UrlParam => "urlParam",
        }
    }

    /// Returns an iterator over all parameter tag kinds
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::BodyParam, Self::UrlParam].iter().copied()
    }
}

impl FromStr for TagKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bodyParam" => Ok(Self::BodyParam),
            "urlParam" => Ok(Self::UrlParam),
            _ => Err(format!("Unknown tag kind: {}", s)),
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Deepest `T[]` / `object<T>` nesting kept by [`SemanticType::normalize`]
pub const MAX_NESTING: usize = 8;

/// Normalized parameter type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SemanticType {
    #[default]
    String,
    Integer,
    /// Floating point number
    Number,
    Boolean,
    /// Uploaded file
    File,
    Object,
    Array,
    /// Homogeneous array, written `T[]`
    ArrayOf(Box<SemanticType>),
    /// Object with homogeneous values, written `object<T>`
    ObjectOf(Box<SemanticType>),
}

impl SemanticType {
    /// Canonicalize a free-text type token.
    ///
    /// Never fails: tokens that are not recognized become [`SemanticType::String`].
    /// Collection wrappers beyond [`MAX_NESTING`] levels are not unwrapped, so
    /// the remaining inner token degrades to a string.
    ///
    /// ```
    /// use paramdoc_core::SemanticType;
    ///
    /// assert_eq!(SemanticType::normalize("int"), SemanticType::Integer);
    /// assert_eq!(SemanticType::normalize("bool[]").to_string(), "boolean[]");
    /// assert_eq!(SemanticType::normalize("whatever"), SemanticType::String);
    /// ```
    pub fn normalize(token: &str) -> Self {
        let mut token = token.trim();
        // Outermost wrapper first
        let mut wrappers: Vec<fn(Box<Self>) -> Self> = Vec::new();

        while wrappers.len() < MAX_NESTING {
            if let Some(inner) = token.strip_suffix("[]") {
                wrappers.push(Self::ArrayOf);
                token = inner.trim();
            } else if let Some(inner) = generic_argument(token) {
                wrappers.push(Self::ObjectOf);
                token = inner.trim();
            } else {
                break;
            }
        }

        let base = Self::from_alias(token).unwrap_or(Self::String);
        wrappers
            .into_iter()
            .rev()
            .fold(base, |inner, wrap| wrap(Box::new(inner)))
    }

    /// Returns true if the token is already the normalized spelling of a
    /// recognized type (`integer`, `string[]`, `object<boolean>`)
    pub fn is_canonical(token: &str) -> bool {
        Self::normalize(token).to_string() == token
    }

    fn from_alias(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "string" | "str" | "text" => Some(Self::String),
            "int" | "integer" => Some(Self::Integer),
            "float" | "double" | "number" | "numeric" | "decimal" => Some(Self::Number),
            "bool" | "boolean" => Some(Self::Boolean),
            "file" | "image" => Some(Self::File),
            "object" | "obj" | "map" => Some(Self::Object),
            "array" | "list" => Some(Self::Array),
            _ => None,
        }
    }
}

/// Extracts `T` from `object<T>` or `map<T>`
fn generic_argument(token: &str) -> Option<&str> {
    let (head, rest) = token.split_once('<')?;
    let inner = rest.strip_suffix('>')?;
    match head.to_lowercase().as_str() {
        "object" | "map" if !inner.trim().is_empty() => Some(inner),
        _ => None,
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Integer => write!(f, "integer"),
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
            Self::File => write!(f, "file"),
            Self::Object => write!(f, "object"),
            Self::Array => write!(f, "array"),
            Self::ArrayOf(inner) => write!(f, "{}[]", inner),
            Self::ObjectOf(inner) => write!(f, "object<{}>", inner),
        }
    }
}

impl Serialize for SemanticType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SemanticType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(Self::normalize(&token))
    }
}

/// A single documented parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRecord {
    /// Parameter name as written in the tag
    pub name: String,
    /// Normalized type; url parameters carry none
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub param_type: Option<SemanticType>,
    /// Whether the tag carried the `required` keyword
    pub required: bool,
    /// Description without any inline example
    pub description: String,
    /// Explicit or generated example; `None` when suppressed
    pub value: Option<ExampleValue>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_aliases() {
        assert_eq!(SemanticType::normalize("int"), SemanticType::Integer);
        assert_eq!(SemanticType::normalize("integer"), SemanticType::Integer);
        assert_eq!(SemanticType::normalize("bool"), SemanticType::Boolean);
        assert_eq!(SemanticType::normalize("float"), SemanticType::Number);
        assert_eq!(SemanticType::normalize("double"), SemanticType::Number);
        assert_eq!(SemanticType::normalize("Boolean"), SemanticType::Boolean);
        assert_eq!(SemanticType::normalize("file"), SemanticType::File);
    }

    #[test]
    fn test_normalize_collections() {
        assert_eq!(
            SemanticType::normalize("object[]"),
            SemanticType::ArrayOf(Box::new(SemanticType::Object))
        );
        assert_eq!(
            SemanticType::normalize("int[][]"),
            SemanticType::ArrayOf(Box::new(SemanticType::ArrayOf(Box::new(
                SemanticType::Integer
            ))))
        );
        assert_eq!(
            SemanticType::normalize("map<int>"),
            SemanticType::ObjectOf(Box::new(SemanticType::Integer))
        );
        assert_eq!(SemanticType::normalize("object<string[]>").to_string(), "object<string[]>");
    }

    #[test]
    fn test_normalize_is_total() {
        for token in ["", " ", "[]", "<>", "object<>", "weird<int", "\u{1F600}", "required"] {
            // Every token maps to some type without panicking
            let _ = SemanticType::normalize(token);
        }
        assert_eq!(SemanticType::normalize(""), SemanticType::String);
        assert_eq!(SemanticType::normalize("object<>"), SemanticType::String);
        assert_eq!(
            SemanticType::normalize("[]"),
            SemanticType::ArrayOf(Box::new(SemanticType::String))
        );
    }

    #[test]
    fn test_deep_nesting_is_capped() {
        let token = format!("string{}", "[]".repeat(20_000));
        let normalized = SemanticType::normalize(&token);
        assert_eq!(normalized.to_string().matches("[]").count(), MAX_NESTING);

        let token = format!("{}int{}", "object<".repeat(10_000), ">".repeat(10_000));
        let normalized = SemanticType::normalize(&token);
        assert_eq!(normalized.to_string().matches("object<").count(), MAX_NESTING);

        assert_eq!(
            SemanticType::normalize("int[][][]").to_string(),
            "integer[][][]"
        );
    }

    #[test]
    fn test_is_canonical() {
        assert!(SemanticType::is_canonical("string"));
        assert!(SemanticType::is_canonical("number"));
        assert!(SemanticType::is_canonical("integer[]"));
        assert!(SemanticType::is_canonical("object<boolean>"));
        assert!(!SemanticType::is_canonical("int"));
        assert!(!SemanticType::is_canonical("text"));
        assert!(!SemanticType::is_canonical("The"));
        assert!(!SemanticType::is_canonical("required"));
    }

    #[test]
    fn test_tag_kind_from_str() {
        assert_eq!("bodyParam".parse::<TagKind>(), Ok(TagKind::BodyParam));
        assert_eq!("urlParam".parse::<TagKind>(), Ok(TagKind::UrlParam));
        assert!("bodyparam".parse::<TagKind>().is_err());
        assert_eq!(TagKind::UrlParam.to_string(), "urlParam");
    }

    #[test]
    fn test_record_serde_omits_missing_type() {
        let record = ParameterRecord {
            name: "id".to_string(),
            param_type: None,
            required: true,
            description: "The id.".to_string(),
            value: Some(json!("abc")),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({"name": "id", "required": true, "description": "The id.", "value": "abc"})
        );

        let body = ParameterRecord {
            param_type: Some(SemanticType::normalize("int[]")),
            ..record
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["type"], "integer[]");
    }
}
