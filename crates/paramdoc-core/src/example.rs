//! Example value synthesis for parameters without an explicit example.
//!
//! Values come from a seeded [`StdRng`], so the same seed and the same
//! sequence of requests always produce the same values. The resolver creates
//! a fresh generator for every call, which keeps repeated extractions stable.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::{json, Map, Value as JsonValue};

use crate::types::SemanticType;

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 1;

const WORDS: &[&str] = &[
    "alpha", "amet", "dolor", "ipsum", "lorem", "magnam", "quia", "sit", "tempora", "veniam",
];

const FILE_NAMES: &[&str] = &["avatar.png", "document.pdf", "export.csv", "notes.txt"];

/// Number of elements generated for array examples
const ARRAY_LEN: usize = 2;

/// Produces type-appropriate example values
#[derive(Debug, Clone)]
pub struct ExampleGenerator {
    rng: StdRng,
}

impl ExampleGenerator {
    /// Create a generator with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate an example value for the given type
    pub fn generate(&mut self, semantic_type: &SemanticType) -> JsonValue {
        match semantic_type {
            SemanticType::String => json!(self.word()),
            SemanticType::Integer => json!(self.rng.gen_range(1..=20)),
            SemanticType::Number => {
                let raw: f64 = self.rng.gen_range(0.0..100.0);
                json!((raw * 100.0).round() / 100.0)
            }
            SemanticType::Boolean => json!(self.rng.gen_bool(0.5)),
            SemanticType::File => {
                json!(FILE_NAMES.choose(&mut self.rng).copied().unwrap_or("file.txt"))
            }
            SemanticType::Object => JsonValue::Object(Map::new()),
            SemanticType::Array => self.sequence(&SemanticType::String),
            SemanticType::ArrayOf(inner) => self.sequence(inner),
            SemanticType::ObjectOf(inner) => {
                let mut map = Map::new();
                map.insert(self.word().to_string(), self.generate(inner));
                JsonValue::Object(map)
            }
        }
    }

    fn sequence(&mut self, element: &SemanticType) -> JsonValue {
        JsonValue::Array((0..ARRAY_LEN).map(|_| self.generate(element)).collect())
    }

    fn word(&mut self) -> &'static str {
        WORDS.choose(&mut self.rng).copied().unwrap_or("example")
    }
}

impl Default for ExampleGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_values() {
        let types = [
            SemanticType::String,
            SemanticType::Integer,
            SemanticType::Number,
            SemanticType::Boolean,
            SemanticType::normalize("int[]"),
        ];
        let mut first = ExampleGenerator::new(42);
        let mut second = ExampleGenerator::new(42);
        for t in &types {
            assert_eq!(first.generate(t), second.generate(t));
        }
    }

    #[test]
    fn test_values_match_type() {
        let mut generator = ExampleGenerator::default();

        let text = generator.generate(&SemanticType::String);
        assert!(WORDS.contains(&text.as_str().unwrap()));

        let number = generator.generate(&SemanticType::Integer).as_i64().unwrap();
        assert!((1..=20).contains(&number));

        assert!(generator.generate(&SemanticType::Number).is_f64());
        assert!(generator.generate(&SemanticType::Boolean).is_boolean());
        assert_eq!(generator.generate(&SemanticType::Object), json!({}));

        let file = generator.generate(&SemanticType::File);
        assert!(FILE_NAMES.contains(&file.as_str().unwrap()));
    }

    #[test]
    fn test_arrays_are_homogeneous() {
        let mut generator = ExampleGenerator::default();

        let ints = generator.generate(&SemanticType::normalize("integer[]"));
        let ints = ints.as_array().unwrap();
        assert_eq!(ints.len(), ARRAY_LEN);
        assert!(ints.iter().all(JsonValue::is_i64));

        let plain = generator.generate(&SemanticType::Array);
        assert!(plain.as_array().unwrap().iter().all(JsonValue::is_string));
    }

    #[test]
    fn test_object_of_wraps_inner_value() {
        let mut generator = ExampleGenerator::default();
        let value = generator.generate(&SemanticType::normalize("object<bool>"));
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 1);
        assert!(map.values().all(JsonValue::is_boolean));
    }
}
