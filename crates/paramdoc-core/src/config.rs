//! Configuration management for parameter extraction.
//!
//! This module defines the `Config` struct describing the conventions the
//! resolver follows: which base types mark entity controllers and form
//! requests, how request type names are derived from an entity, and the seed
//! used for example values. Every field has a default, so an empty YAML file
//! is a valid configuration.
//!
//! # Examples
//!
//! ```no_run
//! use paramdoc_core::config::Config;
//!
//! // Start from defaults and tweak programmatically
//! let mut config = Config::default();
//! config.request_namespace = "Acme\\Http\\Requests".to_string();
//! config.example_seed = 7;
//!
//! // Or load from a config file
//! # async fn load() -> paramdoc_core::Result<()> {
//! let config = Config::from_file("paramdoc.yaml").await?;
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::collections::HashMap;
use std::path::Path;

use crate::example::DEFAULT_SEED;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Configuration for parameter extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base type whose subclasses follow the entity controller convention
    pub entity_controller: String,

    /// Static property on entity controllers naming the entity type
    pub entity_property: String,

    /// Base types that mark a handler parameter as a form request
    pub form_request_bases: Vec<String>,

    /// Root namespace of generated request type names
    pub request_namespace: String,

    /// Request type name templates, tried in order.
    ///
    /// Placeholders: `{namespace}`, `{entity}`, `{action}`.
    pub request_templates: Vec<String>,

    /// Handler method names mapped to convention action names
    pub action_synonyms: HashMap<String, String>,

    /// Seed for example value generation
    pub example_seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entity_controller: "IgnitionWolf\\API\\Controllers\\EntityController".to_string(),
            entity_property: "entity".to_string(),
            form_request_bases: vec![
                "Illuminate\\Foundation\\Http\\FormRequest".to_string(),
                "Dingo\\Api\\Http\\FormRequest".to_string(),
            ],
            request_namespace: "App\\Http\\Requests".to_string(),
            request_templates: vec![
                "{namespace}\\{entity}\\{action}Request".to_string(),
                "{namespace}\\{action}{entity}Request".to_string(),
            ],
            action_synonyms: default_action_synonyms(),
            example_seed: DEFAULT_SEED,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = fs::read_to_string(path).await?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> crate::Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Map a handler method name to its convention action
    pub fn action_for<'a>(&'a self, method: &'a str) -> &'a str {
        self.action_synonyms
            .get(method)
            .map(String::as_str)
            .unwrap_or(method)
    }

    fn validate(&self) -> crate::Result<()> {
        if self.request_templates.iter().any(|t| !t.contains("{entity}")) {
            return Err(crate::Error::config(
                "every request template must contain an {entity} placeholder",
            ));
        }
        Ok(())
    }
}

fn default_action_synonyms() -> HashMap<String, String> {
    [
        ("store", "create"),
        ("destroy", "delete"),
        ("index", "list"),
        ("show", "read"),
    ]
    .into_iter()
    .map(|(method, action)| (method.to_string(), action.to_string()))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_roundtrip() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("paramdoc.yaml");

        let mut config = Config::default();
        config.example_seed = 99;
        config.save(&file_path).await?;

        let loaded = Config::from_file(&file_path).await?;
        assert_eq!(loaded, config);
        assert_eq!(loaded.example_seed, 99);

        Ok(())
    }

    #[test]
    fn test_empty_yaml_uses_defaults() -> crate::Result<()> {
        let config = Config::from_yaml("{}")?;
        assert_eq!(config, Config::default());
        assert_eq!(config.form_request_bases.len(), 2);
        Ok(())
    }

    #[test]
    fn test_partial_yaml_overrides() -> crate::Result<()> {
        let config = Config::from_yaml("entity_property: model\nexample_seed: 5\n")?;
        assert_eq!(config.entity_property, "model");
        assert_eq!(config.example_seed, 5);
        assert_eq!(config.request_namespace, "App\\Http\\Requests");
        Ok(())
    }

    #[test]
    fn test_action_synonyms() {
        let config = Config::default();
        assert_eq!(config.action_for("store"), "create");
        assert_eq!(config.action_for("destroy"), "delete");
        assert_eq!(config.action_for("index"), "list");
        assert_eq!(config.action_for("show"), "read");
        assert_eq!(config.action_for("publish"), "publish");
    }

    #[test]
    fn test_template_without_entity_is_rejected() {
        let result = Config::from_yaml("request_templates: ['{namespace}\\Request']\n");
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }
}
