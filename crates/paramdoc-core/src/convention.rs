//! Naming conventions for entity request types.
//!
//! An entity controller declares the entity it manages. Request types for
//! its actions are expected under predictable names, e.g. `store` on a
//! `Post` controller maps to `App\Http\Requests\Post\CreateRequest`.

use crate::config::Config;
use crate::utils::{short_type_name, to_upper_camel_case, type_namespace};

/// Derives candidate request type names for an entity action
pub trait NamingConvention {
    /// Namespace that holds the request types of an entity
    fn namespace_for(&self, entity: &str) -> String;

    /// Candidate request type names, in probing order
    fn possible_requests(&self, namespace: &str, entity: &str, action: &str) -> Vec<String>;
}

/// Naming convention driven by string templates from [`Config`].
///
/// `request_namespace` may contain `{module}`, replaced by the entity's
/// namespace without a trailing `Models` segment. Templates may contain
/// `{namespace}`, `{entity}` and `{action}`.
#[derive(Debug, Clone)]
pub struct TemplateNamingConvention {
    namespace: String,
    templates: Vec<String>,
}

impl TemplateNamingConvention {
    pub fn new(namespace: impl Into<String>, templates: Vec<String>) -> Self {
        Self {
            namespace: namespace.into(),
            templates,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.request_namespace.clone(),
            config.request_templates.clone(),
        )
    }
}

impl NamingConvention for TemplateNamingConvention {
    fn namespace_for(&self, entity: &str) -> String {
        let entity_namespace = type_namespace(entity);
        let module = entity_namespace
            .strip_suffix("\\Models")
            .or_else(|| entity_namespace.strip_suffix("Models"))
            .unwrap_or(entity_namespace);
        self.namespace.replace("{module}", module)
    }

    fn possible_requests(&self, namespace: &str, entity: &str, action: &str) -> Vec<String> {
        let entity = short_type_name(entity);
        let action = to_upper_camel_case(action);
        self.templates
            .iter()
            .map(|template| {
                template
                    .replace("{namespace}", namespace)
                    .replace("{entity}", entity)
                    .replace("{action}", &action)
            })
            .collect()
    }
}
