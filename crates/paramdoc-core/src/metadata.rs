//! Static API metadata.
//!
//! `ApiMetadata` is a serializable snapshot of what the resolver needs to
//! know about an application: the types it declares (ancestry, static
//! properties, doc comments) and its endpoints (route, controller, handler
//! method, formal parameters, handler doc comment). It plays both the
//! reflection provider and the route doc-blocker role.
//!
//! # Examples
//!
//! ```
//! use paramdoc_core::metadata::ApiMetadata;
//!
//! let metadata = ApiMetadata::parse_content(r#"
//! types:
//!   App\Http\Controllers\PostController: {}
//! endpoints:
//!   - route: GET /posts
//!     controller: App\Http\Controllers\PostController
//!     method: index
//!     doc_comment: "/** @urlParam page The page number. */"
//! "#).unwrap();
//! assert_eq!(metadata.endpoints.len(), 1);
//! ```

// Internal imports (std, crate)
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use crate::docblock::DocBlock;
use crate::resolver::{ReflectionProvider, RouteDocBlocker};

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tokio::fs;

/// Strip the leading global namespace separator
pub fn canonical_type_name(name: &str) -> &str {
    name.trim().trim_start_matches('\\')
}

/// A formal parameter of an endpoint handler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormalParameter {
    pub name: String,
    /// Declared type, absent for untyped parameters
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

/// The unit under documentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Route label, e.g. `POST /posts`
    pub route: String,
    /// Owning controller type
    pub controller: String,
    /// Handler method name
    pub method: String,
    #[serde(default)]
    pub parameters: Vec<FormalParameter>,
    /// Raw doc comment of the handler method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_comment: Option<String>,
}

impl Endpoint {
    /// Identity of the handler, `Controller@method`
    pub fn key(&self) -> String {
        format!("{}@{}", canonical_type_name(&self.controller), self.method)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.route, self.key())
    }
}

/// Reflected facts about a declared type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeInfo {
    /// Direct or transitive parent types and interfaces
    #[serde(default)]
    pub ancestors: Vec<String>,
    /// Class-level configuration values
    #[serde(default)]
    pub static_properties: HashMap<String, JsonValue>,
    /// Raw doc comment of the type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_comment: Option<String>,
}

impl TypeInfo {
    /// String value of a static property
    pub fn static_property(&self, name: &str) -> Option<&str> {
        self.static_properties.get(name)?.as_str()
    }
}

/// Types and endpoints of an application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiMetadata {
    #[serde(default)]
    pub types: HashMap<String, TypeInfo>,
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

impl ApiMetadata {
    /// Load metadata from a file (supports both YAML and JSON)
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        Self::parse_content(&content).map_err(|e| {
            crate::Error::metadata(format!(
                "Failed to parse metadata at {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Parse content as either JSON or YAML
    pub fn parse_content(content: &str) -> crate::Result<Self> {
        // Try to parse as JSON first
        if let Ok(metadata) = serde_json::from_str::<Self>(content) {
            return Ok(metadata.canonicalize());
        }

        // Fall back to YAML, which reports the more useful error
        let metadata: Self = serde_yaml::from_str(content)?;
        Ok(metadata.canonicalize())
    }

    fn canonicalize(self) -> Self {
        let types = self
            .types
            .into_iter()
            .map(|(name, info)| (canonical_type_name(&name).to_string(), info))
            .collect();
        Self {
            types,
            endpoints: self.endpoints,
        }
    }

    /// Find an endpoint by its `Controller@method` key
    pub fn endpoint(&self, key: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|endpoint| endpoint.key() == key)
    }
}

impl ReflectionProvider for ApiMetadata {
    fn type_info(&self, type_name: &str) -> Option<&TypeInfo> {
        self.types.get(canonical_type_name(type_name))
    }
}

impl RouteDocBlocker for ApiMetadata {
    fn handler_block_for(&self, endpoint: &Endpoint) -> Option<Arc<DocBlock>> {
        let known = self.endpoint(&endpoint.key())?;
        let comment = known.doc_comment.as_deref()?;
        Some(Arc::new(DocBlock::parse(comment)))
    }
}

/// Read-through cache of parsed doc blocks, keyed by endpoint.
///
/// Concurrent misses for the same endpoint may both parse; the first insert
/// wins and both callers observe equal blocks.
#[derive(Debug)]
pub struct CachedDocBlocker<B> {
    inner: B,
    cache: RwLock<HashMap<String, Option<Arc<DocBlock>>>>,
}

impl<B: RouteDocBlocker> CachedDocBlocker<B> {
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Number of cached endpoints
    pub fn len(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The wrapped doc blocker
    pub fn inner(&self) -> &B {
        &self.inner
    }
}

impl<B: RouteDocBlocker> RouteDocBlocker for CachedDocBlocker<B> {
    fn handler_block_for(&self, endpoint: &Endpoint) -> Option<Arc<DocBlock>> {
        let key = endpoint.key();
        if let Some(hit) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return hit.clone();
        }

        let block = self.inner.handler_block_for(endpoint);
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert(block)
            .clone()
    }
}

/// Walk the ancestry graph of `type_name` breadth-first
pub(crate) fn inherits_from<R: ReflectionProvider + ?Sized>(
    reflection: &R,
    type_name: &str,
    base: &str,
) -> bool {
    let base = canonical_type_name(base);
    let mut seen = HashSet::new();
    let mut queue = vec![canonical_type_name(type_name)];

    while let Some(current) = queue.pop() {
        if !seen.insert(current) {
            continue;
        }
        let Some(info) = reflection.type_info(current) else {
            continue;
        };
        for ancestor in &info.ancestors {
            let ancestor = canonical_type_name(ancestor);
            if ancestor == base {
                return true;
            }
            queue.push(ancestor);
        }
    }

    false
}
