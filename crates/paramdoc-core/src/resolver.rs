//! Documentation source resolution.
//!
//! For one endpoint and one tag kind, the resolver walks the handler's
//! formal parameters looking for a request type that documents the
//! endpoint, and falls back to the handler's own doc block:
//!
//! 1. If the controller is an entity controller, the request type named by
//!    the naming convention for the entity and action
//!    ([`DocSource::EntityConvention`]).
//! 2. Otherwise, the declared parameter type if it is a form request
//!    ([`DocSource::TypedParameter`]).
//! 3. The handler's doc block ([`DocSource::Fallback`]).
//!
//! The first source yielding at least one tag of the requested kind wins.
//! Sources are never merged.

// Internal imports (std, crate)
use std::fmt;
use std::sync::Arc;

use crate::config::Config;
use crate::convention::NamingConvention;
use crate::docblock::DocBlock;
use crate::error::{Error, Result};
use crate::example::ExampleGenerator;
use crate::metadata::{inherits_from, Endpoint, FormalParameter, TypeInfo};
use crate::tag::parse_tags;
use crate::types::{ParameterMap, TagKind};
use crate::utils::short_type_name;

/// Exposes declared types of the documented application
pub trait ReflectionProvider {
    /// Reflected facts about a type, `None` if the type is unknown
    fn type_info(&self, type_name: &str) -> Option<&TypeInfo>;

    fn type_exists(&self, type_name: &str) -> bool {
        self.type_info(type_name).is_some()
    }

    /// Whether `base` appears anywhere in the ancestry of `type_name`
    fn is_subtype_of(&self, type_name: &str, base: &str) -> bool {
        inherits_from(self, type_name, base)
    }
}

/// Supplies the parsed doc block of an endpoint's handler method
pub trait RouteDocBlocker {
    fn handler_block_for(&self, endpoint: &Endpoint) -> Option<Arc<DocBlock>>;
}

impl<T: RouteDocBlocker + ?Sized> RouteDocBlocker for &T {
    fn handler_block_for(&self, endpoint: &Endpoint) -> Option<Arc<DocBlock>> {
        (**self).handler_block_for(endpoint)
    }
}

/// Where a set of parameters was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocSource {
    /// Request type derived from the entity controller convention
    EntityConvention { type_name: String },
    /// Form request type declared on a handler parameter
    TypedParameter { type_name: String },
    /// The handler's own doc block
    Fallback,
}

impl DocSource {
    /// Request type backing the source, if any
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::EntityConvention { type_name } | Self::TypedParameter { type_name } => {
                Some(type_name.as_str())
            }
            Self::Fallback => None,
        }
    }
}

impl fmt::Display for DocSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntityConvention { type_name } => write!(f, "entity convention ({})", type_name),
            Self::TypedParameter { type_name } => write!(f, "form request ({})", type_name),
            Self::Fallback => write!(f, "handler doc block"),
        }
    }
}

/// Parameters together with the source they came from
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub source: DocSource,
    pub parameters: ParameterMap,
}

/// Picks the documentation source for an endpoint's parameters
pub struct DocSourceResolver<'a, R, N, B> {
    config: &'a Config,
    reflection: &'a R,
    naming: &'a N,
    doc_blocker: &'a B,
}

impl<'a, R, N, B> DocSourceResolver<'a, R, N, B>
where
    R: ReflectionProvider,
    N: NamingConvention,
    B: RouteDocBlocker,
{
    pub fn new(config: &'a Config, reflection: &'a R, naming: &'a N, doc_blocker: &'a B) -> Self {
        Self {
            config,
            reflection,
            naming,
            doc_blocker,
        }
    }

    /// Parameters of `kind` documented for `endpoint`
    pub fn resolve(&self, endpoint: &Endpoint, kind: TagKind) -> Result<ParameterMap> {
        self.resolve_with_source(endpoint, kind)
            .map(|resolved| resolved.parameters)
    }

    /// Like [`resolve`](Self::resolve), also reporting the chosen source
    pub fn resolve_with_source(&self, endpoint: &Endpoint, kind: TagKind) -> Result<Resolved> {
        let mut examples = ExampleGenerator::new(self.config.example_seed);
        let mut found_candidate = false;

        for parameter in &endpoint.parameters {
            let source = match self.candidate_for(endpoint, parameter) {
                Ok(Some(source)) => source,
                Ok(None) => continue,
                Err(err) if err.is_recoverable() => {
                    log::debug!("{}: {}", endpoint, err);
                    continue;
                }
                Err(err) => return Err(err),
            };
            found_candidate = true;

            let parameters = self
                .read_source(endpoint, &source, kind, &mut examples)
                .unwrap_or_default();
            if !parameters.is_empty() {
                log::debug!("{}: @{} tags from {}", endpoint, kind, source);
                return Ok(Resolved { source, parameters });
            }
            log::trace!("{}: no @{} tags in {}", endpoint, kind, source);
        }

        match self.read_source(endpoint, &DocSource::Fallback, kind, &mut examples) {
            Some(parameters) => Ok(Resolved {
                source: DocSource::Fallback,
                parameters,
            }),
            None if found_candidate => Ok(Resolved {
                source: DocSource::Fallback,
                parameters: ParameterMap::new(),
            }),
            None => Err(Error::NoDocumentationSource {
                endpoint: endpoint.to_string(),
            }),
        }
    }

    /// Candidate request type for one formal parameter
    fn candidate_for(
        &self,
        endpoint: &Endpoint,
        parameter: &FormalParameter,
    ) -> Result<Option<DocSource>> {
        let Some(type_name) = parameter.type_name.as_deref() else {
            return Ok(None);
        };
        if !self.reflection.type_exists(type_name) {
            return Err(Error::UnresolvableParameterType {
                parameter: parameter.name.clone(),
                type_name: type_name.to_string(),
            });
        }

        if let Some(type_name) = self.entity_request(endpoint) {
            return Ok(Some(DocSource::EntityConvention { type_name }));
        }

        if self.is_form_request(type_name) {
            return Ok(Some(DocSource::TypedParameter {
                type_name: type_name.to_string(),
            }));
        }

        Ok(None)
    }

    /// First existing request type named by the entity convention
    fn entity_request(&self, endpoint: &Endpoint) -> Option<String> {
        if !self
            .reflection
            .is_subtype_of(&endpoint.controller, &self.config.entity_controller)
        {
            return None;
        }

        let entity = self
            .reflection
            .type_info(&endpoint.controller)
            .and_then(|info| info.static_property(&self.config.entity_property));
        let Some(entity) = entity else {
            log::debug!(
                "{}: entity controller without a '{}' property",
                endpoint,
                self.config.entity_property
            );
            return None;
        };

        let action = self.config.action_for(&endpoint.method);
        let namespace = self.naming.namespace_for(entity);
        self.naming
            .possible_requests(&namespace, short_type_name(entity), action)
            .into_iter()
            .find(|candidate| self.reflection.type_exists(candidate))
    }

    fn is_form_request(&self, type_name: &str) -> bool {
        self.config
            .form_request_bases
            .iter()
            .any(|base| self.reflection.is_subtype_of(type_name, base))
    }

    /// Parse a source's doc block; `None` when the source has no block
    fn read_source(
        &self,
        endpoint: &Endpoint,
        source: &DocSource,
        kind: TagKind,
        examples: &mut ExampleGenerator,
    ) -> Option<ParameterMap> {
        match source {
            DocSource::EntityConvention { type_name } | DocSource::TypedParameter { type_name } => {
                let comment = self.reflection.type_info(type_name)?.doc_comment.as_deref()?;
                Some(parse_tags(kind, &DocBlock::parse(comment), examples))
            }
            DocSource::Fallback => {
                let block = self.doc_blocker.handler_block_for(endpoint)?;
                Some(parse_tags(kind, &block, examples))
            }
        }
    }
}
