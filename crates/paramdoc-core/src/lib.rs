//! paramdoc Core Library
//!
//! This library extracts parameter metadata for API endpoints from
//! `@bodyParam` and `@urlParam` documentation tags, choosing between request
//! validation types and the endpoint handler as the documentation source.

pub mod config;
pub mod convention;
pub mod description;
pub mod docblock;
pub mod error;
pub mod example;
pub mod extract;
pub mod metadata;
pub mod resolver;
pub mod tag;
pub mod types;
pub mod utils;

pub use crate::{
    config::Config,
    error::{Error, Result},
    extract::{extract_all, EndpointParameters},
    metadata::{ApiMetadata, Endpoint},
    resolver::{DocSource, DocSourceResolver},
    types::{ParameterMap, ParameterRecord, SemanticType, TagKind},
};
