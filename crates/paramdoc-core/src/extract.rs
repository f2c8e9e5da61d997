//! Parameter extraction over every endpoint of an application

use serde::Serialize;

use crate::{
    config::Config,
    convention::TemplateNamingConvention,
    metadata::{ApiMetadata, CachedDocBlocker},
    resolver::DocSourceResolver,
    types::{ParameterMap, TagKind},
};

/// Extraction result for one endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointParameters {
    pub route: String,
    pub controller: String,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_parameters: Option<ParameterMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_parameters: Option<ParameterMap>,
    /// Failures for this endpoint; other endpoints are unaffected
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// Resolve the requested tag kinds for every endpoint in `metadata`
pub fn extract_all(
    metadata: &ApiMetadata,
    config: &Config,
    kinds: &[TagKind],
) -> Vec<EndpointParameters> {
    let naming = TemplateNamingConvention::from_config(config);
    let doc_blocker = CachedDocBlocker::new(metadata);
    let resolver = DocSourceResolver::new(config, metadata, &naming, &doc_blocker);

    metadata
        .endpoints
        .iter()
        .map(|endpoint| {
            let mut result = EndpointParameters {
                route: endpoint.route.clone(),
                controller: endpoint.controller.clone(),
                method: endpoint.method.clone(),
                body_parameters: None,
                url_parameters: None,
                errors: Vec::new(),
            };

            for &kind in kinds {
                match resolver.resolve(endpoint, kind) {
                    Ok(parameters) => match kind {
                        TagKind::BodyParam => result.body_parameters = Some(parameters),
                        TagKind::UrlParam => result.url_parameters = Some(parameters),
                    },
                    Err(err) => {
                        log::debug!("@{} extraction failed: {}", kind, err);
                        result.errors.push(format!("@{}: {}", kind, err));
                    }
                }
            }

            result
        })
        .collect()
}
