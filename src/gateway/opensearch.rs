use super::credentials::CredentialProvider;
use super::types::SearchGateway;
use crate::config::types::GatewayConfig;
use crate::search::types::{EngineResult, QuerySpec, TenderDocument, WeightedField};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

/// [`SearchGateway`] backed by the OpenSearch `_search` REST endpoint.
///
/// Holds one `reqwest::Client`, so connections are pooled across requests.
pub struct OpenSearchGateway {
    http_client: reqwest::Client,
    endpoint: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl OpenSearchGateway {
    pub fn new(config: &GatewayConfig, credentials: Arc<dyn CredentialProvider>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .context("Failed to build OpenSearch HTTP client")?;

        Ok(Self::with_client(http_client, &config.endpoint, credentials))
    }

    /// Uses an already configured client (custom proxy, TLS roots, ...).
    pub fn with_client(
        http_client: reqwest::Client,
        endpoint: &str,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            http_client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Renders a boosted field the way the query DSL expects (`Title^3`).
fn field_with_boost(field: &WeightedField) -> String {
    if field.boost == 1.0 {
        field.name.to_string()
    } else {
        format!("{}^{}", field.name, field.boost)
    }
}

/// Translates a [`QuerySpec`] into OpenSearch query DSL.
pub fn query_dsl(spec: &QuerySpec) -> Value {
    match spec {
        QuerySpec::MatchAll => json!({ "match_all": {} }),
        QuerySpec::MultiMatch {
            terms,
            fields,
            match_type,
        } => json!({
            "multi_match": {
                "query": terms,
                "fields": fields.iter().map(field_with_boost).collect::<Vec<_>>(),
                "type": match_type,
            }
        }),
    }
}

/// Full `_search` request body including pagination.
pub fn search_body(spec: &QuerySpec, offset: u64, size: u64) -> Value {
    json!({
        "from": offset,
        "size": size,
        "query": query_dsl(spec),
    })
}

// --- Response envelopes ---

#[derive(Debug, Deserialize)]
struct RawSearchResponse {
    hits: RawHits,
}

#[derive(Debug, Deserialize)]
struct RawHits {
    #[serde(default)]
    total: Option<RawTotal>,
    #[serde(default)]
    hits: Vec<RawHit>,
}

/// Older clusters report a bare number, newer ones `{ "value": n, "relation": "eq" }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTotal {
    Count(u64),
    Object { value: u64 },
}

#[derive(Debug, Deserialize)]
struct RawHit {
    #[serde(rename = "_source")]
    source: Option<TenderDocument>,
}

/// Extracts `<type>: <reason>` from an OpenSearch error body, or the raw text.
fn describe_error_body(body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let error = parsed.as_ref().and_then(|v| v.get("error"));

    match error {
        Some(Value::String(message)) => message.clone(),
        Some(Value::Object(obj)) => {
            let kind = obj.get("type").and_then(Value::as_str);
            let reason = obj.get("reason").and_then(Value::as_str);
            match (kind, reason) {
                (Some(kind), Some(reason)) => format!("{}: {}", kind, reason),
                (None, Some(reason)) => reason.to_string(),
                (Some(kind), None) => kind.to_string(),
                (None, None) => body.trim().to_string(),
            }
        }
        _ => body.trim().to_string(),
    }
}

impl SearchGateway for OpenSearchGateway {
    async fn execute(
        &self,
        index: &str,
        spec: &QuerySpec,
        offset: u64,
        size: u64,
    ) -> Result<EngineResult> {
        let path = format!("/{}/_search", index);
        let url = format!("{}{}", self.endpoint, path);
        let body = search_body(spec, offset, size);

        tracing::debug!("POST {} from={} size={}", url, offset, size);

        let request = self.http_client.post(url.as_str()).json(&body);
        let request = self
            .credentials
            .authorize(request)
            .context("Failed to attach credentials")?;

        let response = request
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;

        if !status.is_success() {
            let diagnostic = format!(
                "Invalid response ({}) from POST {}: {}",
                status.as_u16(),
                path,
                describe_error_body(&text)
            );
            return Ok(EngineResult {
                valid: false,
                diagnostic,
                total_hits: 0,
                documents: Vec::new(),
            });
        }

        let raw: RawSearchResponse = serde_json::from_str(&text)
            .with_context(|| format!("Failed to decode search response from {}", url))?;

        let total_hits = match raw.hits.total {
            Some(RawTotal::Count(n)) | Some(RawTotal::Object { value: n }) => n,
            None => 0,
        };
        let documents: Vec<TenderDocument> =
            raw.hits.hits.into_iter().filter_map(|hit| hit.source).collect();

        Ok(EngineResult {
            valid: true,
            diagnostic: format!("Valid response from POST {} ({})", path, status.as_u16()),
            total_hits,
            documents,
        })
    }
}
