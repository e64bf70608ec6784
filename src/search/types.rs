use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

/// Body of a `POST /search` call.
///
/// `query` is required by the schema but may be empty, in which case the
/// whole index is browsed. Pagination fields fall back to page 1 of 10.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

/// Pagination after clamping.
///
/// `page >= 1`, `size >= 1` and `offset == (page - 1) * size` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedParams {
    pub page: u64,
    pub size: u64,
    /// Zero-based index of the first hit to return.
    pub offset: u64,
}

/// A document field the relevance query targets, with its score multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedField {
    pub name: &'static str,
    pub boost: f32,
}

/// How the engine combines per-field scores of a multi-field query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// A document scores as its single best-matching field.
    BestFields,
}

/// Engine-agnostic description of the query to run.
#[derive(Debug, Clone, PartialEq)]
pub enum QuerySpec {
    MatchAll,
    MultiMatch {
        terms: String,
        fields: Vec<WeightedField>,
        match_type: MatchType,
    },
}

/// A tender as stored in the index.
///
/// Kept as the raw JSON object so fields the index carries beyond the
/// searchable ones pass through to the client untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenderDocument(pub Map<String, Value>);

impl TenderDocument {
    /// Returns a string-valued field, if present.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }
}

/// What the engine reported for a single query round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineResult {
    /// `false` when the engine rejected the query itself.
    pub valid: bool,
    /// Engine-provided description of the call, present on both outcomes.
    pub diagnostic: String,
    pub total_hits: u64,
    /// Already offset and limited by the engine, in relevance order.
    pub documents: Vec<TenderDocument>,
}

/// Successful response envelope returned to API clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse {
    pub page: u64,
    pub page_size: u64,
    pub total_results: u64,
    pub total_pages: u64,
    pub results: Vec<TenderDocument>,
}

/// Error body for failed searches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
