use super::assembler::assemble;
use super::error::SearchError;
use super::normalizer::normalize;
use super::query::build_query;
use super::types::{PaginatedResponse, SearchRequest};
use crate::gateway::types::SearchGateway;

/// The dependencies a search needs: where to send it and which index to hit.
pub struct SearchService<G> {
    pub gateway: G,
    pub index: String,
}

impl<G: SearchGateway> SearchService<G> {
    pub fn new(gateway: G, index: impl Into<String>) -> Self {
        Self {
            gateway,
            index: index.into(),
        }
    }
}

/// Runs one search end to end: normalize, build, execute, assemble.
///
/// Makes a single gateway call and never retries. An engine that rejects the
/// query yields [`SearchError::EngineInvalidQuery`]; anything that prevents an
/// engine answer yields [`SearchError::UnexpectedFailure`].
pub async fn execute_search<G: SearchGateway>(
    service: &SearchService<G>,
    request: &SearchRequest,
) -> Result<PaginatedResponse, SearchError> {
    let params = normalize(request);
    let spec = build_query(&request.query);

    tracing::debug!(
        "Normalized page={} size={} offset={}, query={:?}",
        params.page,
        params.size,
        params.offset,
        spec
    );

    let result = service
        .gateway
        .execute(&service.index, &spec, params.offset, params.size)
        .await?;

    if !result.valid {
        return Err(SearchError::EngineInvalidQuery {
            diagnostic: result.diagnostic,
        });
    }

    Ok(assemble(params, result))
}
