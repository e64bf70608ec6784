use super::types::{EngineResult, NormalizedParams, PaginatedResponse};

/// Number of pages needed to show `total_hits` results `size` at a time.
pub fn total_pages(total_hits: u64, size: u64) -> u64 {
    total_hits.div_ceil(size.max(1))
}

/// Packages a valid engine result into the paginated envelope.
///
/// Documents are taken as-is; the engine has already applied offset and size.
pub fn assemble(params: NormalizedParams, result: EngineResult) -> PaginatedResponse {
    PaginatedResponse {
        page: params.page,
        page_size: params.size,
        total_results: result.total_hits,
        total_pages: total_pages(result.total_hits, params.size),
        results: result.documents,
    }
}
