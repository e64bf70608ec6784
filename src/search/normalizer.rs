use super::types::{NormalizedParams, SearchRequest};

/// Page size used when the caller asks for less than one result per page.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Clamps the caller's pagination into a valid page/size and derives the
/// zero-based offset. Total over every integer input; no upper bounds are
/// applied here.
pub fn normalize(request: &SearchRequest) -> NormalizedParams {
    let page = if request.page < 1 {
        1
    } else {
        request.page as u64
    };
    let size = if request.page_size < 1 {
        DEFAULT_PAGE_SIZE
    } else {
        request.page_size as u64
    };

    NormalizedParams {
        page,
        size,
        offset: (page - 1).saturating_mul(size),
    }
}
