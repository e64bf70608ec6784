//! Search Service Module
//!
//! Turns a client's free-text query into a paginated page of tenders.
//!
//! ## Pipeline
//! Every request goes through the same four steps, once, with no shared state:
//! 1. **Normalize**: clamp page and page size, derive the zero-based offset.
//! 2. **Build**: blank text browses everything; otherwise a weighted
//!    best-fields match over the tender fields.
//! 3. **Execute**: one round trip through a `SearchGateway`.
//! 4. **Assemble**: compute the page count and wrap the hits.
//!
//! ## Submodules
//! - **`types`**: Request, response and query DTOs.
//! - **`normalizer`**: Pagination clamping.
//! - **`query`**: The field boost table and query construction.
//! - **`assembler`**: Page arithmetic and the response envelope.
//! - **`engine`**: The pipeline itself and the `SearchService` it runs against.
//! - **`error`**: Failure classification and the client-facing messages.
//! - **`handlers`**: HTTP request handlers for the Axum web server.

pub mod assembler;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod normalizer;
pub mod query;
pub mod types;
